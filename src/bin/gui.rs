#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use std::{fs, path::Path, path::PathBuf};
use rtfc_cost_calculator::{
    config, conversion,
    i18n::{self, keys, Translator},
    rtfc::{
        catalog,
        quote::{FuelQuote, ShippingPremium},
        report::{Report, ReportRequest},
    },
    session::{Session, UnlockOutcome},
    units::{Currency, ExchangeRate},
};

/// RTFC cost-per-certificate calculator (desktop).
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct GuiArgs {
    /// Language: auto, en, ko
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// Path to the TOML config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
    let args = GuiArgs::parse();

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default()
        .with_title("RTFC Cost-per-Certificate Calculator")
        .with_inner_size(egui::vec2(1100.0, 760.0));
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let cfg = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let app_cfg = match config::load_or_default_at(&args.config) {
        Ok(c) => c,
        Err(e) => {
            log::error!("config load failed, using defaults: {e}");
            config::Config::default()
        }
    };
    let lang = i18n::resolve_language(&args.lang, Some(app_cfg.language.as_str()));
    eframe::run_native(
        "RTFC Cost-per-Certificate Calculator",
        cfg,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                log::warn!("font setup: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone(), args.config.clone(), &lang))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["rtfc.png", "icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 폰트 바이트를 기본 글꼴 뒤에 보조 글꼴로 등록한다.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .push(font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(font_name);
    ctx.set_fonts(fonts);
}

/// 한글 표시용 보조 글꼴을 찾는다.
/// 1) assets/fonts/ 아래 프로젝트 글꼴
/// 2) Windows 시스템 글꼴(맑은 고딕 등)
/// 3) 리눅스/맥 CJK 글꼴
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<PathBuf> = vec![
        PathBuf::from("assets/fonts/malgun.ttf"),
        PathBuf::from("assets/fonts/NotoSansKR-Regular.ttf"),
    ];
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["malgun.ttf", "gulim.ttc"] {
            candidates.push(fonts.join(cand));
        }
    }
    candidates.push(PathBuf::from(
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    ));
    candidates.push(PathBuf::from(
        "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    ));

    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read font file ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "cjk_fallback");
            log::info!("using fallback font {}", p.display());
            return Ok(());
        }
    }
    Err("No CJK font found; Korean labels may not render.".into())
}

fn currency_from_index(i: usize) -> Currency {
    if i == 0 {
        Currency::Usd
    } else {
        Currency::Gbp
    }
}

struct GuiApp {
    config: config::Config,
    config_path: PathBuf,
    tr: Translator,
    session: Session,
    pin_input: String,
    pin_error: bool,
    save_status: Option<String>,
    lang_code: String,
    // 시세 입력
    fuel_name: String,
    price: f64,
    density: f64,
    unit_tag: String,
    currency: Currency,
    multiplier: u32,
    energy_ratio: f64,
    // 운송 프리미엄
    ship_value: f64,
    ship_unit_tag: String,
    ship_currency: Currency,
    // 환율
    usd_per_gbp: f64,
}

impl GuiApp {
    fn new(config: config::Config, config_path: PathBuf, lang_code: &str) -> Self {
        let tr = Translator::new_with_pack(lang_code, config.language_pack_dir.as_deref());
        let session = config.new_session();
        let entry = catalog::find(&config.default_fuel).unwrap_or_else(catalog::default_entry);
        let s = config.shipping;
        let mut app = Self {
            tr,
            session,
            pin_input: String::new(),
            pin_error: false,
            save_status: None,
            lang_code: lang_code.to_string(),
            fuel_name: entry.name.to_string(),
            price: 0.0,
            density: 0.0,
            unit_tag: String::new(),
            currency: Currency::Usd,
            multiplier: 1,
            energy_ratio: 1.0,
            ship_value: s.value,
            ship_unit_tag: conversion::shipping_unit_label(s.unit).to_string(),
            ship_currency: s.currency,
            usd_per_gbp: config.market.usd_per_gbp,
            config,
            config_path,
        };
        app.apply_catalog_defaults(entry.quote);
        app
    }

    /// 카탈로그 기본값으로 편집 필드를 채운다.
    fn apply_catalog_defaults(&mut self, q: FuelQuote) {
        self.price = q.price;
        self.density = q.density;
        self.unit_tag = conversion::quote_unit_label(q.currency, q.unit);
        self.currency = q.currency;
        self.multiplier = q.rtfc_multiplier;
        self.energy_ratio = q.energy_ratio;
    }

    fn request(&self) -> Result<ReportRequest, conversion::ConversionError> {
        Ok(ReportRequest {
            fuel_name: self.fuel_name.clone(),
            quote: FuelQuote {
                price: self.price,
                unit: conversion::parse_basis(&self.unit_tag)?,
                currency: self.currency,
                density: self.density,
                rtfc_multiplier: self.multiplier,
                energy_ratio: self.energy_ratio,
            },
            premium: ShippingPremium {
                value: self.ship_value,
                unit: conversion::parse_basis(&self.ship_unit_tag)?,
                currency: self.ship_currency,
            },
            rate: ExchangeRate::new(self.usd_per_gbp),
        })
    }

    fn ui_pin_gate(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.heading(self.tr.t(keys::APP_TITLE));
            ui.add_space(16.0);
            ui.label(self.tr.t(keys::PIN_PROMPT).trim_end_matches([':', ' ']));
            let resp = ui.add(
                egui::TextEdit::singleline(&mut self.pin_input)
                    .password(true)
                    .char_limit(4)
                    .desired_width(80.0),
            );
            if resp.changed() {
                self.pin_error = false;
                if self.pin_input.chars().count() == 4 {
                    if self.session.try_unlock(&self.pin_input) == UnlockOutcome::Rejected {
                        self.pin_error = true;
                    }
                    self.pin_input.clear();
                }
            }
            if self.pin_error {
                ui.colored_label(egui::Color32::RED, self.tr.t(keys::PIN_INCORRECT));
            }
        });
    }

    fn ui_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::GUI_SIDEBAR_FX));
        ui.add_space(8.0);
        ui.label(self.tr.t(keys::GUI_FX_LABEL));
        ui.add(
            egui::DragValue::new(&mut self.usd_per_gbp)
                .speed(0.0001)
                .fixed_decimals(4),
        );
        ui.add_space(16.0);
        ui.separator();
        ui.label(self.tr.t(keys::GUI_LANGUAGE));
        let before = self.lang_code.clone();
        egui::ComboBox::from_id_source("lang")
            .selected_text(self.tr.language_code())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.lang_code, "en-gb".to_string(), "en");
                ui.selectable_value(&mut self.lang_code, "ko-kr".to_string(), "ko");
            });
        if before != self.lang_code {
            self.tr =
                Translator::new_with_pack(&self.lang_code, self.config.language_pack_dir.as_deref());
            self.config.language = self.tr.language_code().to_string();
        }
        ui.add_space(8.0);
        if ui.button(self.tr.t(keys::GUI_SAVE_SETTINGS)).clicked() {
            self.config.market.usd_per_gbp = self.usd_per_gbp;
            self.config.default_fuel = self.fuel_name.clone();
            self.save_status = Some(match self.config.save_to(&self.config_path) {
                Ok(()) => self.tr.t(keys::SETTINGS_SAVED),
                Err(e) => {
                    log::error!("config save failed: {e}");
                    format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX))
                }
            });
        }
        if let Some(msg) = &self.save_status {
            ui.small(msg);
        }
        if self.config.access.enabled && ui.button(self.tr.t(keys::GUI_LOCK)).clicked() {
            self.session.lock();
        }
    }

    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.horizontal(|ui| {
            ui.label(tr.t(keys::GUI_FUEL));
            let before = self.fuel_name.clone();
            egui::ComboBox::from_id_source("fuel")
                .selected_text(self.fuel_name.clone())
                .width(260.0)
                .show_ui(ui, |ui| {
                    for name in catalog::names() {
                        ui.selectable_value(&mut self.fuel_name, name.to_string(), name);
                    }
                });
            if before != self.fuel_name {
                if let Some(q) = catalog::defaults_for(&self.fuel_name) {
                    self.apply_catalog_defaults(q);
                }
            }
        });
        ui.add_space(8.0);

        ui.columns(3, |cols| {
            cols[0].label(tr.t(keys::GUI_PRICE));
            cols[0].add(egui::DragValue::new(&mut self.price).speed(1.0).fixed_decimals(2));
            cols[0].label(tr.t(keys::GUI_DENSITY));
            cols[0].add(
                egui::DragValue::new(&mut self.density)
                    .speed(0.01)
                    .fixed_decimals(2),
            );

            cols[1].label(tr.t(keys::GUI_UNIT));
            egui::ComboBox::from_id_source("unit")
                .selected_text(self.unit_tag.clone())
                .show_ui(&mut cols[1], |ui| {
                    for tag in conversion::QUOTE_UNIT_TAGS {
                        ui.selectable_value(&mut self.unit_tag, tag.to_string(), tag);
                    }
                });
            cols[1].label(tr.t(keys::GUI_CURRENCY));
            currency_combo(&mut cols[1], "currency", &mut self.currency);

            cols[2].label(tr.t(keys::GUI_MULTIPLIER));
            egui::ComboBox::from_id_source("multiplier")
                .selected_text(self.multiplier.to_string())
                .show_ui(&mut cols[2], |ui| {
                    for m in [1u32, 2] {
                        ui.selectable_value(&mut self.multiplier, m, m.to_string());
                    }
                });
            cols[2].label(tr.t(keys::GUI_ENERGY_RATIO));
            cols[2].add(
                egui::DragValue::new(&mut self.energy_ratio)
                    .speed(0.01)
                    .fixed_decimals(2),
            );
        });

        ui.separator();

        ui.columns(3, |cols| {
            cols[0].label(tr.t(keys::GUI_SHIP_VALUE));
            cols[0].add(
                egui::DragValue::new(&mut self.ship_value)
                    .speed(0.5)
                    .fixed_decimals(2),
            );
            cols[1].label(tr.t(keys::GUI_SHIP_UNIT));
            egui::ComboBox::from_id_source("ship_unit")
                .selected_text(self.ship_unit_tag.clone())
                .show_ui(&mut cols[1], |ui| {
                    for tag in conversion::SHIPPING_UNIT_TAGS {
                        ui.selectable_value(&mut self.ship_unit_tag, tag.to_string(), tag);
                    }
                });
            cols[2].label(tr.t(keys::GUI_SHIP_CURRENCY));
            currency_combo(&mut cols[2], "ship_currency", &mut self.ship_currency);
        });
    }

    // 입력이 바뀔 때마다 전체를 다시 계산한다.
    fn ui_report(&self, ui: &mut egui::Ui) {
        let report = self
            .request()
            .map_err(|e| e.to_string())
            .and_then(|req| Report::build(&req, &self.tr).map_err(|e| e.to_string()));
        match report {
            Ok(report) => {
                for line in &report.walkthrough {
                    ui.label(line);
                    ui.add_space(4.0);
                }
                ui.add_space(8.0);
                let table = &report.table;
                egui::Grid::new("summary_grid")
                    .num_columns(6)
                    .striped(true)
                    .spacing([16.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("");
                        for h in &table.headers {
                            ui.strong(h);
                        }
                        ui.end_row();
                        ui.label(&table.row_label);
                        for v in table.values {
                            ui.label(format!("{v:.2}"));
                        }
                        ui.label(table.certificates_per_litre.to_string());
                        ui.end_row();
                    });
            }
            Err(msg) => {
                ui.colored_label(
                    egui::Color32::RED,
                    format!("{}: {msg}", self.tr.t(keys::ERROR_PREFIX)),
                );
            }
        }
    }
}

fn currency_combo(ui: &mut egui::Ui, id: &str, value: &mut Currency) {
    let mut idx = if *value == Currency::Usd { 0 } else { 1 };
    egui::ComboBox::from_id_source(id)
        .selected_text(value.to_string())
        .show_index(ui, &mut idx, 2, |i| currency_from_index(i).to_string());
    *value = currency_from_index(idx);
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if !self.session.is_unlocked() {
            egui::CentralPanel::default().show(ctx, |ui| self.ui_pin_gate(ui));
            return;
        }

        egui::SidePanel::left("fx")
            .resizable(true)
            .min_width(160.0)
            .default_width(200.0)
            .show(ctx, |ui| self.ui_sidebar(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.heading(self.tr.t(keys::APP_TITLE));
                    ui.add_space(8.0);
                    self.ui_inputs(ui);
                    ui.separator();
                    self.ui_report(ui);
                });
        });
    }
}
