use std::io::{self, Write};

use crate::app::{self, AppError};
use crate::config::Config;
use crate::conversion::{self, ConversionError};
use crate::i18n::{keys, Translator};
use crate::rtfc::catalog;
use crate::rtfc::quote::{FuelQuote, ShippingPremium};
use crate::rtfc::report::{format_money, ReportRequest};
use crate::session::{Session, UnlockOutcome};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    Catalog,
    Settings,
    Exit,
}

/// PIN을 입력받아 세션 잠금을 해제한다. 입력이 끝나면 `false`.
pub fn unlock(session: &mut Session, tr: &Translator) -> Result<bool, AppError> {
    while !session.is_unlocked() {
        let Some(line) = read_line(&tr.t(keys::PIN_PROMPT))? else {
            return Ok(false);
        };
        let pin = line.trim_end_matches(['\r', '\n']);
        match session.try_unlock(pin) {
            UnlockOutcome::Unlocked => println!("{}", tr.t(keys::PIN_UNLOCKED)),
            UnlockOutcome::Rejected => println!("{}", tr.t(keys::PIN_INCORRECT)),
            UnlockOutcome::Incomplete => {
                if !pin.is_empty() {
                    println!("{}", tr.t(keys::PIN_INCOMPLETE));
                }
            }
        }
    }
    Ok(true)
}

/// 메인 메뉴를 표시하고 선택값을 반환한다. 입력이 끝나면 종료로 처리한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CALCULATE));
    println!("{}", tr.t(keys::MAIN_MENU_CATALOG));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let Some(sel) = read_line(&tr.t(keys::PROMPT_MENU_SELECT))? else {
            return Ok(MenuChoice::Exit);
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::Catalog),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 연료를 고르고 입력값을 받아 인증서 단가를 출력한다.
///
/// 각 항목은 카탈로그/설정 기본값을 보여주며 엔터로 유지할 수 있다.
pub fn handle_calculation(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CALC_HEADING));
    print_catalog_list();
    let default_idx = catalog::entries()
        .iter()
        .position(|e| e.name == cfg.default_fuel)
        .unwrap_or(0);
    let idx = loop {
        let n = read_number_or(tr, keys::CALC_PROMPT_FUEL, (default_idx + 1) as f64)?;
        let i = n as usize;
        if n.fract() == 0.0 && (1..=catalog::entries().len()).contains(&i) {
            break i - 1;
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    };
    let entry = &catalog::entries()[idx];
    let d = entry.quote;

    let price = read_number_or(tr, keys::CALC_PROMPT_PRICE, d.price)?;
    let unit = read_tag_or(
        tr,
        keys::CALC_PROMPT_UNIT,
        &conversion::quote_unit_label(d.currency, d.unit),
        conversion::parse_basis,
    )?;
    let currency = read_tag_or(
        tr,
        keys::CALC_PROMPT_CURRENCY,
        &d.currency.to_string(),
        conversion::parse_currency,
    )?;
    let density = read_number_or(tr, keys::CALC_PROMPT_DENSITY, d.density)?;
    let multiplier = read_number_or(tr, keys::CALC_PROMPT_MULTIPLIER, f64::from(d.rtfc_multiplier))?;
    let energy_ratio = read_number_or(tr, keys::CALC_PROMPT_ENERGY_RATIO, d.energy_ratio)?;

    let s = cfg.shipping;
    let ship_value = read_number_or(tr, keys::CALC_PROMPT_SHIP_VALUE, s.value)?;
    let ship_unit = read_tag_or(
        tr,
        keys::CALC_PROMPT_SHIP_UNIT,
        conversion::shipping_unit_label(s.unit),
        conversion::parse_basis,
    )?;
    let ship_currency = read_tag_or(
        tr,
        keys::CALC_PROMPT_SHIP_CURRENCY,
        &s.currency.to_string(),
        conversion::parse_currency,
    )?;

    let req = ReportRequest {
        fuel_name: entry.name.to_string(),
        quote: FuelQuote {
            price,
            unit,
            currency,
            density,
            rtfc_multiplier: multiplier_from(multiplier),
            energy_ratio,
        },
        premium: ShippingPremium {
            value: ship_value,
            unit: ship_unit,
            currency: ship_currency,
        },
        rate: cfg.exchange_rate(),
    };
    match app::calculate(&req, tr) {
        Ok(report) => println!("\n{}", report.to_text()),
        Err(AppError::Calculation(e)) => {
            println!("{}", tr.fill(keys::CALC_FAILED, &[("error", e.to_string())]));
        }
        Err(e) => return Err(e),
    }
    Ok(())
}

/// 카탈로그를 출력한다.
pub fn handle_catalog(tr: &Translator) {
    println!("{}", tr.t(keys::CATALOG_HEADING));
    print_catalog_list();
}

/// 설정 메뉴를 처리한다. 언어가 바뀌면 `true`.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{}",
        tr.fill(
            keys::SETTINGS_CURRENT_FX,
            &[("fx", format!("{:.4}", cfg.market.usd_per_gbp))]
        )
    );
    let sel = read_line(&tr.t(keys::SETTINGS_PROMPT_FX))?.unwrap_or_default();
    if !sel.trim().is_empty() {
        match conversion::parse_number(&sel) {
            Ok(fx) if fx > 0.0 => {
                log::info!("FX changed from {} to {fx}", cfg.market.usd_per_gbp);
                cfg.market.usd_per_gbp = fx;
            }
            _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
        }
    }

    println!(
        "{}",
        tr.fill(
            keys::SETTINGS_CURRENT_LANGUAGE,
            &[("lang", tr.language_code().to_string())]
        )
    );
    let sel = read_line(&tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?.unwrap_or_default();
    let lang = sel.trim().to_lowercase();
    let changed = match lang.as_str() {
        "" => false,
        "en" | "ko" => {
            cfg.language = lang;
            true
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            false
        }
    };
    Ok(changed)
}

fn print_catalog_list() {
    for (i, e) in catalog::entries().iter().enumerate() {
        let q = e.quote;
        println!(
            "{}) {:<24} {}{} / {}  ρ={:.2} t/m³  x{}  ER={:.2}",
            i + 1,
            e.name,
            q.currency.symbol(),
            format_money(q.price),
            q.unit.short_label(),
            q.density,
            q.rtfc_multiplier,
            q.energy_ratio
        );
    }
}

// 정수가 아닌 배수는 계산기에서 InvalidMultiplier로 거른다.
fn multiplier_from(value: f64) -> u32 {
    if value.fract() == 0.0 && value >= 0.0 && value <= f64::from(u32::MAX) {
        value as u32
    } else {
        u32::MAX
    }
}

fn read_line(prompt: &str) -> Result<Option<String>, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    let n = io::stdin().read_line(&mut buf)?;
    Ok(if n == 0 { None } else { Some(buf) })
}

fn prompt_with_default(tr: &Translator, key: &str, default: &str) -> String {
    format!(
        "{} {}: ",
        tr.t(key),
        tr.fill(keys::CALC_KEEP_DEFAULT, &[("default", default.to_string())])
    )
}

fn read_number_or(tr: &Translator, key: &str, default: f64) -> Result<f64, AppError> {
    let prompt = prompt_with_default(tr, key, &default.to_string());
    loop {
        let Some(s) = read_line(&prompt)? else {
            return Ok(default);
        };
        if s.trim().is_empty() {
            return Ok(default);
        }
        match conversion::parse_number(&s) {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_tag_or<T>(
    tr: &Translator,
    key: &str,
    default: &str,
    parse: fn(&str) -> Result<T, ConversionError>,
) -> Result<T, AppError> {
    let prompt = prompt_with_default(tr, key, default);
    loop {
        let s = read_line(&prompt)?.unwrap_or_default();
        let s = if s.trim().is_empty() { default } else { s.trim() };
        match parse(s) {
            Ok(v) => return Ok(v),
            Err(_) => println!(
                "{}",
                tr.fill(keys::ERROR_UNKNOWN_TAG, &[("value", s.to_string())])
            ),
        }
    }
}
