use std::path::Path;

use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::error::CalculationError;
use crate::i18n::{self, keys, Translator};
use crate::rtfc::catalog;
use crate::rtfc::quote::{FuelQuote, ShippingPremium};
use crate::rtfc::report::{Report, ReportRequest};
use crate::ui_cli::{self, MenuChoice};
use crate::units::{Currency, ExchangeRate, PriceBasis};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("{0}")]
    Config(#[from] ConfigError),
    /// 단위/통화 문자열 오류
    #[error("{0}")]
    Conversion(#[from] ConversionError),
    /// 인증서 단가 계산 오류
    #[error("{0}")]
    Calculation(#[from] CalculationError),
    /// 카탈로그에 없는 연료 이름
    #[error("unknown fuel: {0}")]
    UnknownFuel(String),
    /// 입력 스트림이 끝남
    #[error("input closed before the session was unlocked")]
    Locked,
}

/// 명령행에서 덮어쓴 입력값. 비어 있는 필드는 카탈로그/설정 기본값을 쓴다.
#[derive(Debug, Clone, Default)]
pub struct QuoteOverrides {
    pub fuel: Option<String>,
    pub price: Option<f64>,
    pub unit: Option<PriceBasis>,
    pub currency: Option<Currency>,
    pub density: Option<f64>,
    pub multiplier: Option<u32>,
    pub energy_ratio: Option<f64>,
    pub ship_value: Option<f64>,
    pub ship_unit: Option<PriceBasis>,
    pub ship_currency: Option<Currency>,
    pub usd_per_gbp: Option<f64>,
}

/// 설정과 덮어쓴 값으로 계산 요청을 만든다.
pub fn build_request(cfg: &Config, ov: &QuoteOverrides) -> Result<ReportRequest, AppError> {
    let fuel_name = ov.fuel.as_deref().unwrap_or(cfg.default_fuel.as_str());
    let entry = catalog::find(fuel_name).ok_or_else(|| AppError::UnknownFuel(fuel_name.to_string()))?;
    let d = entry.quote;
    let quote = FuelQuote {
        price: ov.price.unwrap_or(d.price),
        unit: ov.unit.unwrap_or(d.unit),
        currency: ov.currency.unwrap_or(d.currency),
        density: ov.density.unwrap_or(d.density),
        rtfc_multiplier: ov.multiplier.unwrap_or(d.rtfc_multiplier),
        energy_ratio: ov.energy_ratio.unwrap_or(d.energy_ratio),
    };
    let s = cfg.shipping;
    let premium = ShippingPremium {
        value: ov.ship_value.unwrap_or(s.value),
        unit: ov.ship_unit.unwrap_or(s.unit),
        currency: ov.ship_currency.unwrap_or(s.currency),
    };
    let rate = ov
        .usd_per_gbp
        .map(ExchangeRate::new)
        .unwrap_or_else(|| cfg.exchange_rate());
    Ok(ReportRequest {
        fuel_name: entry.name.to_string(),
        quote,
        premium,
        rate,
    })
}

/// 보고서를 만들고 결과를 로그로 남긴다.
pub fn calculate(req: &ReportRequest, tr: &Translator) -> Result<Report, AppError> {
    log::debug!(
        "calculating {}: {:?} {:?} {:?}",
        req.fuel_name,
        req.quote,
        req.premium,
        req.rate
    );
    match Report::build(req, tr) {
        Ok(report) => {
            log::debug!("result for {}: {:?}", req.fuel_name, report.result);
            Ok(report)
        }
        Err(e) => {
            log::warn!("calculation for {} failed: {e}", req.fuel_name);
            Err(e.into())
        }
    }
}

/// 단발 계산을 수행해 설명문과 표를 출력한다.
pub fn run_once(cfg: &Config, ov: &QuoteOverrides, tr: &Translator) -> Result<(), AppError> {
    let req = build_request(cfg, ov)?;
    let report = calculate(&req, tr)?;
    println!("{}", report.to_text());
    Ok(())
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, config_path: &Path, tr: &mut Translator) -> Result<(), AppError> {
    let mut session = config.new_session();
    if !ui_cli::unlock(&mut session, tr)? {
        return Err(AppError::Locked);
    }
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Calculate => ui_cli::handle_calculation(tr, config)?,
            MenuChoice::Catalog => ui_cli::handle_catalog(tr),
            MenuChoice::Settings => {
                if ui_cli::handle_settings(tr, config)? {
                    let lang = i18n::resolve_language(&config.language, None);
                    *tr = Translator::new_with_pack(&lang, config.language_pack_dir.as_deref());
                }
                config.save_to(config_path)?;
                println!("{}", tr.t(keys::SETTINGS_SAVED));
            }
            MenuChoice::Exit => {
                config.save_to(config_path)?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

