//! 설정 파일 로드와 계산 요청 조립 테스트.
use std::fs;

use rtfc_cost_calculator::app::{build_request, calculate, AppError, QuoteOverrides};
use rtfc_cost_calculator::config::{load_or_default_at, Config};
use rtfc_cost_calculator::i18n::Translator;
use rtfc_cost_calculator::session::UnlockOutcome;
use rtfc_cost_calculator::{CalculationError, Currency, PriceBasis};

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let cfg = load_or_default_at(&path).unwrap();
    assert!(path.exists());
    assert_eq!(cfg.market.usd_per_gbp, 1.3463);
    assert_eq!(cfg.default_fuel, "HVO Class-2 waste-oil");
    assert_eq!(cfg.access.pins, vec!["2025".to_string()]);
    assert_eq!(cfg.shipping.value, 30.0);

    // 다시 읽어도 같은 값
    let again = load_or_default_at(&path).unwrap();
    assert_eq!(again.market.usd_per_gbp, cfg.market.usd_per_gbp);
    assert_eq!(again.shipping, cfg.shipping);
}

#[test]
fn partial_config_fills_remaining_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "language = \"ko\"\n\n[market]\nusd_per_gbp = 1.25\n\n[shipping]\nvalue = 12.5\nunit = \"PerTonne\"\n",
    )
    .unwrap();
    let cfg = load_or_default_at(&path).unwrap();
    assert_eq!(cfg.language, "ko");
    assert_eq!(cfg.market.usd_per_gbp, 1.25);
    assert_eq!(cfg.shipping.value, 12.5);
    assert_eq!(cfg.shipping.unit, PriceBasis::PerTonne);
    assert_eq!(cfg.shipping.currency, Currency::Usd);
    assert!(cfg.access.enabled);
}

#[test]
fn malformed_pins_and_unknown_fuel_are_dropped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "default_fuel = \"Ethanol\"\n\n[access]\nenabled = true\npins = [\"1234\", \"12a4\", \"123\", \"98765\"]\n",
    )
    .unwrap();
    let cfg = load_or_default_at(&path).unwrap();
    assert_eq!(cfg.access.pins, vec!["1234".to_string()]);
    assert_eq!(cfg.default_fuel, "HVO Class-2 waste-oil");

    let mut session = cfg.new_session();
    assert_eq!(session.try_unlock("2025"), UnlockOutcome::Rejected);
    assert_eq!(session.try_unlock("1234"), UnlockOutcome::Unlocked);
}

#[test]
fn all_malformed_pins_fall_back_to_default_pin() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[access]\nenabled = true\npins = [\"205\"]\n").unwrap();
    let cfg = load_or_default_at(&path).unwrap();
    assert_eq!(cfg.access.pins, vec!["2025".to_string()]);

    let mut session = cfg.new_session();
    assert_eq!(session.try_unlock("2025"), UnlockOutcome::Unlocked);
}

#[test]
fn empty_pin_list_is_kept_when_access_is_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[access]\nenabled = false\npins = [\"abc\"]\n").unwrap();
    let cfg = load_or_default_at(&path).unwrap();
    assert!(cfg.access.pins.is_empty());
    assert!(cfg.new_session().is_unlocked());
}

#[test]
fn disabled_access_gives_unlocked_session() {
    let mut cfg = Config::default();
    cfg.access.enabled = false;
    assert!(cfg.new_session().is_unlocked());
    assert!(!Config::default().new_session().is_unlocked());
}

#[test]
fn broken_toml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[market\nusd_per_gbp = ").unwrap();
    assert!(load_or_default_at(&path).is_err());
}

#[test]
fn request_uses_catalog_and_config_defaults() {
    let cfg = Config::default();
    let req = build_request(&cfg, &QuoteOverrides::default()).unwrap();
    assert_eq!(req.fuel_name, "HVO Class-2 waste-oil");
    assert_eq!(req.quote.price, 1180.0);
    assert_eq!(req.premium, cfg.shipping);
    assert_eq!(req.rate.usd_per_gbp, 1.3463);
}

#[test]
fn overrides_replace_only_given_fields() {
    let cfg = Config::default();
    let ov = QuoteOverrides {
        fuel: Some("ucome fame 0 °c".to_string()),
        price: Some(900.0),
        ship_value: Some(0.0),
        usd_per_gbp: Some(1.5),
        ..QuoteOverrides::default()
    };
    let req = build_request(&cfg, &ov).unwrap();
    assert_eq!(req.fuel_name, "UCOME FAME 0 °C");
    assert_eq!(req.quote.price, 900.0);
    assert_eq!(req.quote.unit, PriceBasis::PerTonne);
    assert_eq!(req.quote.density, 0.88);
    assert!(req.premium.is_none());
    assert_eq!(req.rate.usd_per_gbp, 1.5);

    // 900 / 1.5 = £600/t, 0.88 t/m³ → 52.8 p/L, 2장 → 26.4 p
    let report = calculate(&req, &Translator::new("en")).unwrap();
    assert!((report.result.pence_cost_per_certificate - 26.4).abs() < 1e-9);
}

#[test]
fn unknown_fuel_is_reported() {
    let ov = QuoteOverrides {
        fuel: Some("Ethanol".to_string()),
        ..QuoteOverrides::default()
    };
    let err = build_request(&Config::default(), &ov).unwrap_err();
    assert!(matches!(err, AppError::UnknownFuel(name) if name == "Ethanol"));
}

#[test]
fn calculation_errors_surface_through_app() {
    let ov = QuoteOverrides {
        multiplier: Some(3),
        ..QuoteOverrides::default()
    };
    let req = build_request(&Config::default(), &ov).unwrap();
    let err = calculate(&req, &Translator::new("en")).unwrap_err();
    assert!(matches!(
        err,
        AppError::Calculation(CalculationError::InvalidMultiplier(3))
    ));
}
