//! 카탈로그, PIN 세션, 설명문/요약표 테스트.
use rtfc_cost_calculator::i18n::Translator;
use rtfc_cost_calculator::rtfc::catalog;
use rtfc_cost_calculator::rtfc::report::{Report, ReportRequest};
use rtfc_cost_calculator::session::{Session, UnlockOutcome};
use rtfc_cost_calculator::{CalculationError, Currency, ExchangeRate, PriceBasis, ShippingPremium};

fn request(name: &str, premium: ShippingPremium) -> ReportRequest {
    ReportRequest {
        fuel_name: name.to_string(),
        quote: catalog::defaults_for(name).expect("catalog entry"),
        premium,
        rate: ExchangeRate::new(1.3463),
    }
}

#[test]
fn catalog_lists_four_pathways_in_order() {
    assert_eq!(
        catalog::names(),
        vec![
            "HVO Class-2 waste-oil",
            "UCOME FAME 0 °C",
            "RME (crop FAME)",
            "HVO Class-4 (tallow)",
        ]
    );
    assert_eq!(catalog::default_entry().name, "HVO Class-2 waste-oil");
}

#[test]
fn catalog_defaults_match_pathways() {
    let rme = catalog::defaults_for("RME (crop FAME)").unwrap();
    assert_eq!(rme.price, 726.0);
    assert_eq!(rme.unit, PriceBasis::PerTonne);
    assert_eq!(rme.currency, Currency::Usd);
    assert_eq!(rme.rtfc_multiplier, 1);

    let tallow = catalog::defaults_for("hvo class-4 (TALLOW)").unwrap();
    assert_eq!(tallow.price, 1235.0);
    assert_eq!(tallow.density, 0.79);

    assert!(catalog::defaults_for("Ethanol").is_none());
}

#[test]
fn every_catalog_entry_resolves() {
    for entry in catalog::entries() {
        let req = request(entry.name, ShippingPremium::default());
        let report = Report::build(&req, &Translator::new("en")).expect(entry.name);
        assert!(report.result.pence_cost_per_certificate > 0.0);
    }
}

#[test]
fn session_unlocks_with_valid_pin_only() {
    let mut session = Session::new(["2025"]);
    assert!(!session.is_unlocked());
    assert_eq!(session.try_unlock("20"), UnlockOutcome::Incomplete);
    assert_eq!(session.try_unlock("1234"), UnlockOutcome::Rejected);
    assert!(!session.is_unlocked());
    assert_eq!(session.try_unlock("2025"), UnlockOutcome::Unlocked);
    assert!(session.is_unlocked());
    // 해제 후에는 어떤 입력에도 해제 상태를 유지한다
    assert_eq!(session.try_unlock("0000"), UnlockOutcome::Unlocked);
    session.lock();
    assert!(!session.is_unlocked());
}

#[test]
fn pin_is_compared_exactly() {
    let mut session = Session::new(["2025"]);
    assert_eq!(session.try_unlock(" 2025 "), UnlockOutcome::Incomplete);
    assert_eq!(session.try_unlock("2025\n"), UnlockOutcome::Incomplete);
    assert_eq!(session.try_unlock(" 202"), UnlockOutcome::Rejected);
    assert!(!session.is_unlocked());
    assert_eq!(session.try_unlock("2025"), UnlockOutcome::Unlocked);
}

#[test]
fn disabled_gate_starts_unlocked() {
    let session = Session::unlocked();
    assert!(session.is_unlocked());
}

#[test]
fn walkthrough_for_hvo_with_shipping() {
    let req = request(
        "HVO Class-2 waste-oil",
        ShippingPremium {
            value: 30.0,
            unit: PriceBasis::PerCubicMetre,
            currency: Currency::Usd,
        },
    );
    let report = Report::build(&req, &Translator::new("en")).unwrap();
    let text = report.walkthrough.join("\n");
    assert!(text.contains("1,180.00 USD/m3 priced in USD"), "{text}");
    assert!(text.contains("£1 = $1.3463"), "{text}");
    assert!(text.contains("£876.48 per m3"), "{text}");
    assert!(text.contains("one litre costs 87.65 p."), "{text}");
    assert!(text.contains("adding 2.23 p per litre"), "{text}");
    assert!(text.contains("earns 2 RTFCs per litre"), "{text}");
    assert!(text.contains("44.94 pence per certificate"), "{text}");
    assert!(!text.contains("energy-adjusted"));

    assert_eq!(report.table.values, [87.65, 2.23, 89.88, 44.94]);
    assert_eq!(report.table.certificates_per_litre, 2);
    assert_eq!(report.table.row_label, "HVO Class-2 waste-oil");
    assert_eq!(report.table.headers[0], "pence / litre (base)");
}

#[test]
fn walkthrough_omits_shipping_line_without_premium() {
    let req = request("RME (crop FAME)", ShippingPremium::none());
    let report = Report::build(&req, &Translator::new("en")).unwrap();
    assert_eq!(report.walkthrough.len(), 5);
    let text = report.walkthrough.join("\n");
    assert!(!text.contains("Shipping premium"));
    assert!(text.contains("earns 1 RTFC per litre"), "{text}");
    assert!(text.contains("per t."), "{text}");
}

#[test]
fn intro_unit_label_follows_quote_currency() {
    let mut req = request("RME (crop FAME)", ShippingPremium::none());
    req.quote.currency = Currency::Gbp;
    req.quote.price = 539.25;
    let report = Report::build(&req, &Translator::new("en")).unwrap();
    assert!(
        report.walkthrough[1].contains("539.25 GBP/t priced in GBP"),
        "{}",
        report.walkthrough[1]
    );
}

#[test]
fn energy_adjustment_is_noted() {
    let mut req = request("UCOME FAME 0 °C", ShippingPremium::none());
    req.quote.energy_ratio = 0.9;
    let report = Report::build(&req, &Translator::new("en")).unwrap();
    assert!(report.walkthrough.join("\n").contains("(energy-adjusted)"));
}

#[test]
fn report_propagates_calculation_errors() {
    let mut req = request("UCOME FAME 0 °C", ShippingPremium::none());
    req.rate = ExchangeRate::new(0.0);
    let err = Report::build(&req, &Translator::new("en")).unwrap_err();
    assert!(matches!(err, CalculationError::InvalidRate(_)));
}

#[test]
fn korean_report_uses_korean_headers() {
    let req = request("UCOME FAME 0 °C", ShippingPremium::none());
    let report = Report::build(&req, &Translator::new("ko")).unwrap();
    assert_eq!(report.table.headers[3], "RTFC당 펜스");
    let text = report.to_text();
    assert!(text.contains("27.13"), "{text}");
}
