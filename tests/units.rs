//! 통화 환산, 물량 기준 환산, 운송 프리미엄 환산 테스트.
use rtfc_cost_calculator::rtfc::shipping_pence_per_litre;
use rtfc_cost_calculator::units::{litres_per_tonne, normalize, to_pence_per_litre};
use rtfc_cost_calculator::{CalculationError, Currency, ExchangeRate, PriceBasis, ShippingPremium};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {tol})"
    );
}

#[test]
fn gbp_amounts_pass_through_unchanged() {
    for rate in [0.5, 1.0, 1.3463, 2.0] {
        for v in [0.0, 1.0, 830.0, 1e9] {
            assert_eq!(normalize(v, Currency::Gbp, ExchangeRate::new(rate)).unwrap(), v);
        }
    }
}

#[test]
fn usd_is_divided_by_rate() {
    let gbp = normalize(1346.3, Currency::Usd, ExchangeRate::new(1.3463)).unwrap();
    assert_close("gbp", gbp, 1000.0, 1e-9);
}

#[test]
fn non_positive_rate_never_divides() {
    for rate in [0.0, -1.3463, f64::NAN, f64::INFINITY] {
        let err = normalize(100.0, Currency::Usd, ExchangeRate::new(rate)).unwrap_err();
        assert!(matches!(err, CalculationError::InvalidRate(_)), "{rate}");
    }
}

#[test]
fn cubic_metre_price_to_pence_per_litre() {
    // £1000/m³ = £1/L = 100p/L, 밀도는 무시된다
    for density in [0.78, 0.0, -1.0] {
        let ppl = to_pence_per_litre(1000.0, PriceBasis::PerCubicMetre, density).unwrap();
        assert_close("ppl", ppl, 100.0, 1e-12);
    }
}

#[test]
fn tonne_price_uses_density() {
    assert_close("l/t", litres_per_tonne(0.8).unwrap(), 1250.0, 1e-9);
    // £1000/t, 0.8 t/m³ → 1250 L/t → 80p/L
    let ppl = to_pence_per_litre(1000.0, PriceBasis::PerTonne, 0.8).unwrap();
    assert_close("ppl", ppl, 80.0, 1e-9);
}

#[test]
fn tonne_price_rejects_non_positive_density() {
    for density in [0.0, -0.88] {
        let err = to_pence_per_litre(616.5, PriceBasis::PerTonne, density).unwrap_err();
        assert_eq!(err, CalculationError::InvalidDensity(density));
    }
}

#[test]
fn zero_premium_is_zero_for_any_inputs() {
    let bad_rate = ExchangeRate::new(0.0);
    for unit in [PriceBasis::PerCubicMetre, PriceBasis::PerTonne] {
        for currency in [Currency::Usd, Currency::Gbp] {
            let premium = ShippingPremium {
                value: 0.0,
                unit,
                currency,
            };
            assert_eq!(shipping_pence_per_litre(premium, 0.0, bad_rate).unwrap(), 0.0);
            assert_eq!(
                shipping_pence_per_litre(premium, 0.88, ExchangeRate::new(1.3463)).unwrap(),
                0.0
            );
        }
    }
}

#[test]
fn premium_is_converted_like_a_price() {
    let rate = ExchangeRate::new(1.3463);
    let premium = ShippingPremium {
        value: 30.0,
        unit: PriceBasis::PerCubicMetre,
        currency: Currency::Usd,
    };
    let ship = shipping_pence_per_litre(premium, 0.78, rate).unwrap();
    assert_close("ship", ship, 2.2283, 1e-4);

    let per_tonne = ShippingPremium {
        value: 25.0,
        unit: PriceBasis::PerTonne,
        currency: Currency::Gbp,
    };
    // £25/t, 0.8 t/m³ → 2p/L
    let ship = shipping_pence_per_litre(per_tonne, 0.8, rate).unwrap();
    assert_close("ship", ship, 2.0, 1e-9);
}

#[test]
fn non_zero_premium_surfaces_rate_and_density_errors() {
    let premium = ShippingPremium {
        value: 10.0,
        unit: PriceBasis::PerTonne,
        currency: Currency::Usd,
    };
    let err = shipping_pence_per_litre(premium, 0.88, ExchangeRate::new(0.0)).unwrap_err();
    assert!(matches!(err, CalculationError::InvalidRate(_)));
    let err = shipping_pence_per_litre(premium, 0.0, ExchangeRate::new(1.3463)).unwrap_err();
    assert!(matches!(err, CalculationError::InvalidDensity(_)));
}
