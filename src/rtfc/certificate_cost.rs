use serde::Serialize;

use crate::error::{CalculationError, Result};
use crate::rtfc::quote::{FuelQuote, ShippingPremium};
use crate::rtfc::shipping::shipping_pence_per_litre;
use crate::units::{normalize, to_pence_per_litre, ExchangeRate};

/// 허용되는 리터당 인증서 수.
pub const ALLOWED_MULTIPLIERS: [u32; 2] = [1, 2];

/// 인증서 단가 계산 결과. 모든 값은 GBP 펜스 기준이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationResult {
    /// 연료 시세만 환산한 리터당 펜스
    pub base_gbp_pence_per_litre: f64,
    /// 운송 프리미엄 리터당 펜스
    pub shipping_gbp_pence_per_litre: f64,
    /// 에너지 비율 보정 후 리터당 합계
    pub total_gbp_pence_per_litre: f64,
    /// 인증서 1장당 펜스
    pub pence_cost_per_certificate: f64,
    /// 리터당 인증서 수 (입력 배수 그대로)
    pub certificates_per_litre: u32,
}

/// 시세, 운송 프리미엄, 환율로 RTFC 1장당 비용을 계산한다.
///
/// 검사 순서: 시세 → 환율 → 밀도 → 운송 프리미엄 → 에너지 비율 → 배수.
/// 처음 실패한 검사의 오류를 그대로 반환한다.
pub fn resolve(
    quote: FuelQuote,
    premium: ShippingPremium,
    rate: ExchangeRate,
) -> Result<CalculationResult> {
    if !(quote.price.is_finite() && quote.price >= 0.0) {
        return Err(CalculationError::NegativePrice(quote.price));
    }
    let gbp_price = normalize(quote.price, quote.currency, rate)?;
    let base = to_pence_per_litre(gbp_price, quote.unit, quote.density)?;
    let ship = shipping_pence_per_litre(premium, quote.density, rate)?;

    if !(quote.energy_ratio.is_finite() && quote.energy_ratio > 0.0) {
        return Err(CalculationError::InvalidEnergyRatio(quote.energy_ratio));
    }
    // 에너지 함량이 낮을수록 등가 리터당 비용이 커진다
    let total = (base + ship) / quote.energy_ratio;

    if !ALLOWED_MULTIPLIERS.contains(&quote.rtfc_multiplier) {
        return Err(CalculationError::InvalidMultiplier(quote.rtfc_multiplier));
    }
    let per_certificate = total / f64::from(quote.rtfc_multiplier);

    Ok(CalculationResult {
        base_gbp_pence_per_litre: base,
        shipping_gbp_pence_per_litre: ship,
        total_gbp_pence_per_litre: total,
        pence_cost_per_certificate: per_certificate,
        certificates_per_litre: quote.rtfc_multiplier,
    })
}
