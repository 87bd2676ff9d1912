use crate::error::{CalculationError, Result};
use crate::rtfc::quote::ShippingPremium;
use crate::units::{normalize, to_pence_per_litre, ExchangeRate};

/// 운송 프리미엄을 리터당 펜스로 환산한다.
///
/// 프리미엄이 0이면 단위, 통화, 환율, 밀도를 검사하지 않고 0.0을 돌려준다.
pub fn shipping_pence_per_litre(
    premium: ShippingPremium,
    density_t_per_m3: f64,
    rate: ExchangeRate,
) -> Result<f64> {
    if premium.is_none() {
        return Ok(0.0);
    }
    if !(premium.value.is_finite() && premium.value > 0.0) {
        return Err(CalculationError::NegativePremium(premium.value));
    }
    let gbp = normalize(premium.value, premium.currency, rate)?;
    to_pence_per_litre(gbp, premium.unit, density_t_per_m3)
}
