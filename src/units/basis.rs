use serde::{Deserialize, Serialize};

use crate::error::{CalculationError, Result};

/// 1 m³ = 1000 L
pub const LITRES_PER_CUBIC_METRE: f64 = 1000.0;
/// £1 = 100p
pub const PENCE_PER_POUND: f64 = 100.0;

/// 시세가 어떤 물량 기준으로 매겨졌는지 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceBasis {
    /// 체적 기준 [통화 / m³]
    PerCubicMetre,
    /// 질량 기준 [통화 / t]
    PerTonne,
}

impl PriceBasis {
    /// 화면 표시에 쓰는 짧은 단위 표기 (`m3`, `t`).
    pub fn short_label(&self) -> &'static str {
        match self {
            PriceBasis::PerCubicMetre => "m3",
            PriceBasis::PerTonne => "t",
        }
    }
}

/// 밀도[t/m³]로 톤당 리터 수를 구한다.
pub fn litres_per_tonne(density_t_per_m3: f64) -> Result<f64> {
    if density_t_per_m3.is_finite() && density_t_per_m3 > 0.0 {
        Ok(LITRES_PER_CUBIC_METRE / density_t_per_m3)
    } else {
        Err(CalculationError::InvalidDensity(density_t_per_m3))
    }
}

/// GBP 단가를 리터당 펜스로 환산한다.
///
/// 체적 기준은 밀도를 참조하지 않는다. 질량 기준일 때만 밀도로 톤과 리터를 잇는다.
pub fn to_pence_per_litre(gbp_price: f64, basis: PriceBasis, density_t_per_m3: f64) -> Result<f64> {
    let gbp_per_litre = match basis {
        PriceBasis::PerCubicMetre => gbp_price / LITRES_PER_CUBIC_METRE,
        PriceBasis::PerTonne => gbp_price / litres_per_tonne(density_t_per_m3)?,
    };
    Ok(gbp_per_litre * PENCE_PER_POUND)
}
