use serde::{Deserialize, Serialize};

use crate::units::{Currency, PriceBasis};

/// 연료 시세 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelQuote {
    /// 시세 [통화 / 물량기준]
    pub price: f64,
    /// 물량 기준 (m³ 또는 t)
    pub unit: PriceBasis,
    /// 시세 통화
    pub currency: Currency,
    /// 밀도 [t/m³]
    pub density: f64,
    /// 리터당 획득 인증서 수 (1 또는 2)
    pub rtfc_multiplier: u32,
    /// 기준 연료 대비 에너지 함량 비율 (1.0 = 보정 없음)
    pub energy_ratio: f64,
}

/// 운송 프리미엄 입력. `value`가 0이면 프리미엄 없음.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingPremium {
    pub value: f64,
    pub unit: PriceBasis,
    pub currency: Currency,
}

impl ShippingPremium {
    /// 프리미엄 없음. 단위/통화는 사용되지 않는다.
    pub fn none() -> Self {
        Self {
            value: 0.0,
            unit: PriceBasis::PerCubicMetre,
            currency: Currency::Usd,
        }
    }

    pub fn is_none(&self) -> bool {
        self.value == 0.0
    }
}

impl Default for ShippingPremium {
    fn default() -> Self {
        Self {
            value: 30.0,
            unit: PriceBasis::PerCubicMetre,
            currency: Currency::Usd,
        }
    }
}
