use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{CalculationError, Result};

/// 시세 통화. 내부 기준은 GBP이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Currency {
    #[strum(serialize = "USD")]
    Usd,
    #[strum(serialize = "GBP")]
    Gbp,
}

impl Currency {
    /// 화폐 기호.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Gbp => "£",
        }
    }
}

/// 환율. £1이 몇 달러인지로 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub usd_per_gbp: f64,
}

impl ExchangeRate {
    pub fn new(usd_per_gbp: f64) -> Self {
        Self { usd_per_gbp }
    }

    fn validate(&self) -> Result<f64> {
        if self.usd_per_gbp.is_finite() && self.usd_per_gbp > 0.0 {
            Ok(self.usd_per_gbp)
        } else {
            Err(CalculationError::InvalidRate(self.usd_per_gbp))
        }
    }
}

/// 금액을 GBP로 환산한다.
///
/// 환율은 통화와 관계없이 먼저 검증하므로 0 이하의 환율은 GBP 입력이어도 실패한다.
pub fn normalize(value: f64, currency: Currency, rate: ExchangeRate) -> Result<f64> {
    let usd_per_gbp = rate.validate()?;
    Ok(match currency {
        Currency::Gbp => value,
        Currency::Usd => value / usd_per_gbp,
    })
}
