//! RTFC 인증서 단가 계산 모듈 모음.

pub mod catalog;
pub mod certificate_cost;
pub mod quote;
pub mod report;
pub mod shipping;

pub use certificate_cost::{resolve, CalculationResult};
pub use quote::{FuelQuote, ShippingPremium};
pub use shipping::shipping_pence_per_litre;
