//! 통화 및 물량 기준 환산 모듈 모음.

pub mod basis;
pub mod currency;

pub use basis::{litres_per_tonne, to_pence_per_litre, PriceBasis};
pub use currency::{normalize, Currency, ExchangeRate};
