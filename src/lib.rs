//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 사용한다.
//!
//! 계산 코어는 [`units`]와 [`rtfc`]이며 부수효과가 없다. 나머지 모듈은 입력 수집,
//! PIN 잠금, 설명문 출력 등 화면 계층을 담당한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod error;
pub mod i18n;
pub mod rtfc;
pub mod session;
pub mod ui_cli;
pub mod units;

pub use error::CalculationError;
pub use rtfc::{resolve, CalculationResult, FuelQuote, ShippingPremium};
pub use units::{Currency, ExchangeRate, PriceBasis};
