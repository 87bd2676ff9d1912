//! 연료 경로별 기본 시세 카탈로그.
//!
//! 입력 화면을 미리 채우는 용도로만 쓰며, 계산기는 카탈로그를 직접 읽지 않는다.
use crate::rtfc::quote::FuelQuote;
use crate::units::{Currency, PriceBasis};

/// 카탈로그 항목.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub quote: FuelQuote,
}

const FUEL_CATALOG: [CatalogEntry; 4] = [
    CatalogEntry {
        name: "HVO Class-2 waste-oil",
        quote: FuelQuote {
            price: 1180.0,
            unit: PriceBasis::PerCubicMetre,
            currency: Currency::Usd,
            density: 0.78,
            rtfc_multiplier: 2,
            energy_ratio: 1.00,
        },
    },
    CatalogEntry {
        name: "UCOME FAME 0 °C",
        quote: FuelQuote {
            price: 830.0,
            unit: PriceBasis::PerTonne,
            currency: Currency::Usd,
            density: 0.88,
            rtfc_multiplier: 2,
            energy_ratio: 1.00,
        },
    },
    CatalogEntry {
        name: "RME (crop FAME)",
        quote: FuelQuote {
            price: 726.0,
            unit: PriceBasis::PerTonne,
            currency: Currency::Usd,
            density: 0.88,
            rtfc_multiplier: 1,
            energy_ratio: 1.00,
        },
    },
    CatalogEntry {
        name: "HVO Class-4 (tallow)",
        quote: FuelQuote {
            price: 1235.0,
            unit: PriceBasis::PerTonne,
            currency: Currency::Usd,
            density: 0.79,
            rtfc_multiplier: 1,
            energy_ratio: 1.00,
        },
    },
];

/// 표시 순서대로 전체 항목을 반환한다.
pub fn entries() -> &'static [CatalogEntry] {
    &FUEL_CATALOG
}

pub fn names() -> Vec<&'static str> {
    FUEL_CATALOG.iter().map(|e| e.name).collect()
}

/// 첫 번째 항목. 화면 초기값으로 쓴다.
pub fn default_entry() -> &'static CatalogEntry {
    &FUEL_CATALOG[0]
}

/// 이름으로 항목을 찾는다. 정확히 일치하는 이름을 우선하고, 없으면 대소문자를 무시한다.
pub fn find(name: &str) -> Option<&'static CatalogEntry> {
    let name = name.trim();
    FUEL_CATALOG
        .iter()
        .find(|e| e.name == name)
        .or_else(|| FUEL_CATALOG.iter().find(|e| e.name.eq_ignore_ascii_case(name)))
}

/// 이름에 해당하는 기본 시세.
pub fn defaults_for(name: &str) -> Option<FuelQuote> {
    find(name).map(|e| e.quote)
}
