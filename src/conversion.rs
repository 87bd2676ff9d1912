//! 화면/CLI에서 들어오는 단위·통화 문자열을 enum으로 변환한다.
use thiserror::Error;

use crate::units::{Currency, PriceBasis};

/// 시세 단위 선택지 (원래 화면의 표기).
pub const QUOTE_UNIT_TAGS: [&str; 4] = ["USD/m3", "USD/t", "GBP/m3", "GBP/t"];
/// 운송 프리미엄 단위 선택지.
pub const SHIPPING_UNIT_TAGS: [&str; 2] = ["per m3", "per tonne"];

/// 문자열 변환 시 발생 가능한 오류.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
    /// 알 수 없는 통화 문자열
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),
    /// 숫자로 읽을 수 없는 값
    #[error("not a number: {0}")]
    InvalidNumber(String),
}

/// 통화 문자열(`USD`, `gbp` 등)을 변환한다.
pub fn parse_currency(s: &str) -> Result<Currency, ConversionError> {
    s.trim()
        .parse::<Currency>()
        .map_err(|_| ConversionError::UnknownCurrency(s.trim().to_string()))
}

/// 물량 기준 문자열을 변환한다.
///
/// `USD/m3`, `GBP/t`, `m3`, `t`, `tonne`, `per m3`, `per tonne` 등을 받는다.
/// `USD/m3`처럼 앞에 붙은 통화는 무시하고 `/` 뒤의 기준만 사용한다.
/// 통화는 별도 필드로 지정한다.
pub fn parse_basis(s: &str) -> Result<PriceBasis, ConversionError> {
    let raw = s.trim();
    let lower = raw.to_lowercase();
    let tail = lower.rsplit('/').next().unwrap_or_default();
    let tail = tail.strip_prefix("per").unwrap_or(tail).trim();
    match tail {
        "m3" | "m³" | "cbm" | "cubic metre" | "cubic meter" => Ok(PriceBasis::PerCubicMetre),
        "t" | "tonne" | "ton" | "mt" => Ok(PriceBasis::PerTonne),
        _ => Err(ConversionError::UnknownUnit(raw.to_string())),
    }
}

/// `USD/m3` 형식 표기.
pub fn quote_unit_label(currency: Currency, basis: PriceBasis) -> String {
    format!("{currency}/{}", basis.short_label())
}

/// `per m3` / `per tonne` 형식 표기.
pub fn shipping_unit_label(basis: PriceBasis) -> &'static str {
    match basis {
        PriceBasis::PerCubicMetre => SHIPPING_UNIT_TAGS[0],
        PriceBasis::PerTonne => SHIPPING_UNIT_TAGS[1],
    }
}

/// 숫자 문자열을 변환한다. 천 단위 쉼표와 `_`는 무시한다.
pub fn parse_number(s: &str) -> Result<f64, ConversionError> {
    let cleaned: String = s.trim().chars().filter(|c| *c != ',' && *c != '_').collect();
    cleaned
        .parse::<f64>()
        .map_err(|_| ConversionError::InvalidNumber(s.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basis_tags_from_dropdowns() {
        for tag in QUOTE_UNIT_TAGS {
            let expected = if tag.ends_with("/m3") {
                PriceBasis::PerCubicMetre
            } else {
                PriceBasis::PerTonne
            };
            assert_eq!(parse_basis(tag).unwrap(), expected, "{tag}");
        }
        assert_eq!(parse_basis("per m3").unwrap(), PriceBasis::PerCubicMetre);
        assert_eq!(parse_basis("per tonne").unwrap(), PriceBasis::PerTonne);
        assert_eq!(parse_basis(" T ").unwrap(), PriceBasis::PerTonne);
    }

    #[test]
    fn unknown_basis_is_rejected() {
        assert_eq!(
            parse_basis("USD/bbl"),
            Err(ConversionError::UnknownUnit("USD/bbl".into()))
        );
        assert!(parse_basis("").is_err());
    }

    #[test]
    fn currency_is_case_insensitive() {
        assert_eq!(parse_currency("usd").unwrap(), Currency::Usd);
        assert_eq!(parse_currency("GBP").unwrap(), Currency::Gbp);
        assert_eq!(
            parse_currency("EUR"),
            Err(ConversionError::UnknownCurrency("EUR".into()))
        );
    }

    #[test]
    fn labels_match_tags() {
        assert_eq!(quote_unit_label(Currency::Usd, PriceBasis::PerCubicMetre), "USD/m3");
        assert_eq!(quote_unit_label(Currency::Gbp, PriceBasis::PerTonne), "GBP/t");
        assert_eq!(shipping_unit_label(PriceBasis::PerTonne), "per tonne");
    }

    #[test]
    fn numbers_accept_thousands_separators() {
        assert_eq!(parse_number("1,235").unwrap(), 1235.0);
        assert_eq!(parse_number(" 0.88 ").unwrap(), 0.88);
        assert!(parse_number("abc").is_err());
    }
}
