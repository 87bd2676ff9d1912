//! 계산 결과를 설명문(walk-through)과 요약표로 만든다.
//!
//! 화면 표시 계층에서만 사용한다. 계산은 [`certificate_cost::resolve`]에 위임한다.
use crate::error::Result;
use crate::i18n::{keys, Translator};
use crate::rtfc::certificate_cost::{self, CalculationResult};
use crate::rtfc::quote::{FuelQuote, ShippingPremium};
use crate::units::{normalize, ExchangeRate};

/// 계산 요청 한 건. 카탈로그 이름은 표시용이다.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub fuel_name: String,
    pub quote: FuelQuote,
    pub premium: ShippingPremium,
    pub rate: ExchangeRate,
}

/// 요약표 한 행.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    pub headers: [String; 5],
    pub row_label: String,
    /// 기본, 운송, 합계, RTFC당 (소수 둘째 자리 반올림)
    pub values: [f64; 4],
    pub certificates_per_litre: u32,
}

impl SummaryTable {
    /// 고정폭 텍스트 표로 출력한다.
    pub fn to_text(&self) -> String {
        let cells: Vec<String> = self
            .values
            .iter()
            .map(|v| format!("{v:.2}"))
            .chain(std::iter::once(self.certificates_per_litre.to_string()))
            .collect();
        let widths: Vec<usize> = self
            .headers
            .iter()
            .zip(&cells)
            .map(|(h, c)| display_width(h).max(display_width(c)))
            .collect();
        let label_w = display_width(&self.row_label);

        let mut header_line = " ".repeat(label_w);
        let mut value_line = self.row_label.clone();
        for ((h, c), w) in self.headers.iter().zip(&cells).zip(&widths) {
            header_line.push_str(" | ");
            header_line.push_str(&pad_left(h, *w));
            value_line.push_str(" | ");
            value_line.push_str(&pad_left(c, *w));
        }
        format!("{header_line}\n{value_line}")
    }
}

/// 설명문과 요약표.
#[derive(Debug, Clone)]
pub struct Report {
    pub result: CalculationResult,
    pub walkthrough: Vec<String>,
    pub table: SummaryTable,
}

impl Report {
    /// 계산을 수행하고 보고서를 만든다. 계산 오류는 그대로 반환한다.
    pub fn build(req: &ReportRequest, tr: &Translator) -> Result<Self> {
        let result = certificate_cost::resolve(req.quote, req.premium, req.rate)?;
        let gbp_price = normalize(req.quote.price, req.quote.currency, req.rate)?;
        Ok(Self {
            result,
            walkthrough: walkthrough_lines(req, &result, gbp_price, tr),
            table: summary_table(&req.fuel_name, &result, tr),
        })
    }

    /// CLI 출력용 전체 텍스트.
    pub fn to_text(&self) -> String {
        let mut out = self.walkthrough.join("\n\n");
        out.push_str("\n\n");
        out.push_str(&self.table.to_text());
        out
    }
}

fn walkthrough_lines(
    req: &ReportRequest,
    result: &CalculationResult,
    gbp_price: f64,
    tr: &Translator,
) -> Vec<String> {
    let quote = &req.quote;
    let basis = quote.unit.short_label();
    let mut lines = vec![
        tr.t(keys::REPORT_HEADING),
        tr.fill(
            keys::REPORT_INTRO,
            &[
                ("fuel", req.fuel_name.clone()),
                ("price", format_money(quote.price)),
                ("unit", format!("{}/{}", quote.currency, basis)),
                ("currency", quote.currency.to_string()),
            ],
        ),
        tr.fill(
            keys::REPORT_FX,
            &[
                ("fx", format!("{:.4}", req.rate.usd_per_gbp)),
                ("gbp", format_money(gbp_price)),
                ("basis", basis.to_string()),
            ],
        ),
    ];

    let energy_note = if quote.energy_ratio != 1.0 {
        tr.t(keys::REPORT_ENERGY_ADJUSTED)
    } else {
        String::new()
    };
    lines.push(tr.fill(
        keys::REPORT_UNIT,
        &[
            ("ppl", format_money(result.base_gbp_pence_per_litre)),
            ("energy_note", energy_note),
        ],
    ));

    if !req.premium.is_none() {
        lines.push(tr.fill(
            keys::REPORT_SHIPPING,
            &[
                ("ship", format!("{:.2}", result.shipping_gbp_pence_per_litre)),
                ("total", format!("{:.2}", result.total_gbp_pence_per_litre)),
            ],
        ));
    }

    let rtfc = if result.certificates_per_litre > 1 {
        tr.t(keys::REPORT_RTFC_MANY)
    } else {
        tr.t(keys::REPORT_RTFC_ONE)
    };
    lines.push(tr.fill(
        keys::REPORT_SPLIT,
        &[
            ("multiplier", result.certificates_per_litre.to_string()),
            ("rtfc", rtfc),
            ("per_cert", format_money(result.pence_cost_per_certificate)),
        ],
    ));
    lines
}

fn summary_table(fuel_name: &str, result: &CalculationResult, tr: &Translator) -> SummaryTable {
    SummaryTable {
        headers: [
            tr.t(keys::TABLE_BASE),
            tr.t(keys::TABLE_SHIPPING),
            tr.t(keys::TABLE_TOTAL),
            tr.t(keys::TABLE_PER_RTFC),
            tr.t(keys::TABLE_RTFCS_PER_LITRE),
        ],
        row_label: fuel_name.to_string(),
        values: [
            round2(result.base_gbp_pence_per_litre),
            round2(result.shipping_gbp_pence_per_litre),
            round2(result.total_gbp_pence_per_litre),
            round2(result.pence_cost_per_certificate),
        ],
        certificates_per_litre: result.certificates_per_litre,
    }
}

/// 소수 둘째 자리 반올림.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 천 단위 구분 기호가 있는 소수 둘째 자리 문자열 (`1,180.00`).
pub fn format_money(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 && fixed != "0.00" {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac_part}")
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}

fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", " ".repeat(pad), s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(format_money(1180.0), "1,180.00");
        assert_eq!(format_money(876.476), "876.48");
        assert_eq!(format_money(1_234_567.891), "1,234,567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1500.5), "-1,500.50");
    }

    #[test]
    fn round2_half_up() {
        assert_eq!(round2(44.937_978), 44.94);
        assert_eq!(round2(2.228_329), 2.23);
    }
}
