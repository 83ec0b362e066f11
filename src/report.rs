use chrono::NaiveDate;
use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::error::{ReportError, Result};
use crate::models::KpiSummary;

const INCH: f32 = 25.4;

// US letter, in millimeters.
const PAGE_WIDTH: Mm = Mm(215.9);
const PAGE_HEIGHT: Mm = Mm(279.4);

const MARGIN_X: f32 = 1.0 * INCH;
const INSIGHT_LINE_STEP: f32 = 0.2 * INCH;

/// Lays the KPI summary and findings out on a fixed single-page
/// document and returns the finished PDF bytes. There is no pagination;
/// the findings section can only overflow if the rule set grows.
pub fn render(summary: &KpiSummary, findings: &[String], reference: NaiveDate) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new("CC Line Auto Report", PAGE_WIDTH, PAGE_HEIGHT, "Layer 1");
    let layer = doc.get_page(page).get_layer(layer);

    let body = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(render_err)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(render_err)?;

    layer.use_text(
        format!("CC Line Daily Report - {reference}"),
        14.0,
        Mm(MARGIN_X),
        Mm(10.5 * INCH),
        &bold,
    );

    let metrics = [
        format!("Total Output: {}", format_grouped(summary.total_output)),
        format!(
            "Scrap Rate: {}",
            format_scrap_rate(summary.total_scrap, summary.total_output)
        ),
        format!("Average FPY: {}", format_percent(summary.avg_fpy)),
        format!("Average OEE: {}", format_percent(summary.avg_oee)),
    ];
    for (i, line) in metrics.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let y = (10.1 - 0.2 * i as f32) * INCH;
        layer.use_text(line.as_str(), 10.0, Mm(MARGIN_X), Mm(y), &body);
    }

    layer.use_text("AI Insights:", 12.0, Mm(MARGIN_X), Mm(9.2 * INCH), &bold);

    let mut y = 9.0 * INCH;
    for line in findings {
        layer.use_text(line.as_str(), 10.0, Mm(MARGIN_X), Mm(y), &body);
        y -= INSIGHT_LINE_STEP;
    }

    doc.save_to_bytes().map_err(render_err)
}

fn render_err(e: impl std::fmt::Display) -> ReportError {
    ReportError::Render(e.to_string())
}

/// Thousands-grouped integer, e.g. 3000 -> "3,000".
pub fn format_grouped(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// A [0,1] ratio as a percentage with two decimals, e.g. 0.88 -> "88.00%".
pub fn format_percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

/// Scrap rate for the period. Zero output makes the ratio undefined, so
/// it renders as "N/A" rather than dividing.
pub fn format_scrap_rate(total_scrap: u32, total_output: u32) -> String {
    if total_output == 0 {
        return "N/A".to_string();
    }
    let rate = f64::from(total_scrap) / f64::from(total_output);
    format_percent(rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DefectType;

    fn summary() -> KpiSummary {
        KpiSummary {
            total_output: 3000,
            total_scrap: 75,
            avg_fpy: 0.92,
            avg_oee: 0.81,
            top_defect: DefectType::Crack,
        }
    }

    #[test]
    fn test_format_grouped_inserts_thousands_separators() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(3000), "3,000");
        assert_eq!(format_grouped(1234567), "1,234,567");
    }

    #[test]
    fn test_format_percent_two_decimals() {
        assert_eq!(format_percent(0.88), "88.00%");
        assert_eq!(format_percent(0.8765), "87.65%");
        assert_eq!(format_percent(1.0), "100.00%");
    }

    #[test]
    fn test_format_scrap_rate() {
        assert_eq!(format_scrap_rate(25, 1000), "2.50%");
        assert_eq!(format_scrap_rate(0, 1000), "0.00%");
    }

    #[test]
    fn test_format_scrap_rate_zero_output_is_not_a_number() {
        assert_eq!(format_scrap_rate(25, 0), "N/A");
        assert_eq!(format_scrap_rate(0, 0), "N/A");
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let findings = vec!["All KPIs are within healthy range.".to_string()];
        let reference = chrono::NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();

        let bytes = render(&summary(), &findings, reference).unwrap();

        assert!(!bytes.is_empty());
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_accepts_multiple_findings() {
        let findings = vec![
            "FPY dropped below 90%. Investigate welding.".to_string(),
            "OEE is below optimal. Check for downtime causes.".to_string(),
            "High scrap detected. Top defect: Crack.".to_string(),
        ];
        let reference = chrono::NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();

        let bytes = render(&summary(), &findings, reference).unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }
}
