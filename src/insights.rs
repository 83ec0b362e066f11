use crate::models::KpiSummary;

pub const FPY_FLOOR: f64 = 0.90;
pub const OEE_FLOOR: f64 = 0.75;
pub const SCRAP_CEILING: u32 = 300;

/// Applies the fixed threshold rules to a KPI summary. Rules are
/// evaluated in order and are independently triggerable; when none
/// trips, a single healthy-range message is emitted, so the returned
/// list is never empty.
pub fn generate(summary: &KpiSummary) -> Vec<String> {
    let mut findings = Vec::new();

    if summary.avg_fpy < FPY_FLOOR {
        findings.push("FPY dropped below 90%. Investigate welding.".to_string());
    }
    if summary.avg_oee < OEE_FLOOR {
        findings.push("OEE is below optimal. Check for downtime causes.".to_string());
    }
    if summary.total_scrap > SCRAP_CEILING {
        findings.push(format!(
            "High scrap detected. Top defect: {}.",
            summary.top_defect
        ));
    }
    if findings.is_empty() {
        findings.push("All KPIs are within healthy range.".to_string());
    }

    findings
}
