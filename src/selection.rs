use chrono::NaiveDate;

use crate::error::{ReportError, Result};
use crate::models::ProductionRecord;

/// Returns the records for `reference`, falling back to the most recent
/// date present when the reference date has no records. The returned
/// selection is never empty; an empty input is a `NoData` error.
pub fn select_day(
    records: &[ProductionRecord],
    reference: NaiveDate,
) -> Result<Vec<ProductionRecord>> {
    let todays: Vec<ProductionRecord> = records
        .iter()
        .filter(|r| r.date == reference)
        .cloned()
        .collect();

    if !todays.is_empty() {
        return Ok(todays);
    }

    let latest = records
        .iter()
        .map(|r| r.date)
        .max()
        .ok_or(ReportError::NoData)?;

    Ok(records
        .iter()
        .filter(|r| r.date == latest)
        .cloned()
        .collect())
}
