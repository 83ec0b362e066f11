use chrono::{Days, NaiveDate};
use rand::Rng;

use crate::models::{DefectType, ProductionRecord, Shift};

/// Where production records come from. The pipeline only depends on the
/// record schema, so a real line feed can be swapped in here.
pub trait DataSource {
    fn collect(&self) -> Vec<ProductionRecord>;
}

/// Synthesizes plausible line data over an inclusive date range, one
/// record per shift per day.
pub struct SyntheticSource {
    start: NaiveDate,
    end: NaiveDate,
}

impl SyntheticSource {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Window of `days` calendar days ending on `end`.
    pub fn trailing_days(end: NaiveDate, days: u64) -> Self {
        let start = end
            .checked_sub_days(Days::new(days.saturating_sub(1)))
            .unwrap_or(end);
        Self { start, end }
    }
}

impl DataSource for SyntheticSource {
    fn collect(&self) -> Vec<ProductionRecord> {
        generate(self.start, self.end, &mut rand::thread_rng())
    }
}

pub fn generate(start: NaiveDate, end: NaiveDate, rng: &mut impl Rng) -> Vec<ProductionRecord> {
    let mut records = Vec::new();
    let mut day = start;
    while day <= end {
        for shift in Shift::ALL {
            records.push(ProductionRecord {
                date: day,
                shift,
                output: rng.gen_range(800..1200),
                scrap: rng.gen_range(20..50),
                fpy: rng.gen_range(0.85..0.99),
                oee: rng.gen_range(0.65..0.90),
                defect_type: DefectType::ALL[rng.gen_range(0..DefectType::ALL.len())],
            });
        }
        let Some(next) = day.succ_opt() else { break };
        day = next;
    }
    records
}
