use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Work period labels used to partition daily records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shift {
    First,
    Second,
    Third,
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::First, Shift::Second, Shift::Third];

    pub fn label(self) -> &'static str {
        match self {
            Shift::First => "Shift 1",
            Shift::Second => "Shift 2",
            Shift::Third => "Shift 3",
        }
    }
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefectType {
    WeldFail,
    Crack,
    MissingTab,
    BentPin,
}

impl DefectType {
    pub const ALL: [DefectType; 4] = [
        DefectType::WeldFail,
        DefectType::Crack,
        DefectType::MissingTab,
        DefectType::BentPin,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DefectType::WeldFail => "Weld Fail",
            DefectType::Crack => "Crack",
            DefectType::MissingTab => "Missing Tab",
            DefectType::BentPin => "Bent Pin",
        }
    }
}

impl std::fmt::Display for DefectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One shift's production figures for one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionRecord {
    pub date: NaiveDate,
    pub shift: Shift,
    pub output: u32,
    pub scrap: u32,
    pub fpy: f64,
    pub oee: f64,
    pub defect_type: DefectType,
}

/// Scalar KPIs reduced from one day's selection of records.
#[derive(Debug, Clone, Serialize)]
pub struct KpiSummary {
    pub total_output: u32,
    pub total_scrap: u32,
    pub avg_fpy: f64,
    pub avg_oee: f64,
    pub top_defect: DefectType,
}
