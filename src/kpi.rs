use indexmap::IndexMap;

use crate::models::{DefectType, KpiSummary, ProductionRecord};

/// Reduces one day's selection to scalar KPIs. Returns `None` for an
/// empty selection; callers are expected to have applied the day
/// selector, which guarantees a non-empty subset.
pub fn aggregate(selection: &[ProductionRecord]) -> Option<KpiSummary> {
    if selection.is_empty() {
        return None;
    }

    let total_output = selection.iter().map(|r| r.output).sum();
    let total_scrap = selection.iter().map(|r| r.scrap).sum();
    let avg_fpy = mean(selection.iter().map(|r| r.fpy));
    let avg_oee = mean(selection.iter().map(|r| r.oee));
    let top_defect = top_defect(selection)?;

    Some(KpiSummary {
        total_output,
        total_scrap,
        avg_fpy,
        avg_oee,
        top_defect,
    })
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return 0.0;
    }
    sum / count as f64
}

/// Most frequent defect in the selection. Counting preserves insertion
/// order, so ties go to the defect encountered first.
fn top_defect(selection: &[ProductionRecord]) -> Option<DefectType> {
    let mut counts: IndexMap<DefectType, usize> = IndexMap::new();
    for record in selection {
        *counts.entry(record.defect_type).or_insert(0) += 1;
    }

    let mut top: Option<(DefectType, usize)> = None;
    for (&defect, &count) in &counts {
        if top.map_or(true, |(_, best)| count > best) {
            top = Some((defect, count));
        }
    }
    top.map(|(defect, _)| defect)
}
