use relief_model::{DatasetSummary, DistrictRecord, DistrictView, Overview, OverviewTotals, Severity};
use thiserror::Error;

/// No districts are loaded. Distinct from a summary full of zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("No data available")]
pub struct NoData;

/// Totals and severity counts over `records`.
pub fn summarize(records: &[DistrictRecord]) -> Result<DatasetSummary, NoData> {
    if records.is_empty() {
        return Err(NoData);
    }

    let mut s = DatasetSummary {
        districts_count: records.len(),
        ..Default::default()
    };

    for d in records {
        s.total_population = s.total_population.saturating_add(d.population);
        s.total_families = s.total_families.saturating_add(d.families);
        s.total_houses = s.total_houses.saturating_add(d.houses);
        s.total_casualties = s.total_casualties.saturating_add(d.casualties);
        s.total_relief = s.total_relief.saturating_add(d.relief());

        let r = &d.resources;
        s.total_food_packs = s.total_food_packs.saturating_add(r.food_packs);
        s.total_tents = s.total_tents.saturating_add(r.tents);
        s.total_medical_supplies = s.total_medical_supplies.saturating_add(r.medical_supplies);
        s.total_water_bottles = s.total_water_bottles.saturating_add(r.water_bottles);
        s.total_blankets = s.total_blankets.saturating_add(r.blankets);

        match d.severity_level() {
            Some(Severity::Critical) => s.critical_districts += 1,
            Some(Severity::High) => s.high_severity_districts += 1,
            _ => {}
        }
    }

    Ok(s)
}

/// Dashboard view: headline totals plus the first `limit` districts. Unlike
/// `summarize`, an empty dataset yields zeros.
pub fn overview(records: &[DistrictRecord], limit: usize) -> Overview {
    let totals = records.iter().fold(OverviewTotals::default(), |mut t, d| {
        t.population = t.population.saturating_add(d.population);
        t.houses = t.houses.saturating_add(d.houses);
        t.casualties = t.casualties.saturating_add(d.casualties);
        t.relief = t.relief.saturating_add(d.relief());
        t
    });

    Overview {
        summary: totals,
        districts: records.iter().take(limit).map(DistrictView::from).collect(),
    }
}

/// Listing entries for every record, in store order.
pub fn district_views(records: &[DistrictRecord]) -> Vec<DistrictView> {
    records.iter().map(DistrictView::from).collect()
}
