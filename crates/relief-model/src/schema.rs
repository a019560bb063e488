use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Severity;

pub const COL_DISTRICT: &str = "District";
pub const COL_POPULATION: &str = "Affected_Population";
pub const COL_SEVERITY: &str = "Severity_Level";
pub const COL_FAMILIES: &str = "Displaced_Families";
pub const COL_PROVINCE: &str = "Province";

/// Columns every uploaded table must carry, in reporting order.
pub const REQUIRED_COLUMNS: [&str; 4] = [COL_DISTRICT, COL_POPULATION, COL_SEVERITY, COL_FAMILIES];

/// Columns appended by the resource calculator, in output order.
pub const DERIVED_COLUMNS: [&str; 5] = ["Food_Packs", "Tents", "Medical_Supplies", "Water_Bottles", "Blankets"];

/// Stored in place of a missing province.
pub const PROVINCE_NOT_AVAILABLE: &str = "N/A";

/// Relief fund estimate per house, in currency units.
pub const RELIEF_PER_HOUSE: u64 = 50_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceNeeds {
    pub food_packs: u64,
    pub tents: u64,
    pub medical_supplies: u64,
    pub water_bottles: u64,
    pub blankets: u64,
}

impl ResourceNeeds {
    /// Values in `DERIVED_COLUMNS` order.
    pub fn as_array(&self) -> [u64; 5] {
        [self.food_packs, self.tents, self.medical_supplies, self.water_bottles, self.blankets]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistrictRecord {
    pub id: u64,
    pub name: String,
    pub province: String,
    pub population: u64,
    pub houses: u64,
    pub casualties: u64,
    pub date: NaiveDate,
    pub severity: String,
    pub families: u64,
    #[serde(flatten)]
    pub resources: ResourceNeeds,
}

impl DistrictRecord {
    pub fn severity_level(&self) -> Option<Severity> {
        Severity::parse(&self.severity)
    }

    pub fn relief(&self) -> u64 {
        self.houses.saturating_mul(RELIEF_PER_HOUSE)
    }
}

/// Cross-record totals. Only ever computed, never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub total_population: u64,
    pub total_families: u64,
    pub total_houses: u64,
    pub total_casualties: u64,
    pub total_food_packs: u64,
    pub total_tents: u64,
    pub total_medical_supplies: u64,
    pub total_water_bottles: u64,
    pub total_blankets: u64,
    pub total_relief: u64,
    pub districts_count: usize,
    pub critical_districts: usize,
    pub high_severity_districts: usize,
}

/// Listing entry: a record reduced to its headline figures plus relief.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistrictView {
    pub id: u64,
    pub name: String,
    pub population: u64,
    pub houses: u64,
    pub casualties: u64,
    pub relief: u64,
    pub date: NaiveDate,
    pub severity: String,
}

impl From<&DistrictRecord> for DistrictView {
    fn from(d: &DistrictRecord) -> Self {
        Self {
            id: d.id,
            name: d.name.clone(),
            population: d.population,
            houses: d.houses,
            casualties: d.casualties,
            relief: d.relief(),
            date: d.date,
            severity: d.severity.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewTotals {
    pub population: u64,
    pub houses: u64,
    pub casualties: u64,
    pub relief: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub summary: OverviewTotals,
    pub districts: Vec<DistrictView>,
}

/// Single-district detail: the full record plus its relief estimate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistrictDetail {
    #[serde(flatten)]
    pub record: DistrictRecord,
    pub relief: u64,
}

impl From<DistrictRecord> for DistrictDetail {
    fn from(record: DistrictRecord) -> Self {
        let relief = record.relief();
        Self { record, relief }
    }
}
