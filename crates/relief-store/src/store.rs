//! District record store

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{Local, NaiveDate};
use relief_model::{DistrictRecord, ResourceNeeds, Severity, PROVINCE_NOT_AVAILABLE};
use relief_pipeline::EnrichedRow;
use tracing::info;

struct Inner {
    records: Arc<[DistrictRecord]>,
    next_id: u64,
}

/// The current district dataset.
///
/// Replaced wholesale on every ingestion. Ids come from a counter that only
/// moves forward, so an id is never handed out twice in the life of a store.
/// Readers get an immutable snapshot and never observe a half-built set.
pub struct DatasetStore {
    inner: RwLock<Inner>,
}

impl DatasetStore {
    /// Empty store, ids starting at 1.
    pub fn new() -> Self {
        Self::from_records(Vec::new())
    }

    /// Store holding the two built-in example districts.
    pub fn with_seed() -> Self {
        Self::from_records(seed_records())
    }

    fn from_records(records: Vec<DistrictRecord>) -> Self {
        let next_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(Inner { records: records.into(), next_id }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace every record with ones built from `rows`, dated today.
    pub fn replace_all(&self, rows: &[EnrichedRow]) -> Vec<DistrictRecord> {
        self.replace_all_on(rows, Local::now().date_naive())
    }

    /// Replace every record with ones built from `rows`, all dated `date`.
    ///
    /// The write lock is held for the whole build, so concurrent ingestions
    /// run one after another and draw disjoint id ranges.
    pub fn replace_all_on(&self, rows: &[EnrichedRow], date: NaiveDate) -> Vec<DistrictRecord> {
        let mut inner = self.write();
        let first_id = inner.next_id;

        let records: Vec<DistrictRecord> = rows
            .iter()
            .zip(first_id..)
            .map(|(row, id)| to_record(id, row, date))
            .collect();

        inner.next_id = first_id + records.len() as u64;
        inner.records = records.clone().into();

        info!(count = records.len(), first_id, next_id = inner.next_id, "dataset replaced");
        records
    }

    /// Cheap shared view of the current records.
    pub fn snapshot(&self) -> Arc<[DistrictRecord]> {
        self.read().records.clone()
    }

    pub fn get(&self, id: u64) -> Option<DistrictRecord> {
        self.read().records.iter().find(|r| r.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().records.is_empty()
    }

    /// Id the next ingested record will receive.
    pub fn next_id(&self) -> u64 {
        self.read().next_id
    }
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Estimated casualties; 0 for an unrecognized severity.
pub fn casualties_for(population: u64, severity: &str) -> u64 {
    match Severity::parse(severity) {
        Some(s) => (population as f64 * s.casualty_rate()) as u64,
        None => 0,
    }
}

fn to_record(id: u64, row: &EnrichedRow, date: NaiveDate) -> DistrictRecord {
    DistrictRecord {
        id,
        name: row.district.clone(),
        province: row
            .province
            .clone()
            .unwrap_or_else(|| PROVINCE_NOT_AVAILABLE.to_string()),
        population: row.population,
        houses: row.families,
        casualties: casualties_for(row.population, &row.severity),
        date,
        severity: row.severity.clone(),
        families: row.families,
        resources: row.resources,
    }
}

/// Example districts present before the first upload. Their casualty figures
/// are reported values, not derived ones, and they carry no resource plan.
pub fn seed_records() -> Vec<DistrictRecord> {
    let seed = |id, name: &str, province: &str, population, houses, casualties, day, severity: Severity| DistrictRecord {
        id,
        name: name.to_string(),
        province: province.to_string(),
        population,
        houses,
        casualties,
        date: NaiveDate::from_ymd_opt(2024, 8, day).unwrap_or_default(),
        severity: severity.to_string(),
        families: houses,
        resources: ResourceNeeds::default(),
    };

    vec![
        seed(1, "Rajanpur", "Punjab", 150_000, 5_000, 25, 15, Severity::High),
        seed(2, "Dadu", "Sindh", 200_000, 8_000, 40, 20, Severity::Critical),
    ]
}
