use std::io::Write;
use std::path::Path;

use relief_model::{
    multiplier_for, ResourceNeeds, COL_DISTRICT, COL_FAMILIES, COL_POPULATION, COL_PROVINCE, COL_SEVERITY,
    DERIVED_COLUMNS,
};

use crate::coerce::coerce_count_or_zero;
use crate::error::{Result, TableError};
use crate::table::RawTable;

/// One input row with its coerced counts and derived resource needs.
#[derive(Clone, Debug, PartialEq)]
pub struct EnrichedRow {
    /// Original cells, aligned with `EnrichedTable::columns`.
    pub cells: Vec<String>,
    pub district: String,
    pub province: Option<String>,
    pub population: u64,
    pub families: u64,
    pub severity: String,
    pub resources: ResourceNeeds,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnrichedTable {
    /// Original header, in input order.
    pub columns: Vec<String>,
    pub rows: Vec<EnrichedRow>,
}

/// Per-row resource needs: base quantity first, then the severity
/// multiplier, truncated toward zero.
pub fn compute_resources(population: u64, families: u64, severity: &str) -> ResourceNeeds {
    let m = multiplier_for(severity);
    let pop = population as f64;

    let food = pop * 3.0;
    let tents = families as f64;
    let medical = pop * 0.15;
    let water = pop * 5.0;
    let blankets = pop * 1.5;

    ResourceNeeds {
        food_packs: (food * m) as u64,
        tents: (tents * m) as u64,
        medical_supplies: (medical * m) as u64,
        water_bottles: (water * m) as u64,
        blankets: (blankets * m) as u64,
    }
}

/// Derive the resource columns for every row. Never fails: cells that do not
/// coerce count as 0 and unknown severities scale by 1.0.
pub fn calculate(table: &RawTable) -> EnrichedTable {
    let col = |name: &str| table.column_index(name);
    let (district, population, severity, families, province) = (
        col(COL_DISTRICT),
        col(COL_POPULATION),
        col(COL_SEVERITY),
        col(COL_FAMILIES),
        col(COL_PROVINCE),
    );
    let text = |row: usize, idx: Option<usize>| idx.map(|i| table.cell(row, i)).unwrap_or("");

    let rows = (0..table.len())
        .map(|row| {
            let pop = coerce_count_or_zero(text(row, population));
            let fam = coerce_count_or_zero(text(row, families));
            let sev = text(row, severity).to_string();
            let prov = province
                .map(|i| table.cell(row, i))
                .filter(|p| !p.trim().is_empty())
                .map(str::to_string);

            EnrichedRow {
                cells: (0..table.headers.len()).map(|i| table.cell(row, i).to_string()).collect(),
                district: text(row, district).to_string(),
                province: prov,
                population: pop,
                families: fam,
                resources: compute_resources(pop, fam, &sev),
                severity: sev,
            }
        })
        .collect();

    EnrichedTable { columns: table.headers.clone(), rows }
}

impl EnrichedTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Original columns (minus any stale derived ones) followed by the five
    /// derived columns. Counts are written in their coerced integer form.
    pub fn write_csv<W: Write>(&self, w: W) -> Result<()> {
        let keep: Vec<usize> = (0..self.columns.len())
            .filter(|&i| !DERIVED_COLUMNS.contains(&self.columns[i].as_str()))
            .collect();
        let pop_idx = self.columns.iter().position(|c| c == COL_POPULATION);
        let fam_idx = self.columns.iter().position(|c| c == COL_FAMILIES);

        let mut out = csv::Writer::from_writer(w);

        let header: Vec<&str> = keep
            .iter()
            .map(|&i| self.columns[i].as_str())
            .chain(DERIVED_COLUMNS)
            .collect();
        out.write_record(&header)?;

        for row in &self.rows {
            let mut record: Vec<String> = keep
                .iter()
                .map(|&i| match i {
                    _ if Some(i) == pop_idx => row.population.to_string(),
                    _ if Some(i) == fam_idx => row.families.to_string(),
                    _ => row.cells.get(i).cloned().unwrap_or_default(),
                })
                .collect();
            record.extend(row.resources.as_array().iter().map(u64::to_string));
            out.write_record(&record)?;
        }

        out.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.write_csv(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_severity_worked_example() {
        let r = compute_resources(150_000, 5_000, "High");
        assert_eq!(
            r,
            ResourceNeeds {
                food_packs: 900_000,
                tents: 10_000,
                medical_supplies: 45_000,
                water_bottles: 1_500_000,
                blankets: 450_000,
            }
        );
    }

    #[test]
    fn test_fractions_truncate() {
        // 90000 * 0.15 * 1.5 = 20250; 3333 * 1.5 = 4999.5
        let r = compute_resources(90_000, 3_333, "Medium");
        assert_eq!(r.medical_supplies, 20_250);
        assert_eq!(r.tents, 4_999);
        let r = compute_resources(7, 0, "Low");
        assert_eq!(r.medical_supplies, 1);
        assert_eq!(r.blankets, 10);
    }

    #[test]
    fn test_unknown_severity_uses_base_quantities() {
        let r = compute_resources(1_000, 10, "Unknown");
        assert_eq!(r, compute_resources(1_000, 10, "Low"));
    }

    #[test]
    fn test_calculate_keeps_order_and_columns() {
        let t = RawTable::from_reader(
            "District,Affected_Population,Severity_Level,Displaced_Families,Notes\nB,10,Low,2,x\nA,20.0,Critical,4,\n"
                .as_bytes(),
        )
        .unwrap();
        let e = calculate(&t);
        assert_eq!(e.columns, t.headers);
        assert_eq!(e.rows[0].district, "B");
        assert_eq!(e.rows[1].district, "A");
        assert_eq!(e.rows[1].population, 20);
        assert_eq!(e.rows[1].resources.food_packs, 150);
        assert_eq!(e.rows[0].cells[4], "x");
        assert_eq!(e.rows[0].province, None);
    }

    #[test]
    fn test_residual_garbage_counts_as_zero() {
        let t = RawTable::from_reader(
            "District,Affected_Population,Severity_Level,Displaced_Families\nX,abc,High,\n".as_bytes(),
        )
        .unwrap();
        let e = calculate(&t);
        assert_eq!(e.rows[0].population, 0);
        assert_eq!(e.rows[0].resources, ResourceNeeds::default());
    }

    #[test]
    fn test_write_appends_derived_columns() {
        let t = RawTable::from_reader(
            "District,Affected_Population,Severity_Level,Displaced_Families,Tents\nDadu,2e2,Low,3,999\n".as_bytes(),
        )
        .unwrap();
        let mut buf = Vec::new();
        calculate(&t).write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "District,Affected_Population,Severity_Level,Displaced_Families,Food_Packs,Tents,Medical_Supplies,Water_Bottles,Blankets\n\
             Dadu,200,Low,3,600,3,30,1000,300\n"
        );
    }
}
