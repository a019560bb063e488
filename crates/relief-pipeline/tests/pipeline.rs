use std::io::Write;
use std::path::PathBuf;

use relief_pipeline::{
    calculate, process_path, save_processed, validate, validate_path, RawTable, ValidationError, ValidationReport,
    SAMPLE_CSV,
};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(bytes).unwrap();
    path
}

#[test]
fn test_process_sample_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "sample.csv", SAMPLE_CSV.as_bytes());

    let table = process_path(&path).unwrap();
    assert_eq!(table.len(), 10);

    let dadu = &table.rows[1];
    assert_eq!(dadu.district, "Dadu");
    assert_eq!(dadu.province.as_deref(), Some("Sindh"));
    assert_eq!(dadu.resources.food_packs, 1_500_000);
    assert_eq!(dadu.resources.tents, 20_000);
    assert_eq!(dadu.resources.medical_supplies, 75_000);
    assert_eq!(dadu.resources.water_bottles, 2_500_000);
    assert_eq!(dadu.resources.blankets, 750_000);
}

#[test]
fn test_validation_stops_at_first_category() {
    let dir = TempDir::new().unwrap();

    let empty = write_file(&dir, "empty.csv", b"");
    assert_eq!(validate_path(&empty).unwrap_err(), ValidationError::EmptyInput);

    let header_only = write_file(&dir, "header.csv", b"Foo,Bar\n");
    assert_eq!(validate_path(&header_only).unwrap_err(), ValidationError::EmptyInput);

    let no_cols = write_file(&dir, "cols.csv", b"Foo\n1\n");
    assert_eq!(
        validate_path(&no_cols).unwrap_err().to_string(),
        "Missing columns: District, Affected_Population, Severity_Level, Displaced_Families"
    );
}

#[test]
fn test_unreadable_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "bad.csv", b"District,Affected_Population\n\xff\xfe,1\n");
    let err = validate_path(&path).unwrap_err();
    assert!(matches!(err, ValidationError::Unreadable { .. }));
    assert!(err.to_string().starts_with("Error reading file:"));
}

#[test]
fn test_row_longer_than_header_is_unreadable() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "wide.csv",
        b"District,Affected_Population,Severity_Level,Displaced_Families\nDadu,200000,Critical,8000,extra\n",
    );
    let err = validate_path(&path).unwrap_err();
    assert_eq!(
        err,
        ValidationError::Unreadable { reason: "Expected 4 fields in line 2, saw 5".into() }
    );
}

#[test]
fn test_report_for_failed_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "sev.csv",
        b"District,Affected_Population,Severity_Level,Displaced_Families\nA,1,Severe,1\nB,2,Low,1\n",
    );
    let report = ValidationReport::from(&validate_path(&path));
    assert!(!report.valid);
    assert!(report.message.ends_with("Found: Row 1: 'Severe'"));
}

#[test]
fn test_calculate_is_deterministic() {
    let t = RawTable::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
    assert_eq!(calculate(&t), calculate(&t));
}

#[test]
fn test_saved_table_round_trips() {
    let dir = TempDir::new().unwrap();
    let input = write_file(
        &dir,
        "in.csv",
        b"District,Affected_Population,Severity_Level,Displaced_Families,Province\n\
          Rajanpur,150000.0,High,5000,Punjab\n\
          Thatta,75000,Low,2500,\n",
    );
    let out = dir.path().join("processed_in.csv");

    let first = process_path(&input).unwrap();
    save_processed(&first, &out).unwrap();

    let reread = RawTable::read_path(&out).unwrap();
    assert_eq!(validate(&reread), Ok(()));
    let second = calculate(&reread);

    assert_eq!(second.len(), first.len());
    for (a, b) in first.rows.iter().zip(&second.rows) {
        assert_eq!(a.district, b.district);
        assert_eq!(a.population, b.population);
        assert_eq!(a.families, b.families);
        assert_eq!(a.severity, b.severity);
        assert_eq!(a.province, b.province);
        assert_eq!(a.resources, b.resources);
    }
}
