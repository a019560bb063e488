//! Pipeline Demo: one CSV from disk to relief plan
//!
//! Shows:
//! 1. Validation with a readable diagnostic
//! 2. Resource calculation per district
//! 3. Ingestion into a fresh dataset store
//! 4. Summary statistics
//! 5. Saving the processed table

use std::path::{Path, PathBuf};

use relief_pipeline::{process_path, save_processed, ValidationReport, SAMPLE_FILE_NAME};
use relief_store::{summarize, DatasetStore};

fn main() {
    let input = std::env::args().nth(1).unwrap_or_else(|| SAMPLE_FILE_NAME.to_string());
    let output = PathBuf::from("processed_flood_data.csv");

    println!("╔════════════════════════════════════════════════╗");
    println!("║  Flood Relief - Pipeline Demo                  ║");
    println!("╚════════════════════════════════════════════════╝\n");

    if !Path::new(&input).exists() {
        println!("Test file '{input}' not found");
        return;
    }

    // 1. Validate + calculate
    println!("📝 Step 1: Validate and process {input}");
    let result = process_path(Path::new(&input));
    let report = ValidationReport::from(&result);
    let table = match result {
        Ok(t) => t,
        Err(_) => {
            println!("   ✗ Processing failed: {}", report.message);
            return;
        }
    };
    println!("   ✓ {} ({} rows)\n", report.message, table.len());

    // 2. Per-district plan
    println!("📦 Step 2: Resource plan");
    for row in &table.rows {
        let r = &row.resources;
        println!(
            "   {:<20} {:<8} food={:<9} tents={:<7} medical={:<7} water={:<9} blankets={}",
            row.district, row.severity, r.food_packs, r.tents, r.medical_supplies, r.water_bottles, r.blankets
        );
    }
    println!();

    // 3. Ingest
    println!("🗂  Step 3: Ingest into dataset store");
    let store = DatasetStore::new();
    let records = store.replace_all(&table.rows);
    println!("   ✓ {} districts loaded, next id {}\n", records.len(), store.next_id());

    // 4. Summary
    println!("📊 Step 4: Summary statistics");
    match summarize(&store.snapshot()) {
        Ok(s) => {
            println!("   total_population:        {}", s.total_population);
            println!("   total_families:          {}", s.total_families);
            println!("   total_food_packs:        {}", s.total_food_packs);
            println!("   total_tents:             {}", s.total_tents);
            println!("   total_medical_supplies:  {}", s.total_medical_supplies);
            println!("   total_water_bottles:     {}", s.total_water_bottles);
            println!("   total_blankets:          {}", s.total_blankets);
            println!("   districts_count:         {}", s.districts_count);
            println!("   critical_districts:      {}", s.critical_districts);
            println!("   high_severity_districts: {}", s.high_severity_districts);
            println!("   total_relief:            {}\n", s.total_relief);
        }
        Err(e) => println!("   {e}\n"),
    }

    // 5. Save
    println!("💾 Step 5: Save processed data");
    match save_processed(&table, &output) {
        Ok(()) => println!("   ✓ Data saved successfully to {}", output.display()),
        Err(e) => println!("   ✗ Error saving file: {e}"),
    }
}
