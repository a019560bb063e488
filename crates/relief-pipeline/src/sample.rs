use crate::table::RawTable;

pub const SAMPLE_FILE_NAME: &str = "sample_flood_data.csv";

/// Reference fixture with every supported column.
pub const SAMPLE_CSV: &str = "\
District,Affected_Population,Severity_Level,Displaced_Families,Province
Rajanpur,150000,High,5000,Punjab
Dadu,200000,Critical,8000,Sindh
Jaffarabad,120000,Medium,4500,Balochistan
Qambar Shahdadkot,90000,High,3200,Sindh
Larkana,110000,High,3800,Sindh
Sukkur,85000,Medium,2800,Sindh
Khairpur,95000,Medium,3100,Sindh
Thatta,75000,Low,2500,Sindh
Jamshoro,65000,Low,2200,Sindh
Shikarpur,80000,Medium,2700,Sindh
";

pub fn sample_table() -> RawTable {
    // The fixture is a compile-time constant; a parse failure here is a bug in it.
    RawTable::from_reader(SAMPLE_CSV.as_bytes()).unwrap_or_default()
}
