use chrono::{DateTime, Local};
use std::path::Path;

/// `<YYYYmmdd_HHMMSS>_<name>`, keeping only the final path component of
/// whatever name the client sent.
pub fn upload_file_name(at: DateTime<Local>, original: &str) -> String {
    let base = Path::new(original)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .unwrap_or("upload.csv");
    format!("{}_{}", at.format("%Y%m%d_%H%M%S"), base)
}

pub fn processed_file_name(upload_name: &str) -> String {
    format!("processed_{upload_name}")
}

pub fn is_csv_name(name: &str) -> bool {
    name.ends_with(".csv")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_names_follow_timestamp() {
        let at = Local.with_ymd_and_hms(2024, 8, 15, 9, 5, 3).unwrap();
        let up = upload_file_name(at, "flood.csv");
        assert_eq!(up, "20240815_090503_flood.csv");
        assert_eq!(processed_file_name(&up), "processed_20240815_090503_flood.csv");
    }

    #[test]
    fn test_client_paths_are_stripped() {
        let at = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(upload_file_name(at, "../../etc/data.csv"), "20240102_030405_data.csv");
        assert_eq!(upload_file_name(at, ".."), "20240102_030405_upload.csv");
    }

    #[test]
    fn test_csv_extension_check() {
        assert!(is_csv_name("a.csv"));
        assert!(!is_csv_name("a.xlsx"));
        assert!(!is_csv_name("a.CSV.txt"));
    }
}
