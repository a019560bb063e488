use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::IntoResponse;
use relief_pipeline::{SAMPLE_CSV, SAMPLE_FILE_NAME};

pub async fn get_sample_csv() -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "text/csv".to_string()),
            (CONTENT_DISPOSITION, format!("attachment; filename=\"{SAMPLE_FILE_NAME}\"")),
        ],
        SAMPLE_CSV,
    )
}
