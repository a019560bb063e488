use std::path::Path;

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use relief_model::DistrictRecord;
use relief_pipeline::{process_path, save_processed, ValidationError};
use relief_store::DatasetStore;
use tracing::{info, warn};
use uuid::Uuid;

use crate::state::SharedState;
use crate::storage::{is_csv_name, processed_file_name, upload_file_name};
use crate::types::{api_error, ApiError, ApiResult, UploadResponse};

pub async fn post_upload(
    State(state): State<SharedState>,
    mut mp: Multipart,
) -> ApiResult<(StatusCode, Json<UploadResponse>)> {
    let mut file_name: Option<String> = None;
    let mut file_bytes: Option<bytes::Bytes> = None;

    while let Some(field) = mp.next_field().await.map_err(multipart_error)? {
        if field.name() == Some("file") {
            file_name = field.file_name().map(str::to_string);
            file_bytes = Some(field.bytes().await.map_err(multipart_error)?);
        }
    }

    let name = file_name.filter(|n| !n.is_empty());
    let (Some(name), Some(bytes)) = (name, file_bytes) else {
        return Err(api_error(StatusCode::BAD_REQUEST, "No file selected"));
    };

    let resp = ingest_upload(&state, &name, &bytes).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

const UPLOAD_TOO_LARGE: &str = "Upload exceeds size limit";

/// The body limit surfaces mid-stream as a multipart error; keep its 413.
fn multipart_error(e: MultipartError) -> (StatusCode, Json<ApiError>) {
    match e.status() {
        StatusCode::PAYLOAD_TOO_LARGE => api_error(StatusCode::PAYLOAD_TOO_LARGE, UPLOAD_TOO_LARGE),
        status => api_error(status, e.body_text()),
    }
}

enum IngestFailure {
    Invalid(ValidationError),
    Io(String),
}

/// Validate and enrich `tmp`, write the processed table, then move the upload
/// into place and swap the store. Nothing is left behind on failure.
fn install(
    store: &DatasetStore,
    tmp: &Path,
    upload: &Path,
    processed: &Path,
) -> Result<Vec<DistrictRecord>, IngestFailure> {
    let result = process_path(tmp).map_err(IngestFailure::Invalid).and_then(|table| {
        save_processed(&table, processed).map_err(|e| IngestFailure::Io(e.to_string()))?;
        std::fs::rename(tmp, upload).map_err(|e| IngestFailure::Io(e.to_string()))?;
        Ok(table)
    });

    match result {
        Ok(table) => Ok(store.replace_all(&table.rows)),
        Err(failure) => {
            discard(tmp);
            discard(processed);
            Err(failure)
        }
    }
}

fn discard(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!(path = %path.display(), "cleanup failed: {e}"),
    }
}

/// Save, validate, enrich and install one uploaded table. The store is only
/// touched after every other step has succeeded.
pub async fn ingest_upload(state: &SharedState, name: &str, bytes: &[u8]) -> ApiResult<UploadResponse> {
    if !is_csv_name(name) {
        return Err(api_error(StatusCode::BAD_REQUEST, "Please upload a CSV file"));
    }
    if bytes.len() > state.cfg.max_upload_bytes {
        return Err(api_error(StatusCode::PAYLOAD_TOO_LARGE, UPLOAD_TOO_LARGE));
    }

    let err500 = |e: std::io::Error| api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
    let cfg = &state.cfg;
    tokio::fs::create_dir_all(&cfg.upload_dir).await.map_err(err500)?;
    tokio::fs::create_dir_all(&cfg.processed_dir).await.map_err(err500)?;

    let upload_name = upload_file_name(chrono::Local::now(), name);
    let tmp_path = cfg.upload_dir.join(format!("tmp_{}.csv", Uuid::new_v4()));
    let upload_path = cfg.upload_dir.join(&upload_name);
    let processed_path = cfg.processed_dir.join(processed_file_name(&upload_name));

    tokio::fs::write(&tmp_path, bytes).await.map_err(err500)?;
    let upload_hash: [u8; 32] = blake3::hash(bytes).into();

    // blocking parse + validate + save + swap
    let store = state.store.clone();
    let (tmp, up, processed) = (tmp_path.clone(), upload_path.clone(), processed_path.clone());
    let outcome = tokio::task::spawn_blocking(move || install(&store, &tmp, &up, &processed))
        .await
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let records = match outcome {
        Ok(records) => records,
        Err(failure) => {
            return Err(match failure {
                IngestFailure::Invalid(e) => {
                    warn!(file = %name, kind = e.kind(), "upload rejected: {e}");
                    (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        Json(ApiError {
                            error: format!("Error processing CSV: {e}"),
                            kind: Some(e.kind().to_string()),
                        }),
                    )
                }
                IngestFailure::Io(e) => api_error(StatusCode::INTERNAL_SERVER_ERROR, e),
            });
        }
    };

    info!(file = %upload_name, districts = records.len(), hash = %hex::encode(upload_hash), "upload ingested");

    Ok(UploadResponse {
        message: format!("File uploaded and processed successfully! {} districts loaded.", records.len()),
        districts_loaded: records.len(),
        first_id: records.first().map(|r| r.id),
        upload_file: upload_path.display().to_string(),
        processed_file: processed_path.display().to_string(),
        upload_hash,
    })
}
