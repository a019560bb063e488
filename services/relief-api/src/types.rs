use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

pub type Hash32 = [u8; 32];

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

pub type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

pub fn api_error(status: StatusCode, msg: impl Into<String>) -> (StatusCode, Json<ApiError>) {
    (status, Json(ApiError { error: msg.into(), kind: None }))
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub districts_loaded: usize,
    pub first_id: Option<u64>,
    pub upload_file: String,      // uploads/<ts>_<name>.csv
    pub processed_file: String,   // processing/processed_<ts>_<name>.csv
    #[serde(with = "hex", rename = "upload_hash_hex")]
    pub upload_hash: Hash32,      // BLAKE3(uploaded bytes)
}
