use anyhow::{bail, Context, Result};
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub upload_dir: PathBuf,
    pub processed_dir: PathBuf,
    pub seed_sample: bool,
    pub max_upload_bytes: usize,
}

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = std::env::var("RELIEF_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let upload_dir = std::env::var("RELIEF_UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());
        let processed_dir = std::env::var("RELIEF_PROCESSED_DIR").unwrap_or_else(|_| "processing".to_string());

        let seed_sample = std::env::var("RELIEF_SEED_SAMPLE")
            .ok()
            .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "yes" | "YES"))
            .unwrap_or(true);

        let max_upload_bytes = match std::env::var("RELIEF_MAX_UPLOAD_BYTES") {
            Ok(v) => v
                .parse::<usize>()
                .with_context(|| format!("RELIEF_MAX_UPLOAD_BYTES is not a number: {v}"))?,
            Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
        };

        // fail fast, fail loud
        if max_upload_bytes == 0 {
            bail!("RELIEF_MAX_UPLOAD_BYTES must be greater than zero");
        }
        if upload_dir.trim().is_empty() || processed_dir.trim().is_empty() {
            bail!("RELIEF_UPLOAD_DIR and RELIEF_PROCESSED_DIR must not be empty");
        }

        Ok(Self {
            bind_addr,
            upload_dir: PathBuf::from(upload_dir),
            processed_dir: PathBuf::from(processed_dir),
            seed_sample,
            max_upload_bytes,
        })
    }
}
