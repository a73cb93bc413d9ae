use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::models::tracker::DEFAULT_TARGET_JOB_COUNT;
use crate::storage::validate_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// One JSON file per slot under `data_dir`.
    File,
    /// Nothing is persisted across restarts.
    Memory,
}

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub storage_backend: StorageBackend,
    pub data_dir: PathBuf,
    pub storage_key: String,
    pub default_target_job_count: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let default_target_job_count = match std::env::var("DEFAULT_TARGET_JOB_COUNT") {
            Ok(raw) => raw
                .parse::<u32>()
                .context("DEFAULT_TARGET_JOB_COUNT must be a positive integer")?,
            Err(_) => DEFAULT_TARGET_JOB_COUNT,
        };
        if default_target_job_count == 0 {
            bail!("DEFAULT_TARGET_JOB_COUNT must be greater than zero");
        }

        let storage_backend = match env_or("STORAGE_BACKEND", "file").to_lowercase().as_str() {
            "file" => StorageBackend::File,
            "memory" => StorageBackend::Memory,
            other => bail!("STORAGE_BACKEND must be 'file' or 'memory', got '{other}'"),
        };

        let storage_key = parse_storage_key(env_or("STORAGE_KEY", "job-tracker"))?;

        Ok(Config {
            storage_backend,
            data_dir: PathBuf::from(env_or("DATA_DIR", "./data")),
            storage_key,
            default_target_job_count,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// The key names the slot file, so a bad one would make every write fail.
fn parse_storage_key(key: String) -> Result<String> {
    validate_key(&key).context("STORAGE_KEY may only contain letters, digits, '-' and '_'")?;
    Ok(key)
}
