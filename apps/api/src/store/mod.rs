//! Flat-file persistence — one pretty-printed JSON file per collection under
//! the configured data directory.
//!
//! This is deliberately a single-user store: every operation reads the whole
//! file, applies the change, and rewrites it. A missing or unreadable file
//! reads as the empty collection. Ids and timestamps are assigned here and
//! only here; the rendering core never invents either.

pub mod hints;
pub mod profile;
pub mod resumes;

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tokio::fs;
use tracing::warn;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads a JSON collection file. Absence or corruption yields the default
/// (empty) value — reads never fail.
pub(crate) async fn read_json<T: DeserializeOwned + Default>(path: &Path) -> T {
    let raw = match fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(_) => return T::default(),
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring unreadable store file {}: {e}", path.display());
            T::default()
        }
    }
}

/// Rewrites a JSON collection file, creating the data directory on first use.
pub(crate) async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    let raw = serde_json::to_string_pretty(value)?;
    fs::write(path, raw).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let items: Vec<String> = read_json(&dir.path().join("nothing.json")).await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        tokio::fs::write(&path, "{not json").await.unwrap();
        let items: Vec<String> = read_json(&path).await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_write_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("items.json");
        write_json(&path, &vec!["a".to_string()]).await.unwrap();
        let items: Vec<String> = read_json(&path).await;
        assert_eq!(items, vec!["a".to_string()]);
    }
}
