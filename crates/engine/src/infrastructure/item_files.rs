//! Loading item snapshots from JSON files.

use std::path::{Path, PathBuf};

use tradepost_domain::Item;

#[derive(Debug, thiserror::Error)]
pub enum ItemFileError {
    #[error("Failed to read item file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid item in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read one [`Item`] from a JSON file.
pub async fn load_item(path: impl AsRef<Path>) -> Result<Item, ItemFileError> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ItemFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let item: Item = serde_json::from_str(&content).map_err(|source| ItemFileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), material = %item.material, "Loaded item");
    Ok(item)
}
