use crate::error::{Result, SddError};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write `data` to `path` using a tempfile in the same directory.
/// Prevents partial writes from corrupting the project config.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Create a directory and all parents, idempotent.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| SddError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Overwrite `path` with `data`. Returns true if the file existed before.
///
/// The parent directory must already exist.
pub async fn write_file(path: &Path, data: &[u8]) -> Result<bool> {
    let existed = tokio::fs::try_exists(path).await.unwrap_or(false);
    tokio::fs::write(path, data)
        .await
        .map_err(|source| SddError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(existed)
}
