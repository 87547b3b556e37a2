//! Persistence of generated overlay images.
//!
//! Overlays are written once under a fresh name and never touched again.
//! Files are opened with `create_new`, so even a name collision can never
//! overwrite an earlier overlay; the store simply draws another name.

use std::io::ErrorKind;
use std::path::PathBuf;

use roomsheet_core::assets::public_url;
use roomsheet_core::error::CoreError;
use roomsheet_core::naming::unique_overlay_filename;
use tokio::io::AsyncWriteExt;

/// Attempts at drawing an unused filename before giving up.
const MAX_NAME_ATTEMPTS: usize = 3;

/// A stored overlay and where it is served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredOverlay {
    pub filename: String,
    pub path: PathBuf,
    pub url: String,
}

/// Writes overlays into a directory under the public root.
#[derive(Debug, Clone)]
pub struct OverlayStore {
    dir: PathBuf,
    url_subdir: String,
}

impl OverlayStore {
    /// * `dir` - filesystem directory, created on first write.
    /// * `url_subdir` - path segment the directory is served under.
    pub fn new(dir: PathBuf, url_subdir: String) -> Self {
        Self { dir, url_subdir }
    }

    /// Persist `png` under a fresh name derived from `hotspot_name`.
    pub async fn save(&self, hotspot_name: &str, png: &[u8]) -> Result<StoredOverlay, CoreError> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            CoreError::StorageWrite(format!(
                "Failed to create overlay directory {}: {e}",
                self.dir.display()
            ))
        })?;

        for _ in 0..MAX_NAME_ATTEMPTS {
            let filename = unique_overlay_filename(hotspot_name);
            let path = self.dir.join(&filename);

            let mut file = match tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    tracing::warn!(%filename, "Overlay filename already taken, retrying");
                    continue;
                }
                Err(e) => {
                    return Err(CoreError::StorageWrite(format!(
                        "Failed to create {}: {e}",
                        path.display()
                    )));
                }
            };

            file.write_all(png).await.map_err(|e| {
                CoreError::StorageWrite(format!("Failed to write {}: {e}", path.display()))
            })?;
            file.flush().await.map_err(|e| {
                CoreError::StorageWrite(format!("Failed to flush {}: {e}", path.display()))
            })?;

            let url = public_url(&self.url_subdir, &filename);
            tracing::debug!(path = %path.display(), %url, bytes = png.len(), "Overlay stored");
            return Ok(StoredOverlay {
                filename,
                path,
                url,
            });
        }

        Err(CoreError::StorageWrite(format!(
            "Could not find an unused overlay filename after {MAX_NAME_ATTEMPTS} attempts"
        )))
    }
}
