//! Async access to base images and sheets under the public root.
//!
//! A file that is missing, is not a regular file, or cannot be opened is
//! reported as [`CoreError::NotFound`] for the requested entity.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use roomsheet_core::assets::resolve_public_path;
use roomsheet_core::error::CoreError;

/// Resolve `relative` under `root` and require it to name a regular file.
pub async fn require_public_file(
    root: &Path,
    relative: &str,
    entity: &'static str,
) -> Result<PathBuf, CoreError> {
    let path = resolve_public_path(root, relative)?;
    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_file() => Ok(path),
        Ok(_) => Err(not_found(entity, relative)),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Asset not accessible");
            Err(not_found(entity, relative))
        }
    }
}

/// Read a file previously checked with [`require_public_file`].
pub async fn read_public_file(
    path: &Path,
    relative: &str,
    entity: &'static str,
) -> Result<Vec<u8>, CoreError> {
    tokio::fs::read(path)
        .await
        .map_err(|e| read_error(e, entity, relative))
}

fn read_error(e: std::io::Error, entity: &'static str, relative: &str) -> CoreError {
    match e.kind() {
        ErrorKind::NotFound | ErrorKind::PermissionDenied => {
            tracing::warn!(%entity, path = %relative, error = %e, "Asset unreadable");
            not_found(entity, relative)
        }
        _ => CoreError::Internal(format!("Failed to read {relative}: {e}")),
    }
}

fn not_found(entity: &'static str, relative: &str) -> CoreError {
    CoreError::NotFound {
        entity,
        path: relative.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use roomsheet_core::assets::{ENTITY_BASE_IMAGE, ENTITY_SHEET_IMAGE};

    use super::*;

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        assert_matches!(
            require_public_file(dir.path(), "room.png", ENTITY_BASE_IMAGE).await,
            Err(CoreError::NotFound { entity: ENTITY_BASE_IMAGE, path }) if path == "room.png"
        );
    }

    #[tokio::test]
    async fn directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        assert_matches!(
            require_public_file(dir.path(), "assets", ENTITY_SHEET_IMAGE).await,
            Err(CoreError::NotFound { .. })
        );
    }

    #[tokio::test]
    async fn traversal_is_a_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        assert_matches!(
            require_public_file(dir.path(), "../secret.png", ENTITY_SHEET_IMAGE).await,
            Err(CoreError::Validation(_))
        );
    }

    #[tokio::test]
    async fn existing_file_resolves_and_reads() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("tex.png"), b"x").unwrap();

        let path = require_public_file(dir.path(), "tex.png", ENTITY_SHEET_IMAGE)
            .await
            .unwrap();
        assert_eq!(path, dir.path().join("tex.png"));
        let bytes = read_public_file(&path, "tex.png", ENTITY_SHEET_IMAGE)
            .await
            .unwrap();
        assert_eq!(bytes, b"x");
    }

    #[tokio::test]
    async fn file_removed_before_read_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.png");
        assert_matches!(
            read_public_file(&path, "gone.png", ENTITY_BASE_IMAGE).await,
            Err(CoreError::NotFound { entity: ENTITY_BASE_IMAGE, .. })
        );
    }

    #[test]
    fn permission_denied_maps_to_not_found() {
        let err = std::io::Error::from(ErrorKind::PermissionDenied);
        assert_matches!(
            read_error(err, ENTITY_SHEET_IMAGE, "tex.png"),
            CoreError::NotFound { entity: ENTITY_SHEET_IMAGE, path } if path == "tex.png"
        );
    }

    #[test]
    fn other_io_errors_stay_internal() {
        let err = std::io::Error::from(ErrorKind::Interrupted);
        assert_matches!(
            read_error(err, ENTITY_SHEET_IMAGE, "tex.png"),
            CoreError::Internal(_)
        );
    }
}
