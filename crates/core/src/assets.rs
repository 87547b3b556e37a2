//! Resolution of client-supplied asset paths against the public root.
//!
//! Pure path arithmetic; callers do the filesystem access.

use std::path::{Component, Path, PathBuf};

use crate::error::CoreError;

/// Entity label used in not-found errors for base images.
pub const ENTITY_BASE_IMAGE: &str = "Base image";

/// Entity label used in not-found errors for sheet textures.
pub const ENTITY_SHEET_IMAGE: &str = "Sheet image";

/// Join a client-supplied relative path onto `root`.
///
/// A single leading `/` is tolerated (URL-style paths such as
/// `/assets/room.png`). Anything that could escape the root -- `..`,
/// absolute paths, drive prefixes -- is rejected.
pub fn resolve_public_path(root: &Path, relative: &str) -> Result<PathBuf, CoreError> {
    let trimmed = relative.strip_prefix('/').unwrap_or(relative);
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Asset path must not be empty".into()));
    }

    let mut resolved = root.to_path_buf();
    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(CoreError::Validation(format!(
                    "Asset path '{relative}' must stay inside the public directory"
                )));
            }
        }
    }
    Ok(resolved)
}

/// URL under which a file in `subdir` of the public root is served.
pub fn public_url(subdir: &str, filename: &str) -> String {
    let subdir = subdir.trim_matches('/');
    if subdir.is_empty() {
        format!("/{filename}")
    } else {
        format!("/{subdir}/{filename}")
    }
}
