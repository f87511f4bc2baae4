use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures while loading a static asset from disk. A missing background
/// image is recoverable: the caller logs it and renders without styling.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found at '{}'", .0.display())]
    Missing(PathBuf),
    #[error("failed to read asset '{}': {source}", .path.display())]
    Unreadable { path: PathBuf, source: io::Error },
}

impl AssetError {
    pub fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            AssetError::Missing(path)
        } else {
            AssetError::Unreadable { path, source }
        }
    }
}
