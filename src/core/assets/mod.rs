//=========================================================================
// Assets
//=========================================================================
//
// Preload queue and cache for images, sprite sheets, sounds and JSON.
//
// Architecture:
//   Scene::preload(&mut AssetLoader)   queue requests
//   AssetCache::load(&mut AssetLoader) read files under the asset root
//   GlobalContext.assets               queried by create / update
//
//=========================================================================

//=== Module Declarations =================================================

mod asset_cache;
mod asset_loader;

//=== Public API ==========================================================

pub use asset_cache::{AssetCache, ImageInfo};
pub use asset_loader::{AssetKind, AssetLoader, AssetRequest};

//=== External Dependencies ===============================================

use std::path::PathBuf;

//=== AssetError ==========================================================

/// Failure to read or decode a single asset.
#[derive(Debug)]
pub enum AssetError {
    /// File could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Image header could not be decoded.
    Image {
        path: PathBuf,
        source: image::ImageError,
    },

    /// JSON document is malformed.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "Cannot read {}: {}", path.display(), source),
            Self::Image { path, source } => {
                write!(f, "Cannot decode image {}: {}", path.display(), source)
            }
            Self::Json { path, source } => {
                write!(f, "Invalid JSON in {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Image { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}
