//=========================================================================
// Asset Cache
//=========================================================================
//
// Loaded assets, keyed by the tag they were queued under.
//
// Architecture:
//   AssetLoader::drain() → load() ─┬─ Image / SpriteSheet → image_dimensions()
//                                  ├─ Audio               → fs::read()
//                                  └─ Json                → serde_json::from_slice()
//
// Pixel data is never decoded: nothing draws, so only the dimensions are
// needed for sprite sizes. A failing asset is logged and skipped; the
// rest of the queue still loads.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info};
use serde_json::Value;

//=== Internal Dependencies ===============================================

use super::asset_loader::{AssetKind, AssetLoader, AssetRequest};
use super::AssetError;

//=== ImageInfo ===========================================================

/// Dimensions of a loaded image or sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,

    /// Frame size for sprite sheets, `None` for plain images.
    pub frame: Option<(u32, u32)>,
}

impl ImageInfo {
    /// Size a sprite using this texture is displayed at.
    pub fn display_size(&self) -> (u32, u32) {
        self.frame.unwrap_or((self.width, self.height))
    }

    /// Number of whole frames in the sheet (1 for plain images).
    pub fn frame_count(&self) -> usize {
        match self.frame {
            Some((w, h)) => ((self.width / w) * (self.height / h)) as usize,
            None => 1,
        }
    }
}

//=== AssetCache ==========================================================

#[derive(Debug)]
pub struct AssetCache {
    root: PathBuf,
    images: HashMap<String, ImageInfo>,
    audio: HashMap<String, Vec<u8>>,
    json: HashMap<String, Value>,
}

impl AssetCache {
    /// Creates an empty cache reading files relative to `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            images: HashMap::new(),
            audio: HashMap::new(),
            json: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    //--- load() -----------------------------------------------------------

    /// Reads every queued asset. Returns how many failed.
    pub fn load(&mut self, loader: &mut AssetLoader) -> usize {
        let requests = loader.drain();
        let total = requests.len();
        let mut failures = 0;

        for request in requests {
            if let Err(e) = self.load_one(&request) {
                error!(target: "assets", "Failed to load '{}': {}", request.key, e);
                failures += 1;
            }
        }

        info!(
            target: "assets",
            "Loaded {}/{} assets from {}",
            total - failures,
            total,
            self.root.display()
        );
        failures
    }

    fn load_one(&mut self, request: &AssetRequest) -> Result<(), AssetError> {
        let path = self.root.join(&request.path);

        match request.kind {
            AssetKind::Image => {
                let (width, height) = read_dimensions(&path)?;
                self.insert_image(&request.key, width, height);
            }
            AssetKind::SpriteSheet {
                frame_width,
                frame_height,
            } => {
                let (width, height) = read_dimensions(&path)?;
                self.insert_spritesheet(&request.key, width, height, frame_width, frame_height);
            }
            AssetKind::Audio => {
                let bytes = fs::read(&path).map_err(|source| AssetError::Io {
                    path: path.clone(),
                    source,
                })?;
                self.insert_audio(&request.key, bytes);
            }
            AssetKind::Json => {
                let bytes = fs::read(&path).map_err(|source| AssetError::Io {
                    path: path.clone(),
                    source,
                })?;
                let value = serde_json::from_slice(&bytes)
                    .map_err(|source| AssetError::Json { path, source })?;
                self.insert_json(&request.key, value);
            }
        }

        Ok(())
    }

    //--- Insertion --------------------------------------------------------

    pub fn insert_image(&mut self, key: &str, width: u32, height: u32) {
        debug!(target: "assets", "Image '{}' {}x{}", key, width, height);
        self.images.insert(
            key.to_owned(),
            ImageInfo {
                width,
                height,
                frame: None,
            },
        );
    }

    pub fn insert_spritesheet(
        &mut self,
        key: &str,
        width: u32,
        height: u32,
        frame_width: u32,
        frame_height: u32,
    ) {
        let info = ImageInfo {
            width,
            height,
            frame: Some((frame_width, frame_height)),
        };
        debug!(
            target: "assets",
            "Sprite sheet '{}' {}x{} ({} frames of {}x{})",
            key,
            width,
            height,
            info.frame_count(),
            frame_width,
            frame_height
        );
        self.images.insert(key.to_owned(), info);
    }

    pub fn insert_audio(&mut self, key: &str, bytes: Vec<u8>) {
        debug!(target: "assets", "Audio '{}' ({} bytes)", key, bytes.len());
        self.audio.insert(key.to_owned(), bytes);
    }

    pub fn insert_json(&mut self, key: &str, value: Value) {
        debug!(target: "assets", "JSON '{}'", key);
        self.json.insert(key.to_owned(), value);
    }

    //--- Queries ----------------------------------------------------------

    pub fn image(&self, key: &str) -> Option<&ImageInfo> {
        self.images.get(key)
    }

    /// Display size for a texture key (frame size for sheets).
    pub fn size_of(&self, key: &str) -> Option<(u32, u32)> {
        self.images.get(key).map(ImageInfo::display_size)
    }

    pub fn has_audio(&self, key: &str) -> bool {
        self.audio.contains_key(key)
    }

    pub fn audio(&self, key: &str) -> Option<&[u8]> {
        self.audio.get(key).map(Vec::as_slice)
    }

    pub fn json(&self, key: &str) -> Option<&Value> {
        self.json.get(key)
    }
}

//=== Internal Helpers ====================================================

fn read_dimensions(path: &Path) -> Result<(u32, u32), AssetError> {
    image::image_dimensions(path).map_err(|source| AssetError::Image {
        path: path.to_path_buf(),
        source,
    })
}

//=========================================================================
// Unit Tests
//=========================================================================
