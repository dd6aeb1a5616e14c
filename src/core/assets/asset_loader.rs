//=========================================================================
// Asset Loader
//=========================================================================
//
// Preload queue filled by scenes before their `create` hook runs.
//
// Nothing is read here; requests only record a key, a path relative to
// the asset root and how the file should be interpreted. The queue is
// drained by `AssetCache::load`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::{Path, PathBuf};

use log::{debug, warn};

//=== AssetKind ===========================================================

/// How a queued file is interpreted once read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Single image; only its dimensions are kept.
    Image,

    /// Image split into equally sized frames, left to right, top to bottom.
    SpriteSheet { frame_width: u32, frame_height: u32 },

    /// Sound effect; raw bytes are kept.
    Audio,

    /// JSON document, parsed on load.
    Json,
}

//=== AssetRequest ========================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRequest {
    pub key: String,
    pub path: PathBuf,
    pub kind: AssetKind,
}

//=== AssetLoader =========================================================

/// Ordered list of pending asset requests.
#[derive(Debug, Default)]
pub struct AssetLoader {
    queue: Vec<AssetRequest>,
}

impl AssetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Queueing ---------------------------------------------------------

    pub fn image(&mut self, key: &str, path: impl AsRef<Path>) {
        self.push(key, path.as_ref(), AssetKind::Image);
    }

    /// Queues a sprite sheet cut into `frame_width` × `frame_height` frames.
    pub fn spritesheet(
        &mut self,
        key: &str,
        path: impl AsRef<Path>,
        frame_width: u32,
        frame_height: u32,
    ) {
        if frame_width == 0 || frame_height == 0 {
            warn!(target: "assets", "Sprite sheet '{}' has an empty frame size, skipped", key);
            return;
        }
        self.push(
            key,
            path.as_ref(),
            AssetKind::SpriteSheet {
                frame_width,
                frame_height,
            },
        );
    }

    pub fn audio(&mut self, key: &str, path: impl AsRef<Path>) {
        self.push(key, path.as_ref(), AssetKind::Audio);
    }

    pub fn json(&mut self, key: &str, path: impl AsRef<Path>) {
        self.push(key, path.as_ref(), AssetKind::Json);
    }

    //--- Queries ----------------------------------------------------------

    pub fn requests(&self) -> &[AssetRequest] {
        &self.queue
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub(crate) fn drain(&mut self) -> Vec<AssetRequest> {
        std::mem::take(&mut self.queue)
    }

    //--- Internal Helpers -------------------------------------------------

    fn push(&mut self, key: &str, path: &Path, kind: AssetKind) {
        if let Some(existing) = self.queue.iter_mut().find(|r| r.key == key) {
            warn!(target: "assets", "Asset '{}' queued twice, keeping the later request", key);
            existing.path = path.to_path_buf();
            existing.kind = kind;
            return;
        }
        debug!(target: "assets", "Queued {:?} '{}' from {}", kind, key, path.display());
        self.queue.push(AssetRequest {
            key: key.to_owned(),
            path: path.to_path_buf(),
            kind,
        });
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_keep_queue_order() {
        let mut loader = AssetLoader::new();
        loader.json("level:1", "data/level01.json");
        loader.image("hero", "images/hero.png");
        loader.audio("sfx:jump", "audio/jump.wav");

        let keys: Vec<_> = loader.requests().iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["level:1", "hero", "sfx:jump"]);
    }

    #[test]
    fn spritesheet_records_frame_size() {
        let mut loader = AssetLoader::new();
        loader.spritesheet("coin", "images/coin_animated.png", 22, 22);

        assert_eq!(
            loader.requests()[0].kind,
            AssetKind::SpriteSheet {
                frame_width: 22,
                frame_height: 22
            }
        );
    }

    #[test]
    fn zero_sized_frames_are_rejected() {
        let mut loader = AssetLoader::new();
        loader.spritesheet("coin", "images/coin_animated.png", 0, 22);
        assert!(loader.is_empty());
    }

    #[test]
    fn duplicate_key_replaces_request() {
        let mut loader = AssetLoader::new();
        loader.image("hero", "images/old.png");
        loader.image("hero", "images/hero.png");

        assert_eq!(loader.len(), 1);
        assert_eq!(loader.requests()[0].path, PathBuf::from("images/hero.png"));
    }

    #[test]
    fn drain_empties_queue() {
        let mut loader = AssetLoader::new();
        loader.image("ground", "images/ground.png");

        assert_eq!(loader.drain().len(), 1);
        assert!(loader.is_empty());
    }
}
