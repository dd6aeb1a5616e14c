//=========================================================================
// Audio
//=========================================================================
//
// Fire-and-forget sound cues.
//
// Scenes call `play(key)`; the cue is queued and handed to the output side
// once per tick by `GlobalSystems::update`, which drains the mixer.
// There is no device backend: drained cues are written to the log.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::warn;

//=== Internal Dependencies ===============================================

use crate::core::assets::AssetCache;

//=== SoundCue ============================================================

/// One request to play a loaded sound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundCue {
    pub key: String,
}

//=== AudioMixer ==========================================================

#[derive(Debug, Default)]
pub struct AudioMixer {
    pending: Vec<SoundCue>,
    plays: HashMap<String, usize>,
}

impl AudioMixer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the sound loaded under `key`.
    ///
    /// Returns `false` (and queues nothing) when no such sound was loaded.
    pub fn play(&mut self, assets: &AssetCache, key: &str) -> bool {
        if !assets.has_audio(key) {
            warn!(target: "audio", "Sound '{}' is not loaded", key);
            return false;
        }
        *self.plays.entry(key.to_owned()).or_insert(0) += 1;
        self.pending.push(SoundCue {
            key: key.to_owned(),
        });
        true
    }

    /// Total number of accepted `play` calls for `key`.
    pub fn play_count(&self, key: &str) -> usize {
        self.plays.get(key).copied().unwrap_or(0)
    }

    /// Cues queued since the last drain.
    pub fn pending(&self) -> &[SoundCue] {
        &self.pending
    }

    pub(crate) fn drain(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.pending)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
