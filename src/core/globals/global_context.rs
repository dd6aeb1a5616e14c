//=========================================================================
// Global Context
//=========================================================================
//
// Shared data container for scenes.
//
// Contains state data that scenes read/write:
// - input_state / actions: this tick's keys and resolved actions
// - stage: every sprite, in draw order
// - physics: world gravity and bounds
// - assets / audio: loaded resources and queued sound cues
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;

//=== Internal Dependencies ===============================================

use crate::core::assets::AssetCache;
use crate::core::audio::AudioMixer;
use crate::core::geometry::Vec2;
use crate::core::input::{Action, ActionState, InputEvent, StateTracker};
use crate::core::physics::ArcadePhysics;
use crate::core::stage::Stage;

//=== GlobalContext =======================================================

/// Shared context data accessible to scenes during updates.
///
/// Scenes receive `&mut GlobalContext` during their lifecycle methods.
/// This separates scene-accessible data from internal engine systems.
pub struct GlobalContext<A: Action> {
    /// Raw key state for this tick.
    pub input_state: StateTracker,

    /// Held and freshly pressed actions, resolved from `input_state`.
    pub actions: ActionState<A>,

    /// Sprites, groups' members and their bodies.
    pub stage: Stage,

    /// Arcade physics world (gravity, bounds, collide/overlap).
    pub physics: ArcadePhysics,

    /// Assets loaded during scene preload.
    pub assets: AssetCache,

    /// Sound cues queued this tick.
    pub audio: AudioMixer,

    /// Input events for the current frame.
    ///
    /// Populated by the orchestrator and consumed by InputSystem during
    /// the update phase. Not directly accessible to scenes (use
    /// `input_state` instead).
    pub(crate) frame_events: Vec<Vec<InputEvent>>,
}

impl<A: Action> GlobalContext<A> {
    /// Creates a context for a world of `world_size` reading assets from
    /// `asset_root`.
    pub(crate) fn new(world_size: Vec2, asset_root: impl Into<PathBuf>) -> Self {
        Self {
            input_state: StateTracker::new(),
            actions: ActionState::new(),
            stage: Stage::new(),
            physics: ArcadePhysics::new(world_size),
            assets: AssetCache::new(asset_root),
            audio: AudioMixer::new(),
            frame_events: Vec::new(),
        }
    }
}
