//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use hero_platformer::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder};

// Global systems and context
pub use crate::core::globals::{GlobalContext, GlobalSystems};

// Input system
pub use crate::core::input::{Action, ActionState, InputEvent, InputSystem, KeyCode};

// Scene system
pub use crate::core::scene::{Scene, SceneKey, SceneManager};

// World
pub use crate::core::animation::Animation;
pub use crate::core::geometry::{Rect, Vec2};
pub use crate::core::physics::{ArcadePhysics, BodyFlags};
pub use crate::core::stage::{Group, Sprite, SpriteHandle, Stage};

// Assets and sound
pub use crate::core::assets::{AssetCache, AssetLoader};
pub use crate::core::audio::AudioMixer;
