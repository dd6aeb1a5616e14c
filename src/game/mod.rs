//=========================================================================
// Game
//=========================================================================
//
// The platformer itself, built on the engine core.
//
// Modules:
// - `host`       : engine capabilities the game is written against
// - `character`  : the hero (walk / jump rules)
// - `level`      : JSON level layout
// - `play_state` : the single "play" state
//
//=========================================================================

pub mod character;
pub mod host;
pub mod level;
pub mod play_state;

//=== Internal Dependencies ===============================================

use crate::core::input::Action;
use crate::core::scene::SceneKey;

//=== Public Exports ======================================================

pub use character::Character;
pub use host::{Host, Kinematics};
pub use level::{LevelDescription, LevelError};
pub use play_state::PlayState;

//=== Keys ================================================================

/// Game states. There is only one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameScene {
    Play,
}

impl SceneKey for GameScene {}

/// What the arrow keys mean to the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeroAction {
    Left,
    Right,
    Jump,
}

impl Action for HeroAction {}
