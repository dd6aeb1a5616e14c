//=========================================================================
// Scene System
//=========================================================================
//
// Scene lifecycle and keyed scene registry.
//
// Architecture:
//   SceneManager
//     ├─ scenes: HashMap<S, Box<dyn Scene<A>>>
//     └─ active: Option<S>
//
// Flow:
//   start()  → init() → preload() → AssetCache::load() → create()
//   tick     → on_action() per edge action → update()
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::assets::AssetLoader;
use crate::core::globals::GlobalContext;
use crate::core::input::{Action, InputSystem};

//=== Module Declarations =================================================

mod scene_manager;

//=== Public API ==========================================================

pub use scene_manager::{SceneKey, SceneManager};

//=== Scene Trait =========================================================

/// Defines scene behavior with lifecycle hooks and update logic.
///
/// The setup hooks run exactly once, in declaration order, when the
/// engine starts the default scene. Assets queued in `preload` are loaded
/// before `create` runs.
///
/// # Minimal Implementation
///
/// Only `update()` is required:
///
/// ```rust
/// # use hero_platformer::prelude::*;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum GameAction { Jump }
/// # impl Action for GameAction {}
/// struct MyScene;
///
/// impl Scene<GameAction> for MyScene {
///     fn update(&mut self, _context: &mut GlobalContext<GameAction>) {
///         // Only this method is required
///     }
/// }
/// ```
pub trait Scene<A: Action>: Send {
    /// Registers key bindings.
    fn init(&mut self, _input: &mut InputSystem<A>) {}

    /// Queues the assets this scene needs.
    fn preload(&mut self, _loader: &mut AssetLoader) {}

    /// Builds the scene once its assets are loaded.
    fn create(&mut self, _context: &mut GlobalContext<A>) {}

    /// Called every tick while the scene is active.
    fn update(&mut self, context: &mut GlobalContext<A>);

    /// Called once per action whose key went down this tick, before the
    /// physics step and `update`.
    fn on_action(&mut self, _action: A, _context: &mut GlobalContext<A>) {}
}
