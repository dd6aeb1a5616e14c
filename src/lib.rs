//=========================================================================
// Hero Platformer: Library Root
//
// A one-level side-view platformer on a fixed-tick engine.
//
// Responsibilities:
// - Expose the engine facade (`Engine`, `EngineBuilder`)
// - Expose the engine core (stage, arcade physics, assets, input, scenes)
// - Expose the game (`game::PlayState` and its keys)
// - Keep the winit platform layer private
//
// Typical usage:
// ```no_run
// use hero_platformer::game::{GameScene, HeroAction, PlayState};
// use hero_platformer::EngineBuilder;
//
// EngineBuilder::<GameScene, HeroAction>::new()
//     .build()
//     .init(|systems| {
//         systems.scene_manager.register_default(GameScene::Play, PlayState::new());
//     })
//     .run();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the engine systems. `game` is the platformer built on it.
//
pub mod core;
pub mod game;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window and OS event loop and is not part of the
// public API. `engine` wires platform and core threads together.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
