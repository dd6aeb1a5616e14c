//=========================================================================
// Global Systems
//=========================================================================
//
// Container for engine-level systems with logic.
//
// Contains systems that process input, manage scenes, and coordinate
// game logic. Systems operate on GlobalContext data.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::GlobalContext;
use crate::core::input::{Action, InputSystem};
use crate::core::scene::{SceneKey, SceneManager};

//=== GlobalSystems =======================================================

/// Container for engine-level logic systems.
///
/// # Available Systems
///
/// - `input`: Key → action bindings and per-tick action resolution
/// - `scene_manager`: Scene registry and active scene lifecycle
pub struct GlobalSystems<S: SceneKey, A: Action> {
    /// The input system for action mapping and input processing.
    pub input: InputSystem<A>,

    /// The scene manager for scene registration and lifecycle.
    pub scene_manager: SceneManager<S, A>,
}

impl<S: SceneKey, A: Action> GlobalSystems<S, A> {
    /// Creates a new systems container with default-initialized systems.
    ///
    /// This is typically called internally by the engine. Users should access
    /// systems via [`crate::Engine::init`] instead.
    pub(crate) fn new() -> Self {
        Self {
            input: InputSystem::new(),
            scene_manager: SceneManager::new(),
        }
    }

    /// Starts the default scene (init, preload, asset load, create).
    pub(crate) fn start(&mut self, context: &mut GlobalContext<A>) {
        self.scene_manager.start(&mut self.input, context);
    }

    //--- Update Loop ------------------------------------------------------

    /// Updates all engine systems for the current frame.
    ///
    /// # Processing Pipeline
    ///
    /// 1. **Input**: frame events → key state → held / pressed actions
    /// 2. **Edge actions**: pressed actions delivered to `Scene::on_action`
    /// 3. **Physics**: contacts reset, gravity and velocity integrated
    /// 4. **Animation**: live sprites advance by `dt`
    /// 5. **Scene update**: the active scene's `update`
    /// 6. **Audio**: queued sound cues flushed
    ///
    /// Edge actions run before the physics step so that ground contact
    /// read by a jump is the one left by the previous tick's collisions.
    pub(crate) fn update(&mut self, context: &mut GlobalContext<A>, dt: f32) {
        // 1. Process input events into state and actions
        let events = std::mem::take(&mut context.frame_events);
        self.input
            .process_frame(&mut context.input_state, &events, &mut context.actions);

        // 2. Edge-triggered actions
        let pressed = context.actions.pressed().to_vec();
        self.scene_manager.dispatch_actions(&pressed, context);

        // 3. Physics step
        context.physics.step(&mut context.stage, dt);

        // 4. Animations
        context.stage.advance_animations(dt);

        // 5. Update active scene
        self.scene_manager.update(context);

        // 6. Flush sound cues
        for cue in context.audio.drain() {
            info!(target: "audio", "Playing '{}'", cue.key);
        }

        if !events.is_empty() {
            debug!(target: "input", "Processed {} input batches", events.len());
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
