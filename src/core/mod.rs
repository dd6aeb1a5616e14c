//=========================================================================
// Core Systems Orchestrator
//
// Central coordinator for all engine subsystems running on the logic
// (non-platform) thread.
//
// Responsibilities:
// - Own the global systems (input, scenes) and the shared context
//   (stage, physics, assets, audio)
// - Receive platform events over the crossbeam channel
// - Maintain deterministic pacing using a fixed tick rate (TPS)
//
// Notes:
// The orchestrator runs independently from the platform layer. All game
// state lives on the logic thread; the platform only ever sends events.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod animation;
pub mod assets;
pub mod audio;
pub mod geometry;
pub mod globals;
pub mod input;
pub mod physics;
pub(crate) mod platform_bridge;
pub mod scene;
pub mod stage;

//=== Public API ==========================================================

pub use globals::{GlobalContext, GlobalSystems};
pub use input::Action;
pub use scene::SceneKey;

//=== Standard Library Imports ============================================

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::Receiver;
use log::{info, trace};

//=== Internal Modules ====================================================

use geometry::Vec2;
use input::InputEvent;
use platform_bridge::{EventCollector, PlatformEvent, TickControl};

//=== CoreSystemsOrchestrator =============================================
//
// Owns the systems and the context they operate on, and drives them at a
// fixed update frequency once moved onto the logic thread.
//
pub(crate) struct CoreSystemsOrchestrator<S: SceneKey, A: Action> {
    systems: GlobalSystems<S, A>,
    context: GlobalContext<A>,
}

impl<S: SceneKey, A: Action> CoreSystemsOrchestrator<S, A> {
    //--- Construction -----------------------------------------------------
    //
    // Initializes all core systems but does not yet start the logic thread.
    //
    pub fn new(world_size: Vec2, asset_root: impl Into<PathBuf>) -> Self {
        Self {
            systems: GlobalSystems::new(),
            context: GlobalContext::new(world_size, asset_root),
        }
    }

    /// Gives the caller a chance to bind keys and register scenes.
    pub fn init_systems<F>(&mut self, init_fn: F)
    where
        F: FnOnce(&mut GlobalSystems<S, A>),
    {
        init_fn(&mut self.systems);
    }

    //--- tick() -----------------------------------------------------------
    //
    // One logic step: queue the frame's input, release everything first if
    // focus was lost, then run the systems pipeline.
    //
    pub(crate) fn tick(&mut self, mut batches: Vec<Vec<InputEvent>>, focus_lost: bool, dt: f32) {
        if focus_lost {
            let releases = self.context.input_state.release_events();
            if !releases.is_empty() {
                batches.insert(0, releases);
            }
        }

        self.context.frame_events = batches;
        self.systems.update(&mut self.context, dt);
    }

    #[cfg(test)]
    pub(crate) fn context(&self) -> &GlobalContext<A> {
        &self.context
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the main logic thread responsible for ticking all core systems
    // at a fixed update frequency (TPS - ticks per second).
    //
    // Before the first tick the default scene is started. Each tick:
    //  1. Collects platform events (bounded, non-blocking)
    //  2. Runs the systems pipeline with a fixed dt
    //  3. Sleeps to maintain fixed pacing
    //  4. Exits cleanly when a shutdown signal is received
    //
    pub fn spawn_core_thread(
        self,
        receiver: Receiver<PlatformEvent>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);
        let dt = frame_duration.as_secs_f32();

        thread::spawn(move || {
            let mut orchestrator = self;
            let mut collector = EventCollector::new(receiver);

            orchestrator.systems.start(&mut orchestrator.context);
            info!("Core thread running at {} TPS", tps);

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather platform events ------------------------
                if let TickControl::Exit = collector.collect_frame() {
                    info!("Core thread exiting.");
                    break;
                }

                //--- Step 2: Update subsystems -----------------------------
                let focus_lost = collector.take_focus_lost();
                orchestrator.tick(collector.take_batches(), focus_lost, dt);

                //--- Step 3: Maintain deterministic pacing ----------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                } else {
                    trace!("Tick overran by {:?}", elapsed - frame_duration);
                }
            }
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crate::core::scene::Scene;
    use crossbeam_channel::unbounded;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestScene {
        Main,
    }

    impl SceneKey for TestScene {}

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Left,
    }

    impl Action for TestAction {}

    struct Idle;

    impl Scene<TestAction> for Idle {
        fn init(&mut self, input: &mut input::InputSystem<TestAction>) {
            input.bind_key(KeyCode::ArrowLeft, TestAction::Left);
        }

        fn update(&mut self, _context: &mut GlobalContext<TestAction>) {}
    }

    fn orchestrator() -> CoreSystemsOrchestrator<TestScene, TestAction> {
        let mut core = CoreSystemsOrchestrator::new(Vec2::new(960.0, 600.0), "unused");
        core.init_systems(|systems| {
            systems.scene_manager.register_default(TestScene::Main, Idle);
        });
        core.systems.start(&mut core.context);
        core
    }

    #[test]
    fn held_action_survives_empty_ticks() {
        let mut core = orchestrator();

        core.tick(vec![vec![InputEvent::KeyDown { key: KeyCode::ArrowLeft }]], false, 0.016);
        core.tick(Vec::new(), false, 0.016);

        assert!(core.context().actions.is_down(TestAction::Left));
    }

    #[test]
    fn focus_loss_releases_held_keys() {
        let mut core = orchestrator();

        core.tick(vec![vec![InputEvent::KeyDown { key: KeyCode::ArrowLeft }]], false, 0.016);
        core.tick(Vec::new(), true, 0.016);

        assert!(!core.context().actions.is_down(TestAction::Left));
        assert!(core.context().input_state.is_key_released(KeyCode::ArrowLeft));
    }

    #[test]
    fn core_thread_exits_on_window_closed() {
        let (tx, rx) = unbounded();
        let handle = orchestrator().spawn_core_thread(rx, 240.0);

        tx.send(PlatformEvent::Inputs(vec![InputEvent::KeyDown { key: KeyCode::ArrowLeft }]))
            .unwrap();
        tx.send(PlatformEvent::WindowClosed).unwrap();

        assert!(handle.join().is_ok());
    }

    #[test]
    fn core_thread_exits_on_disconnect() {
        let (tx, rx) = unbounded::<PlatformEvent>();
        let handle = orchestrator().spawn_core_thread(rx, 240.0);

        drop(tx);

        assert!(handle.join().is_ok());
    }
}
