//=========================================================================
// Engine
//
// Main entry point and coordinator for the engine.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              ├─ init(): scenes, bindings
//         ├─ with_channel_capacity() └─ run(): spawns logic thread,
//         ├─ with_window_size()              runs platform,
//         ├─ with_title()                    blocks until exit
//         └─ with_asset_root()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::marker::PhantomData;
use std::path::PathBuf;

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::geometry::Vec2;
use crate::core::platform_bridge::PlatformEvent;
use crate::core::{Action, CoreSystemsOrchestrator, GlobalSystems, SceneKey};
use crate::platform::{Platform, WindowSettings};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
/// - **Window**: 960 × 600, "Hero Platformer" (also the physics world bounds)
/// - **Asset root**: `assets`
///
/// # Examples
///
/// ```no_run
/// use hero_platformer::EngineBuilder;
/// use hero_platformer::core::input::{Action, KeyCode};
/// use hero_platformer::core::scene::SceneKey;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum GameScene { Main }
/// impl SceneKey for GameScene {}
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum GameAction { Jump }
/// impl Action for GameAction {}
///
/// EngineBuilder::<GameScene, GameAction>::new()
///     .with_tps(120.0)
///     .with_window_size(640, 480)
///     .build()
///     .init(|systems| {
///         systems.input.bind_key(KeyCode::ArrowUp, GameAction::Jump);
///         // systems.scene_manager.register_default(...);
///     })
///     .run();
/// ```
pub struct EngineBuilder<S: SceneKey, A: Action> {
    tps: f64,
    channel_capacity: usize,
    window_width: u32,
    window_height: u32,
    title: String,
    asset_root: PathBuf,
    _phantom: PhantomData<(S, A)>,
}

impl<S: SceneKey, A: Action> EngineBuilder<S, A> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            window_width: 960,
            window_height: 600,
            title: "Hero Platformer".to_owned(),
            asset_root: PathBuf::from("assets"),
            _phantom: PhantomData,
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the window's inner size, which is also the world size.
    ///
    /// Default: 960 × 600
    ///
    /// # Panics
    ///
    /// Panics if either side is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "Window size must be positive, got {}x{}",
            width,
            height
        );
        self.window_width = width;
        self.window_height = height;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Directory asset paths are resolved against.
    ///
    /// Default: `assets`
    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = root.into();
        self
    }

    /// Builds the engine instance.
    ///
    /// Call [`Engine::init`] to register scenes before [`Engine::run`].
    pub fn build(self) -> Engine<S, A> {
        info!(
            "Building engine (TPS: {}, channel: {}, window: {}x{})",
            self.tps, self.channel_capacity, self.window_width, self.window_height
        );

        let world_size = Vec2::new(self.window_width as f32, self.window_height as f32);

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(world_size, self.asset_root),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            window: WindowSettings {
                width: self.window_width,
                height: self.window_height,
                title: self.title,
            },
        }
    }
}

impl<S: SceneKey, A: Action> Default for EngineBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Engine runtime.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► Input, Scenes, Physics, Animation, Audio
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Key Polling
///
/// Communication: crossbeam channel (PlatformEvent)
/// ```
pub struct Engine<S: SceneKey, A: Action> {
    orchestrator: CoreSystemsOrchestrator<S, A>,
    tps: f64,
    channel_capacity: usize,
    window: WindowSettings,
}

impl<S: SceneKey, A: Action> Engine<S, A> {
    //--- Initialization ---------------------------------------------------

    /// Initializes engine systems before execution.
    ///
    /// Provides mutable access to [`GlobalSystems`] for registering scenes
    /// and key bindings before the engine starts running.
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut GlobalSystems<S, A>),
    {
        info!("Initializing engine systems");

        self.orchestrator.init_systems(init_fn);

        info!("Engine initialization complete");
        self
    }

    //--- Execution --------------------------------------------------------

    /// Starts the engine runtime and blocks until the application exits.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the bounded channel for platform → core communication
    /// 2. Spawns the logic thread, which starts the default scene
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On window close: platform exits → logic thread terminates → joined
    ///
    /// If the logic thread panics, the error is logged at join.
    pub fn run(self) {
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channel -----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        info!("Channel created (capacity: {})", self.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(rx, self.tps);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx, self.window);
        info!("Platform initialized, entering event loop");

        if let Err(e) = platform.run() {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        //--- 4. Cleanup: Wait for logic thread to terminate --------------
        match core_handle.join() {
            Ok(()) => {
                info!("Core thread terminated cleanly");
            }
            Err(e) => {
                error!("Core thread panicked: {:?}", e);
            }
        }

        info!("Engine shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestScene {
        Main,
    }

    impl SceneKey for TestScene {}

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Jump,
    }

    impl Action for TestAction {}

    fn builder() -> EngineBuilder<TestScene, TestAction> {
        EngineBuilder::new()
    }

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = builder();
        assert_eq!(builder.tps, 60.0);
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!((builder.window_width, builder.window_height), (960, 600));
        assert_eq!(builder.title, "Hero Platformer");
        assert_eq!(builder.asset_root, PathBuf::from("assets"));
    }

    #[test]
    fn builder_with_tps() {
        assert_eq!(builder().with_tps(120.0).tps, 120.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        builder().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_negative() {
        builder().with_tps(-60.0);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        builder().with_channel_capacity(0);
    }

    #[test]
    #[should_panic(expected = "Window size must be positive")]
    fn builder_with_window_size_panics_on_zero() {
        builder().with_window_size(960, 0);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = builder()
            .with_tps(120.0)
            .with_channel_capacity(256)
            .with_window_size(640, 480)
            .with_title("Test")
            .with_asset_root("elsewhere")
            .build();

        assert_eq!(engine.tps, 120.0);
        assert_eq!(engine.channel_capacity, 256);
        assert_eq!(
            engine.window,
            WindowSettings {
                width: 640,
                height: 480,
                title: "Test".into()
            }
        );
    }

    #[test]
    fn window_size_becomes_world_bounds() {
        let engine = builder().with_window_size(640, 480).build();
        let bounds = engine.orchestrator.context().physics.bounds();
        assert_eq!((bounds.width, bounds.height), (640.0, 480.0));
    }

    #[test]
    fn init_exposes_systems() {
        let mut bound = None;
        let _engine = builder().build().init(|systems| {
            systems.input.bind_key(KeyCode::Space, TestAction::Jump);
            bound = systems.input.action_for(KeyCode::Space);
        });
        assert_eq!(bound, Some(TestAction::Jump));
    }
}
