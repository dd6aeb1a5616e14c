//=========================================================================
// Scene Manager
//=========================================================================
//
// Manages scene registration and the lifecycle of the active scene.
//
// Scenes are stored in a HashMap by key. One of them is the default
// scene, started when the logic thread comes up.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::Scene;
use crate::core::assets::AssetLoader;
use crate::core::globals::GlobalContext;
use crate::core::input::{Action, InputSystem};

//=== Scene Key Trait =====================================================

/// Marker trait for scene identifiers.
///
/// Scene keys uniquely identify scenes in the SceneManager's HashMap.
/// Typically implemented by game-specific enums.
pub trait SceneKey: Clone + Copy + Eq + Hash + Debug + Send + 'static {}

//=== Scene Manager =======================================================

/// Keyed scene registry driving the active scene.
pub struct SceneManager<S: SceneKey, A: Action> {
    scenes: HashMap<S, Box<dyn Scene<A>>>,
    active: Option<S>,
    started: bool,
}

impl<S: SceneKey, A: Action> SceneManager<S, A> {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            active: None,
            started: false,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a scene with the manager.
    ///
    /// The scene is automatically boxed for storage.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use hero_platformer::prelude::*;
    /// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// # enum GameScene { Main }
    /// # impl SceneKey for GameScene {}
    /// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// # enum GameAction { Jump }
    /// # impl Action for GameAction {}
    /// # struct MainScene;
    /// # impl Scene<GameAction> for MainScene {
    /// #     fn update(&mut self, _ctx: &mut GlobalContext<GameAction>) {}
    /// # }
    /// let mut manager = SceneManager::<GameScene, GameAction>::new();
    /// manager.register_scene(GameScene::Main, MainScene);
    /// ```
    pub fn register_scene<T>(&mut self, key: S, scene: T)
    where
        T: Scene<A> + 'static,
    {
        if self.scenes.insert(key, Box::new(scene)).is_some() {
            warn!(target: "scene", "Scene {:?} was already registered and has been replaced", key);
        }
    }

    /// Registers a scene and makes it the one started with the engine.
    pub fn register_default<T>(&mut self, key: S, scene: T)
    where
        T: Scene<A> + 'static,
    {
        self.register_scene(key, scene);

        if let Some(previous) = self.active.replace(key) {
            if previous != key {
                warn!(target: "scene", "Default scene {:?} replaced by {:?}", previous, key);
            }
        }
        debug!(target: "scene", "Registered scene {:?} as default", key);
    }

    pub fn active(&self) -> Option<S> {
        self.active
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    //--- start() ----------------------------------------------------------

    /// Runs the setup lifecycle of the default scene (once).
    ///
    /// Order: `init` → `preload` → asset load → `create`.
    pub fn start(&mut self, input: &mut InputSystem<A>, context: &mut GlobalContext<A>) {
        if self.started {
            warn!(target: "scene", "Scene manager already started");
            return;
        }
        self.started = true;

        let Some(key) = self.active else {
            warn!(target: "scene", "No default scene registered");
            return;
        };
        let Some(scene) = self.scenes.get_mut(&key) else {
            warn!(target: "scene", "Default scene {:?} not registered", key);
            return;
        };

        info!(target: "scene", "Starting scene {:?}", key);

        scene.init(input);

        let mut loader = AssetLoader::new();
        scene.preload(&mut loader);
        let failures = context.assets.load(&mut loader);
        if failures > 0 {
            warn!(target: "scene", "Scene {:?} starts with {} missing assets", key, failures);
        }

        scene.create(context);
    }

    //--- Update Loop ------------------------------------------------------

    /// Delivers edge actions to the active scene, in press order.
    pub fn dispatch_actions(&mut self, actions: &[A], context: &mut GlobalContext<A>) {
        if let Some(scene) = self.active_scene() {
            for &action in actions {
                scene.on_action(action, context);
            }
        }
    }

    /// Updates the active scene.
    pub fn update(&mut self, context: &mut GlobalContext<A>) {
        if let Some(scene) = self.active_scene() {
            scene.update(context);
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn active_scene(&mut self) -> Option<&mut Box<dyn Scene<A>>> {
        if !self.started {
            return None;
        }
        let key = self.active?;
        self.scenes.get_mut(&key)
    }
}

impl<S: SceneKey, A: Action> Default for SceneManager<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Vec2;
    use crate::core::input::KeyCode;
    use std::sync::{Arc, Mutex};

    // Mock types for testing
    #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
    enum TestScene {
        A,
        B,
    }

    impl SceneKey for TestScene {}

    #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
    enum TestAction {
        Jump,
    }

    impl Action for TestAction {}

    type Log = Arc<Mutex<Vec<String>>>;

    struct Recorder {
        name: &'static str,
        log: Log,
    }

    impl Recorder {
        fn record(&self, event: &str) {
            if let Ok(mut log) = self.log.lock() {
                log.push(format!("{}:{}", self.name, event));
            }
        }
    }

    impl Scene<TestAction> for Recorder {
        fn init(&mut self, input: &mut InputSystem<TestAction>) {
            input.bind_key(KeyCode::ArrowUp, TestAction::Jump);
            self.record("init");
        }

        fn preload(&mut self, loader: &mut AssetLoader) {
            loader.json("level", "missing.json");
            self.record("preload");
        }

        fn create(&mut self, _context: &mut GlobalContext<TestAction>) {
            self.record("create");
        }

        fn update(&mut self, _context: &mut GlobalContext<TestAction>) {
            self.record("update");
        }

        fn on_action(&mut self, action: TestAction, _context: &mut GlobalContext<TestAction>) {
            self.record(&format!("{:?}", action));
        }
    }

    fn context() -> GlobalContext<TestAction> {
        GlobalContext::new(Vec2::new(100.0, 100.0), "does-not-exist")
    }

    fn entries(log: &Log) -> Vec<String> {
        log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    #[test]
    fn start_runs_lifecycle_in_order() {
        let log = Log::default();
        let mut manager = SceneManager::<TestScene, TestAction>::new();
        manager.register_default(TestScene::A, Recorder { name: "a", log: log.clone() });
        let mut input = InputSystem::new();
        let mut ctx = context();

        manager.start(&mut input, &mut ctx);
        manager.update(&mut ctx);

        assert_eq!(entries(&log), vec!["a:init", "a:preload", "a:create", "a:update"]);
        assert_eq!(input.action_for(KeyCode::ArrowUp), Some(TestAction::Jump));
    }

    #[test]
    fn start_runs_only_once() {
        let log = Log::default();
        let mut manager = SceneManager::<TestScene, TestAction>::new();
        manager.register_default(TestScene::A, Recorder { name: "a", log: log.clone() });
        let mut input = InputSystem::new();
        let mut ctx = context();

        manager.start(&mut input, &mut ctx);
        manager.start(&mut input, &mut ctx);

        assert_eq!(entries(&log).len(), 3);
    }

    #[test]
    fn only_default_scene_is_driven() {
        let log = Log::default();
        let mut manager = SceneManager::<TestScene, TestAction>::new();
        manager.register_scene(TestScene::B, Recorder { name: "b", log: log.clone() });
        manager.register_default(TestScene::A, Recorder { name: "a", log: log.clone() });
        let mut input = InputSystem::new();
        let mut ctx = context();

        manager.start(&mut input, &mut ctx);
        manager.dispatch_actions(&[TestAction::Jump], &mut ctx);

        assert_eq!(manager.active(), Some(TestScene::A));
        assert!(entries(&log).iter().all(|e| e.starts_with("a:")));
        assert_eq!(entries(&log).last().map(String::as_str), Some("a:Jump"));
    }

    #[test]
    fn nothing_runs_before_start() {
        let log = Log::default();
        let mut manager = SceneManager::<TestScene, TestAction>::new();
        manager.register_default(TestScene::A, Recorder { name: "a", log: log.clone() });
        let mut ctx = context();

        manager.update(&mut ctx);
        manager.dispatch_actions(&[TestAction::Jump], &mut ctx);

        assert!(entries(&log).is_empty());
        assert!(!manager.is_started());
    }

    #[test]
    fn start_without_default_is_harmless() {
        let mut manager = SceneManager::<TestScene, TestAction>::new();
        let mut input = InputSystem::new();
        let mut ctx = context();

        manager.start(&mut input, &mut ctx);
        manager.update(&mut ctx);

        assert!(manager.is_started());
        assert_eq!(manager.active(), None);
    }
}
