//=========================================================================
// Input System
//
// High-level interface for input handling within the engine.
//
// Responsibilities:
// - Own the key → action bindings registered by scenes
// - Fold each tick's input batches into the `StateTracker`
// - Resolve held and freshly-pressed actions into an `ActionState`
//
// Notes:
// This system is owned by `GlobalSystems` and updated once per tick,
// before any scene code runs. Scenes only ever see the resulting state
// through the `GlobalContext`.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod action;
pub(crate) mod action_mapper;
pub mod event;
pub mod state_tracker;

//=== Public API ==========================================================

pub use action::{Action, ActionState};
pub use event::{InputEvent, KeyCode};
pub use state_tracker::StateTracker;

//=== Internal Imports ====================================================

use action_mapper::ActionMapper;

//=== External Crates =====================================================

use log::trace;

//=== InputSystem =========================================================

/// Binding table and per-tick action resolver.
///
/// # Example
///
/// ```
/// use hero_platformer::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum GameAction { Jump }
/// impl Action for GameAction {}
///
/// let mut input = InputSystem::<GameAction>::new();
/// input.bind_key(KeyCode::ArrowUp, GameAction::Jump);
/// ```
pub struct InputSystem<A: Action> {
    mapper: ActionMapper<A>,
}

impl<A: Action> InputSystem<A> {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            mapper: ActionMapper::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key to an action.
    pub fn bind_key(&mut self, key: KeyCode, action: A) {
        self.mapper.bind_key(key, action);
    }

    /// Removes the binding of a key.
    pub fn unbind_key(&mut self, key: KeyCode) {
        self.mapper.unbind_key(key);
    }

    /// Returns the action bound to `key`, if any.
    pub fn action_for(&self, key: KeyCode) -> Option<A> {
        self.mapper.map_key(key)
    }

    //--- process_frame() --------------------------------------------------
    //
    // 1. Reset tick deltas on the tracker
    // 2. Apply every batch in arrival order
    // 3. Resolve pressed actions (event order) and held actions (polled)
    //
    pub fn process_frame(
        &self,
        state: &mut StateTracker,
        batches: &[Vec<InputEvent>],
        actions: &mut ActionState<A>,
    ) {
        state.clear();
        for batch in batches {
            state.process_events(batch);
        }

        actions.begin_frame();

        for event in batches.iter().flatten() {
            if let InputEvent::KeyDown { key } = event {
                if !state.is_key_pressed(*key) {
                    continue;
                }
                if let Some(action) = self.mapper.map_key(*key) {
                    trace!(target: "input", "Action pressed: {:?}", action);
                    actions.press(action);
                }
            }
        }

        for (key, action) in self.mapper.bindings() {
            if state.is_key_down(key) {
                actions.hold(action);
            }
        }
    }
}

impl<A: Action> Default for InputSystem<A> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Left,
        Right,
        Jump,
    }

    impl Action for TestAction {}

    //--- Test Helpers -----------------------------------------------------

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key }
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key }
    }

    fn system() -> InputSystem<TestAction> {
        let mut input = InputSystem::new();
        input.bind_key(KeyCode::ArrowLeft, TestAction::Left);
        input.bind_key(KeyCode::ArrowRight, TestAction::Right);
        input.bind_key(KeyCode::ArrowUp, TestAction::Jump);
        input
    }

    //--- Tests ------------------------------------------------------------

    #[test]
    fn held_key_resolves_to_held_action() {
        let input = system();
        let mut state = StateTracker::new();
        let mut actions = ActionState::new();

        input.process_frame(&mut state, &[vec![key_down(KeyCode::ArrowLeft)]], &mut actions);
        assert!(actions.is_down(TestAction::Left));

        // Still held on a tick with no events
        input.process_frame(&mut state, &[], &mut actions);
        assert!(actions.is_down(TestAction::Left));
        assert!(!actions.is_pressed(TestAction::Left));

        input.process_frame(&mut state, &[vec![key_up(KeyCode::ArrowLeft)]], &mut actions);
        assert!(!actions.is_down(TestAction::Left));
    }

    #[test]
    fn pressed_only_on_edge() {
        let input = system();
        let mut state = StateTracker::new();
        let mut actions = ActionState::new();

        input.process_frame(&mut state, &[vec![key_down(KeyCode::ArrowUp)]], &mut actions);
        assert_eq!(actions.pressed(), &[TestAction::Jump]);

        // OS key repeat produces another KeyDown while held
        input.process_frame(&mut state, &[vec![key_down(KeyCode::ArrowUp)]], &mut actions);
        assert!(actions.pressed().is_empty());
    }

    #[test]
    fn tap_within_one_tick_still_presses() {
        let input = system();
        let mut state = StateTracker::new();
        let mut actions = ActionState::new();

        input.process_frame(
            &mut state,
            &[vec![key_down(KeyCode::ArrowUp), key_up(KeyCode::ArrowUp)]],
            &mut actions,
        );

        assert!(actions.is_pressed(TestAction::Jump));
        assert!(!actions.is_down(TestAction::Jump));
    }

    #[test]
    fn unbound_keys_resolve_to_nothing() {
        let input = system();
        let mut state = StateTracker::new();
        let mut actions = ActionState::new();

        input.process_frame(&mut state, &[vec![key_down(KeyCode::KeyQ)]], &mut actions);

        assert!(actions.pressed().is_empty());
        assert!(state.is_key_down(KeyCode::KeyQ));
    }

    #[test]
    fn both_directions_held_are_both_reported() {
        let input = system();
        let mut state = StateTracker::new();
        let mut actions = ActionState::new();

        input.process_frame(
            &mut state,
            &[vec![key_down(KeyCode::ArrowLeft), key_down(KeyCode::ArrowRight)]],
            &mut actions,
        );

        assert!(actions.is_down(TestAction::Left));
        assert!(actions.is_down(TestAction::Right));
    }
}
