//=========================================================================
// State Tracker
//=========================================================================
//
// Low-level keyboard state tracking with per-tick delta tracking.
//
// Architecture:
//   InputEvent → process_events() → HashSet (keys held) → query
//
// Tick lifecycle: clear() → process_events() → query
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode};

//=== StateTracker ========================================================

/// Tracks persistent state (keys held) and per-tick deltas (keys pressed/released).
pub struct StateTracker {
    //--- Persistent State (survives tick boundary) -----------------------
    keys_down: HashSet<KeyCode>,

    //--- Tick Deltas (reset each tick via clear()) -----------------------
    keys_pressed_this_frame: HashSet<KeyCode>,
    keys_released_this_frame: HashSet<KeyCode>,
}

impl StateTracker {
    /// Creates a new state tracker with no keys held.
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            keys_pressed_this_frame: HashSet::new(),
            keys_released_this_frame: HashSet::new(),
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Clears tick-specific deltas (pressed/released flags).
    pub(crate) fn clear(&mut self) {
        self.keys_pressed_this_frame.clear();
        self.keys_released_this_frame.clear();
    }

    /// Processes input events in order, updating internal state.
    pub(crate) fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    /// Key-up events that would release every held key (focus loss).
    ///
    /// Fed through `process_events` like real input, so the releases show
    /// up as this tick's deltas.
    pub(crate) fn release_events(&self) -> Vec<InputEvent> {
        self.keys_down
            .iter()
            .map(|&key| InputEvent::KeyUp { key })
            .collect()
    }

    //--- Internal Helpers -------------------------------------------------

    fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown { key } => {
                // Only mark as pressed if it wasn't already down
                if self.keys_down.insert(*key) {
                    self.keys_pressed_this_frame.insert(*key);
                }
            }

            InputEvent::KeyUp { key } => {
                // Only mark as released if it was actually down
                if self.keys_down.remove(key) {
                    self.keys_released_this_frame.insert(*key);
                }
            }

            InputEvent::Unidentified => {}
        }
    }

    //=====================================================================
    // Query API
    //=====================================================================

    /// Returns `true` if key transitioned UP → DOWN this tick.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed_this_frame.contains(&key)
    }

    /// Returns `true` while key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` if key transitioned DOWN → UP this tick.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released_this_frame.contains(&key)
    }

    /// Returns an iterator over all keys currently held.
    pub fn keys_down(&self) -> impl Iterator<Item = &KeyCode> {
        self.keys_down.iter()
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for StateTracker {
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

    //--- Test Helpers -----------------------------------------------------

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key }
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key }
    }

    //=====================================================================
    // Keyboard Tests
    //=====================================================================

    #[test]
    fn key_pressed_only_on_transition_tick() {
        let mut tracker = StateTracker::new();

        // Tick 1: Key down
        tracker.clear();
        tracker.process_events(&[key_down(KeyCode::ArrowUp)]);
        assert!(tracker.is_key_pressed(KeyCode::ArrowUp));
        assert!(tracker.is_key_down(KeyCode::ArrowUp));

        // Tick 2: Still held
        tracker.clear();
        tracker.process_events(&[]);
        assert!(!tracker.is_key_pressed(KeyCode::ArrowUp));
        assert!(tracker.is_key_down(KeyCode::ArrowUp));

        // Tick 3: Released
        tracker.clear();
        tracker.process_events(&[key_up(KeyCode::ArrowUp)]);
        assert!(!tracker.is_key_down(KeyCode::ArrowUp));
        assert!(tracker.is_key_released(KeyCode::ArrowUp));
    }

    #[test]
    fn multiple_keys_tracked_independently() {
        let mut tracker = StateTracker::new();

        tracker.process_events(&[key_down(KeyCode::ArrowLeft), key_down(KeyCode::ArrowRight)]);
        assert!(tracker.is_key_down(KeyCode::ArrowLeft));
        assert!(tracker.is_key_down(KeyCode::ArrowRight));

        tracker.clear();
        tracker.process_events(&[key_up(KeyCode::ArrowLeft)]);
        assert!(!tracker.is_key_down(KeyCode::ArrowLeft));
        assert!(tracker.is_key_down(KeyCode::ArrowRight));
    }

    /// Press + release inside one tick keeps both transitions.
    #[test]
    fn fast_tap_both_transitions_captured() {
        let mut tracker = StateTracker::new();

        tracker.process_events(&[key_down(KeyCode::ArrowUp), key_up(KeyCode::ArrowUp)]);

        assert!(tracker.is_key_pressed(KeyCode::ArrowUp));
        assert!(tracker.is_key_released(KeyCode::ArrowUp));
        assert!(!tracker.is_key_down(KeyCode::ArrowUp));
    }

    #[test]
    fn duplicate_key_down_ignored() {
        let mut tracker = StateTracker::new();

        tracker.process_events(&[key_down(KeyCode::KeyA)]);
        tracker.clear();
        tracker.process_events(&[key_down(KeyCode::KeyA)]);

        assert!(!tracker.is_key_pressed(KeyCode::KeyA), "Repeat should not re-trigger");
        assert!(tracker.is_key_down(KeyCode::KeyA));
    }

    #[test]
    fn key_up_without_down_ignored() {
        let mut tracker = StateTracker::new();

        tracker.process_events(&[key_up(KeyCode::KeyZ)]);

        assert!(!tracker.is_key_released(KeyCode::KeyZ));
    }

    #[test]
    fn release_events_clear_held_keys() {
        let mut tracker = StateTracker::new();
        tracker.process_events(&[key_down(KeyCode::ArrowLeft), key_down(KeyCode::ArrowUp)]);

        tracker.clear();
        let releases = tracker.release_events();
        tracker.process_events(&releases);

        assert_eq!(tracker.keys_down().count(), 0);
        assert!(tracker.is_key_released(KeyCode::ArrowLeft));
        assert!(tracker.is_key_released(KeyCode::ArrowUp));
    }

    #[test]
    fn unidentified_events_ignored() {
        let mut tracker = StateTracker::new();

        tracker.process_events(&[InputEvent::Unidentified]);

        assert_eq!(tracker.keys_down().count(), 0);
    }
}
