//=========================================================================
// Action Trait & Action State
//=========================================================================
//
// Game-defined action trait and the per-tick snapshot of resolved actions.
//
// Actions: Opaque identifiers routed by the engine, interpreted by the game.
// ActionState: Which actions are held, and which went down this tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

//=== Action Trait ========================================================

/// Marker trait for game-defined action enums.
///
/// Actions represent high-level gameplay commands (Left, Right, Jump)
/// mapped from raw keys. The engine routes actions without interpreting them.
///
/// # Example
///
/// ```
/// use hero_platformer::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum GameAction { Left, Right, Jump }
///
/// impl Action for GameAction {}
/// ```
pub trait Action: 'static + Send + Copy + Eq + Hash + Debug {}

//=== ActionState =========================================================

/// Resolved action state for the current tick.
///
/// - `held`: actions with at least one bound key down (polled every tick)
/// - `pressed`: actions whose key went down this tick, in event order
pub struct ActionState<A: Action> {
    held: HashSet<A>,
    pressed: Vec<A>,
}

impl<A: Action> ActionState<A> {
    /// Creates an empty state (nothing held, nothing pressed).
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
            pressed: Vec::new(),
        }
    }

    /// Returns `true` while any key bound to `action` is held.
    pub fn is_down(&self, action: A) -> bool {
        self.held.contains(&action)
    }

    /// Returns `true` if `action` went down this tick.
    pub fn is_pressed(&self, action: A) -> bool {
        self.pressed.contains(&action)
    }

    /// Actions that went down this tick, in the order their keys arrived.
    pub fn pressed(&self) -> &[A] {
        &self.pressed
    }

    //--- Mutation (InputSystem only) --------------------------------------

    pub(crate) fn begin_frame(&mut self) {
        self.held.clear();
        self.pressed.clear();
    }

    pub(crate) fn hold(&mut self, action: A) {
        self.held.insert(action);
    }

    pub(crate) fn press(&mut self, action: A) {
        if !self.pressed.contains(&action) {
            self.pressed.push(action);
        }
    }
}

impl<A: Action> Default for ActionState<A> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
