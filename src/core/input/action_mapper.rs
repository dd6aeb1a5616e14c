//=========================================================================
// Action Mapper
//=========================================================================
//
// Maps physical keys to game actions based on configured bindings.
//
// Architecture:
//   KeyCode → HashMap → Action
//
// Several keys may map to the same action (e.g. ArrowUp and Space → Jump);
// one key maps to at most one action (rebinding replaces).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::debug;

//=== Internal Dependencies ===============================================

use super::{action::Action, event::KeyCode};

//=== ActionMapper ========================================================

/// Key → action lookup table.
pub(crate) struct ActionMapper<A: Action> {
    key_bindings: HashMap<KeyCode, A>,
}

impl<A: Action> ActionMapper<A> {
    /// Creates a mapper with no bindings.
    pub(crate) fn new() -> Self {
        Self {
            key_bindings: HashMap::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key to an action, replacing any previous binding of that key.
    pub(crate) fn bind_key(&mut self, key: KeyCode, action: A) {
        if let Some(previous) = self.key_bindings.insert(key, action) {
            debug!(target: "input", "Rebinding {:?}: {:?} → {:?}", key, previous, action);
        }
    }

    /// Removes the binding for a key, if any.
    pub(crate) fn unbind_key(&mut self, key: KeyCode) {
        self.key_bindings.remove(&key);
    }

    //--- Lookup -----------------------------------------------------------

    /// Returns the action bound to `key`.
    pub(crate) fn map_key(&self, key: KeyCode) -> Option<A> {
        self.key_bindings.get(&key).copied()
    }

    /// Iterates over every (key, action) binding.
    pub(crate) fn bindings(&self) -> impl Iterator<Item = (KeyCode, A)> + '_ {
        self.key_bindings.iter().map(|(key, action)| (*key, *action))
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
        Jump,
        Left,
    }

    impl Action for TestAction {}

    #[test]
    fn bind_and_map_simple_key() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::ArrowUp, TestAction::Jump);

        assert_eq!(mapper.map_key(KeyCode::ArrowUp), Some(TestAction::Jump));
        assert_eq!(mapper.map_key(KeyCode::ArrowDown), None);
    }

    #[test]
    fn two_keys_one_action() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::ArrowUp, TestAction::Jump);
        mapper.bind_key(KeyCode::Space, TestAction::Jump);

        assert_eq!(mapper.map_key(KeyCode::ArrowUp), Some(TestAction::Jump));
        assert_eq!(mapper.map_key(KeyCode::Space), Some(TestAction::Jump));
        assert_eq!(mapper.bindings().count(), 2);
    }

    #[test]
    fn rebinding_replaces() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::KeyA, TestAction::Jump);
        mapper.bind_key(KeyCode::KeyA, TestAction::Left);

        assert_eq!(mapper.map_key(KeyCode::KeyA), Some(TestAction::Left));
    }

    #[test]
    fn unbind_removes() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::KeyA, TestAction::Left);
        mapper.unbind_key(KeyCode::KeyA);

        assert_eq!(mapper.map_key(KeyCode::KeyA), None);
    }
}
