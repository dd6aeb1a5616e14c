//=========================================================================
// Input Buffer
//=========================================================================
//
// Collects key events between two redraws.
//
// Responsibilities:
// - Store incoming key events in arrival order
// - Drop an event identical to the one just before it (OS key repeat)
// - Hand the whole frame over at once via `drain()`
//
// Notes:
// Only consecutive duplicates are dropped: Down(A), Up(A), Down(A) is a
// real tap-and-hold and must survive intact.
//
//=========================================================================

//=== Internal Modules ====================================================

use crate::core::input::event::InputEvent;

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        const BASE_CAPACITY: usize = 64;

        Self {
            events: Vec::with_capacity(BASE_CAPACITY),
        }
    }

    //--- Event Handling ---------------------------------------------------

    /// Appends an event unless it repeats the previous one.
    pub(crate) fn push(&mut self, event: InputEvent) {
        if self.events.last() != Some(&event) {
            self.events.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------

    /// Takes this frame's events, or `None` if nothing happened.
    pub(crate) fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.events.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.events))
    }

    //--- Utilities --------------------------------------------------------

    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::KeyCode;

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key }
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key }
    }

    #[test]
    fn consecutive_duplicates_are_dropped() {
        let mut buffer = InputBuffer::new();
        buffer.push(key_down(KeyCode::ArrowRight));
        buffer.push(key_down(KeyCode::ArrowRight));
        buffer.push(key_down(KeyCode::ArrowUp));

        assert_eq!(buffer.len(), 2, "Repeats should be ignored");
    }

    #[test]
    fn tap_sequence_is_preserved() {
        let mut buffer = InputBuffer::new();
        buffer.push(key_down(KeyCode::ArrowUp));
        buffer.push(key_up(KeyCode::ArrowUp));
        buffer.push(key_down(KeyCode::ArrowUp));

        assert_eq!(
            buffer.drain(),
            Some(vec![
                key_down(KeyCode::ArrowUp),
                key_up(KeyCode::ArrowUp),
                key_down(KeyCode::ArrowUp),
            ])
        );
    }

    #[test]
    fn drain_clears_buffer() {
        let mut buffer = InputBuffer::new();
        buffer.push(key_down(KeyCode::ArrowLeft));

        assert!(buffer.drain().is_some());
        assert!(buffer.is_empty());
        assert_eq!(buffer.drain(), None, "Empty buffer drains to None");
    }
}
