//=========================================================================
// Sprite Animation
//=========================================================================
//
// Named frame sequences played back at a fixed rate.
//
// Architecture:
//   AnimationState
//     ├─ animations: HashMap<name, Animation>
//     ├─ current: Option<name>
//     └─ elapsed → frame index → sheet frame
//
// Looping animations wrap around; one-shot animations hold their last frame.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::warn;

//=== Animation ===========================================================

/// A named sequence of sheet frames.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    /// Sheet frame indices, in playback order.
    pub frames: Vec<usize>,

    /// Frames per second.
    pub frame_rate: f32,

    /// Wrap to the first frame after the last one.
    pub looping: bool,
}

impl Animation {
    pub fn new(frames: &[usize], frame_rate: f32, looping: bool) -> Self {
        Self {
            frames: frames.to_vec(),
            frame_rate,
            looping,
        }
    }

    /// Sheet frame shown `elapsed` seconds after playback started.
    fn frame_at(&self, elapsed: f32) -> usize {
        if self.frames.is_empty() {
            return 0;
        }
        if self.frame_rate <= 0.0 {
            return self.frames[0];
        }

        let step = (elapsed * self.frame_rate).floor() as usize;
        let index = if self.looping {
            step % self.frames.len()
        } else {
            step.min(self.frames.len() - 1)
        };
        self.frames[index]
    }
}

//=== AnimationState ======================================================

/// Per-sprite animation registry and playback cursor.
#[derive(Debug, Clone, Default)]
pub struct AnimationState {
    animations: HashMap<String, Animation>,
    current: Option<String>,
    elapsed: f32,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) an animation under `name`.
    pub fn add(&mut self, name: &str, animation: Animation) {
        self.animations.insert(name.to_owned(), animation);
    }

    /// Starts playing `name` from its first frame.
    ///
    /// Returns `false` (and keeps the current animation) if `name` was never
    /// registered.
    pub fn play(&mut self, name: &str) -> bool {
        if !self.animations.contains_key(name) {
            warn!(target: "animation", "Unknown animation '{}'", name);
            return false;
        }
        self.current = Some(name.to_owned());
        self.elapsed = 0.0;
        true
    }

    /// Advances playback by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if self.current.is_some() {
            self.elapsed += dt;
        }
    }

    /// Name of the animation currently playing.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Sheet frame to display right now (frame 0 when idle).
    pub fn frame(&self) -> usize {
        self.current
            .as_ref()
            .and_then(|name| self.animations.get(name))
            .map(|animation| animation.frame_at(self.elapsed))
            .unwrap_or(0)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn spinning() -> AnimationState {
        let mut state = AnimationState::new();
        state.add("rotate", Animation::new(&[0, 1, 2, 1], 6.0, true));
        state
    }

    #[test]
    fn idle_state_shows_frame_zero() {
        let state = spinning();
        assert_eq!(state.current(), None);
        assert_eq!(state.frame(), 0);
    }

    #[test]
    fn looping_animation_cycles() {
        let mut state = spinning();
        assert!(state.play("rotate"));

        let tick = 1.0 / 6.0;
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(state.frame());
            state.advance(tick + 1e-4);
        }

        assert_eq!(seen, vec![0, 1, 2, 1, 0]);
    }

    #[test]
    fn one_shot_animation_holds_last_frame() {
        let mut state = AnimationState::new();
        state.add("pop", Animation::new(&[3, 4, 5], 10.0, false));
        state.play("pop");

        state.advance(5.0);

        assert_eq!(state.frame(), 5);
    }

    #[test]
    fn unknown_animation_is_rejected() {
        let mut state = spinning();
        assert!(!state.play("jump"));
        assert_eq!(state.current(), None);
    }

    #[test]
    fn replay_restarts_from_first_frame() {
        let mut state = spinning();
        state.play("rotate");
        state.advance(0.4);
        assert_ne!(state.frame(), 0);

        state.play("rotate");
        assert_eq!(state.frame(), 0);
    }
}
