//=========================================================================
// Host Capabilities
//=========================================================================
//
// The narrow slice of the engine the game logic is allowed to touch.
//
// Architecture:
//   Kinematics            velocity + ground contact of one body
//     └─ Host<A>          + sprites, groups, physics queries,
//                           animation, sound, held actions, level data
//
//   GlobalContext<A> ──impl──> Host<A>
//
// Game code is written against these traits, so `Character` can be
// exercised against a bare mock and `PlayState` against a plain context.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::warn;
use serde_json::Value;

//=== Internal Dependencies ===============================================

use crate::core::animation::{Animation, AnimationState};
use crate::core::geometry::Vec2;
use crate::core::globals::GlobalContext;
use crate::core::input::Action;
use crate::core::physics::BodyFlags;
use crate::core::stage::{Group, Sprite, SpriteHandle};

/// Size given to sprites whose texture was never loaded.
const PLACEHOLDER_SIZE: f32 = 32.0;

//=== Kinematics ==========================================================

/// Velocity and ground contact of physics bodies.
pub trait Kinematics {
    fn set_velocity_x(&mut self, sprite: SpriteHandle, vx: f32);

    fn set_velocity_y(&mut self, sprite: SpriteHandle, vy: f32);

    fn velocity(&self, sprite: SpriteHandle) -> Option<Vec2>;

    /// Whether the body rests on something solid (`touching.down`).
    fn touching_down(&self, sprite: SpriteHandle) -> bool;
}

//=== Host ================================================================

/// Engine services consumed by the play state.
pub trait Host<A: Action>: Kinematics {
    /// Adds a plain image anchored at its top-left corner.
    fn add_image(&mut self, x: f32, y: f32, key: &str) -> SpriteHandle {
        self.add_sprite(x, y, key, Vec2::ZERO)
    }

    /// Adds a sprite on top of everything added before it.
    fn add_sprite(&mut self, x: f32, y: f32, key: &str, anchor: Vec2) -> SpriteHandle;

    fn enable_physics(&mut self, sprite: SpriteHandle, flags: BodyFlags) -> bool;

    fn set_gravity(&mut self, gravity_y: f32);

    fn gravity(&self) -> f32;

    /// Solid collision of `sprite` against every live member of `group`.
    fn collide(&mut self, sprite: SpriteHandle, group: &Group) -> usize;

    /// Live members of `group` overlapping `sprite`.
    fn overlap(&self, sprite: SpriteHandle, group: &Group) -> Vec<SpriteHandle>;

    /// Removes a sprite for good. `true` only the first time.
    fn kill(&mut self, sprite: SpriteHandle) -> bool;

    fn is_alive(&self, sprite: SpriteHandle) -> bool;

    fn add_animation(&mut self, sprite: SpriteHandle, name: &str, animation: Animation);

    fn play_animation(&mut self, sprite: SpriteHandle, name: &str) -> bool;

    /// Fire-and-forget sound by asset key.
    fn play_sound(&mut self, key: &str) -> bool;

    /// Whether an action's key is currently held.
    fn is_down(&self, action: A) -> bool;

    fn json(&self, key: &str) -> Option<&Value>;
}

//=== GlobalContext Adapter ===============================================

impl<A: Action> Kinematics for GlobalContext<A> {
    fn set_velocity_x(&mut self, sprite: SpriteHandle, vx: f32) {
        if let Some(body) = self.stage.get_mut(sprite).and_then(Sprite::body_mut) {
            body.velocity.x = vx;
        }
    }

    fn set_velocity_y(&mut self, sprite: SpriteHandle, vy: f32) {
        if let Some(body) = self.stage.get_mut(sprite).and_then(Sprite::body_mut) {
            body.velocity.y = vy;
        }
    }

    fn velocity(&self, sprite: SpriteHandle) -> Option<Vec2> {
        self.stage.get(sprite).and_then(Sprite::body).map(|body| body.velocity)
    }

    fn touching_down(&self, sprite: SpriteHandle) -> bool {
        self.stage
            .get(sprite)
            .and_then(Sprite::body)
            .is_some_and(|body| body.touching.down)
    }
}

impl<A: Action> Host<A> for GlobalContext<A> {
    fn add_sprite(&mut self, x: f32, y: f32, key: &str, anchor: Vec2) -> SpriteHandle {
        let size = match self.assets.size_of(key) {
            Some((w, h)) => Vec2::new(w as f32, h as f32),
            None => {
                warn!(target: "game", "Texture '{}' not loaded, using placeholder", key);
                Vec2::new(PLACEHOLDER_SIZE, PLACEHOLDER_SIZE)
            }
        };
        self.stage.add(Sprite::new(key, Vec2::new(x, y), anchor, size))
    }

    fn enable_physics(&mut self, sprite: SpriteHandle, flags: BodyFlags) -> bool {
        self.physics.enable(&mut self.stage, sprite, flags)
    }

    fn set_gravity(&mut self, gravity_y: f32) {
        self.physics.set_gravity(gravity_y);
    }

    fn gravity(&self) -> f32 {
        self.physics.gravity()
    }

    fn collide(&mut self, sprite: SpriteHandle, group: &Group) -> usize {
        self.physics.collide(&mut self.stage, sprite, group)
    }

    fn overlap(&self, sprite: SpriteHandle, group: &Group) -> Vec<SpriteHandle> {
        self.physics.overlap(&self.stage, sprite, group)
    }

    fn kill(&mut self, sprite: SpriteHandle) -> bool {
        self.stage.kill(sprite)
    }

    fn is_alive(&self, sprite: SpriteHandle) -> bool {
        self.stage.is_alive(sprite)
    }

    fn add_animation(&mut self, sprite: SpriteHandle, name: &str, animation: Animation) {
        if let Some(target) = self.stage.get_mut(sprite) {
            target
                .animation
                .get_or_insert_with(AnimationState::new)
                .add(name, animation);
        }
    }

    fn play_animation(&mut self, sprite: SpriteHandle, name: &str) -> bool {
        self.stage
            .get_mut(sprite)
            .and_then(|target| target.animation.as_mut())
            .is_some_and(|animation| animation.play(name))
    }

    fn play_sound(&mut self, key: &str) -> bool {
        self.audio.play(&self.assets, key)
    }

    fn is_down(&self, action: A) -> bool {
        self.actions.is_down(action)
    }

    fn json(&self, key: &str) -> Option<&Value> {
        self.assets.json(key)
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
    }

    impl Action for TestAction {}

    fn context() -> GlobalContext<TestAction> {
        let mut ctx = GlobalContext::new(Vec2::new(960.0, 600.0), "unused");
        ctx.assets.insert_image("hero", 36, 42);
        ctx
    }

    #[test]
    fn sprite_size_comes_from_texture() {
        let mut ctx = context();
        let hero = ctx.add_sprite(100.0, 100.0, "hero", Vec2::new(0.5, 0.5));

        assert_eq!(ctx.stage.get(hero).map(|s| s.size), Some(Vec2::new(36.0, 42.0)));
    }

    #[test]
    fn unknown_texture_gets_placeholder() {
        let mut ctx = context();
        let thing = ctx.add_image(0.0, 0.0, "missing");

        assert_eq!(ctx.stage.get(thing).map(|s| s.size), Some(Vec2::new(32.0, 32.0)));
    }

    #[test]
    fn kinematics_without_body_is_inert() {
        let mut ctx = context();
        let decoration = ctx.add_image(0.0, 0.0, "hero");

        ctx.set_velocity_x(decoration, 10.0);

        assert_eq!(ctx.velocity(decoration), None);
        assert!(!ctx.touching_down(decoration));
    }

    #[test]
    fn velocity_roundtrips_through_body() {
        let mut ctx = context();
        let hero = ctx.add_sprite(100.0, 100.0, "hero", Vec2::new(0.5, 0.5));
        ctx.enable_physics(hero, BodyFlags::dynamic());

        ctx.set_velocity_x(hero, -200.0);
        ctx.set_velocity_y(hero, -600.0);

        assert_eq!(ctx.velocity(hero), Some(Vec2::new(-200.0, -600.0)));
    }

    #[test]
    fn play_animation_requires_registration() {
        let mut ctx = context();
        let coin = ctx.add_sprite(0.0, 0.0, "hero", Vec2::ZERO);

        assert!(!ctx.play_animation(coin, "rotate"));
        ctx.add_animation(coin, "rotate", Animation::new(&[0, 1, 2, 1], 6.0, true));
        assert!(ctx.play_animation(coin, "rotate"));
    }

    #[test]
    fn held_actions_are_visible() {
        let mut ctx = context();
        ctx.actions.hold(TestAction::Jump);

        assert!(Host::is_down(&ctx, TestAction::Jump));
    }
}
