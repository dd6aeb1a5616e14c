//=========================================================================
// Character
//=========================================================================
//
// The player-controlled hero.
//
// The character owns no physics state of its own: it holds a handle to an
// engine sprite and writes velocities through `Kinematics`. Gravity and
// landing are resolved by the engine; the only rule here is that a jump
// needs ground contact.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::host::{Host, Kinematics};
use super::HeroAction;
use crate::core::geometry::Vec2;
use crate::core::physics::BodyFlags;
use crate::core::stage::SpriteHandle;

//=== Constants ===========================================================

/// Horizontal walking speed (pixels / s).
pub const SPEED: f32 = 200.0;

/// Upward launch speed of a jump (pixels / s, applied as negative y).
pub const JUMP_SPEED: f32 = 600.0;

/// Texture key of the hero sprite.
pub const TEXTURE: &str = "hero";

//=== Character ===========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Character {
    sprite: SpriteHandle,
}

impl Character {
    /// Adds the hero sprite at `(x, y)`, centred, with a gravity-affected
    /// body kept inside the world.
    pub fn spawn<H: Host<HeroAction>>(host: &mut H, x: f32, y: f32) -> Self {
        let sprite = host.add_sprite(x, y, TEXTURE, Vec2::new(0.5, 0.5));
        host.enable_physics(sprite, BodyFlags::dynamic().with_world_bounds());
        Self { sprite }
    }

    /// Wraps an existing sprite.
    pub fn from_sprite(sprite: SpriteHandle) -> Self {
        Self { sprite }
    }

    pub fn sprite(&self) -> SpriteHandle {
        self.sprite
    }

    /// Sets horizontal velocity to `direction × SPEED`.
    ///
    /// `direction` is normally -1, 0 or 1 but is not clamped.
    pub fn walk<K: Kinematics + ?Sized>(&self, body: &mut K, direction: f32) {
        body.set_velocity_x(self.sprite, direction * SPEED);
    }

    /// Launches upwards if standing on something.
    ///
    /// Returns `false` and leaves velocity untouched while airborne.
    pub fn jump<K: Kinematics + ?Sized>(&self, body: &mut K) -> bool {
        let can_jump = body.touching_down(self.sprite);
        if can_jump {
            body.set_velocity_y(self.sprite, -JUMP_SPEED);
        }
        can_jump
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
