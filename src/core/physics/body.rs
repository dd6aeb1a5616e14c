//=========================================================================
// Physics Body
//=========================================================================
//
// Per-sprite physics state: velocity, behaviour flags and contact flags.
//
// Position is not stored here; it lives on the owning `Sprite` so there
// is a single source of truth for where things are drawn and collided.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::geometry::Vec2;

//=== Contacts ============================================================

/// Which sides of a body are in contact with something.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Contacts {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Contacts {
    pub const NONE: Self = Self {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

//=== BodyFlags ===========================================================

/// Behaviour switches chosen when physics is enabled on a sprite.
///
/// Defaults describe a regular dynamic body: affected by gravity, pushed
/// by collisions, free to leave the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyFlags {
    /// World gravity is applied every step.
    pub allow_gravity: bool,

    /// Never moved by collision separation.
    pub immovable: bool,

    /// Clamped inside the world bounds (sets `blocked`).
    pub collide_world_bounds: bool,
}

impl BodyFlags {
    /// Dynamic body with gravity.
    pub const fn dynamic() -> Self {
        Self {
            allow_gravity: true,
            immovable: false,
            collide_world_bounds: false,
        }
    }

    /// Immovable, gravity-exempt body (platforms, walls).
    pub const fn fixed() -> Self {
        Self {
            allow_gravity: false,
            immovable: true,
            collide_world_bounds: false,
        }
    }

    pub const fn without_gravity(mut self) -> Self {
        self.allow_gravity = false;
        self
    }

    pub const fn with_world_bounds(mut self) -> Self {
        self.collide_world_bounds = true;
        self
    }
}

impl Default for BodyFlags {
    fn default() -> Self {
        Self::dynamic()
    }
}

//=== Body ================================================================

/// Arcade physics body attached to a sprite.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub velocity: Vec2,
    pub flags: BodyFlags,

    /// Contacts produced by collision separation since the last step.
    pub touching: Contacts,

    /// Contacts with the world bounds produced by the last step.
    pub blocked: Contacts,

    /// Top-left corner before the last step (motion = current - previous).
    pub(crate) previous: Vec2,
}

impl Body {
    pub(crate) fn new(flags: BodyFlags, top_left: Vec2) -> Self {
        Self {
            velocity: Vec2::ZERO,
            flags,
            touching: Contacts::NONE,
            blocked: Contacts::NONE,
            previous: top_left,
        }
    }

    /// Resting on top of a solid body.
    pub fn on_ground(&self) -> bool {
        self.touching.down
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_are_dynamic() {
        let flags = BodyFlags::default();
        assert!(flags.allow_gravity);
        assert!(!flags.immovable);
        assert!(!flags.collide_world_bounds);
    }

    #[test]
    fn fixed_flags() {
        let flags = BodyFlags::fixed();
        assert!(!flags.allow_gravity);
        assert!(flags.immovable);
    }

    #[test]
    fn builder_style_flags() {
        let flags = BodyFlags::dynamic().without_gravity().with_world_bounds();
        assert!(!flags.allow_gravity);
        assert!(flags.collide_world_bounds);
    }

    #[test]
    fn new_body_is_at_rest_without_contacts() {
        let body = Body::new(BodyFlags::dynamic(), Vec2::new(1.0, 2.0));
        assert_eq!(body.velocity, Vec2::ZERO);
        assert!(!body.touching.any());
        assert!(!body.on_ground());
    }
}
