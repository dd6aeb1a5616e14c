//=========================================================================
// Arcade Physics
//=========================================================================
//
// Axis-aligned rigid bodies with gravity, world bounds, solid collision
// and non-solid overlap queries.
//
// Architecture:
// ```text
//   step(dt)                        once per tick, before scene update
//     ├─ reset touching / blocked
//     ├─ remember previous position
//     ├─ velocity.y += gravity * dt   (allow_gravity only)
//     ├─ position  += velocity * dt
//     └─ clamp to world bounds        (collide_world_bounds only)
//
//   collide(a, group)               called by scenes, solid
//     └─ separate Y, then X if still intersecting
//
//   overlap(a, group)               called by scenes, report only
// ```
//
// Separation on an axis uses the relative motion of the two bodies during
// the last step to decide which side was hit, and refuses to resolve an
// overlap deeper than that motion plus `OVERLAP_BIAS`. Bodies that were
// already deep inside each other are left alone rather than teleported.
//
//=========================================================================

//=== Module Declarations =================================================

mod body;

//=== Public API ==========================================================

pub use body::{Body, BodyFlags, Contacts};

//=== External Dependencies ===============================================

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::geometry::{Rect, Vec2};
use crate::core::stage::{Group, Sprite, SpriteHandle, Stage};

/// Extra penetration (pixels) tolerated beyond the bodies' own motion.
const OVERLAP_BIAS: f32 = 4.0;

//=== ArcadePhysics =======================================================

/// World-wide physics settings and the operations that act on the stage.
#[derive(Debug, Clone)]
pub struct ArcadePhysics {
    gravity_y: f32,
    bounds: Rect,
}

impl ArcadePhysics {
    /// Creates a world of the given size with no gravity.
    pub fn new(world_size: Vec2) -> Self {
        Self {
            gravity_y: 0.0,
            bounds: Rect::new(0.0, 0.0, world_size.x, world_size.y),
        }
    }

    //--- Settings ---------------------------------------------------------

    /// Sets the downward gravity (pixels / s²) applied to every body that
    /// allows gravity.
    pub fn set_gravity(&mut self, gravity_y: f32) {
        debug!(target: "physics", "World gravity set to {}", gravity_y);
        self.gravity_y = gravity_y;
    }

    pub fn gravity(&self) -> f32 {
        self.gravity_y
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    //--- Bodies -----------------------------------------------------------

    /// Attaches a body to a sprite. Replaces any existing body.
    ///
    /// Returns `false` if the sprite does not exist.
    pub fn enable(&self, stage: &mut Stage, handle: SpriteHandle, flags: BodyFlags) -> bool {
        let Some(sprite) = stage.get_mut(handle) else {
            warn!(target: "physics", "Cannot enable physics on missing sprite {:?}", handle);
            return false;
        };
        let bounds = sprite.bounds();
        sprite.body = Some(Body::new(flags, Vec2::new(bounds.x, bounds.y)));
        true
    }

    //--- step() -----------------------------------------------------------

    /// Integrates every live body by `dt` seconds.
    pub fn step(&self, stage: &mut Stage, dt: f32) {
        for sprite in stage.sprites_mut().filter(|sprite| sprite.alive) {
            let bounds = sprite.bounds();
            let Some(body) = sprite.body.as_mut() else {
                continue;
            };

            body.touching = Contacts::NONE;
            body.blocked = Contacts::NONE;
            body.previous = Vec2::new(bounds.x, bounds.y);

            if body.flags.allow_gravity {
                body.velocity.y += self.gravity_y * dt;
            }

            let mut top_left = Vec2::new(
                bounds.x + body.velocity.x * dt,
                bounds.y + body.velocity.y * dt,
            );

            if body.flags.collide_world_bounds {
                self.clamp_to_bounds(body, &mut top_left, bounds);
            }

            sprite.set_top_left(top_left);
        }
    }

    fn clamp_to_bounds(&self, body: &mut Body, top_left: &mut Vec2, size: Rect) {
        let world = self.bounds;

        if top_left.x < world.x {
            top_left.x = world.x;
            body.velocity.x = 0.0;
            body.blocked.left = true;
        } else if top_left.x + size.width > world.right() {
            top_left.x = world.right() - size.width;
            body.velocity.x = 0.0;
            body.blocked.right = true;
        }

        if top_left.y < world.y {
            top_left.y = world.y;
            body.velocity.y = 0.0;
            body.blocked.up = true;
        } else if top_left.y + size.height > world.bottom() {
            top_left.y = world.bottom() - size.height;
            body.velocity.y = 0.0;
            body.blocked.down = true;
        }
    }

    //--- collide() --------------------------------------------------------

    /// Solid collision between `sprite` and every live member of `group`.
    ///
    /// Returns how many members were separated from `sprite`.
    pub fn collide(&self, stage: &mut Stage, sprite: SpriteHandle, group: &Group) -> usize {
        let mut separated = 0;

        for &other in group.members() {
            if !stage.is_alive(sprite) {
                break;
            }
            if other == sprite || !stage.is_alive(other) {
                continue;
            }
            if let Some((first, second)) = stage.pair_mut(sprite, other) {
                if separate(first, second) {
                    separated += 1;
                }
            }
        }

        separated
    }

    //--- overlap() --------------------------------------------------------

    /// Live members of `group` whose bodies intersect `sprite`'s body.
    ///
    /// Nothing is moved and no contact flags change.
    pub fn overlap(&self, stage: &Stage, sprite: SpriteHandle, group: &Group) -> Vec<SpriteHandle> {
        let Some(subject) = stage.get(sprite).filter(|s| s.alive && s.body.is_some()) else {
            return Vec::new();
        };
        let bounds = subject.bounds();

        group
            .living(stage)
            .filter(|&other| other != sprite)
            .filter(|&other| {
                stage
                    .get(other)
                    .filter(|s| s.body.is_some())
                    .is_some_and(|s| s.bounds().intersects(&bounds))
            })
            .collect()
    }
}

//=== Separation ==========================================================

#[derive(Debug, Clone, Copy)]
enum Axis {
    X,
    Y,
}

impl Axis {
    fn of(self, v: Vec2) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }

    fn min(self, r: &Rect) -> f32 {
        match self {
            Axis::X => r.x,
            Axis::Y => r.y,
        }
    }

    fn max(self, r: &Rect) -> f32 {
        match self {
            Axis::X => r.right(),
            Axis::Y => r.bottom(),
        }
    }

    fn velocity(self, body: &mut Body) -> &mut f32 {
        match self {
            Axis::X => &mut body.velocity.x,
            Axis::Y => &mut body.velocity.y,
        }
    }

    /// Marks the leading side (right / down) or the trailing side.
    fn mark(self, contacts: &mut Contacts, leading: bool) {
        match (self, leading) {
            (Axis::X, true) => contacts.right = true,
            (Axis::X, false) => contacts.left = true,
            (Axis::Y, true) => contacts.down = true,
            (Axis::Y, false) => contacts.up = true,
        }
    }
}

/// Motion of a sprite's body during the last step.
fn motion(sprite: &Sprite, body: &Body) -> Vec2 {
    let bounds = sprite.bounds();
    Vec2::new(bounds.x - body.previous.x, bounds.y - body.previous.y)
}

/// Moves a sprite's bounding box along one axis.
fn shift(sprite: &mut Sprite, axis: Axis, amount: f32) {
    let bounds = sprite.bounds();
    let top_left = match axis {
        Axis::X => Vec2::new(bounds.x + amount, bounds.y),
        Axis::Y => Vec2::new(bounds.x, bounds.y + amount),
    };
    sprite.set_top_left(top_left);
}

/// Separates two intersecting bodies, vertical axis first.
fn separate(first: &mut Sprite, second: &mut Sprite) -> bool {
    match (first.body.as_ref(), second.body.as_ref()) {
        (Some(a), Some(b)) if !(a.flags.immovable && b.flags.immovable) => {}
        _ => return false,
    }
    if !first.bounds().intersects(&second.bounds()) {
        return false;
    }

    let vertical = separate_axis(first, second, Axis::Y);
    let horizontal = first.bounds().intersects(&second.bounds())
        && separate_axis(first, second, Axis::X);

    vertical || horizontal
}

fn separate_axis(first: &mut Sprite, second: &mut Sprite, axis: Axis) -> bool {
    let (r1, r2) = (first.bounds(), second.bounds());
    let (Some(b1), Some(b2)) = (first.body.as_ref(), second.body.as_ref()) else {
        return false;
    };

    let d1 = axis.of(motion(first, b1));
    let d2 = axis.of(motion(second, b2));
    let max_overlap = d1.abs() + d2.abs() + OVERLAP_BIAS;

    // `first` hit `second` with its leading side when it moved further
    // along the axis than `second` did.
    let first_leading = if d1 > d2 {
        true
    } else if d1 < d2 {
        false
    } else {
        return false;
    };

    let overlap = if first_leading {
        axis.max(&r1) - axis.min(&r2)
    } else {
        axis.min(&r1) - axis.max(&r2)
    };
    if overlap == 0.0 || overlap.abs() > max_overlap {
        return false;
    }

    let (immovable1, immovable2) = (b1.flags.immovable, b2.flags.immovable);

    if let Some(body) = first.body.as_mut() {
        axis.mark(&mut body.touching, first_leading);
    }
    if let Some(body) = second.body.as_mut() {
        axis.mark(&mut body.touching, !first_leading);
    }

    let v1 = first.body.as_mut().map(|b| *axis.velocity(b)).unwrap_or(0.0);
    let v2 = second.body.as_mut().map(|b| *axis.velocity(b)).unwrap_or(0.0);

    match (immovable1, immovable2) {
        (false, false) => {
            let half = overlap * 0.5;
            let average = (v1 + v2) * 0.5;
            shift(first, axis, -half);
            shift(second, axis, half);
            for body in [first.body.as_mut(), second.body.as_mut()].into_iter().flatten() {
                *axis.velocity(body) = average;
            }
        }
        (false, true) => {
            shift(first, axis, -overlap);
            if let Some(body) = first.body.as_mut() {
                *axis.velocity(body) = v2;
            }
        }
        (true, false) => {
            shift(second, axis, overlap);
            if let Some(body) = second.body.as_mut() {
                *axis.velocity(body) = v1;
            }
        }
        (true, true) => return false,
    }

    true
}

//=========================================================================
// Unit Tests
//=========================================================================
