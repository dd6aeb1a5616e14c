//=========================================================================
// Stage
//=========================================================================
//
// Ordered list of sprites making up the visible scene.
//
// Architecture:
//   Stage
//     └─ sprites: Vec<Sprite>     (index = SpriteHandle, order = draw order)
//          ├─ key / position / anchor / size
//          ├─ alive flag           (dead sprites are skipped everywhere)
//          ├─ body: Option<Body>   (physics, see core::physics)
//          └─ animation: Option<AnimationState>
//
// Sprites are never removed from the vector, so handles stay valid for
// the whole life of the stage. Killing a sprite only flips `alive`.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use crate::core::animation::AnimationState;
use crate::core::geometry::{Rect, Vec2};
use crate::core::physics::Body;

//=== SpriteHandle ========================================================

/// Stable reference to a sprite on the [`Stage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpriteHandle(pub(crate) usize);

impl SpriteHandle {
    /// Position in draw order (0 = drawn first, at the back).
    pub fn index(&self) -> usize {
        self.0
    }
}

//=== Sprite ==============================================================

/// A positioned, optionally physical and animated, visual.
#[derive(Debug, Clone)]
pub struct Sprite {
    /// Texture / sheet tag.
    pub key: String,

    /// Position of the anchor point in world space.
    pub position: Vec2,

    /// Normalised pivot: (0, 0) top-left, (0.5, 0.5) centre.
    pub anchor: Vec2,

    /// Display (and body) size.
    pub size: Vec2,

    pub(crate) alive: bool,
    pub(crate) body: Option<Body>,
    pub(crate) animation: Option<AnimationState>,
}

impl Sprite {
    pub(crate) fn new(key: &str, position: Vec2, anchor: Vec2, size: Vec2) -> Self {
        Self {
            key: key.to_owned(),
            position,
            anchor,
            size,
            alive: true,
            body: None,
            animation: None,
        }
    }

    /// World-space bounding box, honouring the anchor.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x - self.anchor.x * self.size.x,
            self.position.y - self.anchor.y * self.size.y,
            self.size.x,
            self.size.y,
        )
    }

    /// Moves the sprite so its bounding box starts at `top_left`.
    pub(crate) fn set_top_left(&mut self, top_left: Vec2) {
        self.position = Vec2::new(
            top_left.x + self.anchor.x * self.size.x,
            top_left.y + self.anchor.y * self.size.y,
        );
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    pub fn body_mut(&mut self) -> Option<&mut Body> {
        self.body.as_mut()
    }

    pub fn animation(&self) -> Option<&AnimationState> {
        self.animation.as_ref()
    }

    /// Sheet frame to draw (0 for plain images).
    pub fn frame(&self) -> usize {
        self.animation.as_ref().map(AnimationState::frame).unwrap_or(0)
    }
}

//=== Group ===============================================================

/// Ordered collection of sprite handles (platforms, coins, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    members: Vec<SpriteHandle>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, sprite: SpriteHandle) {
        self.members.push(sprite);
    }

    pub fn members(&self) -> &[SpriteHandle] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members still alive on `stage`, in insertion order.
    pub fn living<'a>(&'a self, stage: &'a Stage) -> impl Iterator<Item = SpriteHandle> + 'a {
        self.members.iter().copied().filter(move |&handle| stage.is_alive(handle))
    }
}

//=== Stage ===============================================================

/// Owner of every sprite in the running scene.
#[derive(Debug, Default)]
pub struct Stage {
    sprites: Vec<Sprite>,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Construction -----------------------------------------------------

    /// Appends a sprite on top of everything added before it.
    pub fn add(&mut self, sprite: Sprite) -> SpriteHandle {
        let handle = SpriteHandle(self.sprites.len());
        debug!(
            target: "stage",
            "Added '{}' #{} at ({}, {})",
            sprite.key,
            handle.0,
            sprite.position.x,
            sprite.position.y
        );
        self.sprites.push(sprite);
        handle
    }

    //--- Access -----------------------------------------------------------

    pub fn get(&self, handle: SpriteHandle) -> Option<&Sprite> {
        self.sprites.get(handle.0)
    }

    pub fn get_mut(&mut self, handle: SpriteHandle) -> Option<&mut Sprite> {
        self.sprites.get_mut(handle.0)
    }

    /// Mutable access to two distinct sprites at once.
    pub(crate) fn pair_mut(
        &mut self,
        a: SpriteHandle,
        b: SpriteHandle,
    ) -> Option<(&mut Sprite, &mut Sprite)> {
        if a == b || a.0 >= self.sprites.len() || b.0 >= self.sprites.len() {
            return None;
        }
        if a.0 < b.0 {
            let (head, tail) = self.sprites.split_at_mut(b.0);
            Some((&mut head[a.0], &mut tail[0]))
        } else {
            let (head, tail) = self.sprites.split_at_mut(a.0);
            Some((&mut tail[0], &mut head[b.0]))
        }
    }

    pub fn is_alive(&self, handle: SpriteHandle) -> bool {
        self.get(handle).is_some_and(Sprite::is_alive)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Live sprites in draw order (back to front).
    pub fn visible(&self) -> impl Iterator<Item = (SpriteHandle, &Sprite)> {
        self.sprites
            .iter()
            .enumerate()
            .filter(|(_, sprite)| sprite.alive)
            .map(|(index, sprite)| (SpriteHandle(index), sprite))
    }

    pub(crate) fn sprites_mut(&mut self) -> impl Iterator<Item = &mut Sprite> {
        self.sprites.iter_mut()
    }

    //--- Lifecycle --------------------------------------------------------

    /// Removes a sprite from simulation and display. One-way.
    ///
    /// Returns `true` only on the live → dead transition.
    pub fn kill(&mut self, handle: SpriteHandle) -> bool {
        match self.get_mut(handle) {
            Some(sprite) if sprite.alive => {
                sprite.alive = false;
                trace!(target: "stage", "Killed '{}' #{}", sprite.key, handle.0);
                true
            }
            _ => false,
        }
    }

    /// Advances animations of live sprites.
    pub fn advance_animations(&mut self, dt: f32) {
        for sprite in self.sprites.iter_mut().filter(|s| s.alive) {
            if let Some(animation) = sprite.animation.as_mut() {
                animation.advance(dt);
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
