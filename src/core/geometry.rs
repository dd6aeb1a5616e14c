//=========================================================================
// Geometry
//=========================================================================
//
// Minimal 2D vector and axis-aligned rectangle types shared by the stage
// and physics modules.
//
// Coordinate system: screen space, origin top-left, +y pointing down.
//
//=========================================================================

//=== Vec2 ================================================================

/// 2D vector in world units (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

//=== Rect ================================================================

/// Axis-aligned rectangle (top-left corner + size).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict intersection test: rectangles sharing only an edge do not
    /// intersect. A body resting exactly on a platform is not overlapping it.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
