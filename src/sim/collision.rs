//! Axis-aligned collision detection
//!
//! Every hitbox in the game is an axis-aligned rectangle, so one overlap test
//! covers player/ghost and player/collectible contacts.

use glam::Vec2;

/// Axis-aligned rectangle in screen pixels (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Square of edge `size` with its top-left corner at `pos`
    pub fn tile(pos: Vec2, size: f32) -> Self {
        Self::new(pos.x, pos.y, size, size)
    }

    /// Shrink by `dx` on the left and right and `dy` on the top and bottom
    pub fn inset(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w - 2.0 * dx, self.h - 2.0 * dy)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Overlap test, see [`rect_intersect`]
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        rect_intersect(self, other)
    }
}

/// Check whether two rectangles overlap
///
/// Uses strict inequalities: rectangles that only share an edge
/// (`b.x == a.x + a.w`) do not intersect.
pub fn rect_intersect(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}
