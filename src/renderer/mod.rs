//! Rendering module
//!
//! The game draws through the [`Surface`] trait: scaled sprite blits, filled and
//! stroked rects, lines and centered text. Backends:
//! - `canvas`: browser canvas 2D (wasm32 only)
//! - `recording`: records draw commands (headless runs and tests)

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use scene::draw_frame;

use glam::Vec2;

use crate::assets::SheetId;
use crate::sim::Rect;

/// Straight RGBA color, alpha in 0-1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string, e.g. `rgba(255,0,0,0.5)`
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// 2D drawing target of fixed logical size
pub trait Surface {
    /// Logical size in pixels, read once at startup
    fn size(&self) -> Vec2;

    /// Blit `src` (sheet pixels) into `dst` (screen pixels), nearest-neighbor
    fn draw_sprite(&mut self, sheet: SheetId, src: Rect, dst: Rect);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32);

    fn line(&mut self, from: Vec2, to: Vec2, color: Color, line_width: f32);

    /// Text centered horizontally and vertically on `center`
    fn text_centered(&mut self, text: &str, center: Vec2, font_size: f32, color: Color);

    /// Alpha-blended fill over the whole surface
    fn fill_screen(&mut self, color: Color) {
        let size = self.size();
        self.fill_rect(Rect::new(0.0, 0.0, size.x, size.y), color);
    }
}
