//! Browser canvas 2D backend

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{Color, Surface};
use crate::assets::SheetId;
use crate::sim::Rect;

/// Canvas 2D context plus the decoded sprite sheets
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    size: Vec2,
    /// Indexed by [`SheetId::index`]; `None` for sheets that failed to load
    sheets: [Option<HtmlImageElement>; SheetId::ALL.len()],
}

impl CanvasSurface {
    /// Wrap a canvas; returns `None` if it has no 2D context
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into()
            .ok()?;
        // Pixel art: nearest-neighbor scaling
        ctx.set_image_smoothing_enabled(false);

        Some(Self {
            ctx,
            size: Vec2::new(canvas.width() as f32, canvas.height() as f32),
            sheets: Default::default(),
        })
    }

    pub fn set_sheet(&mut self, sheet: SheetId, image: HtmlImageElement) {
        self.sheets[sheet.index()] = Some(image);
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn draw_sprite(&mut self, sheet: SheetId, src: Rect, dst: Rect) {
        let Some(image) = &self.sheets[sheet.index()] else {
            return;
        };
        let _ = self
            .ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                image,
                src.x as f64,
                src.y as f64,
                src.w as f64,
                src.h as f64,
                dst.x as f64,
                dst.y as f64,
                dst.w as f64,
                dst.h as f64,
            );
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(line_width as f64);
        self.ctx
            .stroke_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color, line_width: f32) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(line_width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn text_centered(&mut self, text: &str, center: Vec2, font_size: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_font(&format!("{}px monospace", font_size));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        let _ = self.ctx.fill_text(text, center.x as f64, center.y as f64);
    }
}
