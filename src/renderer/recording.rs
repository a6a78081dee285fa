//! Surface that records what would have been drawn

use glam::Vec2;

use super::{Color, Surface};
use crate::assets::SheetId;
use crate::sim::Rect;

/// One drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite { sheet: SheetId, src: Rect, dst: Rect },
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, color: Color, line_width: f32 },
    Line { from: Vec2, to: Vec2, color: Color, line_width: f32 },
    Text { text: String, center: Vec2, font_size: f32, color: Color },
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    /// Take the recorded commands, leaving the list empty
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Sprite blits in draw order
    pub fn sprites(&self) -> impl Iterator<Item = (SheetId, Rect, Rect)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Sprite { sheet, src, dst } => Some((*sheet, *src, *dst)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn draw_sprite(&mut self, sheet: SheetId, src: Rect, dst: Rect) {
        self.commands.push(DrawCommand::Sprite { sheet, src, dst });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            color,
            line_width,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color, line_width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            line_width,
        });
    }

    fn text_centered(&mut self, text: &str, center: Vec2, font_size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            center,
            font_size,
            color,
        });
    }
}
