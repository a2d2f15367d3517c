use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// CSS colour understood by the drawing backend.
pub type Color = &'static str;

/// Minimal 2D drawing collaborator used by the canvas games.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_px: u16, color: Color);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font_px: u16,
        color: Color,
    },
}

/// Surface that records every call, for headless rendering checks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawLog {
    pub commands: Vec<DrawCommand>,
}

impl DrawLog {
    pub fn rects_with(&self, color: Color) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(move |cmd| matches!(cmd, DrawCommand::Rect { color: c, .. } if *c == color))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for DrawLog {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_px: u16, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font_px,
            color,
        });
    }
}
