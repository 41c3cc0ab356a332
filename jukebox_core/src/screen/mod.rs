//! Text-mode drawing surface.
//!
//! Coordinates follow the four-colour 320x200 screen mode: `x` is a byte
//! column (4 pixels per byte, 80 per line) and `y` a pixel line. A glyph is
//! 2 bytes wide and 8 lines tall.

pub mod buffer;
pub mod draw;

pub use buffer::{Cell, ScreenBuffer};
pub use draw::{draw_volume, print_label, TextStyle};

pub const SCREEN_WIDTH_BYTES: u16 = 80;
pub const SCREEN_HEIGHT_LINES: u16 = 200;
pub const GLYPH_WIDTH_BYTES: u16 = 2;
pub const GLYPH_HEIGHT_LINES: u16 = 8;

/// Palette index. Four pens in this mode.
pub type Pen = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenPos {
    pub x: u8,
    pub y: u8,
}

impl ScreenPos {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

pub trait Surface {
    fn set_draw_colors(&mut self, fg: Pen, bg: Pen);
    fn draw_string(&mut self, text: &str, at: ScreenPos);
    /// `width` in bytes, `height` in lines. A zero `pattern` clears.
    fn draw_solid_box(&mut self, at: ScreenPos, pattern: u8, width: u8, height: u8);
}
