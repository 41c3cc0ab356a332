use super::{
    Pen, ScreenPos, Surface, GLYPH_HEIGHT_LINES, GLYPH_WIDTH_BYTES, SCREEN_HEIGHT_LINES,
    SCREEN_WIDTH_BYTES,
};

pub const COLUMNS: usize = (SCREEN_WIDTH_BYTES / GLYPH_WIDTH_BYTES) as usize;
pub const ROWS: usize = (SCREEN_HEIGHT_LINES / GLYPH_HEIGHT_LINES) as usize;

const FILL_CHAR: char = '#';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Pen,
    pub bg: Pen,
}

impl Cell {
    /// Drawn with the background pen as foreground (fg 0 on bg 1).
    pub fn is_inverted(&self) -> bool {
        self.fg == 0 && self.bg != 0
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: 1,
            bg: 0,
        }
    }
}

/// In-memory glyph grid standing in for video memory.
#[derive(Debug, Clone)]
pub struct ScreenBuffer {
    cells: Vec<Cell>,
    fg: Pen,
    bg: Pen,
}

impl Default for ScreenBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenBuffer {
    pub fn new() -> Self {
        Self {
            cells: vec![Cell::default(); COLUMNS * ROWS],
            fg: 1,
            bg: 0,
        }
    }

    fn glyph_origin(at: ScreenPos) -> (usize, usize) {
        (
            (u16::from(at.x) / GLYPH_WIDTH_BYTES) as usize,
            (u16::from(at.y) / GLYPH_HEIGHT_LINES) as usize,
        )
    }

    fn cell_mut(&mut self, col: usize, row: usize) -> Option<&mut Cell> {
        if col < COLUMNS && row < ROWS {
            self.cells.get_mut(row * COLUMNS + col)
        } else {
            None
        }
    }

    /// Cell holding the glyph that covers `at`.
    pub fn cell_at(&self, at: ScreenPos) -> Cell {
        let (col, row) = Self::glyph_origin(at);
        if col < COLUMNS && row < ROWS {
            self.cells[row * COLUMNS + col]
        } else {
            Cell::default()
        }
    }

    /// `len` glyphs starting at `at`.
    pub fn text_at(&self, at: ScreenPos, len: usize) -> String {
        let (col, row) = Self::glyph_origin(at);
        if row >= ROWS {
            return String::new();
        }
        let end = (col + len).min(COLUMNS);
        self.cells[row * COLUMNS..(row + 1) * COLUMNS]
            .get(col..end)
            .map(|cells| cells.iter().map(|c| c.ch).collect())
            .unwrap_or_default()
    }

    pub fn render(&self) -> Vec<String> {
        self.cells
            .chunks(COLUMNS)
            .map(|row| {
                let line: String = row.iter().map(|c| c.ch).collect();
                line.trim_end().to_string()
            })
            .collect()
    }

    /// Rendered rows with trailing blank rows removed.
    pub fn render_string(&self) -> String {
        let mut lines = self.render();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines.join("\n")
    }
}

impl Surface for ScreenBuffer {
    fn set_draw_colors(&mut self, fg: Pen, bg: Pen) {
        self.fg = fg;
        self.bg = bg;
    }

    fn draw_string(&mut self, text: &str, at: ScreenPos) {
        let (col, row) = Self::glyph_origin(at);
        let (fg, bg) = (self.fg, self.bg);
        for (i, ch) in text.chars().enumerate() {
            match self.cell_mut(col + i, row) {
                Some(cell) => *cell = Cell { ch, fg, bg },
                None => break,
            }
        }
    }

    fn draw_solid_box(&mut self, at: ScreenPos, pattern: u8, width: u8, height: u8) {
        let (col, row) = Self::glyph_origin(at);
        let cols = usize::from(width).div_ceil(GLYPH_WIDTH_BYTES as usize);
        let rows = usize::from(height).div_ceil(GLYPH_HEIGHT_LINES as usize);
        let ch = if pattern == 0 { ' ' } else { FILL_CHAR };

        for r in row..row + rows {
            for c in col..col + cols {
                if let Some(cell) = self.cell_mut(c, r) {
                    *cell = Cell { ch, ..Cell::default() };
                }
            }
        }
    }
}
