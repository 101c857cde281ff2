use super::Renderer;
use crate::game::Cell;

/// Content of one terminal cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Glyph {
    #[default]
    Empty,
    Food,
    Head,
    Body,
}

/// Grid of glyphs built from renderer calls, one glyph per board cell
#[derive(Debug, Clone, Default)]
pub struct BoardCanvas {
    unit_size: i32,
    columns: usize,
    rows: usize,
    glyphs: Vec<Glyph>,
    score: u32,
    game_over: bool,
}

impl BoardCanvas {
    pub fn new(unit_size: i32) -> Self {
        Self {
            unit_size: unit_size.max(1),
            ..Default::default()
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Glyph at grid column `column`, row `row`
    pub fn glyph(&self, column: usize, row: usize) -> Glyph {
        if column >= self.columns || row >= self.rows {
            return Glyph::Empty;
        }
        self.glyphs[row * self.columns + column]
    }

    /// Glyph rows, top to bottom
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Glyph]> {
        self.glyphs.chunks(self.columns.max(1))
    }

    /// Cells off the board (a head that just hit the wall) are dropped
    fn put(&mut self, cell: Cell, unit_size: i32, glyph: Glyph) {
        let unit = unit_size.max(1);
        if cell.x < 0 || cell.y < 0 {
            return;
        }

        let (column, row) = ((cell.x / unit) as usize, (cell.y / unit) as usize);
        if column < self.columns && row < self.rows {
            self.glyphs[row * self.columns + column] = glyph;
        }
    }
}

impl Renderer for BoardCanvas {
    fn clear(&mut self, width: i32, height: i32) {
        let unit = self.unit_size;
        self.columns = (width.max(0) as usize).div_ceil(unit as usize);
        self.rows = (height.max(0) as usize).div_ceil(unit as usize);
        self.glyphs.clear();
        self.glyphs.resize(self.columns * self.rows, Glyph::Empty);
        self.game_over = false;
    }

    fn draw_food(&mut self, cell: Cell, unit_size: i32) {
        self.put(cell, unit_size, Glyph::Food);
    }

    fn draw_snake(&mut self, cells: &[Cell], unit_size: i32) {
        // tail first so the head stays visible where the body overlaps it
        for cell in cells.iter().skip(1).rev() {
            self.put(*cell, unit_size, Glyph::Body);
        }
        if let Some(head) = cells.first() {
            self.put(*head, unit_size, Glyph::Head);
        }
    }

    fn draw_game_over(&mut self, _width: i32, _height: i32) {
        self.game_over = true;
    }

    fn set_score_display(&mut self, score: u32) {
        self.score = score;
    }
}
