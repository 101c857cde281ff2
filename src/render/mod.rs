//! Presentation side of the game
//!
//! [`Renderer`] is the surface the game loop draws through. The terminal
//! front end implements it with [`BoardCanvas`], which [`TerminalRenderer`]
//! then paints with ratatui.

pub mod canvas;
pub mod renderer;

pub use canvas::{BoardCanvas, Glyph};
pub use renderer::TerminalRenderer;

use crate::game::Cell;

/// Drawing surface driven by [`GameLoop::render`](crate::game::GameLoop::render).
///
/// Sizes and coordinates are in board units; `unit_size` is the edge length
/// of one cell.
pub trait Renderer {
    /// Blank the whole board
    fn clear(&mut self, width: i32, height: i32);

    fn draw_food(&mut self, cell: Cell, unit_size: i32);

    /// Draw the snake, head first
    fn draw_snake(&mut self, cells: &[Cell], unit_size: i32);

    /// Show the terminal banner. Only called once the game is over.
    fn draw_game_over(&mut self, width: i32, height: i32);

    fn set_score_display(&mut self, score: u32);
}
