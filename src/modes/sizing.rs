//! Board dimensions for the terminal viewport
//!
//! A fitted board is square and spans 90% of the smaller viewport dimension,
//! measured in cells. The result only takes effect at the next reset.

use crate::game::GameConfig;
use crate::render::renderer::{BORDER, CELL_WIDTH, FOOTER_HEIGHT, HEADER_HEIGHT};

/// Share of the smaller viewport dimension a fitted board takes
const FIT_FRACTION: f64 = 0.9;

/// Board size in board units for a `columns` x `rows` terminal
pub fn board_dimensions(config: &GameConfig, columns: u16, rows: u16) -> (i32, i32) {
    if let Some(fixed) = config.board_dimensions() {
        return fixed;
    }

    let cells = fitted_cells(columns, rows) as i32;
    (cells * config.unit_size, cells * config.unit_size)
}

/// Side of the square board, in cells, that fits a `columns` x `rows` terminal
pub fn fitted_cells(columns: u16, rows: u16) -> usize {
    let across = columns.saturating_sub(BORDER) / CELL_WIDTH;
    let down = rows.saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT + BORDER);
    let side = (across.min(down) as f64 * FIT_FRACTION).floor() as usize;
    side.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fitted_cells() {
        // 80x24: 39 across, 16 down -> floor(16 * 0.9)
        assert_eq!(fitted_cells(80, 24), 14);
        // wide and short terminals are limited by rows, narrow ones by columns
        assert_eq!(fitted_cells(200, 30), 19);
        assert_eq!(fitted_cells(22, 60), 9);
    }

    #[test]
    fn test_tiny_terminal_still_has_a_cell() {
        assert_eq!(fitted_cells(0, 0), 1);
    }

    #[test]
    fn test_fixed_grid_wins() {
        let config = GameConfig::new(10, 8);
        assert_eq!(board_dimensions(&config, 200, 60), (250, 200));
    }

    #[test]
    fn test_fitted_board_is_square() {
        let config = GameConfig::default();
        assert_eq!(board_dimensions(&config, 80, 24), (350, 350));
    }
}
