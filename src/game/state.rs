use super::direction::Direction;

/// One grid cell on the board, in board units
///
/// Coordinates are always multiples of the unit size the game was reset with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The snake body
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body cells, with head at index 0
    body: Vec<Cell>,
}

impl Snake {
    /// Lay out `length` cells behind `head`, opposite to `direction`
    pub fn new(head: Cell, direction: Direction, length: usize, unit_size: i32) -> Self {
        let mut body = vec![head];

        let (dx, dy) = direction.delta();
        let (back_dx, back_dy) = (-dx * unit_size, -dy * unit_size);

        for i in 1..length.max(1) {
            let prev = body[i - 1];
            body.push(prev.moved_by(back_dx, back_dy));
        }

        Self { body }
    }

    /// Build a snake from explicit cells, head first. `None` if `cells` is empty.
    pub fn from_cells(cells: Vec<Cell>) -> Option<Self> {
        if cells.is_empty() {
            None
        } else {
            Some(Self { body: cells })
        }
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// All cells, head first
    pub fn cells(&self) -> &[Cell] {
        &self.body
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Cell] {
        &self.body[1..]
    }

    /// Check if a cell collides with the body (excluding head)
    pub fn collides_with_body(&self, cell: Cell) -> bool {
        self.body_segments().contains(&cell)
    }

    /// Prepend `new_head`, dropping the tail unless `grow` is set
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Head crossed the board boundary
    Wall,
    /// Head landed on another body cell
    SelfCollision,
}

/// Whether the simulation still accepts ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunningState {
    #[default]
    Running,
    Over,
}

impl RunningState {
    pub fn is_running(&self) -> bool {
        matches!(self, RunningState::Running)
    }

    pub fn is_over(&self) -> bool {
        matches!(self, RunningState::Over)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_movement() {
        let cell = Cell::new(50, 50);
        assert_eq!(cell.moved_by(25, 0), Cell::new(75, 50));
        assert_eq!(cell.moved_by(-25, 0), Cell::new(25, 50));
        assert_eq!(cell.moved_by(0, 25), Cell::new(50, 75));
        assert_eq!(cell.moved_by(0, -25), Cell::new(50, 25));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Cell::new(100, 0), Direction::Right, 5, 25);
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.head(), Cell::new(100, 0));
        assert_eq!(snake.tail(), Cell::new(0, 0));
        assert_eq!(snake.cells()[1], Cell::new(75, 0));
    }

    #[test]
    fn test_snake_keeps_head_for_zero_length() {
        let snake = Snake::new(Cell::new(0, 0), Direction::Down, 0, 25);
        assert_eq!(snake.len(), 1);
        assert!(!snake.is_empty());
    }

    #[test]
    fn test_from_cells_rejects_empty() {
        assert!(Snake::from_cells(Vec::new()).is_none());
        let snake = Snake::from_cells(vec![Cell::new(25, 25)]).unwrap();
        assert_eq!(snake.head(), snake.tail());
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = Snake::new(Cell::new(50, 0), Direction::Right, 3, 25);

        snake.advance(Cell::new(75, 0), false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(75, 0));
        assert_eq!(snake.tail(), Cell::new(25, 0));

        snake.advance(Cell::new(100, 0), true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Cell::new(100, 0));
        assert_eq!(snake.tail(), Cell::new(25, 0));
    }

    #[test]
    fn test_collision_detection() {
        let snake = Snake::new(Cell::new(50, 50), Direction::Right, 3, 25);
        assert!(!snake.collides_with_body(Cell::new(50, 50))); // head
        assert!(snake.collides_with_body(Cell::new(25, 50))); // body
        assert!(!snake.collides_with_body(Cell::new(200, 200))); // empty
    }

    #[test]
    fn test_running_state() {
        assert_eq!(RunningState::default(), RunningState::Running);
        assert!(RunningState::Running.is_running());
        assert!(RunningState::Over.is_over());
        assert!(!RunningState::Over.is_running());
    }
}
