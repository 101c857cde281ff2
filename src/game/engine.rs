use super::{
    config::GameConfig,
    direction::{Direction, Velocity},
    state::{Cell, CollisionType, RunningState, Snake},
};
use crate::render::Renderer;
use rand::{Rng, rngs::ThreadRng};
use std::time::Duration;
use tracing::{debug, info, trace};

/// Outcome of a single tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickResult {
    /// Running state after the tick
    pub state: RunningState,
    /// Score after the tick
    pub score: u32,
    /// Interval in milliseconds the next tick should be scheduled after
    pub speed_ms: f64,
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// What ended the game, if it ended. `Wall` wins when both apply.
    pub collision: Option<CollisionType>,
}

impl TickResult {
    /// Delay before the next tick
    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(self.speed_ms / 1000.0)
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }
}

/// The game loop: owns all Snake state and advances it one tick at a time
pub struct GameLoop<R: Rng = ThreadRng> {
    config: GameConfig,
    rng: R,
    board_width: i32,
    board_height: i32,
    unit_size: i32,
    snake: Snake,
    food: Cell,
    velocity: Velocity,
    score: u32,
    speed_ms: f64,
    state: RunningState,
    collision: Option<CollisionType>,
}

impl GameLoop<ThreadRng> {
    /// Create a game on a `board_width` x `board_height` board using the
    /// configured unit size
    pub fn new(config: GameConfig, board_width: i32, board_height: i32) -> Self {
        Self::with_rng(config, board_width, board_height, rand::thread_rng())
    }
}

impl<R: Rng> GameLoop<R> {
    /// Create a game drawing food placement from `rng`
    pub fn with_rng(config: GameConfig, board_width: i32, board_height: i32, rng: R) -> Self {
        let unit_size = config.unit_size;
        let mut game = Self {
            speed_ms: config.initial_speed_ms,
            config,
            rng,
            board_width,
            board_height,
            unit_size,
            snake: Snake::new(Cell::new(0, 0), Direction::Right, 1, unit_size),
            food: Cell::new(0, 0),
            velocity: Velocity::new(Direction::Right, unit_size),
            score: 0,
            state: RunningState::Running,
            collision: None,
        };
        game.reset(board_width, board_height, unit_size);
        game
    }

    /// Reinitialize every piece of state for a fresh game
    pub fn reset(&mut self, board_width: i32, board_height: i32, unit_size: i32) {
        self.board_width = board_width;
        self.board_height = board_height;
        self.unit_size = unit_size;

        let length = self.config.initial_snake_length.max(1);
        let head = Cell::new((length as i32 - 1) * unit_size, 0);

        self.score = 0;
        self.velocity = Velocity::new(Direction::Right, unit_size);
        self.speed_ms = self.config.initial_speed_ms;
        self.snake = Snake::new(head, Direction::Right, length, unit_size);
        self.food = self.spawn_food();
        self.state = RunningState::Running;
        self.collision = None;

        info!(
            board_width,
            board_height,
            unit_size,
            food_x = self.food.x,
            food_y = self.food.y,
            "game reset"
        );
    }

    /// Reset on the board dimensions of the previous game
    pub fn restart(&mut self) {
        self.reset(self.board_width, self.board_height, self.unit_size);
    }

    /// Steer towards `heading` from the next tick on.
    ///
    /// A reversal of the current heading is ignored. Returns whether the
    /// request was taken.
    pub fn set_direction(&mut self, heading: Direction) -> bool {
        if self.velocity.heading().is_opposite(heading) {
            trace!(?heading, "reverse heading ignored");
            return false;
        }

        self.velocity = Velocity::new(heading, self.unit_size);
        true
    }

    /// Advance the simulation one step. A no-op once the game is over.
    pub fn tick(&mut self) -> TickResult {
        if self.state.is_over() {
            return self.result(false);
        }

        let new_head = self
            .snake
            .head()
            .moved_by(self.velocity.dx(), self.velocity.dy());
        let ate_food = new_head == self.food;

        self.snake.advance(new_head, ate_food);

        if ate_food {
            self.score += 1;
            self.food = self.spawn_food();

            // a zero period never speeds up
            if self.score.checked_rem(self.config.speedup_every) == Some(0) {
                self.speed_ms *= self.config.speedup_factor;
            }

            debug!(
                score = self.score,
                speed_ms = self.speed_ms,
                length = self.snake.len(),
                "food eaten"
            );
        }

        if let Some(collision) = self.check_collision() {
            self.state = RunningState::Over;
            self.collision = Some(collision);
            info!(?collision, score = self.score, "game over");
        }

        self.result(ate_food)
    }

    /// Draw the current state: clear, food, snake, score, then the
    /// game-over banner once the game has ended
    pub fn render<T: Renderer + ?Sized>(&self, renderer: &mut T) {
        renderer.clear(self.board_width, self.board_height);
        renderer.draw_food(self.food, self.unit_size);
        renderer.draw_snake(self.snake.cells(), self.unit_size);
        renderer.set_score_display(self.score);

        if self.state.is_over() {
            renderer.draw_game_over(self.board_width, self.board_height);
        }
    }

    /// Check the head against the walls and the rest of the body
    fn check_collision(&self) -> Option<CollisionType> {
        let head = self.snake.head();
        let margin = self.config.wall_margin;

        let hit_wall = head.x < 0
            || head.x >= self.board_width - margin
            || head.y < 0
            || head.y >= self.board_height - margin;

        if hit_wall {
            return Some(CollisionType::Wall);
        }

        if self.snake.collides_with_body(head) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Pick a random grid-aligned cell within `[0, dimension - unit]` on each axis
    fn spawn_food(&mut self) -> Cell {
        let x = random_axis(&mut self.rng, self.board_width, self.unit_size);
        let y = random_axis(&mut self.rng, self.board_height, self.unit_size);
        Cell::new(x, y)
    }

    fn result(&self, ate_food: bool) -> TickResult {
        TickResult {
            state: self.state,
            score: self.score,
            speed_ms: self.speed_ms,
            ate_food,
            collision: self.collision,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn heading(&self) -> Direction {
        self.velocity.heading()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed_ms(&self) -> f64 {
        self.speed_ms
    }

    pub fn running_state(&self) -> RunningState {
        self.state
    }

    pub fn collision(&self) -> Option<CollisionType> {
        self.collision
    }

    pub fn board_size(&self) -> (i32, i32) {
        (self.board_width, self.board_height)
    }

    pub fn unit_size(&self) -> i32 {
        self.unit_size
    }

    /// Move the food to `cell`, e.g. to set up a scenario
    pub fn place_food(&mut self, cell: Cell) {
        self.food = cell;
    }

    /// Replace the snake body, e.g. to set up a scenario
    pub fn place_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }
}

/// `floor(random * span / unit) * unit` for `span = dimension - unit`
fn random_axis<R: Rng>(rng: &mut R, dimension: i32, unit: i32) -> i32 {
    let span = dimension - unit;
    if span <= 0 || unit <= 0 {
        return 0;
    }

    let slots = (span + unit - 1) / unit;
    rng.gen_range(0..slots) * unit
}
