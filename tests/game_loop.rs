use rand::{Rng, SeedableRng, rngs::StdRng};
use snake_loop::game::{
    Cell, CollisionType, Direction, GameConfig, GameLoop, RunningState, Snake, Velocity,
};
use snake_loop::render::{BoardCanvas, Glyph};

const SEED: u64 = 42;

fn cells(coords: &[(i32, i32)]) -> Vec<Cell> {
    coords.iter().map(|&(x, y)| Cell::new(x, y)).collect()
}

fn new_game() -> GameLoop<StdRng> {
    GameLoop::with_rng(GameConfig::default(), 250, 250, StdRng::seed_from_u64(SEED))
}

#[test]
fn reset_lays_out_initial_snake() {
    let game = new_game();

    assert_eq!(
        game.snake().cells(),
        cells(&[(100, 0), (75, 0), (50, 0), (25, 0), (0, 0)]).as_slice()
    );
    assert_eq!(game.velocity(), Velocity::new(Direction::Right, 25));
    assert_eq!(game.score(), 0);
    assert_eq!(game.running_state(), RunningState::Running);
}

#[test]
fn reversing_is_ignored() {
    let mut game = new_game();

    game.set_direction(Direction::Left);

    assert_eq!(game.velocity(), Velocity::new(Direction::Right, 25));
}

#[test]
fn eating_grows_and_replaces_food() {
    let mut game = new_game();
    game.place_food(Cell::new(125, 0));

    let result = game.tick();

    assert_eq!(result.score, 1);
    assert_eq!(game.snake().len(), 6);
    assert_eq!(game.snake().tail(), Cell::new(0, 0));
    assert!(game.food().x <= 225 && game.food().y <= 225);
}

#[test]
fn five_ticks_without_food() {
    let mut game = new_game();
    game.place_food(Cell::new(0, 225));

    for step in 1..=5 {
        game.tick();
        assert_eq!(game.snake().len(), 5);
        assert_eq!(game.snake().head(), Cell::new(100 + 25 * step, 0));
    }
}

#[test]
fn leaving_the_board_ends_the_game() {
    let mut game = new_game();
    game.place_food(Cell::new(0, 225));
    game.place_snake(Snake::from_cells(cells(&[(0, 0), (0, 25)])).unwrap());
    game.set_direction(Direction::Up);
    game.set_direction(Direction::Left);

    let result = game.tick();

    assert_eq!(game.snake().head(), Cell::new(-25, 0));
    assert_eq!(result.state, RunningState::Over);
    assert_eq!(result.collision, Some(CollisionType::Wall));
}

#[test]
fn biting_the_body_ends_the_game() {
    let mut game = new_game();
    game.place_food(Cell::new(0, 225));
    game.place_snake(
        Snake::from_cells(cells(&[(100, 100), (100, 125), (125, 125), (125, 100), (125, 75)]))
            .unwrap(),
    );

    let result = game.tick();

    assert_eq!(result.state, RunningState::Over);
    assert_eq!(result.collision, Some(CollisionType::SelfCollision));
}

/// Steer randomly and check every per-tick invariant until the game ends
#[test]
fn random_walk_invariants() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let directions = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    for round in 0..50 {
        let mut game =
            GameLoop::with_rng(GameConfig::default(), 300, 275, StdRng::seed_from_u64(round));
        let mut last_speed = game.speed_ms();

        for _ in 0..400 {
            let before = game.velocity();
            let requested = directions[rng.gen_range(0..directions.len())];
            game.set_direction(requested);

            let velocity = game.velocity();
            assert!((velocity.dx() == 0) != (velocity.dy() == 0));
            assert_eq!(velocity.dx().abs() + velocity.dy().abs(), 25);
            assert!(!before.heading().is_opposite(velocity.heading()));

            let food_before = game.food();
            let length_before = game.snake().len();
            let result = game.tick();

            if result.state == RunningState::Running {
                let grew = game.snake().head() == food_before;
                assert_eq!(result.ate_food, grew);
                assert_eq!(game.snake().len(), length_before + usize::from(grew));
            }

            let food = game.food();
            assert!((0..=300 - 25).contains(&food.x) && food.x % 25 == 0);
            assert!((0..=275 - 25).contains(&food.y) && food.y % 25 == 0);

            assert!(result.speed_ms <= last_speed);
            last_speed = result.speed_ms;

            if result.state == RunningState::Over {
                let frozen = game.snake().clone();
                assert_eq!(game.tick().state, RunningState::Over);
                assert_eq!(game.snake(), &frozen);
                break;
            }
        }
    }
}

/// Drive the loop the way a scheduler does: tick, render, re-arm with the
/// returned interval, stop on Over
#[test]
fn scheduler_style_session() {
    let mut game = new_game();
    let mut canvas = BoardCanvas::new(25);
    let mut intervals = Vec::new();
    let mut game_over_renders = 0;

    game.place_food(Cell::new(125, 0));
    let first = game.tick();
    assert!(first.ate_food);
    intervals.push(first.interval());
    game.place_food(Cell::new(0, 225));

    loop {
        let result = game.tick();
        game.render(&mut canvas);
        if canvas.is_game_over() {
            game_over_renders += 1;
        }
        if result.is_over() {
            break;
        }
        intervals.push(result.interval());
    }

    // Eats once, then runs right into the far wall at 248
    assert_eq!(game.score(), 1);
    assert_eq!(intervals.len(), 5);
    assert_eq!(game_over_renders, 1);
    assert_eq!(canvas.score(), 1);
    // the head left the board; the last body cell on it is at x = 225
    assert_eq!(canvas.glyph(9, 0), Glyph::Body);
}
