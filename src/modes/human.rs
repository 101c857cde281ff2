use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, interval, sleep};
use tracing::{debug, info, warn};

use super::sizing;
use crate::game::{GameConfig, GameLoop, TickResult};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{BoardCanvas, TerminalRenderer};

/// Keyboard-driven session: owns the game and schedules its ticks
pub struct HumanMode {
    config: GameConfig,
    game: GameLoop,
    canvas: BoardCanvas,
    metrics: GameMetrics,
    renderer: TerminalRenderer,
    input_handler: InputHandler,
    /// Latest terminal size as (columns, rows); applied at the next reset
    viewport: (u16, u16),
    should_quit: bool,
    game_over_shown: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, viewport: (u16, u16)) -> Self {
        let (width, height) = sizing::board_dimensions(&config, viewport.0, viewport.1);
        let game = GameLoop::new(config.clone(), width, height);

        let mut mode = Self {
            canvas: BoardCanvas::new(config.unit_size),
            config,
            game,
            metrics: GameMetrics::new(),
            renderer: TerminalRenderer::new(),
            input_handler: InputHandler::new(),
            viewport,
            should_quit: false,
            game_over_shown: false,
        };
        mode.metrics.on_game_start(mode.game.speed_ms());
        mode.game.render(&mut mode.canvas);
        mode
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    /// Tick, render, re-arm with the interval the tick reported; stop
    /// re-arming once the game is over
    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let next_tick = sleep(self.current_interval());
        tokio::pin!(next_tick);

        // Keeps the clock in the header moving between ticks
        let mut clock = interval(Duration::from_secs(1));

        self.draw(terminal)?;

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if self.handle_stream_item(maybe_event) {
                        next_tick.as_mut().reset(Instant::now() + self.current_interval());
                    }
                    self.draw(terminal)?;
                }

                _ = &mut next_tick, if self.game.running_state().is_running() => {
                    let result = self.advance();
                    if !result.is_over() {
                        next_tick.as_mut().reset(Instant::now() + result.interval());
                    }
                    self.draw(terminal)?;
                }

                _ = clock.tick() => {
                    self.metrics.update();
                    self.draw(terminal)?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle one item of the terminal event stream; a closed stream ends
    /// the session. Returns true when the tick timer must be re-armed.
    fn handle_stream_item(&mut self, item: Option<io::Result<Event>>) -> bool {
        match item {
            Some(Ok(event)) => self.handle_event(event),
            Some(Err(err)) => {
                warn!(%err, "failed to read terminal event");
                false
            }
            None => {
                info!("terminal event stream closed");
                self.should_quit = true;
                false
            }
        }
    }

    /// Handle a terminal event. Returns true when the game was restarted and
    /// the tick timer must be re-armed.
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = self.input_handler.handle_key_event(key);
                self.apply(action)
            }
            Event::Resize(columns, rows) => {
                self.viewport = (columns, rows);
                false
            }
            _ => false,
        }
    }

    fn apply(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Steer(direction) => {
                self.game.set_direction(direction);
                false
            }
            KeyAction::Restart => {
                self.reset_game();
                true
            }
            KeyAction::Quit => {
                self.should_quit = true;
                false
            }
            KeyAction::None => false,
        }
    }

    /// One scheduled step: tick, then render into the canvas
    fn advance(&mut self) -> TickResult {
        let result = self.game.tick();
        self.metrics.on_tick(&result);
        self.game.render(&mut self.canvas);

        if result.is_over() && !self.game_over_shown {
            self.game_over_shown = true;
            self.metrics.on_game_over(result.score);
            info!(
                score = result.score,
                ticks = self.metrics.ticks,
                "session game over"
            );
        }

        result
    }

    fn reset_game(&mut self) {
        let (width, height) =
            sizing::board_dimensions(&self.config, self.viewport.0, self.viewport.1);
        debug!(width, height, "restarting");

        self.game.reset(width, height, self.config.unit_size);
        self.metrics.on_game_start(self.game.speed_ms());
        self.game_over_shown = false;
        self.game.render(&mut self.canvas);
    }

    fn current_interval(&self) -> Duration {
        Duration::from_secs_f64(self.game.speed_ms() / 1000.0)
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        terminal
            .draw(|frame| {
                self.renderer.render(frame, &self.canvas, &self.metrics);
            })
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
