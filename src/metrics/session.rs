use std::time::{Duration, Instant};

use crate::game::TickResult;

/// Per-session bookkeeping shown alongside the board. Nothing here outlives
/// the process.
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
    pub ticks: u64,
    /// Interval reported by the latest tick, in milliseconds
    pub speed_ms: f64,
    finished: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            ticks: 0,
            speed_ms: 0.0,
            finished: false,
        }
    }

    /// Refresh the clock; it stops once the current game is over
    pub fn update(&mut self) {
        if !self.finished {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_game_start(&mut self, speed_ms: f64) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.ticks = 0;
        self.speed_ms = speed_ms;
        self.finished = false;
    }

    pub fn on_tick(&mut self, result: &TickResult) {
        self.ticks += 1;
        self.speed_ms = result.speed_ms;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.update();
        self.finished = true;
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
