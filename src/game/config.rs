use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width in cells; `None` fits the board to the viewport
    pub grid_width: Option<usize>,
    /// Board height in cells; `None` fits the board to the viewport
    pub grid_height: Option<usize>,
    /// Edge length of one cell in board units
    pub unit_size: i32,
    /// Length of the snake after a reset
    pub initial_snake_length: usize,

    // Pacing
    /// Tick interval after a reset, in milliseconds
    pub initial_speed_ms: f64,
    /// The interval shrinks every time the score hits a multiple of this
    pub speedup_every: u32,
    /// Factor applied to the interval on each speed-up
    pub speedup_factor: f64,

    /// Distance inside the far edges at which the head counts as out of bounds.
    ///
    /// Defaults to 2 board units, not one cell: the far walls sit 2 units in
    /// from the board edge regardless of the unit size.
    pub wall_margin: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: None,
            grid_height: None,
            unit_size: 25,
            initial_snake_length: 5,
            initial_speed_ms: 100.0,
            speedup_every: 5,
            speedup_factor: 0.9,
            wall_margin: 2,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a fixed grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: Some(width),
            grid_height: Some(height),
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Load a configuration from a JSON file; missing fields take their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// Board dimensions in board units, when the grid size is fixed
    pub fn board_dimensions(&self) -> Option<(i32, i32)> {
        match (self.grid_width, self.grid_height) {
            (Some(w), Some(h)) => Some((w as i32 * self.unit_size, h as i32 * self.unit_size)),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.unit_size <= 0 {
            bail!("unit_size must be positive, got {}", self.unit_size);
        }
        if matches!(self.grid_width, Some(0)) || matches!(self.grid_height, Some(0)) {
            bail!("grid dimensions must be positive");
        }
        if self.grid_width.is_some() != self.grid_height.is_some() {
            bail!("grid_width and grid_height must be set together");
        }
        if !(self.initial_speed_ms > 0.0) {
            bail!(
                "initial_speed_ms must be positive, got {}",
                self.initial_speed_ms
            );
        }
        if self.speedup_every == 0 {
            bail!("speedup_every must be at least 1");
        }
        if !(self.speedup_factor > 0.0 && self.speedup_factor <= 1.0) {
            bail!(
                "speedup_factor must be in (0, 1], got {}",
                self.speedup_factor
            );
        }
        if self.wall_margin < 0 {
            bail!("wall_margin must not be negative, got {}", self.wall_margin);
        }
        Ok(())
    }
}
