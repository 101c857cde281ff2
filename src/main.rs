use anyhow::{Context, Result};
use clap::Parser;
use snake_loop::game::GameConfig;
use snake_loop::logging;
use snake_loop::modes::HumanMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snake_loop")]
#[command(version, about = "Snake in the terminal; the pace picks up every 5 points")]
struct Cli {
    /// Grid width in cells (fits the terminal when omitted)
    #[arg(long, requires = "height")]
    width: Option<usize>,

    /// Grid height in cells (fits the terminal when omitted)
    #[arg(long, requires = "width")]
    height: Option<usize>,

    /// Edge length of one cell in board units
    #[arg(long)]
    unit_size: Option<i32>,

    /// Initial tick interval in milliseconds
    #[arg(long)]
    speed: Option<f64>,

    /// JSON file with game settings; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write tracing output to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let (Some(width), Some(height)) = (self.width, self.height) {
            config.grid_width = Some(width);
            config.grid_height = Some(height);
        }
        if let Some(unit_size) = self.unit_size {
            config.unit_size = unit_size;
        }
        if let Some(speed) = self.speed {
            config.initial_speed_ms = speed;
        }

        config.validate().context("Invalid game settings")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_file.as_deref())?;

    let config = cli.game_config()?;
    let viewport = crossterm::terminal::size().context("Failed to read terminal size")?;

    let mut human_mode = HumanMode::new(config, viewport);
    human_mode.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "snake_loop",
            "--width",
            "12",
            "--height",
            "8",
            "--unit-size",
            "10",
            "--speed",
            "150",
        ]);
        let config = cli.game_config().unwrap();

        assert_eq!(config.board_dimensions(), Some((120, 80)));
        assert_eq!(config.initial_speed_ms, 150.0);
    }

    #[test]
    fn test_cli_requires_both_dimensions() {
        assert!(Cli::try_parse_from(["snake_loop", "--width", "12"]).is_err());
    }

    #[test]
    fn test_cli_rejects_bad_values() {
        let cli = Cli::parse_from(["snake_loop", "--speed", "0"]);
        assert!(cli.game_config().is_err());
    }
}
