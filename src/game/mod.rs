//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Drawing goes through the [`Renderer`](crate::render::Renderer) trait, so the
//! loop can be driven and inspected without a terminal.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::{Direction, Velocity};
pub use engine::{GameLoop, TickResult};
pub use state::{Cell, CollisionType, RunningState, Snake};
