//! Snake Loop - terminal Snake built around a self-adjusting tick loop
//!
//! This library provides:
//! - Core game logic, independent of any surface (game module)
//! - The renderer trait and its ratatui implementation (render module)
//! - Key mapping (input module)
//! - The keyboard-driven session and board sizing (modes module)
//! - Session statistics (metrics module)
//! - Log file setup (logging module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
