//! Command-line surface for garage-init
//!
//! Argument parsing plus configuration resolution with per-field
//! precedence: CLI flags > environment variables > config file.

mod args;
mod config;

pub use args::Args;
pub use config::{ConfigLayer, RuntimeConfig};
