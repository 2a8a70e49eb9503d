//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `schema` - Create the table
//! - `lookup` - Read one user for manual verification

pub mod args;

pub use args::{Cli, Commands};
