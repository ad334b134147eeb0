//! Nutrition tracker CLI library.
//!
//! This crate provides the command-line interface: argument parsing,
//! configuration, text rendering and the interactive session loop. All
//! nutrition logic lives in `nt-core`, file output in `nt-export`.

mod cli;
pub mod commands;
mod config;
pub mod input;
pub mod render;
pub mod session;

pub use cli::{Cli, Commands, ProfileArgs};
pub use config::{Config, ExportConfig};
