//! CLI subcommand implementations.

pub mod config;
pub mod energy;
pub mod export;
pub mod session;
pub mod summary;
