//! Command implementations

pub mod browse;
pub mod completions;
pub mod config;
pub mod list;
pub mod show;
