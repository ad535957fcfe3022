pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod tui;

pub use focusboard_core as core;
pub use focusboard_core::model;

pub use focusboard_core::AppConfig;
