pub use focusboard_tui::cli;
pub use focusboard_tui::commands;
pub use focusboard_tui::config;
pub use focusboard_tui::logging;
pub use focusboard_tui::tui;
pub use focusboard_tui::AppConfig;

pub use focusboard_core as core;
pub use focusboard_core::model;
