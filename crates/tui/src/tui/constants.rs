use std::time::Duration;

pub(crate) const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub(crate) const TICK_RATE: Duration = Duration::from_millis(200);
pub(crate) const STATUS_TTL: Duration = Duration::from_secs(5);

pub(crate) const HINT_DASHBOARD: &str =
    "←/→/↑/↓ focus • Enter select • n new task • Space/c clear completed • q quit";
pub(crate) const HINT_FORM: &str =
    "↑/↓ row • ←/→ choose • Enter select • type to edit text • Esc back";
pub(crate) const HINT_PLAY_PAUSE: &str = "Tip: Space (Play/Pause) clears completed tasks";

pub(crate) const STATUS_NOTHING_TO_CLEAR: &str = "No completed tasks to clear";
pub(crate) const STATUS_EMPTY_TAG: &str = "Type a name before adding it";
pub(crate) const STATUS_DEMO_SEEDED: &str = "Loaded sample tasks";

pub(crate) const EMPTY_TITLE: &str = "No tasks";
pub(crate) const EMPTY_TEXT: &str = "Create a new task to get started.";
