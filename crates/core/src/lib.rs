pub mod board;
pub mod config;
pub mod draft;
pub mod error;
pub mod intent;
pub mod model;
pub mod overlay;
pub mod registry;
pub mod resolver;
pub mod seeding;
pub mod store;

pub use board::{Board, BoardSnapshot, Outcome};
pub use config::{AppConfig, BoardSettings};
pub use draft::{DraftField, FormDraft};
pub use error::BoardError;
pub use intent::{Intent, RemoteSignal};
pub use model::*;
pub use overlay::{OverlayController, OverlayState};
pub use registry::{Registries, Registry, RegistryKind};
pub use resolver::{preview_tag, resolve_tag, TagResolution, TagSource};
pub use store::TaskStore;
