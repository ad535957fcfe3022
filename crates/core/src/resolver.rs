//! Reconciles a typed free-text tag with a registry.
//!
//! The same routine serves both the category and the responsible fields of a
//! form draft; each call only touches the registry it is handed.

use crate::registry::Registry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSource {
    /// No pending text; the chip selection was used as-is.
    Selected,
    /// Pending text matched an existing entry.
    Matched,
    /// Pending text was new and has been appended to the registry.
    Registered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagResolution {
    pub value: String,
    pub source: TagSource,
}

/// Value a resolution would produce, without touching the registry.
///
/// Returns `None` when both the selection and the trimmed pending text are
/// empty, which is exactly the condition that makes a commit invalid.
pub fn preview_tag(selected: &str, pending: &str, registry: &Registry) -> Option<String> {
    let draft = pending.trim();
    if draft.is_empty() {
        if selected.is_empty() {
            return None;
        }
        return Some(selected.to_string());
    }
    Some(registry.resolve(draft).to_string())
}

/// Resolve the pending text against `registry`, registering it if new.
///
/// Trimmed pending text wins over `selected`. On a non-empty pending value the
/// buffer is cleared so it does not leak into the next form session.
pub fn resolve_tag(selected: &str, pending: &mut String, registry: &mut Registry) -> TagResolution {
    let draft = pending.trim();
    if draft.is_empty() {
        return TagResolution {
            value: selected.to_string(),
            source: TagSource::Selected,
        };
    }

    let resolution = match registry.find(draft) {
        Some(existing) => TagResolution {
            value: existing.to_string(),
            source: TagSource::Matched,
        },
        None => TagResolution {
            value: registry.add(draft),
            source: TagSource::Registered,
        },
    };
    pending.clear();

    tracing::debug!(
        registry = registry.kind().as_str(),
        value = resolution.value.as_str(),
        registered = matches!(resolution.source, TagSource::Registered),
        "resolved pending tag"
    );
    resolution
}
