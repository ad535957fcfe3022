use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryKind {
    Category,
    Responsible,
}

impl RegistryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistryKind::Category => "category",
            RegistryKind::Responsible => "responsible",
        }
    }
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Append-only vocabulary of free-text tags.
///
/// Entries are unique under case-insensitive comparison and keep the casing
/// they were first registered with. Nothing is ever removed or renamed, which
/// is what lets tasks store tags by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    kind: RegistryKind,
    entries: Vec<String>,
}

impl Registry {
    /// Build a registry from seed values, trimming and deduplicating them.
    pub fn seeded<I, S>(kind: RegistryKind, seeds: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self {
            kind,
            entries: Vec::new(),
        };
        for seed in seeds {
            registry.add(seed.as_ref().trim());
        }
        if registry.entries.is_empty() {
            return Err(BoardError::EmptyRegistry(kind));
        }
        Ok(registry)
    }

    pub fn kind(&self) -> RegistryKind {
        self.kind
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.find(tag).is_some()
    }

    /// Stored entry matching `tag` case-insensitively.
    pub fn find(&self, tag: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| same_tag(entry, tag))
            .map(String::as_str)
    }

    /// Canonical entry for `tag` if registered, else `tag` unchanged.
    pub fn resolve<'a>(&'a self, tag: &'a str) -> &'a str {
        self.find(tag).unwrap_or(tag)
    }

    /// Append `tag` unless an equal entry exists; returns the canonical value.
    /// Blank tags are never registered.
    pub fn add(&mut self, tag: &str) -> String {
        if let Some(existing) = self.find(tag) {
            return existing.to_string();
        }
        if !tag.trim().is_empty() {
            self.entries.push(tag.to_string());
        }
        tag.to_string()
    }

    pub fn first(&self) -> Result<&str, BoardError> {
        self.entries
            .first()
            .map(String::as_str)
            .ok_or(BoardError::EmptyRegistry(self.kind))
    }
}

fn same_tag(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}

/// The two independent vocabularies a board keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registries {
    categories: Registry,
    responsibles: Registry,
}

impl Registries {
    pub fn new(categories: Registry, responsibles: Registry) -> Self {
        Self {
            categories,
            responsibles,
        }
    }

    pub fn get(&self, kind: RegistryKind) -> &Registry {
        match kind {
            RegistryKind::Category => &self.categories,
            RegistryKind::Responsible => &self.responsibles,
        }
    }

    pub fn get_mut(&mut self, kind: RegistryKind) -> &mut Registry {
        match kind {
            RegistryKind::Category => &mut self.categories,
            RegistryKind::Responsible => &mut self.responsibles,
        }
    }

    pub fn categories(&self) -> &Registry {
        &self.categories
    }

    pub fn responsibles(&self) -> &Registry {
        &self.responsibles
    }
}
