use super::descriptor::TypeDescriptor;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Visit {
    InProgress,
    Resolved(TypeDescriptor),
}

/// Aliases seen during one top-level type resolution.
///
/// An alias that is reached again while it is still being resolved is a
/// cycle; the engine cuts it off by emitting the alias name instead. Finished
/// aliases are reused as-is.
#[derive(Debug, Default)]
pub struct TypeCache {
    entries: HashMap<String, Visit>,
}

impl TypeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_progress(&self, key: &str) -> bool {
        matches!(self.entries.get(key), Some(Visit::InProgress))
    }

    pub fn resolved(&self, key: &str) -> Option<&TypeDescriptor> {
        match self.entries.get(key) {
            Some(Visit::Resolved(descriptor)) => Some(descriptor),
            _ => None,
        }
    }

    pub fn start(&mut self, key: impl Into<String>) {
        self.entries.insert(key.into(), Visit::InProgress);
    }

    pub fn finish(&mut self, key: impl Into<String>, descriptor: TypeDescriptor) {
        self.entries.insert(key.into(), Visit::Resolved(descriptor));
    }

    /// Forget `key` without recording a result.
    pub fn release(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
