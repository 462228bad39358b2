//! Strategy Registry - string-keyed, mutable collection of strategies

use std::collections::HashMap;
use std::fmt;

/// Registry for one family of strategies
///
/// Keys are unique. Inserting an existing key replaces the old strategy
/// and logs the replacement; it is not an error.
pub struct StrategyRegistry<S: ?Sized> {
    /// Label used in log events ("discount", "shipping")
    kind: &'static str,

    entries: HashMap<String, Box<S>>,
}

impl<S: ?Sized> StrategyRegistry<S> {
    /// Create a new empty registry
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            entries: HashMap::new(),
        }
    }

    /// Insert or replace. Returns `true` if an entry was replaced.
    pub fn insert(&mut self, key: impl Into<String>, strategy: Box<S>) -> bool {
        let key = key.into();
        let replaced = self.entries.insert(key.clone(), strategy).is_some();

        if replaced {
            tracing::info!(registry = self.kind, key = %key, "Strategy replaced");
        } else {
            tracing::debug!(registry = self.kind, key = %key, "Strategy registered");
        }

        replaced
    }

    pub fn get(&self, key: &str) -> Option<&S> {
        self.entries.get(key).map(|strategy| strategy.as_ref())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove by key. Returns whether the key existed.
    pub fn remove(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            tracing::debug!(registry = self.kind, key = %key, "Strategy removed");
        }
        removed
    }

    /// Registered keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: ?Sized> fmt::Debug for StrategyRegistry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("kind", &self.kind)
            .field("keys", &self.keys())
            .finish()
    }
}
