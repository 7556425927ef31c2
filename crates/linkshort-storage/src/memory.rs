use crate::repository::{Repository, Result};
use linkshort_core::{ShortCode, StorageError};
use std::collections::HashMap;
use tracing::trace;

/// In-memory implementation of the Repository trait.
///
/// Keeps a forward index (code to URL) and a reverse index (URL to code)
/// built from the same set of pairs. The reverse index makes duplicate URL
/// detection a single lookup.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    forward: HashMap<ShortCode, String>,
    reverse: HashMap<String, ShortCode>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            forward: HashMap::with_capacity(capacity),
            reverse: HashMap::with_capacity(capacity),
        }
    }
}

impl Repository for InMemoryRepository {
    fn insert(&mut self, code: ShortCode, url: String) -> Result<()> {
        // Both checks happen before either map is touched.
        if self.forward.contains_key(code.as_str()) {
            return Err(StorageError::Conflict(code.to_string()));
        }
        if self.reverse.contains_key(&url) {
            return Err(StorageError::Conflict(url));
        }

        trace!(code = %code, url = %url, "inserting mapping");
        self.reverse.insert(url.clone(), code.clone());
        self.forward.insert(code, url);
        Ok(())
    }

    fn get(&self, code: &str) -> Option<&str> {
        self.forward.get(code).map(String::as_str)
    }

    fn code_for(&self, url: &str) -> Option<&ShortCode> {
        self.reverse.get(url)
    }

    fn len(&self) -> usize {
        debug_assert_eq!(self.forward.len(), self.reverse.len());
        self.forward.len()
    }
}
