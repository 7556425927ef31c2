use linkshort_core::{ShortCode, StorageError};

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage for (code, URL) pairs, indexed in both directions.
pub trait Repository {
    /// Inserts a new pair into both indexes, or into neither.
    /// Returns `Err(Conflict)` if either the code or the URL is already present.
    fn insert(&mut self, code: ShortCode, url: String) -> Result<()>;

    /// Retrieves the URL stored under a given short code.
    /// Returns `None` if the code does not exist.
    fn get(&self, code: &str) -> Option<&str>;

    /// Retrieves the short code a URL was registered under.
    fn code_for(&self, url: &str) -> Option<&ShortCode>;

    /// Checks whether a short code already exists in the repository.
    fn exists(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Number of stored pairs.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
