use crate::shortcode::ShortCode;

type Result<T> = std::result::Result<T, crate::error::ShortenerError>;

/// Outcome of registering a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// The code the URL is reachable under.
    pub code: ShortCode,
    /// `false` when the URL was already registered and its existing code was reused.
    pub created: bool,
}

pub trait Shortener {
    /// Registers a URL, reusing its code if it is already known.
    fn register(&mut self, url: &str) -> Result<Registration>;

    /// Shortens a URL and returns its short code.
    ///
    /// Shortening the same URL twice yields the same code.
    fn shorten(&mut self, url: &str) -> Result<ShortCode> {
        self.register(url).map(|registration| registration.code)
    }

    /// Resolves a short code back to the URL it was created for.
    fn expand(&self, code: &str) -> Result<String>;

    /// Number of registered URLs.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
