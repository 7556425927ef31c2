pub mod random;

pub use random::RandomGenerator;

use linkshort_core::ShortCode;

/// Trait for generating short codes.
///
/// Implementations are pure generators that don't interact with storage.
/// A generated code may already be taken; the caller is responsible for
/// checking it against the registry and drawing again.
pub trait Generator {
    /// Draws a candidate short code.
    fn generate(&mut self) -> ShortCode;
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    fn generate(&mut self) -> ShortCode {
        (**self).generate()
    }
}
