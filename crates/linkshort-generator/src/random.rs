use crate::Generator;
use linkshort_core::{ShortCode, ALPHABET, CODE_LENGTH};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A short code generator drawing every position independently and
/// uniformly from [`ALPHABET`].
///
/// Codes are not unique by construction: with 62^6 possible codes a
/// collision is unlikely but possible, so the shortener redraws on conflict.
#[derive(Debug, Clone)]
pub struct RandomGenerator<R = StdRng> {
    rng: R,
}

impl RandomGenerator<StdRng> {
    /// Creates a generator seeded from the operating system's entropy source.
    pub fn from_os_rng() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a generator with a fixed seed.
    ///
    /// Two generators created with the same seed produce the same codes,
    /// which makes sessions reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomGenerator<R> {
    /// Creates a generator backed by the given random number generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Generator for RandomGenerator<R> {
    fn generate(&mut self) -> ShortCode {
        let code: String = std::iter::repeat_with(|| {
            ALPHABET[self.rng.random_range(0..ALPHABET.len())] as char
        })
        .take(CODE_LENGTH)
        .collect();
        ShortCode::new_unchecked(code)
    }
}
