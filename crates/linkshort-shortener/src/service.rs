use linkshort_core::{Registration, ShortCode, Shortener, ShortenerError};
use linkshort_generator::Generator;
use linkshort_storage::Repository;
use tracing::{debug, info};

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Repository` and a `Generator` to handle:
/// - input checks on URLs and codes
/// - duplicate URL detection through the repository's reverse index
/// - redrawing generated codes until one is free
#[derive(Debug, Clone)]
pub struct ShortenerService<R, G> {
    repository: R,
    generator: G,
}

impl<R: Repository, G: Generator> ShortenerService<R, G> {
    /// Creates a new `ShortenerService` from a repository and a generator.
    pub fn new(repository: R, generator: G) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Draws codes until one is not yet taken.
    ///
    /// The whole code is redrawn on a collision.
    fn generate_code(&mut self) -> ShortCode {
        loop {
            let code = self.generator.generate();
            if !self.repository.exists(code.as_str()) {
                return code;
            }
            debug!(code = %code, "generated code already taken, drawing again");
        }
    }
}

impl<R: Repository, G: Generator> Shortener for ShortenerService<R, G> {
    fn register(&mut self, url: &str) -> Result<Registration, ShortenerError> {
        if url.is_empty() {
            return Err(ShortenerError::InvalidInput(
                "URL cannot be empty".to_string(),
            ));
        }

        if let Some(code) = self.repository.code_for(url) {
            debug!(code = %code, url, "url already registered");
            return Ok(Registration {
                code: code.clone(),
                created: false,
            });
        }

        let code = self.generate_code();
        self.repository.insert(code.clone(), url.to_owned())?;
        info!(code = %code, url, "registered url");

        Ok(Registration {
            code,
            created: true,
        })
    }

    fn expand(&self, code: &str) -> Result<String, ShortenerError> {
        if code.is_empty() {
            return Err(ShortenerError::InvalidInput(
                "short code cannot be empty".to_string(),
            ));
        }

        // A malformed code can never have been generated, so it is simply unknown.
        if let Err(e) = ShortCode::new(code) {
            debug!(code, error = %e, "malformed short code");
            return Err(ShortenerError::NotFound(code.to_owned()));
        }

        self.repository
            .get(code)
            .map(str::to_owned)
            .ok_or_else(|| ShortenerError::NotFound(code.to_owned()))
    }

    fn len(&self) -> usize {
        self.repository.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkshort_core::{ALPHABET, CODE_LENGTH};
    use linkshort_generator::RandomGenerator;
    use linkshort_storage::InMemoryRepository;
    use std::collections::{HashSet, VecDeque};

    /// Hands out a fixed list of codes in order.
    struct ScriptedGenerator {
        codes: VecDeque<ShortCode>,
        draws: usize,
    }

    impl ScriptedGenerator {
        fn new(codes: &[&str]) -> Self {
            Self {
                codes: codes.iter().map(|c| ShortCode::new(c).unwrap()).collect(),
                draws: 0,
            }
        }
    }

    impl Generator for ScriptedGenerator {
        fn generate(&mut self) -> ShortCode {
            self.draws += 1;
            self.codes.pop_front().expect("script ran out of codes")
        }
    }

    fn test_service() -> ShortenerService<InMemoryRepository, RandomGenerator> {
        ShortenerService::new(InMemoryRepository::new(), RandomGenerator::seeded(42))
    }

    #[test]
    fn shorten_then_expand() {
        let mut service = test_service();

        let code = service.shorten("http://a.com").unwrap();

        assert_eq!(service.expand(code.as_str()).unwrap(), "http://a.com");
    }

    #[test]
    fn generated_code_shape() {
        let mut service = test_service();

        let code = service.shorten("https://example.com").unwrap();

        assert_eq!(code.as_str().len(), CODE_LENGTH);
        assert!(code.as_str().bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn shorten_same_url_twice_returns_same_code() {
        let mut service = test_service();

        let first = service.register("https://example.com").unwrap();
        let second = service.register("https://example.com").unwrap();

        assert!(first.created);
        assert!(!second.created);
        assert_eq!(first.code, second.code);
        assert_eq!(service.len(), 1);
    }

    #[test]
    fn distinct_urls_get_distinct_codes() {
        let mut service = test_service();
        let mut codes = HashSet::new();

        for i in 0..500 {
            let url = format!("https://example.com/{}", i);
            let code = service.shorten(&url).unwrap();
            assert!(codes.insert(code.clone()));
            assert_eq!(service.expand(code.as_str()).unwrap(), url);
        }

        assert_eq!(service.len(), 500);
    }

    #[test]
    fn shorten_empty_url_fails() {
        let mut service = test_service();

        let err = service.shorten("").unwrap_err();

        assert!(matches!(err, ShortenerError::InvalidInput(_)));
        assert!(service.is_empty());
    }

    #[test]
    fn expand_empty_code_fails() {
        let service = test_service();

        let err = service.expand("").unwrap_err();

        assert!(matches!(err, ShortenerError::InvalidInput(_)));
    }

    #[test]
    fn expand_unknown_code_is_not_found() {
        let mut service = test_service();
        service.shorten("https://example.com").unwrap();

        let err = service.expand("zzzzzz").unwrap_err();
        assert_eq!(err, ShortenerError::NotFound("zzzzzz".to_string()));

        let err = service.expand("not a code").unwrap_err();
        assert!(matches!(err, ShortenerError::NotFound(_)));
    }

    #[test]
    fn collision_redraws_whole_code() {
        let generator = ScriptedGenerator::new(&["X7k2Qz", "X7k2Qz", "X7k2Qz", "Ab3dE9"]);
        let mut service = ShortenerService::new(InMemoryRepository::new(), generator);

        let first = service.shorten("http://a.com").unwrap();
        let second = service.shorten("http://b.com").unwrap();

        assert_eq!(first.as_str(), "X7k2Qz");
        assert_eq!(second.as_str(), "Ab3dE9");
        assert_eq!(service.generator.draws, 4);
        assert_eq!(service.expand("X7k2Qz").unwrap(), "http://a.com");
        assert_eq!(service.expand("Ab3dE9").unwrap(), "http://b.com");
    }

    #[test]
    fn known_url_does_not_draw() {
        let generator = ScriptedGenerator::new(&["X7k2Qz"]);
        let mut service = ShortenerService::new(InMemoryRepository::new(), generator);

        service.shorten("http://a.com").unwrap();
        service.shorten("http://a.com").unwrap();

        assert_eq!(service.generator.draws, 1);
    }

    #[test]
    fn repository_indexes_match_after_shortening() {
        let mut service = test_service();

        let code = service.shorten("https://example.com").unwrap();

        assert_eq!(
            service.repository().code_for("https://example.com"),
            Some(&code)
        );
        assert_eq!(
            service.repository().get(code.as_str()),
            Some("https://example.com")
        );
    }
}
