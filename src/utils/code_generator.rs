//! Short code generation.
//!
//! Codes are drawn uniformly from `[A-Za-z0-9]`. Uniqueness is not decided
//! here; the writer retries against the store on collision.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated short codes.
pub const CODE_LENGTH: usize = 6;

/// Path segments that are routes of their own and can never be handed out as codes.
pub const RESERVED_CODES: &[&str] = &["health", "shorten", "redirect"];

/// Source of candidate short codes.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Produces one candidate code.
    fn generate(&self) -> String;
}

/// Random alphanumeric code generator backed by the thread-local RNG.
#[derive(Debug, Clone, Copy)]
pub struct AlphanumericCodeGenerator {
    length: usize,
}

impl AlphanumericCodeGenerator {
    /// Creates a generator producing [`CODE_LENGTH`]-character codes.
    pub fn new() -> Self {
        Self {
            length: CODE_LENGTH,
        }
    }

    /// Creates a generator producing codes of the given length.
    ///
    /// A length of zero is bumped to one.
    pub fn with_length(length: usize) -> Self {
        Self {
            length: length.max(1),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for AlphanumericCodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for AlphanumericCodeGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();

        loop {
            let code: String = (&mut rng)
                .sample_iter(Alphanumeric)
                .take(self.length)
                .map(char::from)
                .collect();

            if !is_reserved(&code) {
                return code;
            }
        }
    }
}

/// Returns true if `code` collides with a route path segment.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = AlphanumericCodeGenerator::new().generate();
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_alphanumeric_characters() {
        let generator = AlphanumericCodeGenerator::new();

        for _ in 0..200 {
            let code = generator.generate();
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()), "{code}");
        }
    }

    #[test]
    fn test_generate_code_produces_distinct_codes() {
        let generator = AlphanumericCodeGenerator::new();
        let codes: HashSet<String> = (0..1000).map(|_| generator.generate()).collect();

        // 62^6 possibilities; a handful of duplicates in 1000 draws would be astronomically unlikely.
        assert!(codes.len() >= 995);
    }

    #[test]
    fn test_with_length() {
        let generator = AlphanumericCodeGenerator::with_length(10);
        assert_eq!(generator.length(), 10);
        assert_eq!(generator.generate().len(), 10);
    }

    #[test]
    fn test_with_zero_length_is_clamped() {
        let generator = AlphanumericCodeGenerator::with_length(0);
        assert_eq!(generator.generate().len(), 1);
    }

    #[test]
    fn test_reserved_codes() {
        for &reserved in RESERVED_CODES {
            assert!(is_reserved(reserved), "'{reserved}' should be reserved");
        }
        assert!(!is_reserved("ab12XY"));
        assert!(!is_reserved("Health"));
    }
}
