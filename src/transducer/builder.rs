//! Builder pattern for creating Transducer instances.
//!
//! The `TransducerBuilder` provides a fluent API for constructing
//! `Transducer` instances from a dictionary and configuration options.

use super::algorithm::UnsupportedAlgorithm;
use crate::dictionary::Dictionary;
use crate::transducer::{Algorithm, Transducer, TransducerAttributes};

/// Maximum distance used by [`Transducer::search`] unless configured.
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// Builder for constructing a `Transducer` with a fluent API.
///
/// # Example
///
/// ```rust
/// use lazy_levenshtein::prelude::*;
///
/// let dict = Dawg::from_terms(vec!["test", "testing"]);
/// let transducer = TransducerBuilder::new()
///     .dictionary(dict)
///     .algorithm_name("transposition")
///     .default_max_distance(1)
///     .include_distance(false)
///     .build()
///     .unwrap();
///
/// let found: Vec<_> = transducer.search("tets").map(|m| m.into_term()).collect();
/// assert_eq!(found, vec!["test"]);
/// ```
pub struct TransducerBuilder<D: Dictionary> {
    dictionary: Option<D>,
    algorithm: AlgorithmChoice,
    default_max_distance: usize,
    include_distance: bool,
}

enum AlgorithmChoice {
    Tag(Algorithm),
    Name(String),
}

/// Error type for builder validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuilderError {
    /// No dictionary was provided
    #[error("Dictionary is required. Use .dictionary() to set it.")]
    MissingDictionary,
    /// The configured algorithm name is not recognised
    #[error(transparent)]
    UnsupportedAlgorithm(#[from] UnsupportedAlgorithm),
}

impl<D: Dictionary> TransducerBuilder<D> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        TransducerBuilder {
            dictionary: None,
            algorithm: AlgorithmChoice::Tag(Algorithm::default()),
            default_max_distance: DEFAULT_MAX_DISTANCE,
            include_distance: true,
        }
    }

    /// Set the dictionary to use for approximate string matching.
    pub fn dictionary(mut self, dictionary: D) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Set the Levenshtein distance algorithm to use.
    ///
    /// Defaults to [`Algorithm::Standard`].
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = AlgorithmChoice::Tag(algorithm);
        self
    }

    /// Set the algorithm by name, e.g. from a configuration file.
    ///
    /// The name is parsed by [`build`](Self::build); an unknown name fails
    /// there with [`BuilderError::UnsupportedAlgorithm`].
    pub fn algorithm_name(mut self, name: impl Into<String>) -> Self {
        self.algorithm = AlgorithmChoice::Name(name.into());
        self
    }

    /// Set the maximum distance used by [`Transducer::search`].
    pub fn default_max_distance(mut self, max_distance: usize) -> Self {
        self.default_max_distance = max_distance;
        self
    }

    /// Whether [`Transducer::search`] reports distances along with terms.
    pub fn include_distance(mut self, include_distance: bool) -> Self {
        self.include_distance = include_distance;
        self
    }

    /// Build the `Transducer`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Dictionary was not set (use `.dictionary()`)
    /// - The algorithm name given to `.algorithm_name()` is unknown
    pub fn build(self) -> Result<Transducer<D>, BuilderError> {
        let dictionary = self.dictionary.ok_or(BuilderError::MissingDictionary)?;
        let algorithm = match self.algorithm {
            AlgorithmChoice::Tag(algorithm) => algorithm,
            AlgorithmChoice::Name(name) => name.parse()?,
        };

        Ok(Transducer::from_attributes(TransducerAttributes::new(
            dictionary,
            algorithm,
            self.default_max_distance,
            self.include_distance,
        )))
    }
}

impl<D: Dictionary> Default for TransducerBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}
