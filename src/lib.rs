//! # lazy-levenshtein
//!
//! Fast approximate string matching using lazy Levenshtein automata.
//!
//! Terms are stored in a minimized DAWG (directed acyclic word graph). A
//! query walks the DAWG and a Levenshtein automaton for the query side by
//! side, building automaton states only as the dictionary reaches them, as
//! described in:
//!
//! > Schulz, Klaus U., and Stoyan Mihov. "Fast string correction with
//! > Levenshtein automata." International Journal on Document Analysis and
//! > Recognition 5.1 (2002): 67-85.
//!
//! Three error models are supported: standard Levenshtein distance, distance
//! with adjacent transpositions, and distance with merges and splits.
//!
//! ## Example
//!
//! ```rust
//! use lazy_levenshtein::prelude::*;
//!
//! let dict = Dawg::from_terms(vec!["test", "testing", "tested"]);
//! let transducer = Transducer::new(dict, Algorithm::Standard);
//!
//! for term in transducer.query("tset", 2) {
//!     println!("Match: {}", term);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dictionary;
pub mod distance;
pub mod transducer;

#[cfg(feature = "serialization")]
pub mod serialization;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::dictionary::{Dawg, DawgBuilder, Dictionary, DictionaryError, DictionaryNode};
    pub use crate::transducer::{
        Algorithm, Candidate, CandidateFactory, Match, Transducer, TransducerBuilder,
    };

    #[cfg(feature = "serialization")]
    pub use crate::serialization::{BincodeSerializer, DictionarySerializer, JsonSerializer};
}
