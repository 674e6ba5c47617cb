//! Candidate shapes produced by a search.
//!
//! The search itself only knows a matched term and its distance. A
//! [`CandidateFactory`] turns that pair into whatever the caller wants to
//! receive, so the same iterator yields plain strings, [`Candidate`]s or a
//! user-defined type:
//!
//! ```rust
//! use lazy_levenshtein::prelude::*;
//!
//! let dict = Dawg::from_terms(vec!["cat", "cot"]);
//! let transducer = Transducer::standard(dict);
//!
//! let tagged: Vec<(usize, String)> = transducer
//!     .query_with("cat", 1, |term: String, distance: usize| (distance, term))
//!     .collect();
//! assert!(tagged.contains(&(0, "cat".to_string())));
//! assert!(tagged.contains(&(1, "cot".to_string())));
//! ```

use std::fmt;

/// A dictionary term within the distance bound, with its distance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Candidate {
    /// The matching term
    pub term: String,
    /// Edit distance from query
    pub distance: usize,
}

impl Candidate {
    /// Create a new candidate
    pub fn new(term: impl Into<String>, distance: usize) -> Self {
        Self {
            term: term.into(),
            distance,
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.term, self.distance)
    }
}

/// A search result shaped by the transducer's `include_distance` option.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Match {
    /// Term only
    Term(String),
    /// Term and distance
    Candidate(Candidate),
}

impl Match {
    /// The matched term
    pub fn term(&self) -> &str {
        match self {
            Match::Term(term) => term,
            Match::Candidate(candidate) => &candidate.term,
        }
    }

    /// The distance, when it was requested
    pub fn distance(&self) -> Option<usize> {
        match self {
            Match::Term(_) => None,
            Match::Candidate(candidate) => Some(candidate.distance),
        }
    }

    /// Consume the match, keeping only the term
    pub fn into_term(self) -> String {
        match self {
            Match::Term(term) => term,
            Match::Candidate(candidate) => candidate.term,
        }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Match::Term(term) => f.write_str(term),
            Match::Candidate(candidate) => candidate.fmt(f),
        }
    }
}

/// Strategy building a search result from a matched term and its distance.
///
/// Any `Fn(String, usize) -> T` closure is a factory.
pub trait CandidateFactory {
    /// The result type handed to the caller
    type Output;

    /// Build one result
    fn build(&self, term: String, distance: usize) -> Self::Output;
}

impl<F, T> CandidateFactory for F
where
    F: Fn(String, usize) -> T,
{
    type Output = T;

    #[inline]
    fn build(&self, term: String, distance: usize) -> T {
        self(term, distance)
    }
}

/// Yields the bare term, dropping the distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermFactory;

impl CandidateFactory for TermFactory {
    type Output = String;

    #[inline]
    fn build(&self, term: String, _distance: usize) -> String {
        term
    }
}

/// Yields a [`Candidate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateWithDistance;

impl CandidateFactory for CandidateWithDistance {
    type Output = Candidate;

    #[inline]
    fn build(&self, term: String, distance: usize) -> Candidate {
        Candidate { term, distance }
    }
}

/// Yields a [`Match`] shaped by a configured `include_distance` flag.
#[derive(Debug, Clone, Copy)]
pub struct MatchFactory {
    include_distance: bool,
}

impl MatchFactory {
    /// Create a factory that keeps distances when `include_distance` is set
    pub fn new(include_distance: bool) -> Self {
        Self { include_distance }
    }

    /// Whether distances are kept
    pub fn include_distance(&self) -> bool {
        self.include_distance
    }
}

impl CandidateFactory for MatchFactory {
    type Output = Match;

    fn build(&self, term: String, distance: usize) -> Match {
        if self.include_distance {
            Match::Candidate(Candidate { term, distance })
        } else {
            Match::Term(term)
        }
    }
}
