//! Levenshtein error-model variants.

use std::fmt;
use std::str::FromStr;

/// Levenshtein distance algorithm type.
///
/// The variant is fixed for the lifetime of a transducer and selects both
/// the position transition rules and the subsumption rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Standard Levenshtein distance.
    ///
    /// Supports three edit operations:
    /// - Insert: add a character
    /// - Delete: remove a character
    /// - Substitute: replace one character with another
    #[default]
    Standard,

    /// Levenshtein distance with transposition.
    ///
    /// Extends Standard with swapping two adjacent characters as a single
    /// edit. Useful for catching common typos like "teh" → "the".
    Transposition,

    /// Levenshtein distance with merge and split operations.
    ///
    /// Extends Standard with:
    /// - Merge: two query characters become one term character
    /// - Split: one query character becomes two term characters
    ///
    /// Useful for OCR errors such as "rn" ↔ "m".
    MergeAndSplit,
}

/// An error-model name or tag outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported algorithm: {0} (valid options: standard, transposition, merge-and-split)")]
pub struct UnsupportedAlgorithm(pub String);

impl Algorithm {
    /// All supported variants, in tag order.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Standard,
        Algorithm::Transposition,
        Algorithm::MergeAndSplit,
    ];

    /// Get a human-readable name for this algorithm
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Standard => "standard",
            Algorithm::Transposition => "transposition",
            Algorithm::MergeAndSplit => "merge-and-split",
        }
    }

    /// Stable numeric tag used by persisted transducers.
    pub fn tag(&self) -> u8 {
        match self {
            Algorithm::Standard => 0,
            Algorithm::Transposition => 1,
            Algorithm::MergeAndSplit => 2,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnsupportedAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Algorithm::Standard),
            "transposition" | "trans" => Ok(Algorithm::Transposition),
            "merge-and-split" | "merge_and_split" | "mergesplit" | "merge" => {
                Ok(Algorithm::MergeAndSplit)
            }
            _ => Err(UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Algorithm {
    type Error = UnsupportedAlgorithm;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.tag() == tag)
            .ok_or_else(|| UnsupportedAlgorithm(format!("tag {}", tag)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("standard".parse::<Algorithm>(), Ok(Algorithm::Standard));
        assert_eq!("Transposition".parse::<Algorithm>(), Ok(Algorithm::Transposition));
        assert_eq!("merge".parse::<Algorithm>(), Ok(Algorithm::MergeAndSplit));
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "soundex".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, UnsupportedAlgorithm("soundex".to_string()));
        assert!(err.to_string().contains("soundex"));
    }

    #[test]
    fn test_tags_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::try_from(algorithm.tag()), Ok(algorithm));
        }
        assert!(Algorithm::try_from(3).is_err());
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Algorithm::MergeAndSplit.to_string(), "merge-and-split");
    }
}
