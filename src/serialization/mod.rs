//! Dictionary and transducer serialization support.
//!
//! A [`Dawg`] is written as its node arena: one [`NodeRecord`] per node,
//! with edges pointing at other records by index. Shared suffixes are
//! therefore stored once, and loading restores the minimized graph directly
//! instead of rebuilding it from a term list. Loaded records are validated
//! before use.
//!
//! # Example
//!
//! ```rust
//! use lazy_levenshtein::prelude::*;
//!
//! let dict = Dawg::from_terms(vec!["test", "testing"]);
//!
//! let mut buffer = Vec::new();
//! BincodeSerializer::serialize_dictionary(&dict, &mut buffer).unwrap();
//!
//! let loaded = BincodeSerializer::deserialize_dictionary(&buffer[..]).unwrap();
//! assert_eq!(loaded, dict);
//! ```

use crate::dictionary::{Dawg, DawgNode, DictionaryError};
use crate::transducer::{Algorithm, Transducer, TransducerAttributes, UnsupportedAlgorithm};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

mod bincode_impl;
mod json;

pub use self::bincode_impl::BincodeSerializer;
pub use self::json::JsonSerializer;

/// One DAWG node on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Whether a term ends at this node
    pub is_final: bool,
    /// Outgoing edges as (label, target record index), ascending by label
    pub edges: Vec<(char, u32)>,
}

/// A whole DAWG on the wire. Record 0 is the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DawgRecord {
    /// Node arena
    pub nodes: Vec<NodeRecord>,
    /// Number of terms stored
    pub term_count: u64,
}

/// A transducer configuration plus its dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransducerRecord {
    /// Algorithm tag, see [`Algorithm::tag`]
    pub algorithm: u8,
    /// Maximum distance used by default searches
    pub default_max_distance: u64,
    /// Whether default searches report distances
    pub include_distance: bool,
    /// The dictionary
    pub dictionary: DawgRecord,
}

impl TryFrom<&Dawg> for DawgRecord {
    type Error = SerializationError;

    fn try_from(dawg: &Dawg) -> Result<Self, Self::Error> {
        if u32::try_from(dawg.node_count()).is_err() {
            return Err(SerializationError::TooManyNodes(dawg.node_count()));
        }

        let nodes = dawg
            .nodes()
            .iter()
            .map(|node| NodeRecord {
                is_final: node.is_final,
                // Indices fit: checked against the node count above
                edges: node
                    .edges
                    .iter()
                    .map(|&(label, target)| (label, target as u32))
                    .collect(),
            })
            .collect();

        Ok(Self {
            nodes,
            term_count: dawg.len() as u64,
        })
    }
}

impl TryFrom<DawgRecord> for Dawg {
    type Error = SerializationError;

    fn try_from(record: DawgRecord) -> Result<Self, Self::Error> {
        let term_count = usize::try_from(record.term_count).map_err(|_| {
            DictionaryError::Corrupt(format!("term count {} out of range", record.term_count))
        })?;

        let nodes = record
            .nodes
            .into_iter()
            .map(|node| DawgNode {
                edges: node
                    .edges
                    .into_iter()
                    .map(|(label, target)| (label, target as usize))
                    .collect(),
                is_final: node.is_final,
            })
            .collect();

        Ok(Dawg::from_parts(nodes, term_count)?)
    }
}

impl TryFrom<&Transducer<Dawg>> for TransducerRecord {
    type Error = SerializationError;

    fn try_from(transducer: &Transducer<Dawg>) -> Result<Self, Self::Error> {
        Ok(Self {
            algorithm: transducer.algorithm().tag(),
            default_max_distance: transducer.default_max_distance() as u64,
            include_distance: transducer.include_distance(),
            dictionary: DawgRecord::try_from(transducer.dictionary())?,
        })
    }
}

impl TryFrom<TransducerRecord> for Transducer<Dawg> {
    type Error = SerializationError;

    fn try_from(record: TransducerRecord) -> Result<Self, Self::Error> {
        let algorithm = Algorithm::try_from(record.algorithm)?;
        let default_max_distance = usize::try_from(record.default_max_distance).map_err(|_| {
            DictionaryError::Corrupt(format!(
                "default max distance {} out of range",
                record.default_max_distance
            ))
        })?;
        let dictionary = Dawg::try_from(record.dictionary)?;

        Ok(Transducer::from_attributes(TransducerAttributes::new(
            dictionary,
            algorithm,
            default_max_distance,
            record.include_distance,
        )))
    }
}

/// Trait for serializing and deserializing dictionaries and transducers.
///
/// Implementors supply the wire format through [`write`](Self::write) and
/// [`read`](Self::read); the record conversions are shared.
pub trait DictionarySerializer {
    /// Encode `value` into `writer`.
    fn write<T, W>(value: &T, writer: W) -> Result<(), SerializationError>
    where
        T: Serialize,
        W: Write;

    /// Decode a value from `reader`.
    fn read<T, R>(reader: R) -> Result<T, SerializationError>
    where
        T: DeserializeOwned,
        R: Read;

    /// Serialize a dictionary to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    fn serialize_dictionary<W: Write>(dict: &Dawg, writer: W) -> Result<(), SerializationError> {
        Self::write(&DawgRecord::try_from(dict)?, writer)
    }

    /// Deserialize a dictionary from a reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or decoding fails, or if the decoded
    /// records do not form a valid dictionary.
    fn deserialize_dictionary<R: Read>(reader: R) -> Result<Dawg, SerializationError> {
        Dawg::try_from(Self::read::<DawgRecord, R>(reader)?)
    }

    /// Serialize a transducer (configuration and dictionary) to a writer.
    fn serialize_transducer<W: Write>(
        transducer: &Transducer<Dawg>,
        writer: W,
    ) -> Result<(), SerializationError> {
        Self::write(&TransducerRecord::try_from(transducer)?, writer)
    }

    /// Deserialize a transducer from a reader.
    ///
    /// # Errors
    ///
    /// Besides decoding failures, fails with
    /// [`SerializationError::UnsupportedAlgorithm`] for an unknown algorithm
    /// tag.
    fn deserialize_transducer<R: Read>(reader: R) -> Result<Transducer<Dawg>, SerializationError> {
        Transducer::try_from(Self::read::<TransducerRecord, R>(reader)?)
    }
}

/// Errors that can occur during serialization/deserialization.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// Error during bincode serialization
    #[error("Bincode error: {0}")]
    Bincode(#[from] bincode::Error),
    /// Error during JSON serialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Decoded records do not describe a valid dictionary
    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),
    /// Unknown algorithm tag
    #[error(transparent)]
    UnsupportedAlgorithm(#[from] UnsupportedAlgorithm),
    /// The dictionary has more nodes than record indices can address
    #[error("dictionary has {0} nodes, more than the format can address")]
    TooManyNodes(usize),
}
