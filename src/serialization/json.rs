//! JSON serializer for human-readable format.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};

use super::{DictionarySerializer, SerializationError};

/// JSON serializer for human-readable format.
///
/// This serializer uses JSON for easy debugging and manual inspection.
/// It's less efficient than bincode but useful for development.
pub struct JsonSerializer;

impl DictionarySerializer for JsonSerializer {
    fn write<T, W>(value: &T, mut writer: W) -> Result<(), SerializationError>
    where
        T: Serialize,
        W: Write,
    {
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.flush()?;
        Ok(())
    }

    fn read<T, R>(mut reader: R) -> Result<T, SerializationError>
    where
        T: DeserializeOwned,
        R: Read,
    {
        Ok(serde_json::from_reader(&mut reader)?)
    }
}
