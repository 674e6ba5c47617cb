//! Bincode serializer for compact binary format.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};

use super::{DictionarySerializer, SerializationError};

/// Bincode serializer for compact binary format.
///
/// This serializer uses bincode for fast, space-efficient serialization.
/// It's ideal for production use where storage space and load time matter.
pub struct BincodeSerializer;

impl DictionarySerializer for BincodeSerializer {
    fn write<T, W>(value: &T, mut writer: W) -> Result<(), SerializationError>
    where
        T: Serialize,
        W: Write,
    {
        bincode::serialize_into(&mut writer, value)?;
        writer.flush()?;
        Ok(())
    }

    fn read<T, R>(mut reader: R) -> Result<T, SerializationError>
    where
        T: DeserializeOwned,
        R: Read,
    {
        Ok(bincode::deserialize_from(&mut reader)?)
    }
}
