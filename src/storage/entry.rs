//! Entry envelope and codec
//!
//! Every file holds exactly one JSON object:
//! ```text
//! {"key":"<canonical key>","value":<T as JSON>}
//! ```

use std::io::{Read, Write};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Cause;

/// A decoded entry file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Entry<T> {
    /// Canonical (lowercased) key
    pub key: String,

    /// Caller payload
    pub value: T,
}

/// Borrowed form of `Entry` used for encoding, so writes never clone the value
#[derive(Debug, Serialize)]
pub struct EntryRef<'a, T> {
    pub key: &'a str,
    pub value: &'a T,
}

impl<'a, T: Serialize> EntryRef<'a, T> {
    pub fn new(key: &'a str, value: &'a T) -> Self {
        Self { key, value }
    }

    /// Encode as JSON followed by a newline
    pub fn encode<W: Write>(&self, writer: &mut W, pretty: bool) -> Result<(), Cause> {
        if pretty {
            serde_json::to_writer_pretty(&mut *writer, self)?;
        } else {
            serde_json::to_writer(&mut *writer, self)?;
        }
        writer.write_all(b"\n")?;
        Ok(())
    }
}

impl<T: DeserializeOwned> Entry<T> {
    /// Decode one entry; trailing whitespace is allowed, trailing data is not
    pub fn decode<R: Read>(reader: R) -> serde_json::Result<Self> {
        let mut de = serde_json::Deserializer::from_reader(reader);
        let entry = Self::deserialize(&mut de)?;
        de.end()?;
        Ok(entry)
    }
}
