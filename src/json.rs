//! JSON representation of ICL documents.
//!
//! The document tree serializes to JSON with camelCase field-table names.
//! Image bytes appear base64-encoded under the `imageData` key — that key
//! and its encoding are part of the external interface and round-trip
//! losslessly with the binary form.
//!
//! # Examples
//!
//! ```
//! use cashletter::File;
//!
//! let mut file = File::default();
//! file.recompute_controls();
//! let bytes = file.to_json()?;
//! let restored = File::from_json(&bytes)?;
//! assert_eq!(file, restored);
//! # Ok::<(), cashletter::IclError>(())
//! ```

use crate::error::Result;
use crate::file::File;

impl File {
    /// Deserialize a document from JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`IclError::Json`](crate::IclError::Json) on malformed JSON
    /// or an invalid base64 `imageData` payload.
    pub fn from_json(bytes: &[u8]) -> Result<File> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Serialize this document to JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`IclError::Json`](crate::IclError::Json) when serialization
    /// fails.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// Serde adapter encoding binary image data as standard base64 strings.
pub(crate) mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}
