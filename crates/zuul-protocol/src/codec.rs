//! Codec trait and implementations for serializing/deserializing the
//! data the game reads and writes: configuration files, world files, and
//! JSON transcripts of turn results.
//!
//! Callers only depend on the [`Codec`] trait, so a different format can
//! be added without touching them.

use serde::{de::DeserializeOwned, Serialize};

use crate::ProtocolError;

/// A codec that can encode Rust types to bytes and decode bytes back.
pub trait Codec {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns `ProtocolError::Encode` if the value can't be represented
    /// in this format.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes back into a value.
    ///
    /// # Errors
    /// Returns `ProtocolError::Decode` if the bytes are malformed,
    /// incomplete, or don't match the expected type.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] that uses JSON (via `serde_json`).
///
/// Encoded output is compact (one value per line), which is what the
/// transcript writer needs.
///
/// ```rust
/// use zuul_protocol::{Codec, JsonCodec, TurnResult};
///
/// let codec = JsonCodec;
/// let bytes = codec.encode(&TurnResult::message("You went back!")).unwrap();
/// let decoded: TurnResult = codec.decode(&bytes).unwrap();
/// assert_eq!(decoded.message, "You went back!");
/// ```
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}
