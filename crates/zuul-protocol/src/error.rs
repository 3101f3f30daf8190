//! Error types for the protocol layer.

/// Errors that can occur while encoding or decoding protocol data.
///
/// Parsing a typed command never fails (unknown words become
/// [`CommandWord::Unknown`](crate::CommandWord::Unknown)), so every
/// variant here comes from a codec.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed.
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed: malformed JSON, missing fields, or
    /// fields of the wrong type.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),
}
