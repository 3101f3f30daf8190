//! Unified error type for Zuul.

use zuul_protocol::ProtocolError;
use zuul_session::SessionError;
use zuul_world::WorldError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attribute on each variant generates `From` impls so `?`
/// converts layer errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum ZuulError {
    /// Reading or writing the terminal or a file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A config or world file could not be decoded, or a transcript line
    /// could not be encoded.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A world definition is inconsistent.
    #[error(transparent)]
    World(#[from] WorldError),

    /// A session could not be started.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Bad command-line usage.
    #[error("{0}")]
    Usage(String),
}
