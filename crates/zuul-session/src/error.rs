//! Error types for the session layer.

use zuul_world::WorldError;

/// Errors that can occur while setting up or administering a session.
///
/// Processing a command never returns one of these: player mistakes are
/// reported in the [`TurnResult`](zuul_protocol::TurnResult) text.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The world has no rooms to start in.
    #[error("cannot start a session in an empty world")]
    EmptyWorld,

    /// A world lookup failed (bad start room, unknown key, ...).
    #[error(transparent)]
    World(#[from] WorldError),
}
