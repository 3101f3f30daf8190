//! Error types for the world layer.

use zuul_protocol::RoomId;

/// Errors that can occur while building or querying a world.
///
/// None of these are player mistakes. A player walking into a wall gets a
/// message from the session; these are contract violations by whoever
/// builds or queries the graph.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The room has no exit in that direction. Callers are expected to
    /// check with [`Room::exit`](crate::Room::exit) first.
    #[error("no exit {0:?} in this room")]
    InvalidDirection(String),

    /// The handle does not belong to this world.
    #[error("room {0} not found")]
    RoomNotFound(RoomId),

    /// No key with that identifier exists in this world.
    #[error("unknown key {0:?}")]
    UnknownKey(String),

    /// A world definition refers to a room name it never declares.
    #[error("unknown room {0:?} in world definition")]
    UnknownRoom(String),

    /// Two rooms in a world definition share a name.
    #[error("duplicate room {0:?} in world definition")]
    DuplicateRoom(String),

    /// The world definition is structurally wrong, e.g. a key on an exit
    /// that is not locked.
    #[error("invalid world definition: {0}")]
    InvalidDefinition(String),
}
