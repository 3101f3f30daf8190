//! Core value types that cross the boundary between the game core and
//! whatever drives it (the CLI, a test harness, a transcript writer).

use serde::{Deserialize, Serialize};

use std::fmt;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A stable handle to a room inside a world's room arena.
///
/// Rooms reference each other in cycles (a map is a cyclic graph), so
/// exits store handles instead of references. A `RoomId` is only
/// meaningful for the world that issued it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RoomId(pub usize);

impl RoomId {
    /// Index of the room in its arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// TurnResult
// ---------------------------------------------------------------------------

/// The outcome of processing one command.
///
/// The core never prints. It hands this back and the front end decides
/// how to render it. `message` may span several lines; `terminated` tells
/// the front end to stop reading commands.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TurnResult {
    /// Text to show the player.
    pub message: String,
    /// `true` once the game has ended (quit, lost, or won).
    pub terminated: bool,
}

impl TurnResult {
    /// A result that keeps the game going.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            terminated: false,
        }
    }

    /// A result that ends the game.
    pub fn terminal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            terminated: true,
        }
    }

    /// Appends a line to the message, inserting a newline separator when
    /// the message is not empty.
    pub fn push_line(&mut self, line: impl AsRef<str>) {
        if !self.message.is_empty() {
            self.message.push('\n');
        }
        self.message.push_str(line.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_id_display() {
        assert_eq!(RoomId(3).to_string(), "R-3");
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_room_id_serializes_transparently() {
        let json = serde_json::to_string(&RoomId(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn test_turn_result_constructors() {
        let r = TurnResult::message("hello");
        assert_eq!(r.message, "hello");
        assert!(!r.terminated);

        let r = TurnResult::terminal("bye");
        assert!(r.terminated);
    }

    #[test]
    fn test_push_line_separates_with_newline() {
        let mut r = TurnResult::default();
        r.push_line("first");
        r.push_line("second");
        assert_eq!(r.message, "first\nsecond");
    }
}
