//! Rooms and their exits.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use zuul_protocol::RoomId;

use crate::WorldError;

// ---------------------------------------------------------------------------
// ExitState
// ---------------------------------------------------------------------------

/// Whether an exit can be walked through.
///
/// ```text
///   Locked ──(unlock with key)──→ Open
///   OneWayBlocked                 (only passable from the other side)
/// ```
///
/// The session only ever moves exits from Locked to Open; nothing in
/// play locks a door again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitState {
    #[default]
    Open,
    Locked,
    /// A trapdoor: the neighbor is reachable from here only in reverse.
    #[serde(alias = "trapdoor")]
    OneWayBlocked,
}

impl ExitState {
    pub fn is_passable(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for ExitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Locked => write!(f, "locked"),
            Self::OneWayBlocked => write!(f, "one-way"),
        }
    }
}

// ---------------------------------------------------------------------------
// Exit
// ---------------------------------------------------------------------------

/// A directed connection to a neighboring room.
///
/// `required_key` is only ever set while the exit is Locked. A Locked
/// exit without one opens with any key the player owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    neighbor: RoomId,
    state: ExitState,
    required_key: Option<String>,
}

impl Exit {
    pub fn new(neighbor: RoomId, state: ExitState) -> Self {
        Self {
            neighbor,
            state,
            required_key: None,
        }
    }

    /// A Locked exit that opens with the named key.
    pub fn locked(neighbor: RoomId, key: impl Into<String>) -> Self {
        Self {
            neighbor,
            state: ExitState::Locked,
            required_key: Some(key.into()),
        }
    }

    pub fn neighbor(&self) -> RoomId {
        self.neighbor
    }

    pub fn state(&self) -> ExitState {
        self.state
    }

    /// Identifier of the key that opens this exit, if it is locked and
    /// tagged with one.
    pub fn required_key(&self) -> Option<&str> {
        self.required_key.as_deref()
    }

    /// Changes the state in place. Leaving Locked drops the required key.
    fn set_state(&mut self, state: ExitState) {
        self.state = state;
        if state != ExitState::Locked {
            self.required_key = None;
        }
    }
}

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// One location in the world.
///
/// Exits are keyed by direction label, one neighbor per direction, and
/// iterate in sorted order so descriptions are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    description: String,
    exits: BTreeMap<String, Exit>,
    /// Identifier of a key lying here, waiting to be found.
    key: Option<String>,
}

impl Room {
    /// Creates a room with no exits. `description` reads after "You are",
    /// e.g. `"in a computing lab"`.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            exits: BTreeMap::new(),
            key: None,
        }
    }

    /// Registers an exit, silently replacing any exit already in that
    /// direction (neighbor, state, and key alike).
    pub fn set_exit(&mut self, direction: impl Into<String>, neighbor: RoomId, state: ExitState) {
        self.exits
            .insert(direction.into(), Exit::new(neighbor, state));
    }

    /// Registers a Locked exit that opens with the named key.
    pub fn set_locked_exit(
        &mut self,
        direction: impl Into<String>,
        neighbor: RoomId,
        key: impl Into<String>,
    ) {
        self.exits
            .insert(direction.into(), Exit::locked(neighbor, key));
    }

    /// The exit in `direction`, or `None` if there is no exit that way.
    pub fn exit(&self, direction: &str) -> Option<&Exit> {
        self.exits.get(direction)
    }

    /// The neighbor in `direction`, regardless of whether the exit is
    /// currently passable.
    pub fn get_exit(&self, direction: &str) -> Option<RoomId> {
        self.exit(direction).map(Exit::neighbor)
    }

    /// # Errors
    /// [`WorldError::InvalidDirection`] if no exit is registered that way.
    pub fn exit_state(&self, direction: &str) -> Result<ExitState, WorldError> {
        self.exit(direction)
            .map(Exit::state)
            .ok_or_else(|| WorldError::InvalidDirection(direction.to_string()))
    }

    /// Mutates the state of an existing exit, e.g. Locked → Open.
    ///
    /// # Errors
    /// [`WorldError::InvalidDirection`] if no exit is registered that way.
    pub fn set_exit_state(&mut self, direction: &str, state: ExitState) -> Result<(), WorldError> {
        let exit = self
            .exits
            .get_mut(direction)
            .ok_or_else(|| WorldError::InvalidDirection(direction.to_string()))?;
        exit.set_state(state);
        Ok(())
    }

    /// Direction labels in sorted order.
    pub fn directions(&self) -> impl Iterator<Item = &str> {
        self.exits.keys().map(String::as_str)
    }

    /// All exits with their directions, sorted by direction.
    pub fn exits(&self) -> impl Iterator<Item = (&str, &Exit)> {
        self.exits.iter().map(|(d, e)| (d.as_str(), e))
    }

    pub fn short_description(&self) -> &str {
        &self.description
    }

    /// ```text
    /// You are in a computing lab.
    /// Exits: east north west
    /// ```
    pub fn long_description(&self) -> String {
        let mut text = format!("You are {}.\nExits:", self.description);
        for direction in self.directions() {
            text.push(' ');
            text.push_str(direction);
        }
        text
    }

    /// Identifier of the key lying in this room, if any.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn has_key(&self) -> bool {
        self.key.is_some()
    }

    /// Leaves a key here to be found. Replaces any key already placed.
    pub fn place_key(&mut self, identifier: impl Into<String>) {
        self.key = Some(identifier.into());
    }

    /// Picks up the key lying here, emptying the slot.
    pub fn take_key(&mut self) -> Option<String> {
        self.key.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lab() -> Room {
        let mut room = Room::new("in a computing lab");
        room.set_exit("west", RoomId(1), ExitState::Open);
        room.set_exit("north", RoomId(2), ExitState::OneWayBlocked);
        room.set_locked_exit("east", RoomId(3), "brass");
        room
    }

    #[test]
    fn test_get_exit_missing_direction() {
        let room = lab();
        assert_eq!(room.get_exit("up"), None);
        assert!(room.exit("up").is_none());
    }

    #[test]
    fn test_get_exit_ignores_state() {
        let room = lab();
        assert_eq!(room.get_exit("east"), Some(RoomId(3)));
        assert_eq!(room.get_exit("north"), Some(RoomId(2)));
    }

    #[test]
    fn test_exit_state_missing_direction_is_error() {
        let room = lab();
        let err = room.exit_state("up").unwrap_err();
        assert!(matches!(err, WorldError::InvalidDirection(ref d) if d == "up"));
    }

    #[test]
    fn test_set_exit_state_missing_direction_is_error() {
        let mut room = lab();
        assert!(room.set_exit_state("down", ExitState::Open).is_err());
    }

    #[test]
    fn test_locked_exit_records_key() {
        let room = lab();
        let exit = room.exit("east").unwrap();
        assert_eq!(exit.state(), ExitState::Locked);
        assert_eq!(exit.required_key(), Some("brass"));
    }

    #[test]
    fn test_unlocking_drops_required_key() {
        let mut room = lab();
        room.set_exit_state("east", ExitState::Open).unwrap();
        let exit = room.exit("east").unwrap();
        assert_eq!(exit.state(), ExitState::Open);
        assert_eq!(exit.required_key(), None);
    }

    #[test]
    fn test_set_exit_overwrites_silently() {
        let mut room = lab();
        room.set_exit("east", RoomId(9), ExitState::Open);
        let exit = room.exit("east").unwrap();
        assert_eq!(exit.neighbor(), RoomId(9));
        assert_eq!(exit.state(), ExitState::Open);
        assert_eq!(exit.required_key(), None);
    }

    #[test]
    fn test_long_description_lists_sorted_exits() {
        assert_eq!(
            lab().long_description(),
            "You are in a computing lab.\nExits: east north west"
        );
    }

    #[test]
    fn test_long_description_without_exits() {
        let room = Room::new("nowhere");
        assert_eq!(room.long_description(), "You are nowhere.\nExits:");
    }

    #[test]
    fn test_take_key_empties_slot() {
        let mut room = Room::new("in a lecture theater");
        room.place_key("brass");
        assert!(room.has_key());
        assert_eq!(room.take_key().as_deref(), Some("brass"));
        assert!(!room.has_key());
        assert_eq!(room.take_key(), None);
    }

    #[test]
    fn test_exit_state_display() {
        assert_eq!(ExitState::OneWayBlocked.to_string(), "one-way");
        assert!(ExitState::Open.is_passable());
        assert!(!ExitState::Locked.is_passable());
    }
}
