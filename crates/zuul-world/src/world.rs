//! The world: an arena that owns every room and key.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use zuul_protocol::RoomId;

use crate::{Exit, ExitState, Key, Room, WorldError};

/// Owns all rooms (addressed by [`RoomId`]) and all keys (addressed by
/// identifier) for the lifetime of a game.
///
/// Rooms are never removed, so a handle issued by [`World::add_room`]
/// stays valid forever. Key identifiers are unique within a world, so
/// matching a locked exit by identifier is the same as matching by key
/// handle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    rooms: Vec<Room>,
    keys: BTreeMap<String, Key>,
    start: RoomId,
    goal: Option<RoomId>,
}

impl World {
    /// Creates an empty world. The first room added becomes the start.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------
    // Rooms
    // -----------------------------------------------------------------

    /// Adds a room with no exits and returns its handle.
    pub fn add_room(&mut self, description: impl Into<String>) -> RoomId {
        let id = RoomId(self.rooms.len());
        self.rooms.push(Room::new(description));
        tracing::trace!(room = %id, "room added");
        id
    }

    /// # Errors
    /// [`WorldError::RoomNotFound`] if the handle is not from this world.
    pub fn room(&self, id: RoomId) -> Result<&Room, WorldError> {
        self.rooms.get(id.index()).ok_or(WorldError::RoomNotFound(id))
    }

    /// # Errors
    /// [`WorldError::RoomNotFound`] if the handle is not from this world.
    pub fn room_mut(&mut self, id: RoomId) -> Result<&mut Room, WorldError> {
        self.rooms
            .get_mut(id.index())
            .ok_or(WorldError::RoomNotFound(id))
    }

    pub fn contains(&self, id: RoomId) -> bool {
        id.index() < self.rooms.len()
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Handles of every room, in creation order.
    pub fn room_ids(&self) -> impl Iterator<Item = RoomId> + '_ {
        (0..self.rooms.len()).map(RoomId)
    }

    // -----------------------------------------------------------------
    // Exits
    // -----------------------------------------------------------------

    /// Wires an exit from `from` to `to`, replacing any exit already in
    /// that direction. Both handles must belong to this world.
    pub fn set_exit(
        &mut self,
        from: RoomId,
        direction: &str,
        to: RoomId,
        state: ExitState,
    ) -> Result<(), WorldError> {
        self.room(to)?;
        self.room_mut(from)?.set_exit(direction, to, state);
        Ok(())
    }

    /// Wires a Locked exit that opens with the named key, registering the
    /// key if the world doesn't know it yet.
    pub fn set_locked_exit(
        &mut self,
        from: RoomId,
        direction: &str,
        to: RoomId,
        key: &str,
    ) -> Result<(), WorldError> {
        self.room(to)?;
        self.room_mut(from)?.set_locked_exit(direction, to, key);
        self.add_key(key);
        Ok(())
    }

    /// Returns `true` if the player holds a key that opens `exit`.
    ///
    /// A tagged lock needs the key with that identifier; an untagged lock
    /// opens with any owned key.
    pub fn can_unlock(&self, exit: &Exit) -> bool {
        match exit.required_key() {
            Some(identifier) => self.key(identifier).is_some_and(Key::is_owned),
            None => self.owns_any_key(),
        }
    }

    /// Opens the Locked exit in `direction` if the player holds a key
    /// for it. Returns `true` if the exit was unlocked by this call.
    ///
    /// # Errors
    /// [`WorldError::RoomNotFound`] or [`WorldError::InvalidDirection`].
    pub fn unlock(&mut self, room: RoomId, direction: &str) -> Result<bool, WorldError> {
        let exit = self
            .room(room)?
            .exit(direction)
            .ok_or_else(|| WorldError::InvalidDirection(direction.to_string()))?;
        if exit.state() != ExitState::Locked || !self.can_unlock(exit) {
            return Ok(false);
        }
        self.room_mut(room)?
            .set_exit_state(direction, ExitState::Open)?;
        tracing::info!(%room, direction, "exit unlocked");
        Ok(true)
    }

    // -----------------------------------------------------------------
    // Keys
    // -----------------------------------------------------------------

    /// Registers a key (unowned) and returns it. Returns the existing key
    /// if the identifier is already known.
    pub fn add_key(&mut self, identifier: &str) -> &mut Key {
        self.keys
            .entry(identifier.to_string())
            .or_insert_with(|| Key::new(identifier))
    }

    /// Leaves a key in a room to be found, registering it if needed.
    pub fn place_key(&mut self, room: RoomId, identifier: &str) -> Result<(), WorldError> {
        self.room_mut(room)?.place_key(identifier);
        self.add_key(identifier);
        Ok(())
    }

    pub fn key(&self, identifier: &str) -> Option<&Key> {
        self.keys.get(identifier)
    }

    pub fn key_mut(&mut self, identifier: &str) -> Option<&mut Key> {
        self.keys.get_mut(identifier)
    }

    /// Claims a key by identifier.
    ///
    /// # Errors
    /// [`WorldError::UnknownKey`] if the world has no such key.
    pub fn claim_key(&mut self, identifier: &str) -> Result<(), WorldError> {
        let key = self
            .key_mut(identifier)
            .ok_or_else(|| WorldError::UnknownKey(identifier.to_string()))?;
        key.claim();
        Ok(())
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.keys.values()
    }

    pub fn owns_any_key(&self) -> bool {
        self.keys.values().any(Key::is_owned)
    }

    // -----------------------------------------------------------------
    // Start and goal
    // -----------------------------------------------------------------

    /// Where a new session begins. Defaults to the first room added.
    pub fn start(&self) -> RoomId {
        self.start
    }

    pub fn set_start(&mut self, room: RoomId) -> Result<(), WorldError> {
        self.room(room)?;
        self.start = room;
        Ok(())
    }

    /// Entering this room wins the game. Worlds without a goal can only
    /// be lost or quit.
    pub fn goal(&self) -> Option<RoomId> {
        self.goal
    }

    pub fn set_goal(&mut self, room: RoomId) -> Result<(), WorldError> {
        self.room(room)?;
        self.goal = Some(room);
        Ok(())
    }

    pub fn is_goal(&self, room: RoomId) -> bool {
        self.goal == Some(room)
    }
}
