//! Serializable world definitions.
//!
//! A definition names rooms by string and wires exits between those
//! names. [`WorldDefinition::build`] resolves the names into a [`World`]
//! arena, checking everything the arena's own API would otherwise let a
//! caller get wrong.
//!
//! ```json
//! {
//!   "start": "outside",
//!   "goal": "office",
//!   "rooms": [
//!     { "name": "outside", "description": "outside the main entrance",
//!       "exits": [ { "direction": "east", "to": "office",
//!                    "state": "locked", "key": "brass" } ] },
//!     { "name": "office", "description": "in the admin office",
//!       "key": "brass" }
//!   ]
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use zuul_protocol::RoomId;

use crate::{ExitState, World, WorldError};

/// A whole world, by room name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorldDefinition {
    /// Name of the room a new game starts in.
    pub start: String,
    /// Name of the room that wins the game, if any.
    #[serde(default)]
    pub goal: Option<String>,
    pub rooms: Vec<RoomDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoomDefinition {
    /// Unique name other definitions refer to this room by.
    pub name: String,
    /// Text that follows "You are", e.g. `"in a plain classroom"`.
    pub description: String,
    #[serde(default)]
    pub exits: Vec<ExitDefinition>,
    /// Identifier of a key lying in this room.
    #[serde(default)]
    pub key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExitDefinition {
    pub direction: String,
    /// Name of the neighboring room.
    pub to: String,
    #[serde(default)]
    pub state: ExitState,
    /// Key that opens this exit. Only valid when `state` is locked.
    #[serde(default)]
    pub key: Option<String>,
}

impl WorldDefinition {
    /// Resolves room names and builds the world.
    ///
    /// Exit directions are lower-cased, since typed commands are too.
    /// Two exits that differ only in case collapse into one, the later
    /// definition winning.
    ///
    /// # Errors
    /// - [`WorldError::DuplicateRoom`] if two rooms share a name
    /// - [`WorldError::UnknownRoom`] if an exit, `start`, or `goal` names
    ///   a room that isn't defined
    /// - [`WorldError::InvalidDefinition`] if the world has no rooms, or an
    ///   exit carries a key without being locked
    pub fn build(&self) -> Result<World, WorldError> {
        if self.rooms.is_empty() {
            return Err(WorldError::InvalidDefinition(
                "a world needs at least one room".into(),
            ));
        }

        let mut world = World::new();
        let mut ids: HashMap<&str, RoomId> = HashMap::new();

        for room in &self.rooms {
            let id = world.add_room(room.description.clone());
            if ids.insert(room.name.as_str(), id).is_some() {
                return Err(WorldError::DuplicateRoom(room.name.clone()));
            }
        }

        let lookup = |name: &str| {
            ids.get(name)
                .copied()
                .ok_or_else(|| WorldError::UnknownRoom(name.to_string()))
        };

        for room in &self.rooms {
            let from = lookup(&room.name)?;
            for exit in &room.exits {
                let to = lookup(&exit.to)?;
                let direction = exit.direction.to_lowercase();
                match (&exit.key, exit.state) {
                    (Some(key), ExitState::Locked) => {
                        world.set_locked_exit(from, &direction, to, key)?;
                    }
                    (Some(_), state) => {
                        return Err(WorldError::InvalidDefinition(format!(
                            "exit {:?} from {:?} has a key but is {state}",
                            exit.direction, room.name
                        )));
                    }
                    (None, state) => {
                        world.set_exit(from, &direction, to, state)?;
                    }
                }
            }
            if let Some(key) = &room.key {
                world.place_key(from, key)?;
            }
        }

        world.set_start(lookup(&self.start)?)?;
        if let Some(goal) = &self.goal {
            world.set_goal(lookup(goal)?)?;
        }

        tracing::debug!(
            rooms = world.len(),
            keys = world.keys().count(),
            "world built from definition"
        );
        Ok(world)
    }
}
