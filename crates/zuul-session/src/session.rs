//! Session types: the state of one game in progress.
//!
//! A session tracks:
//! - WHERE the player is (`current`) and what they remembered (`waypoint`)
//! - HOW MUCH time is left (`timer`)
//! - WHETHER the game is still running (`state`)
//! - the world itself, whose exits and keys change as the player acts

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use zuul_protocol::RoomId;
use zuul_timer::{Timer, TimerConfig};
use zuul_world::{Room, World};

use crate::messages;
use crate::SessionError;

// ---------------------------------------------------------------------------
// SessionConfig
// ---------------------------------------------------------------------------

/// Configuration for a new session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Starting value, per-turn delta, and low threshold of the timer.
    pub timer: TimerConfig,
}

// ---------------------------------------------------------------------------
// SessionState
// ---------------------------------------------------------------------------

/// Where a session is in its lifecycle.
///
/// ```text
///            ┌──(goal reached)──→ Won
///   Playing ─┼──(timer expired)─→ Lost
///            └──(quit)──────────→ Quit
/// ```
///
/// Every state but Playing is terminal. Transitions only happen inside
/// [`Session::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Playing,
    Won,
    Lost,
    Quit,
}

impl SessionState {
    /// Returns `true` once the game has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => write!(f, "Playing"),
            Self::Won => write!(f, "Won"),
            Self::Lost => write!(f, "Lost"),
            Self::Quit => write!(f, "Quit"),
        }
    }
}

// ---------------------------------------------------------------------------
// SessionId
// ---------------------------------------------------------------------------

/// Random identifier attached to a session's log events.
///
/// 16 lowercase hex characters (64 bits of randomness).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        let bytes: [u8; 8] = rand::rng().random();
        Self(bytes.iter().map(|b| format!("{b:02x}")).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// One game in progress.
///
/// Invariants: `current` and `waypoint` (when set) are always rooms of
/// `world`, since every position the session moves to came from one of
/// the world's own exits.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) id: SessionId,
    pub(crate) world: World,
    pub(crate) current: RoomId,
    pub(crate) waypoint: Option<RoomId>,
    pub(crate) timer: Timer,
    pub(crate) state: SessionState,
}

impl Session {
    /// Starts a session at the world's start room.
    ///
    /// # Errors
    /// - [`SessionError::EmptyWorld`] if the world has no rooms
    /// - [`SessionError::World`] if the start room isn't in the world
    pub fn new(world: World, config: SessionConfig) -> Result<Self, SessionError> {
        if world.is_empty() {
            return Err(SessionError::EmptyWorld);
        }
        let current = world.start();
        world.room(current)?;

        let id = SessionId::generate();
        tracing::info!(
            session_id = %id,
            rooms = world.len(),
            start = %current,
            timer = config.timer.initial,
            "session created"
        );

        Ok(Self {
            id,
            world,
            current,
            waypoint: None,
            timer: Timer::new(config.timer),
            state: SessionState::Playing,
        })
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the world, e.g. to rewire exits between turns.
    /// Handles passed to the world must come from the same world.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The room the player is standing in.
    pub fn current_room(&self) -> RoomId {
        self.current
    }

    /// The room data for [`current_room`](Self::current_room).
    pub fn room(&self) -> Result<&Room, SessionError> {
        Ok(self.world.room(self.current)?)
    }

    pub fn waypoint(&self) -> Option<RoomId> {
        self.waypoint
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut Timer {
        &mut self.timer
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Gives the player a key directly, outside of finding it in a room.
    ///
    /// # Errors
    /// [`SessionError::World`] if the world has no key by that name.
    pub fn claim_key(&mut self, identifier: &str) -> Result<(), SessionError> {
        self.world.claim_key(identifier)?;
        tracing::info!(session_id = %self.id, key = identifier, "key claimed");
        Ok(())
    }

    /// Returns `true` if the player owns the named key.
    pub fn owns_key(&self, identifier: &str) -> bool {
        self.world.key(identifier).is_some_and(|k| k.is_owned())
    }

    /// The opening text: title, time available, and where the player is.
    pub fn welcome(&self) -> Result<String, SessionError> {
        let room = self.room()?;
        Ok(messages::welcome(self.timer.value(), &room.long_description()))
    }
}
