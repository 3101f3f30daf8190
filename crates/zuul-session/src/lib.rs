//! Turn processing and game state for Zuul.
//!
//! A [`Session`] is one game in progress. It owns the world, the
//! player's position and waypoint, and the timer, and it processes one
//! [`Command`](zuul_protocol::Command) at a time:
//!
//! ```text
//!   Command ──→ Session::execute ──→ TurnResult { message, terminated }
//! ```
//!
//! The session never performs I/O. Every player mistake comes back as
//! text; the only ways out of [`SessionState::Playing`] are quitting,
//! running out of time, and reaching the goal room.
//!
//! # How it fits in the stack
//!
//! ```text
//! Front end (above)  ← reads lines, prints TurnResults
//!     ↕
//! Session (this crate)  ← dispatches verbs, moves the player, ticks the timer
//!     ↕
//! World / Timer / Protocol (below)
//! ```

mod error;
mod messages;
mod session;
mod turn;

pub use error::SessionError;
pub use session::{Session, SessionConfig, SessionId, SessionState};
