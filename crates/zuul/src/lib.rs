//! # Zuul
//!
//! A small text adventure. The player walks a fixed map of rooms with
//! `go <direction>`, can `mark` a room and jump `back` to it, finds a key
//! that opens a locked door, and has a limited number of turns to reach
//! the goal.
//!
//! The game core lives in the layer crates; this crate wires them into a
//! playable loop over any reader and writer.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use zuul::prelude::*;
//!
//! # fn main() -> Result<(), ZuulError> {
//! let mut game = Game::builder().build()?;
//! let stdin = std::io::stdin();
//! let state = game.run(stdin.lock(), &mut std::io::stdout())?;
//! println!("finished: {state}");
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod game;

pub use config::{GameConfig, OutputFormat};
pub use error::ZuulError;
pub use game::{GOODBYE, Game, GameBuilder};

pub use zuul_protocol as protocol;
pub use zuul_session as session;
pub use zuul_timer as timer;
pub use zuul_world as world;

pub mod prelude {
    pub use crate::{Game, GameBuilder, GameConfig, OutputFormat, ZuulError};
    pub use zuul_protocol::{Command, CommandWord, TurnResult};
    pub use zuul_session::{Session, SessionConfig, SessionState};
    pub use zuul_timer::TimerConfig;
    pub use zuul_world::{ExitState, RoomId, World, WorldDefinition};
}
