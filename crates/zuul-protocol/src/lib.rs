//! The language spoken between the Zuul core and its front ends.
//!
//! - **Types** ([`Command`], [`CommandWord`], [`TurnResult`], [`RoomId`]):
//!   what goes into a turn and what comes out of it.
//! - **Tokenizer** ([`Command::parse`]): turns a typed line into a
//!   [`Command`]. The core never validates syntax.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]): how configuration, world
//!   files, and transcripts are converted to and from bytes.
//!
//! ```text
//! CLI (lines) → Protocol (Command) → Session (turn) → Protocol (TurnResult) → CLI
//! ```

mod codec;
mod command;
mod error;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use command::{Command, CommandWord};
pub use error::ProtocolError;
pub use types::{RoomId, TurnResult};
