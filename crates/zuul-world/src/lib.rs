//! Room graph, exits, and keys for Zuul.
//!
//! A world is an arena of rooms addressed by [`RoomId`] handles. Exits
//! point from one room to another by handle, so the graph can be as
//! cyclic as a map needs to be without any shared ownership.
//!
//! # Key types
//!
//! - [`World`]: owns every room and key; the only way to wire exits
//!   between rooms
//! - [`Room`]: description, exits, and an optional discoverable key
//! - [`Exit`] / [`ExitState`]: per-direction neighbor and lock state
//! - [`Key`]: an unlock credential with a one-way `claim`
//! - [`WorldDefinition`]: serde description of a world, built with
//!   [`WorldDefinition::build`]
//! - [`campus`]: the built-in university map

mod campus;
mod definition;
mod error;
mod key;
mod room;
mod world;

pub use campus::{CAMPUS_KEY, campus};
pub use definition::{ExitDefinition, RoomDefinition, WorldDefinition};
pub use error::WorldError;
pub use key::Key;
pub use room::{Exit, ExitState, Room};
pub use world::World;
pub use zuul_protocol::RoomId;
