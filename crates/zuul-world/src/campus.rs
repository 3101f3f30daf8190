//! The built-in university map.
//!
//! ```text
//!   pub ── outside ── theater
//!             │          │ ^
//!         classroom ──  lab ──[locked]── office
//! ```
//!
//! - The key lies in the lecture theater.
//! - lab → theater (north) is a trapdoor: theater → lab only.
//! - lab → office (east) is locked; the office is the goal.

use crate::{ExitState, World, WorldError};

/// Identifier of the campus key.
pub const CAMPUS_KEY: &str = "brass";

/// Builds the campus world.
pub fn campus() -> Result<World, WorldError> {
    let mut world = World::new();

    let outside = world.add_room("outside the main entrance of the university");
    let theater = world.add_room("in a lecture theater");
    let pub_ = world.add_room("in the campus pub");
    let lab = world.add_room("in a computing lab");
    let office = world.add_room("in the computing admin office");
    let classroom = world.add_room("in a plain classroom");

    world.set_exit(outside, "east", theater, ExitState::Open)?;
    world.set_exit(outside, "south", classroom, ExitState::Open)?;
    world.set_exit(outside, "west", pub_, ExitState::Open)?;

    world.set_exit(theater, "west", outside, ExitState::Open)?;
    world.set_exit(theater, "south", lab, ExitState::Open)?;

    world.set_exit(pub_, "east", outside, ExitState::Open)?;

    world.set_exit(classroom, "north", outside, ExitState::Open)?;
    world.set_exit(classroom, "east", lab, ExitState::Open)?;

    world.set_exit(lab, "north", theater, ExitState::OneWayBlocked)?;
    world.set_locked_exit(lab, "east", office, CAMPUS_KEY)?;
    world.set_exit(lab, "west", classroom, ExitState::Open)?;

    world.set_exit(office, "west", lab, ExitState::Open)?;

    world.place_key(theater, CAMPUS_KEY)?;
    world.set_start(outside)?;
    world.set_goal(office)?;

    Ok(world)
}
