//! Integration tests for turn processing.

use proptest::prelude::*;
use zuul_protocol::{Command, CommandWord};
use zuul_session::{Session, SessionConfig, SessionState};
use zuul_timer::TimerConfig;
use zuul_world::{ExitState, RoomId, World, campus};

// =========================================================================
// Helpers
// =========================================================================

const A: RoomId = RoomId(0);
const B: RoomId = RoomId(1);
const C: RoomId = RoomId(2);

/// A --east--> B --east(locked, brass)--> C, with B --north(trapdoor)--> A
/// and the brass key lying in D (A --south--> D).
fn world() -> World {
    let mut world = World::new();
    let a = world.add_room("in room A");
    let b = world.add_room("in room B");
    let c = world.add_room("in room C");
    let d = world.add_room("in room D");
    world.set_exit(a, "east", b, ExitState::Open).unwrap();
    world.set_exit(a, "south", d, ExitState::Open).unwrap();
    world.set_exit(b, "west", a, ExitState::Open).unwrap();
    world.set_exit(b, "north", a, ExitState::OneWayBlocked).unwrap();
    world.set_locked_exit(b, "east", c, "brass").unwrap();
    world.set_exit(c, "west", b, ExitState::Open).unwrap();
    world.set_exit(d, "north", a, ExitState::Open).unwrap();
    world.place_key(d, "brass").unwrap();
    world
}

fn session_with(world: World, initial: i64, delta: i64, low: i64) -> Session {
    let config = SessionConfig {
        timer: TimerConfig::new(initial, delta, low),
    };
    Session::new(world, config).unwrap()
}

fn session() -> Session {
    session_with(world(), 60, -1, 5)
}

fn go(session: &mut Session, direction: &str) -> zuul_protocol::TurnResult {
    session.execute_words("go", Some(direction))
}

// =========================================================================
// go
// =========================================================================

#[test]
fn test_go_through_open_exit() {
    let mut s = session();
    let r = go(&mut s, "east");
    assert_eq!(s.current_room(), B);
    assert!(r.message.contains("You are in room B."), "got {:?}", r.message);
    assert!(!r.terminated);
}

#[test]
fn test_go_without_direction_still_ticks() {
    let mut s = session();
    let r = s.execute_words("go", None);
    assert_eq!(r.message, "Go where?");
    assert_eq!(s.current_room(), A);
    assert_eq!(s.timer().value(), 59);
}

#[test]
fn test_go_nowhere_keeps_position() {
    let mut s = session();
    let r = go(&mut s, "up");
    assert_eq!(r.message, "There's nothing there!");
    assert_eq!(s.current_room(), A);
    assert_eq!(s.timer().value(), 59);
}

#[test]
fn test_locked_door_without_key() {
    let mut s = session();
    go(&mut s, "east");
    let r = go(&mut s, "east");
    assert!(r.message.contains("locked"));
    assert_eq!(s.current_room(), B);
    assert_eq!(
        s.world().room(B).unwrap().exit_state("east").unwrap(),
        ExitState::Locked
    );
}

#[test]
fn test_claimed_key_unlocks_then_moves() {
    let mut s = session();
    go(&mut s, "east");
    go(&mut s, "east");
    assert_eq!(s.current_room(), B);

    s.claim_key("brass").unwrap();
    let r = go(&mut s, "east");
    assert!(r.message.starts_with("You unlocked the door!\nYou are in room C."));
    assert_eq!(s.current_room(), C);
    assert_eq!(
        s.world().room(B).unwrap().exit_state("east").unwrap(),
        ExitState::Open
    );
}

#[test]
fn test_unlock_happens_once() {
    let mut s = session();
    s.claim_key("brass").unwrap();
    go(&mut s, "east");
    go(&mut s, "east");
    go(&mut s, "west");
    let r = go(&mut s, "east");
    assert!(!r.message.contains("unlocked"));
    assert_eq!(s.current_room(), C);
}

#[test]
fn test_trapdoor_blocks() {
    let mut s = session();
    go(&mut s, "east");
    let r = go(&mut s, "north");
    assert_eq!(r.message, "That way can only be taken from the other side!");
    assert_eq!(s.current_room(), B);
}

#[test]
fn test_key_is_found_on_entry_and_opens_door() {
    let mut s = session();
    let r = go(&mut s, "south");
    assert!(r.message.contains("You found a key (brass)!"));
    assert!(s.owns_key("brass"));
    assert!(!s.world().room(RoomId(3)).unwrap().has_key());

    go(&mut s, "north");
    go(&mut s, "east");
    let r = go(&mut s, "east");
    assert!(r.message.contains("You unlocked the door!"));
    assert_eq!(s.current_room(), C);
}

#[test]
fn test_key_is_not_found_twice() {
    let mut s = session();
    go(&mut s, "south");
    go(&mut s, "north");
    let r = go(&mut s, "south");
    assert!(!r.message.contains("found"));
}

#[test]
fn test_owned_key_is_left_in_room() {
    let mut s = session();
    s.claim_key("brass").unwrap();
    let r = go(&mut s, "south");
    assert!(!r.message.contains("found"));
    assert!(s.world().room(RoomId(3)).unwrap().has_key());
}

// =========================================================================
// mark / back
// =========================================================================

#[test]
fn test_mark_then_back_consumes_one_tick() {
    let mut s = session();
    s.execute_words("mark", None);
    go(&mut s, "east");
    assert_eq!(s.current_room(), B);

    let before = s.timer().value();
    let r = s.execute_words("back", None);
    assert_eq!(s.current_room(), A);
    assert_eq!(s.timer().value(), before - 1);
    assert!(r.message.starts_with("You went back!\nYou are in room A."));
}

#[test]
fn test_back_without_waypoint_still_ticks() {
    let mut s = session();
    let r = s.execute_words("back", None);
    assert_eq!(r.message, "You never bothered to remember any place...");
    assert_eq!(s.timer().value(), 59);
    assert!(!r.terminated);
}

#[test]
fn test_mark_overwrites_previous_waypoint() {
    let mut s = session();
    s.execute_words("mark", None);
    go(&mut s, "east");
    s.execute_words("mark", None);
    assert_eq!(s.waypoint(), Some(B));
    go(&mut s, "west");
    s.execute_words("back", None);
    assert_eq!(s.current_room(), B);
}

#[test]
fn test_back_from_neighbor() {
    let mut s = session();
    go(&mut s, "east");
    s.execute_words("mark", None);
    go(&mut s, "west");
    s.execute_words("back", None);
    assert_eq!(s.current_room(), B);
}

// =========================================================================
// help / quit / unknown
// =========================================================================

#[test]
fn test_help_does_not_tick() {
    let mut s = session();
    let r = s.execute_words("help", None);
    assert!(r.message.contains("Your command words are:"));
    assert!(r.message.contains("go  back  help  mark  quit"));
    assert_eq!(s.timer().value(), 60);
}

#[test]
fn test_unknown_command_does_not_tick() {
    let mut s = session();
    let r = s.execute(&Command::parse("dance wildly"));
    assert!(r.message.starts_with("Huh?"));
    assert!(!r.terminated);
    assert_eq!(s.timer().value(), 60);
}

#[test]
fn test_quit_terminates_without_ticking() {
    let mut s = session();
    let r = s.execute_words("quit", None);
    assert!(r.terminated);
    assert_eq!(s.state(), SessionState::Quit);
    assert_eq!(s.timer().value(), 60);
}

#[test]
fn test_quit_with_argument_is_refused() {
    let mut s = session();
    let r = s.execute_words("quit", Some("now"));
    assert_eq!(r.message, "Quit what?");
    assert!(!r.terminated);
    assert_eq!(s.state(), SessionState::Playing);
    assert_eq!(s.timer().value(), 60);
}

// =========================================================================
// Timer interaction
// =========================================================================

#[test]
fn test_countdown_low_then_expired() {
    let mut s = session();
    for _ in 0..54 {
        let r = s.execute_words("mark", None);
        assert!(!r.message.contains("running low"));
    }
    assert!(!s.timer().is_low());

    let r = s.execute_words("mark", None);
    assert!(s.timer().is_low());
    assert!(r.message.ends_with("Time is running low!\nYou have 5s left..."));

    for _ in 0..4 {
        assert!(!s.execute_words("mark", None).terminated);
    }
    let r = s.execute_words("mark", None);
    assert!(s.timer().is_expired());
    assert!(r.terminated);
    assert!(r.message.ends_with("Time's up - you lost!"));
    assert_eq!(s.state(), SessionState::Lost);
    assert_eq!(s.timer().turns(), 60);
}

#[test]
fn test_commands_after_game_over_change_nothing() {
    let mut s = session_with(world(), 1, -1, 0);
    let r = go(&mut s, "east");
    assert!(r.terminated);
    assert_eq!(s.state(), SessionState::Lost);

    let r = go(&mut s, "west");
    assert_eq!(r.message, "The game is over.");
    assert!(r.terminated);
    assert_eq!(s.current_room(), B);
    assert_eq!(s.timer().value(), 0);
}

// =========================================================================
// Winning
// =========================================================================

#[test]
fn test_reaching_goal_wins() {
    let mut w = world();
    w.set_goal(C).unwrap();
    let mut s = session_with(w, 60, -1, 5);
    s.claim_key("brass").unwrap();
    go(&mut s, "east");
    let r = go(&mut s, "east");
    assert!(r.terminated);
    assert!(r.message.contains("You win!"));
    assert_eq!(s.state(), SessionState::Won);
}

#[test]
fn test_win_beats_expiry_on_same_turn() {
    let mut w = world();
    w.set_goal(B).unwrap();
    let mut s = session_with(w, 1, -1, 0);
    let r = go(&mut s, "east");
    assert!(r.terminated);
    assert_eq!(s.state(), SessionState::Won);
    assert!(!r.message.contains("Time's up"));
}

#[test]
fn test_campus_walkthrough() {
    let mut s = Session::new(campus().unwrap(), SessionConfig::default()).unwrap();
    for (verb, arg) in [
        ("go", "east"),  // theater, key found
        ("go", "south"), // lab
        ("go", "north"), // trapdoor
    ] {
        s.execute_words(verb, Some(arg));
    }
    assert!(s.owns_key("brass"));
    let r = go(&mut s, "east");
    assert!(r.message.contains("You unlocked the door!"));
    assert!(r.message.contains("in the computing admin office"));
    assert_eq!(s.state(), SessionState::Won);
    assert_eq!(s.timer().value(), 56);
}

// =========================================================================
// Properties
// =========================================================================

fn command_strategy() -> impl Strategy<Value = Command> {
    let word = prop_oneof![
        Just("go"),
        Just("back"),
        Just("help"),
        Just("mark"),
        Just("quit"),
        Just("xyzzy"),
    ];
    let argument = proptest::option::of(prop_oneof![
        Just("north"),
        Just("east"),
        Just("south"),
        Just("west"),
        Just("up"),
    ]);
    (word, argument).prop_map(|(w, a)| Command::new(w, a))
}

proptest! {
    #[test]
    fn prop_only_world_verbs_tick(commands in proptest::collection::vec(command_strategy(), 0..200)) {
        let mut s = session_with(world(), 10_000, -1, 0);
        let mut expected = 0u64;
        for cmd in &commands {
            if s.is_over() {
                break;
            }
            let ticks = matches!(cmd.word, CommandWord::Go | CommandWord::Mark | CommandWord::Back);
            s.execute(cmd);
            if ticks {
                expected += 1;
            }
            prop_assert_eq!(s.timer().turns(), expected);
            prop_assert_eq!(s.timer().value(), 10_000 - expected as i64);
            prop_assert!(s.world().contains(s.current_room()));
        }
    }

    #[test]
    fn prop_unknown_direction_never_moves(direction in "[a-z]{1,6}") {
        prop_assume!(!["east", "south"].contains(&direction.as_str()));
        let mut s = session();
        go(&mut s, &direction);
        prop_assert_eq!(s.current_room(), A);
    }

    #[test]
    fn prop_opened_doors_stay_open(commands in proptest::collection::vec(command_strategy(), 0..200)) {
        let mut s = session_with(world(), 10_000, -1, 0);
        let mut opened = false;
        for cmd in &commands {
            s.execute(cmd);
            let state = s.world().room(B).unwrap().exit_state("east").unwrap();
            prop_assert!(!opened || state == ExitState::Open);
            opened = state == ExitState::Open;
        }
    }
}
