//! The turn processor: one command in, one [`TurnResult`] out.
//!
//! ```text
//!   execute(cmd)
//!     ├─ Unknown / Help / Quit ─────────────→ result (no tick)
//!     └─ Go / Mark / Back ──→ dispatch ──→ tick timer ──→ result
//!                                            ├─ expired → Lost
//!                                            └─ low     → warning
//! ```

use zuul_protocol::{Command, CommandWord, RoomId, TurnResult};
use zuul_world::{ExitState, WorldError};

use crate::messages;
use crate::{Session, SessionState};

impl Session {
    /// Processes one command and reports what happened.
    ///
    /// `help`, `quit`, and unrecognized verbs are free. Every other verb
    /// advances the timer by one tick, including a `go` with no
    /// direction and a `back` with no waypoint.
    ///
    /// Once the session is terminal every command returns
    /// "The game is over." with `terminated` set, and nothing changes.
    pub fn execute(&mut self, command: &Command) -> TurnResult {
        if self.state.is_terminal() {
            return TurnResult::terminal(messages::GAME_OVER);
        }

        tracing::debug!(
            session_id = %self.id,
            command = %command.word,
            argument = ?command.argument,
            room = %self.current,
            "processing command"
        );

        let outcome = match command.word {
            CommandWord::Unknown => {
                return TurnResult::message(messages::UNKNOWN_COMMAND);
            }
            CommandWord::Help => return TurnResult::message(help_text()),
            CommandWord::Quit => return self.quit(command),
            CommandWord::Go => self.go(command.argument.as_deref()),
            CommandWord::Mark => Ok(self.mark()),
            CommandWord::Back => self.back(),
        };

        let mut result = outcome.unwrap_or_else(|err| {
            tracing::error!(session_id = %self.id, error = %err, "turn failed");
            TurnResult::message(messages::INTERNAL_ERROR)
        });
        self.advance_timer(&mut result);
        result
    }

    /// Convenience for `execute(&Command::new(verb, argument))`.
    pub fn execute_words(&mut self, verb: &str, argument: Option<&str>) -> TurnResult {
        self.execute(&Command::new(verb, argument))
    }

    // -----------------------------------------------------------------
    // Verbs
    // -----------------------------------------------------------------

    fn go(&mut self, direction: Option<&str>) -> Result<TurnResult, WorldError> {
        let Some(direction) = direction else {
            return Ok(TurnResult::message(messages::GO_WHERE));
        };

        let Some(exit) = self.world.room(self.current)?.exit(direction) else {
            return Ok(TurnResult::message(messages::NO_EXIT));
        };
        let neighbor = exit.neighbor();

        let mut result = TurnResult::default();
        if self.world.unlock(self.current, direction)? {
            result.push_line(messages::UNLOCKED);
        }

        let state = self.world.room(self.current)?.exit_state(direction)?;
        if state.is_passable() {
            tracing::debug!(
                session_id = %self.id,
                from = %self.current,
                to = %neighbor,
                direction,
                "moved"
            );
            self.enter(neighbor, &mut result)?;
        } else if state == ExitState::Locked {
            result.push_line(messages::LOCKED);
        } else {
            result.push_line(messages::ONE_WAY);
        }
        Ok(result)
    }

    fn mark(&mut self) -> TurnResult {
        self.waypoint = Some(self.current);
        tracing::debug!(session_id = %self.id, waypoint = %self.current, "waypoint set");
        TurnResult::message(messages::MARKED)
    }

    fn back(&mut self) -> Result<TurnResult, WorldError> {
        let Some(waypoint) = self.waypoint else {
            return Ok(TurnResult::message(messages::NO_WAYPOINT));
        };
        let mut result = TurnResult::message(messages::WENT_BACK);
        self.enter(waypoint, &mut result)?;
        Ok(result)
    }

    fn quit(&mut self, command: &Command) -> TurnResult {
        if command.has_argument() {
            return TurnResult::message(messages::QUIT_WHAT);
        }
        self.finish(SessionState::Quit);
        TurnResult::terminal("")
    }

    // -----------------------------------------------------------------
    // Shared steps
    // -----------------------------------------------------------------

    /// Moves the player into `room`: describes it, picks up any key lying
    /// there that the player doesn't own yet, and checks for a win.
    fn enter(&mut self, room: RoomId, result: &mut TurnResult) -> Result<(), WorldError> {
        let description = self.world.room(room)?.long_description();
        self.current = room;
        result.push_line(description);

        let found = self
            .world
            .room(room)?
            .key()
            .filter(|identifier| !self.owns_key(identifier))
            .map(str::to_string);
        if let Some(identifier) = found {
            self.world.room_mut(room)?.take_key();
            self.world.claim_key(&identifier)?;
            tracing::info!(session_id = %self.id, key = %identifier, %room, "key found");
            result.push_line(messages::found_key(&identifier));
        }

        if self.world.is_goal(room) {
            let description = self.world.room(room)?.short_description().to_string();
            result.push_line(messages::won(&description));
            result.terminated = true;
            self.finish(SessionState::Won);
        }
        Ok(())
    }

    /// Ticks the timer after a turn-consuming command and reports low
    /// time or expiry. A win on the same turn takes precedence.
    fn advance_timer(&mut self, result: &mut TurnResult) {
        self.timer.tick();
        if self.state == SessionState::Won {
            return;
        }
        if self.timer.is_expired() {
            result.push_line(messages::TIME_UP);
            result.terminated = true;
            self.finish(SessionState::Lost);
        } else if self.timer.is_low() {
            result.push_line(messages::time_low(self.timer.value()));
        }
    }

    fn finish(&mut self, state: SessionState) {
        self.state = state;
        tracing::info!(
            session_id = %self.id,
            state = %state,
            turns = self.timer.turns(),
            room = %self.current,
            "game over"
        );
    }
}

fn help_text() -> String {
    format!("{}\n   {}", messages::HELP_INTRO, CommandWord::listing())
}
