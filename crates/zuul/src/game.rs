//! `Game` builder and play loop.
//!
//! This is the thin front end around a [`Session`]: it reads lines,
//! tokenizes them, hands them to the session, and writes back whatever
//! the session says. It knows nothing about rooms or doors.

use std::io::{BufRead, Write};

use zuul_protocol::{Codec, Command, CommandWord, JsonCodec, TurnResult};
use zuul_session::{Session, SessionConfig, SessionState};
use zuul_timer::TimerConfig;
use zuul_world::{World, campus};

use crate::{GameConfig, OutputFormat, ZuulError};

/// Printed after the last turn in text mode.
pub const GOODBYE: &str = "Thank you for playing.  Good bye.";

/// Prompt shown before each command in text mode.
const PROMPT: &str = "> ";

/// Builder for configuring and starting a game.
///
/// ```rust
/// use zuul::prelude::*;
///
/// let game = Game::builder()
///     .timer(TimerConfig::new(20, -1, 3))
///     .output(OutputFormat::Json)
///     .build()
///     .unwrap();
/// assert_eq!(game.session().timer().value(), 20);
/// ```
#[derive(Debug, Default)]
pub struct GameBuilder {
    world: Option<World>,
    session_config: SessionConfig,
    output: OutputFormat,
}

impl GameBuilder {
    /// Creates a builder for the campus map with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a loaded [`GameConfig`], loading its world file if any.
    pub fn config(mut self, config: &GameConfig) -> Result<Self, ZuulError> {
        self.world = Some(config.load_world()?);
        self.session_config = config.session_config();
        self.output = config.output;
        Ok(self)
    }

    /// Plays in `world` instead of the campus map.
    pub fn world(mut self, world: World) -> Self {
        self.world = Some(world);
        self
    }

    pub fn session_config(mut self, config: SessionConfig) -> Self {
        self.session_config = config;
        self
    }

    pub fn timer(mut self, timer: TimerConfig) -> Self {
        self.session_config.timer = timer;
        self
    }

    pub fn output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Starts the session.
    ///
    /// # Errors
    /// [`ZuulError::Session`] if the world has nowhere to start.
    pub fn build(self) -> Result<Game, ZuulError> {
        let world = match self.world {
            Some(world) => world,
            None => campus()?,
        };
        let session = Session::new(world, self.session_config)?;
        Ok(Game {
            session,
            output: self.output,
        })
    }
}

/// A game ready to play.
#[derive(Debug)]
pub struct Game {
    session: Session,
    output: OutputFormat,
}

impl Game {
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the play loop until the game ends or `input` runs dry.
    ///
    /// End of input counts as `quit`. Bytes that aren't valid UTF-8 are
    /// replaced, so a garbled line is just another unrecognized command.
    /// Returns the final session state.
    ///
    /// # Errors
    /// [`ZuulError::Io`] if reading or writing fails.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        output: &mut W,
    ) -> Result<SessionState, ZuulError> {
        tracing::info!(session_id = %self.session.id(), "game started");
        let welcome = TurnResult::message(self.session.welcome()?);
        self.render(&welcome, output)?;

        let mut line = Vec::new();
        loop {
            if self.output == OutputFormat::Text {
                write!(output, "{PROMPT}")?;
                output.flush()?;
            }

            line.clear();
            let command = if input.read_until(b'\n', &mut line)? == 0 {
                tracing::debug!(session_id = %self.session.id(), "end of input");
                Command {
                    word: CommandWord::Quit,
                    argument: None,
                }
            } else {
                Command::parse(&String::from_utf8_lossy(&line))
            };

            let result = self.session.execute(&command);
            self.render(&result, output)?;
            if result.terminated {
                break;
            }
        }

        if self.output == OutputFormat::Text {
            writeln!(output, "{GOODBYE}")?;
        }
        output.flush()?;
        Ok(self.session.state())
    }

    fn render<W: Write>(&self, result: &TurnResult, output: &mut W) -> Result<(), ZuulError> {
        match self.output {
            OutputFormat::Text => {
                if !result.message.is_empty() {
                    writeln!(output, "{}", result.message)?;
                }
            }
            OutputFormat::Json => {
                let bytes = JsonCodec.encode(result)?;
                output.write_all(&bytes)?;
                output.write_all(b"\n")?;
            }
        }
        Ok(())
    }
}
