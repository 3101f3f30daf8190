//! Command words and the line tokenizer.
//!
//! The tokenizer is the thin glue between what the player types and the
//! turn processor. It never rejects input: anything it does not recognise
//! becomes [`CommandWord::Unknown`] and the session answers with a
//! "don't understand" message.

use serde::{Deserialize, Serialize};

use std::fmt;

// ---------------------------------------------------------------------------
// CommandWord
// ---------------------------------------------------------------------------

/// Every verb the game knows, plus `Unknown` for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandWord {
    /// Walk through an exit: `go <direction>`.
    Go,
    /// Return to the marked waypoint.
    Back,
    /// Show the command words. Does not take a turn.
    Help,
    /// Remember the current room as the waypoint.
    Mark,
    /// Leave the game: `quit` with no argument.
    Quit,
    /// Not in the command table.
    Unknown,
}

/// The command table, in the order the help text lists it.
static COMMAND_WORDS: [(&str, CommandWord); 5] = [
    ("go", CommandWord::Go),
    ("back", CommandWord::Back),
    ("help", CommandWord::Help),
    ("mark", CommandWord::Mark),
    ("quit", CommandWord::Quit),
];

impl CommandWord {
    /// Looks a word up in the command table. Case-insensitive.
    pub fn from_word(word: &str) -> Self {
        COMMAND_WORDS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(word))
            .map(|(_, cmd)| *cmd)
            .unwrap_or(Self::Unknown)
    }

    /// All known command words (excluding `Unknown`).
    pub fn all() -> impl Iterator<Item = CommandWord> {
        COMMAND_WORDS.iter().map(|(_, cmd)| *cmd)
    }

    /// The word as the player types it. `Unknown` has no spelling and
    /// renders as `"?"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Back => "back",
            Self::Help => "help",
            Self::Mark => "mark",
            Self::Quit => "quit",
            Self::Unknown => "?",
        }
    }

    /// The help-text listing: `"go  back  help  mark  quit"`.
    pub fn listing() -> String {
        Self::all()
            .map(CommandWord::as_str)
            .collect::<Vec<_>>()
            .join("  ")
    }
}

impl fmt::Display for CommandWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// A pre-tokenized command: a verb and an optional single argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// The verb, already looked up in the command table.
    pub word: CommandWord,
    /// The second word, if the player typed one.
    pub argument: Option<String>,
}

impl Command {
    /// Builds a command from a verb and optional argument, looking the
    /// verb up in the command table.
    pub fn new(verb: &str, argument: Option<&str>) -> Self {
        Self {
            word: CommandWord::from_word(verb),
            argument: argument.map(str::to_string),
        }
    }

    /// Tokenizes a line typed by the player.
    ///
    /// Words are split on whitespace and lower-cased. The first word is
    /// the verb, the second the argument; anything after that is
    /// ignored. An empty line is an `Unknown` command.
    pub fn parse(line: &str) -> Self {
        let mut words = line.split_whitespace().map(str::to_lowercase);
        let word = words
            .next()
            .map(|w| CommandWord::from_word(&w))
            .unwrap_or(CommandWord::Unknown);
        Self {
            word,
            argument: words.next(),
        }
    }

    /// Returns `true` if the command has a second word.
    pub fn has_argument(&self) -> bool {
        self.argument.is_some()
    }
}
