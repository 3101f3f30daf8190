//! Game configuration: which world to load, how long the player has, and
//! how turn results are written out.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use zuul_protocol::{Codec, JsonCodec};
use zuul_session::SessionConfig;
use zuul_timer::TimerConfig;
use zuul_world::{World, WorldDefinition, campus};

use crate::ZuulError;

/// How the play loop renders turn results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text with a `> ` prompt.
    #[default]
    Text,
    /// One JSON-encoded [`TurnResult`](zuul_protocol::TurnResult) per line,
    /// no prompt.
    Json,
}

/// Top-level configuration, usually read from a JSON file:
///
/// ```json
/// { "world": "maps/cellar.json",
///   "timer": { "initial": 40, "delta": -1, "low_threshold": 8 },
///   "output": "text" }
/// ```
///
/// Every field is optional. Without `world`, the built-in campus map is
/// used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Path to a [`WorldDefinition`] JSON file.
    pub world: Option<PathBuf>,
    pub timer: TimerConfig,
    pub output: OutputFormat,
}

impl GameConfig {
    /// Reads a config file.
    ///
    /// A relative `world` path is resolved against the config file's
    /// directory.
    ///
    /// # Errors
    /// [`ZuulError::Io`] if the file can't be read, [`ZuulError::Protocol`]
    /// if it isn't a valid config.
    pub fn load(path: &Path) -> Result<Self, ZuulError> {
        let bytes = fs::read(path)?;
        let mut config: Self = JsonCodec.decode(&bytes)?;
        if let Some(dir) = path.parent() {
            config.world = config
                .world
                .take()
                .map(|world| if world.is_relative() { dir.join(world) } else { world });
        }
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Builds the configured world: the file named by `world`, or the
    /// campus map.
    pub fn load_world(&self) -> Result<World, ZuulError> {
        match &self.world {
            Some(path) => load_world_file(path),
            None => Ok(campus()?),
        }
    }

    /// The session settings this config implies.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig { timer: self.timer }
    }
}

/// Reads and builds a [`WorldDefinition`] file.
pub(crate) fn load_world_file(path: &Path) -> Result<World, ZuulError> {
    let bytes = fs::read(path)?;
    let definition: WorldDefinition = JsonCodec.decode(&bytes)?;
    let world = definition.build()?;
    tracing::info!(path = %path.display(), rooms = world.len(), "world loaded");
    Ok(world)
}
