//! Environment-driven configuration

use crate::types::{Level, DEFAULT_LEVEL, MAX_LEVEL, MIN_LEVEL};
use std::path::PathBuf;

const DEFAULT_DATA_DIR: &str = ".judgewheel";
const DEFAULT_PLAYERS: &str = "Alice,Bob,Carol";
const DEFAULT_TURNS: u32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Directory holding the custom question file
    pub data_dir: PathBuf,
    /// Optional JSON level table; the built-in deck is used otherwise
    pub levels_file: Option<PathBuf>,
    pub default_level: Level,
    /// Fixed RNG seed for reproducible sessions
    pub seed: Option<u64>,
    /// Raw comma-separated player list for the autoplay driver
    pub players: String,
    /// Number of turns the autoplay driver plays
    pub turns: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            levels_file: None,
            default_level: DEFAULT_LEVEL,
            seed: None,
            players: DEFAULT_PLAYERS.to_string(),
            turns: DEFAULT_TURNS,
        }
    }
}

/// Read an env var, treating empty or whitespace-only values as unset
fn env_trimmed(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|value| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

impl EngineConfig {
    /// Load config from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let data_dir = env_trimmed("JUDGEWHEEL_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let levels_file = env_trimmed("JUDGEWHEEL_LEVELS_FILE").map(PathBuf::from);

        let default_level = match env_trimmed("JUDGEWHEEL_DEFAULT_LEVEL") {
            Some(raw) => match raw.parse::<Level>() {
                Ok(level) if (MIN_LEVEL..=MAX_LEVEL).contains(&level) => level,
                _ => {
                    tracing::warn!(
                        "Ignoring JUDGEWHEEL_DEFAULT_LEVEL={:?}, expected {}-{}",
                        raw,
                        MIN_LEVEL,
                        MAX_LEVEL
                    );
                    DEFAULT_LEVEL
                }
            },
            None => DEFAULT_LEVEL,
        };

        let seed = env_trimmed("JUDGEWHEEL_SEED").and_then(|raw| match raw.parse() {
            Ok(seed) => Some(seed),
            Err(e) => {
                tracing::warn!("Ignoring JUDGEWHEEL_SEED={:?}: {}", raw, e);
                None
            }
        });

        let players = env_trimmed("JUDGEWHEEL_PLAYERS").unwrap_or(defaults.players);

        let turns = env_trimmed("JUDGEWHEEL_TURNS")
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(defaults.turns);

        Self {
            data_dir,
            levels_file,
            default_level,
            seed,
            players,
            turns,
        }
    }
}
