//! Level-tiered base question sets
//!
//! The engine reads base questions through [`LevelSource`] so hosts can ship
//! their own decks. [`LevelTable`] is the stock implementation, either built in
//! or loaded from a JSON file shaped like `{"1": ["..."], "2": ["..."]}`.

use crate::types::Level;
use std::collections::HashMap;
use std::path::Path;

/// Errors that can occur while loading a level table
#[derive(Debug, thiserror::Error)]
pub enum LevelTableError {
    #[error("Failed to read level file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse level file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only mapping from level to its base questions
pub trait LevelSource {
    /// Base questions for `level`, or `None` if the level is unknown
    fn questions(&self, level: Level) -> Option<&[String]>;
}

/// Human-readable description shown next to the level picker
pub fn level_description(level: Level) -> Option<&'static str> {
    match level {
        1 => Some("SFW only. Soft, safe questions for civilised humans."),
        2 => Some("SFW + mild spice. Questions your mum could probably cope with (just about)."),
        3 => Some("Dark, messy, chaotic energy. Not for sensitive souls."),
        4 => Some(
            "Maximum unhinged mode. Absolutely not work safe, friendship safe, or soul safe.",
        ),
        _ => None,
    }
}

#[derive(Debug, Clone, Default)]
pub struct LevelTable {
    levels: HashMap<Level, Vec<String>>,
}

impl LevelTable {
    pub fn new(levels: HashMap<Level, Vec<String>>) -> Self {
        Self { levels }
    }

    /// Parse a table from JSON text
    pub fn from_json(json: &str) -> Result<Self, LevelTableError> {
        let levels: HashMap<Level, Vec<String>> = serde_json::from_str(json)?;
        Ok(Self::new(levels))
    }

    /// Load a table from a JSON file on disk
    pub fn from_json_file(path: &Path) -> Result<Self, LevelTableError> {
        let json = std::fs::read_to_string(path)?;
        let table = Self::from_json(&json)?;
        tracing::info!(
            "Loaded {} levels from {}",
            table.levels.len(),
            path.display()
        );
        Ok(table)
    }

    /// Replace (or add) the questions for one level
    pub fn with_level<I, S>(mut self, level: Level, questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.levels
            .insert(level, questions.into_iter().map(Into::into).collect());
        self
    }

    /// The deck that ships with the game
    pub fn builtin() -> Self {
        Self::default()
            .with_level(
                1,
                [
                    "Who is most likely to adopt ten cats?",
                    "Who is most likely to become famous?",
                    "Who is most likely to forget their own birthday?",
                    "Who is most likely to cry at a cartoon?",
                    "Who is most likely to win a baking contest?",
                    "Who is most likely to get lost in their own town?",
                ],
            )
            .with_level(
                2,
                [
                    "Who is most likely to text their ex at 2am?",
                    "Who is most likely to laugh at a funeral?",
                    "Who is most likely to lie about their age?",
                    "Who is most likely to get kicked out of a bar?",
                    "Who is most likely to ghost someone after one date?",
                    "Who is most likely to fake being sick to skip work?",
                ],
            )
            .with_level(
                3,
                [
                    "Who is most likely to start a cult?",
                    "Who is most likely to have a secret second family?",
                    "Who is most likely to get arrested on holiday?",
                    "Who is most likely to burn a bridge for fun?",
                    "Who is most likely to sell a friend out for a tenner?",
                ],
            )
            .with_level(
                4,
                [
                    "Who is most likely to wake up somewhere with no memory of the night?",
                    "Who is most likely to have a regrettable tattoo nobody knows about?",
                    "Who is most likely to get banned from a country?",
                    "Who is most likely to fake their own death?",
                    "Who is most likely to end up in the news for something unhinged?",
                ],
            )
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}

impl LevelSource for LevelTable {
    fn questions(&self, level: Level) -> Option<&[String]> {
        self.levels.get(&level).map(Vec::as_slice)
    }
}
