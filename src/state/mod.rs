mod deck;
mod export;
mod guess;
mod history;
mod player;
mod turn;

pub use export::{SessionExport, EXPORT_SCHEMA_VERSION};
pub use player::parse_player_names;

use crate::config::EngineConfig;
use crate::levels::{LevelSource, LevelTable, LevelTableError};
use crate::storage::{JsonFileStore, QuestionStore};
use crate::types::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// An in-progress guess-the-question round
#[derive(Debug, Clone)]
struct GuessRound {
    options: Vec<String>,
    /// Position of the real question after shuffling, never exposed
    correct_index: usize,
    attempts: u32,
    solved: bool,
}

/// One game session: deck, players, judge rotation, turn and history state.
///
/// All operations are synchronous state transitions. Hard errors are checked
/// before anything is mutated, so a failed call leaves the engine untouched.
pub struct GameEngine<R = StdRng> {
    session_id: SessionId,
    levels: Box<dyn LevelSource>,
    store: Box<dyn QuestionStore>,
    rng: R,

    default_level: Level,
    current_level: Level,
    base: Vec<String>,
    custom: Vec<String>,
    remaining: Vec<String>,

    players: Vec<String>,
    judge: Option<usize>,
    last_judge: Option<usize>,

    turn_id: TurnId,
    turn_question_count: u32,
    current_question: Option<String>,
    guess: Option<GuessRound>,

    history: Vec<HistoryEntry>,
}

impl GameEngine<StdRng> {
    /// Engine seeded from the OS random source
    pub fn new(levels: impl LevelSource + 'static, store: impl QuestionStore + 'static) -> Self {
        Self::with_rng(levels, store, StdRng::from_os_rng())
    }

    /// Engine with a fixed seed, for reproducible sessions
    pub fn with_seed(
        levels: impl LevelSource + 'static,
        store: impl QuestionStore + 'static,
        seed: u64,
    ) -> Self {
        Self::with_rng(levels, store, StdRng::seed_from_u64(seed))
    }

    /// Build an engine from config: file-backed store, optional level file, optional seed
    pub fn from_config(config: &EngineConfig) -> Result<Self, LevelTableError> {
        let levels = match &config.levels_file {
            Some(path) => LevelTable::from_json_file(path)?,
            None => LevelTable::builtin(),
        };
        let store = JsonFileStore::new(&config.data_dir);
        let engine = match config.seed {
            Some(seed) => Self::with_seed(levels, store, seed),
            None => Self::new(levels, store),
        };
        Ok(engine.with_default_level(config.default_level))
    }
}

impl<R: Rng> GameEngine<R> {
    /// Engine drawing randomness from `rng`. Loads persisted custom questions
    /// and applies the default level.
    pub fn with_rng(
        levels: impl LevelSource + 'static,
        store: impl QuestionStore + 'static,
        rng: R,
    ) -> Self {
        let custom = store.load();
        let mut engine = Self {
            session_id: ulid::Ulid::new().to_string(),
            levels: Box::new(levels),
            store: Box::new(store),
            rng,
            default_level: DEFAULT_LEVEL,
            current_level: DEFAULT_LEVEL,
            base: Vec::new(),
            custom,
            remaining: Vec::new(),
            players: Vec::new(),
            judge: None,
            last_judge: None,
            turn_id: 0,
            turn_question_count: 0,
            current_question: None,
            guess: None,
            history: Vec::new(),
        };
        engine.set_level(DEFAULT_LEVEL);
        tracing::info!(
            "Game engine ready (session {}, {} custom questions)",
            engine.session_id,
            engine.custom.len()
        );
        engine
    }

    /// Change the level restored by a full reset, and switch to it now
    pub fn with_default_level(mut self, level: Level) -> Self {
        self.default_level = level;
        self.set_level(level);
        self
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Return to a clean slate. Custom questions survive; the level is
    /// restored to the default unless `keep_level` is set.
    pub fn reset_game_state(&mut self, keep_level: bool) {
        if !keep_level {
            self.current_level = self.default_level;
        }
        self.set_level(self.current_level);
        self.start_session(Vec::new());
        tracing::info!(
            "Game reset (session {}, level {})",
            self.session_id,
            self.current_level
        );
    }

    /// Fresh session bookkeeping shared by `set_players` and full resets
    fn start_session(&mut self, players: Vec<String>) {
        self.session_id = ulid::Ulid::new().to_string();
        self.players = players;
        self.judge = None;
        self.last_judge = None;
        self.turn_id = 0;
        self.history.clear();
        self.clear_turn_state();
        self.rebuild_deck();
    }

    /// Drop the per-turn counter, the current question and any guess round
    fn clear_turn_state(&mut self) {
        self.turn_question_count = 0;
        self.current_question = None;
        self.guess = None;
    }

    fn rebuild_deck(&mut self) {
        self.remaining = self.base.iter().chain(&self.custom).cloned().collect();
    }
}
