use serde::{Deserialize, Serialize};

/// Opaque ID types for type safety
pub type SessionId = String;
pub type TurnId = u32;
pub type Level = u8;

/// Maximum number of questions a judge may draw in one turn (1 + 2 re-rolls)
pub const MAX_QUESTIONS_PER_TURN: u32 = 3;

/// Maximum number of guesses per guess round
pub const MAX_GUESS_ATTEMPTS: u32 = 2;

/// Maximum number of wrong options mixed into a guess round
pub const MAX_DISTRACTORS: usize = 4;

/// Seconds the presentation layer counts down before revealing a question
pub const REVEAL_COUNTDOWN_SECS: u32 = 5;

pub const DEFAULT_LEVEL: Level = 2;
pub const MIN_LEVEL: Level = 1;
pub const MAX_LEVEL: Level = 4;

/// A single draw, recorded whenever a judge pulls a question (re-rolls included)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub turn_id: TurnId,
    pub player: String,
    pub question: String,
    /// 1-based ordinal of this draw within its turn
    pub roll: u32,
    pub drawn_at: String, // ISO timestamp
}

/// One row of the end-of-game summary: the final question of a turn
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryRow {
    pub round: u32,
    pub player: String,
    pub question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LevelInfo {
    pub level: Level,
    pub total_questions: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PoolCounts {
    pub base: usize,
    pub custom: usize,
    pub remaining: usize,
}

/// Base and custom questions for the active level
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuestionCatalog {
    pub level: Level,
    pub base: Vec<String>,
    pub custom: Vec<String>,
}

impl QuestionCatalog {
    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.custom.is_empty()
    }
}

/// Result of a non-committing judge pick
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JudgePick {
    pub index: usize,
    pub name: String,
}

/// Result of committing a judge
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JudgeInfo {
    pub index: usize,
    pub name: String,
    pub turn_id: TurnId,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnStatus {
    pub max_per_turn: u32,
    pub used_this_turn: u32,
    pub remaining_in_deck: usize,
    pub has_judge: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrawnQuestion {
    pub text: String,
    pub decorated_text: String,
    pub used_this_turn: u32,
    pub rolls_left: u32,
    pub remaining_in_deck: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum DrawOutcome {
    Drawn(DrawnQuestion),
    /// Re-roll budget for this turn is spent
    MaxTurnQuestions,
    NoQuestionsLeft,
}

impl DrawOutcome {
    pub fn drawn(&self) -> Option<&DrawnQuestion> {
        match self {
            DrawOutcome::Drawn(q) => Some(q),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum GuessStart {
    Started {
        options: Vec<String>,
        attempts_left: u32,
    },
    NoCurrentQuestion,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum GuessOutcome {
    Judged {
        correct: bool,
        attempts_left: u32,
        locked: bool,
    },
    /// The round is over; the guess was not counted
    Locked,
    NotStarted,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum RevealStart {
    Countdown { question: String, seconds: u32 },
    NoCurrentQuestion,
}
