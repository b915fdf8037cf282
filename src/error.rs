/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Misuse of the engine: the caller skipped a required step.
///
/// Routine game-flow outcomes (deck empty, re-rolls spent, guesses used up)
/// are not errors and come back as outcome enums instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("No players set")]
    NoPlayers,

    #[error("Invalid judge index {index} (have {len} players)")]
    InvalidIndex { index: usize, len: usize },

    #[error("No judge chosen yet, spin first")]
    NoJudge,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
