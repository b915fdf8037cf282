// Public API for the presentation layer and integration tests

pub mod config;
pub mod error;
pub mod levels;
pub mod state;
pub mod storage;
pub mod types;

pub use error::{EngineError, EngineResult};
pub use state::GameEngine;
