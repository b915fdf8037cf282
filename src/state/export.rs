//! End-of-game snapshot.
//!
//! Captures what the game-over screen shows (the final question of each
//! round and the device's custom questions) in a serializable form.

use super::GameEngine;
use crate::types::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Schema version for export format compatibility
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionExport {
    pub schema_version: u32,
    pub session_id: SessionId,
    /// Export timestamp (ISO8601)
    pub exported_at: String,
    pub level: Level,
    pub players: Vec<String>,
    pub rounds: Vec<SummaryRow>,
    #[serde(default)]
    pub custom_questions: Vec<String>,
}

impl SessionExport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse an export, refusing ones written by a newer schema
    pub fn from_json(json: &str) -> Result<Self, String> {
        let export: Self =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse export: {e}"))?;
        if export.schema_version > EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Export schema version {} is newer than supported version {}",
                export.schema_version, EXPORT_SCHEMA_VERSION
            ));
        }
        Ok(export)
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn export_session(&self) -> SessionExport {
        SessionExport {
            schema_version: EXPORT_SCHEMA_VERSION,
            session_id: self.session_id.clone(),
            exported_at: chrono::Utc::now().to_rfc3339(),
            level: self.current_level,
            players: self.players.clone(),
            rounds: self.history_summary(),
            custom_questions: self.custom.clone(),
        }
    }
}
