//! Level selection and the question deck

use super::GameEngine;
use crate::levels::level_description;
use crate::types::*;
use rand::Rng;

impl<R: Rng> GameEngine<R> {
    /// Switch level: load its base questions (unknown level means none),
    /// refill the deck and drop any in-turn question or guess round
    pub fn set_level(&mut self, level: Level) -> LevelInfo {
        self.current_level = level;
        self.base = self
            .levels
            .questions(level)
            .map(<[String]>::to_vec)
            .unwrap_or_default();
        self.rebuild_deck();
        self.clear_turn_state();

        tracing::info!(
            "Level set to {} ({} base, {} in deck)",
            level,
            self.base.len(),
            self.remaining.len()
        );

        LevelInfo {
            level,
            total_questions: self.remaining.len(),
        }
    }

    pub fn current_level(&self) -> Level {
        self.current_level
    }

    /// Description of the active level, if it is one of the known tiers
    pub fn level_description(&self) -> Option<&'static str> {
        level_description(self.current_level)
    }

    pub fn question_pool_counts(&self) -> PoolCounts {
        PoolCounts {
            base: self.base.len(),
            custom: self.custom.len(),
            remaining: self.remaining.len(),
        }
    }

    /// Add a user question to the device list and the live deck.
    /// Returns false for blank input.
    pub fn add_custom_question(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.custom.push(trimmed.to_string());
        self.store.save(&self.custom);
        self.remaining.push(trimmed.to_string());

        tracing::info!(
            "Added custom question ({} custom total)",
            self.custom.len()
        );
        true
    }

    /// Forget every custom question. The deck is refilled from the base set
    /// only, so base questions already drawn this session come back.
    pub fn clear_custom_questions(&mut self) {
        self.custom.clear();
        self.store.save(&self.custom);
        self.remaining = self.base.clone();
        tracing::info!("Custom questions cleared");
    }

    pub fn custom_questions(&self) -> Vec<String> {
        self.custom.clone()
    }

    /// Everything that can come up at the active level
    pub fn question_catalog(&self) -> QuestionCatalog {
        QuestionCatalog {
            level: self.current_level,
            base: self.base.clone(),
            custom: self.custom.clone(),
        }
    }
}
