//! Drawing questions within a turn

use super::GameEngine;
use crate::error::{EngineError, EngineResult};
use crate::types::*;
use rand::Rng;

/// Heading shown above the nth question drawn in a turn
fn draw_prefix(ordinal: u32) -> &'static str {
    match ordinal {
        1 => "First question:",
        2 => "Second question (1 re-roll used):",
        _ => "FINAL question (no more re-rolls):",
    }
}

impl<R: Rng> GameEngine<R> {
    /// Draw a random question for the current judge, replacing the previous
    /// one. Each turn allows one draw plus two re-rolls.
    pub fn draw_question(&mut self) -> EngineResult<DrawOutcome> {
        let judge = self.judge.ok_or(EngineError::NoJudge)?;

        if self.turn_question_count >= MAX_QUESTIONS_PER_TURN {
            return Ok(DrawOutcome::MaxTurnQuestions);
        }
        if self.remaining.is_empty() {
            return Ok(DrawOutcome::NoQuestionsLeft);
        }

        let idx = self.rng.random_range(0..self.remaining.len());
        let question = self.remaining.remove(idx);
        self.turn_question_count += 1;
        self.current_question = Some(question.clone());
        self.guess = None;

        self.history.push(HistoryEntry {
            turn_id: self.turn_id,
            player: self.players[judge].clone(),
            question: question.clone(),
            roll: self.turn_question_count,
            drawn_at: chrono::Utc::now().to_rfc3339(),
        });

        let rolls_left = MAX_QUESTIONS_PER_TURN - self.turn_question_count;
        tracing::debug!(
            "Turn {} draw {}/{} ({} left in deck)",
            self.turn_id,
            self.turn_question_count,
            MAX_QUESTIONS_PER_TURN,
            self.remaining.len()
        );

        Ok(DrawOutcome::Drawn(DrawnQuestion {
            decorated_text: format!("{}\n\n{}", draw_prefix(self.turn_question_count), question),
            text: question,
            used_this_turn: self.turn_question_count,
            rolls_left,
            remaining_in_deck: self.remaining.len(),
        }))
    }

    /// The question most recently drawn this turn
    pub fn current_question(&self) -> Option<&str> {
        self.current_question.as_deref()
    }

    pub fn turn_status(&self) -> TurnStatus {
        TurnStatus {
            max_per_turn: MAX_QUESTIONS_PER_TURN,
            used_this_turn: self.turn_question_count,
            remaining_in_deck: self.remaining.len(),
            has_judge: self.judge.is_some(),
        }
    }
}
