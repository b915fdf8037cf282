//! Guess-the-question and reveal mini-modes
//!
//! Both work off the question currently drawn for the turn. Guess mode mixes
//! the real question with up to four other questions from the level and lets
//! the group guess twice; reveal mode just hands the question to a countdown.

use super::{GameEngine, GuessRound};
use crate::types::*;
use rand::seq::{index, SliceRandom};
use rand::Rng;

impl<R: Rng> GameEngine<R> {
    /// Open a guess round for the current question
    pub fn start_guess_mode(&mut self) -> GuessStart {
        let Some(correct) = self.current_question.clone() else {
            return GuessStart::NoCurrentQuestion;
        };

        let pool: Vec<&String> = self
            .base
            .iter()
            .chain(&self.custom)
            .filter(|q| **q != correct)
            .collect();
        let amount = MAX_DISTRACTORS.min(pool.len());

        let mut options = Vec::with_capacity(amount + 1);
        options.push(correct.clone());
        options.extend(
            index::sample(&mut self.rng, pool.len(), amount)
                .into_iter()
                .map(|i| pool[i].clone()),
        );
        options.shuffle(&mut self.rng);

        // The pool never holds the correct text, so this match is unique
        let correct_index = options.iter().position(|q| *q == correct).unwrap_or(0);

        tracing::debug!(
            "Guess round started with {} options (turn {})",
            options.len(),
            self.turn_id
        );

        self.guess = Some(GuessRound {
            options: options.clone(),
            correct_index,
            attempts: 0,
            solved: false,
        });

        GuessStart::Started {
            options,
            attempts_left: MAX_GUESS_ATTEMPTS,
        }
    }

    /// Score a guess. A correct guess or a second miss ends the round; guesses
    /// after that are refused without being counted.
    pub fn make_guess(&mut self, choice: usize) -> GuessOutcome {
        let Some(round) = self.guess.as_mut() else {
            return GuessOutcome::NotStarted;
        };
        if round.solved || round.attempts >= MAX_GUESS_ATTEMPTS {
            return GuessOutcome::Locked;
        }

        round.attempts += 1;
        let correct = choice == round.correct_index;
        round.solved = correct;
        let attempts_left = MAX_GUESS_ATTEMPTS.saturating_sub(round.attempts);

        tracing::debug!(
            "Guess {}/{}: {}",
            round.attempts,
            MAX_GUESS_ATTEMPTS,
            if correct { "correct" } else { "wrong" }
        );

        GuessOutcome::Judged {
            correct,
            attempts_left,
            locked: correct || attempts_left == 0,
        }
    }

    /// Options of the active guess round, in display order
    pub fn guess_options(&self) -> Option<&[String]> {
        self.guess.as_ref().map(|g| g.options.as_slice())
    }

    /// Hand the current question to the reveal countdown
    pub fn start_reveal(&self) -> RevealStart {
        match &self.current_question {
            Some(question) => RevealStart::Countdown {
                question: question.clone(),
                seconds: REVEAL_COUNTDOWN_SECS,
            },
            None => RevealStart::NoCurrentQuestion,
        }
    }
}
