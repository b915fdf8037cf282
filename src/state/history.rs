use super::GameEngine;
use crate::types::*;
use rand::Rng;
use std::collections::BTreeMap;

impl<R: Rng> GameEngine<R> {
    /// Every draw of the session, re-rolls included
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// One row per turn that drew anything: the last draw of the turn, in
    /// turn order, numbered from 1
    pub fn history_summary(&self) -> Vec<SummaryRow> {
        let mut final_by_turn: BTreeMap<TurnId, &HistoryEntry> = BTreeMap::new();
        for entry in &self.history {
            final_by_turn.insert(entry.turn_id, entry);
        }

        final_by_turn
            .into_values()
            .zip(1..)
            .map(|(entry, round)| SummaryRow {
                round,
                player: entry.player.clone(),
                question: entry.question.clone(),
            })
            .collect()
    }
}
