//! Players and judge rotation

use super::GameEngine;
use crate::error::{EngineError, EngineResult};
use crate::types::*;
use rand::Rng;

/// Split a comma-separated name list, trimming names and dropping blanks.
/// Fails if no names are left.
pub fn parse_player_names(raw: &str) -> EngineResult<Vec<String>> {
    let names: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();

    if names.is_empty() {
        return Err(EngineError::InvalidInput(
            "Add at least one player".to_string(),
        ));
    }
    Ok(names)
}

impl<R: Rng> GameEngine<R> {
    /// Start a fresh session with these players (in wheel order). History,
    /// judge and turn counters are reset; level and custom questions are kept.
    pub fn set_players(&mut self, players: Vec<String>) -> Vec<String> {
        self.start_session(players);
        tracing::info!(
            "Session {} started with {} players",
            self.session_id,
            self.players.len()
        );
        self.players.clone()
    }

    pub fn players(&self) -> Vec<String> {
        self.players.clone()
    }

    /// Choose the next judge without committing it, so the wheel can spin
    /// towards it first. The previous judge sits out when there is anyone else.
    pub fn pick_judge_index(&mut self) -> EngineResult<JudgePick> {
        if self.players.is_empty() {
            return Err(EngineError::NoPlayers);
        }

        let excluded = if self.players.len() > 1 {
            self.last_judge
        } else {
            None
        };
        let candidates: Vec<usize> = (0..self.players.len())
            .filter(|&i| Some(i) != excluded)
            .collect();

        let index = candidates[self.rng.random_range(0..candidates.len())];
        Ok(JudgePick {
            index,
            name: self.players[index].clone(),
        })
    }

    /// Commit a judge and open a new turn
    pub fn set_judge(&mut self, index: usize) -> EngineResult<JudgeInfo> {
        if index >= self.players.len() {
            return Err(EngineError::InvalidIndex {
                index,
                len: self.players.len(),
            });
        }

        self.judge = Some(index);
        self.last_judge = Some(index);
        self.turn_id += 1;
        self.clear_turn_state();

        let name = self.players[index].clone();
        tracing::info!("Turn {}: {} is the judge", self.turn_id, name);

        Ok(JudgeInfo {
            index,
            name,
            turn_id: self.turn_id,
        })
    }

    /// Pick and commit in one step, for callers with no wheel to animate
    pub fn spin(&mut self) -> EngineResult<JudgeInfo> {
        let pick = self.pick_judge_index()?;
        self.set_judge(pick.index)
    }

    /// Index of the committed judge for the current turn
    pub fn judge_index(&self) -> Option<usize> {
        self.judge
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::engine_with;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_player_names() {
        assert_eq!(
            parse_player_names(" Alice, Bob ,,Carol ,").unwrap(),
            vec!["Alice", "Bob", "Carol"]
        );
        assert!(matches!(
            parse_player_names(" , ,"),
            Err(EngineError::InvalidInput(_))
        ));
        assert!(parse_player_names("").is_err());
    }

    #[test]
    fn test_set_players_keeps_order_and_duplicates() {
        let mut engine = engine_with(1);
        let stored = engine.set_players(names(&["B", "A", "B"]));
        assert_eq!(stored, vec!["B", "A", "B"]);
        assert_eq!(engine.players(), stored);
    }

    #[test]
    fn test_pick_without_players_fails() {
        let mut engine = engine_with(1);
        assert_eq!(engine.pick_judge_index(), Err(EngineError::NoPlayers));
        assert_eq!(engine.spin(), Err(EngineError::NoPlayers));
    }

    #[test]
    fn test_set_players_accepts_empty_list() {
        let mut engine = engine_with(1);
        assert!(engine.set_players(Vec::new()).is_empty());
        assert_eq!(engine.pick_judge_index(), Err(EngineError::NoPlayers));
    }

    #[test]
    fn test_pick_does_not_commit() {
        let mut engine = engine_with(1);
        engine.set_players(names(&["A", "B", "C"]));
        let pick = engine.pick_judge_index().unwrap();
        assert!(pick.index < 3);
        assert_eq!(pick.name, engine.players()[pick.index]);
        assert_eq!(engine.judge_index(), None);
        assert!(!engine.turn_status().has_judge);
    }

    #[test]
    fn test_set_judge_out_of_bounds() {
        let mut engine = engine_with(1);
        engine.set_players(names(&["A", "B"]));
        assert_eq!(
            engine.set_judge(2),
            Err(EngineError::InvalidIndex { index: 2, len: 2 })
        );
        assert_eq!(engine.judge_index(), None);
    }

    #[test]
    fn test_set_judge_opens_new_turn() {
        let mut engine = engine_with(1);
        engine.set_players(names(&["A", "B", "C"]));

        let first = engine.set_judge(1).unwrap();
        assert_eq!(
            first,
            JudgeInfo {
                index: 1,
                name: "B".to_string(),
                turn_id: 1
            }
        );
        engine.draw_question().unwrap();
        assert_eq!(engine.turn_status().used_this_turn, 1);

        let second = engine.set_judge(2).unwrap();
        assert_eq!(second.turn_id, 2);
        assert_eq!(engine.turn_status().used_this_turn, 0);
        assert!(engine.current_question().is_none());
    }

    #[test]
    fn test_no_immediate_repeat_across_many_turns() {
        for seed in 0..20 {
            let mut engine = engine_with(seed);
            engine.set_players(names(&["A", "B", "C"]));
            let mut previous: Option<usize> = None;
            for _ in 0..200 {
                let pick = engine.pick_judge_index().unwrap();
                assert_ne!(Some(pick.index), previous);
                engine.set_judge(pick.index).unwrap();
                previous = Some(pick.index);
            }
        }
    }

    #[test]
    fn test_two_players_alternate() {
        let mut engine = engine_with(5);
        engine.set_players(names(&["A", "B"]));
        let first = engine.spin().unwrap().index;
        for turn in 1..10 {
            let info = engine.spin().unwrap();
            let expected = if turn % 2 == 1 { 1 - first } else { first };
            assert_eq!(info.index, expected);
        }
    }

    #[test]
    fn test_single_player_is_always_judge() {
        let mut engine = engine_with(5);
        engine.set_players(names(&["Solo"]));
        for _ in 0..5 {
            assert_eq!(engine.spin().unwrap().index, 0);
        }
    }

    #[test]
    fn test_set_players_resets_session() {
        let mut engine = engine_with(8);
        engine.set_players(names(&["A", "B"]));
        engine.spin().unwrap();
        engine.draw_question().unwrap();
        assert_eq!(engine.history().len(), 1);

        engine.set_players(names(&["C", "D"]));
        assert!(engine.history().is_empty());
        assert_eq!(engine.judge_index(), None);
        assert_eq!(engine.question_pool_counts().remaining, 5);
        assert_eq!(engine.set_judge(0).unwrap().turn_id, 1);
    }

    #[test]
    fn test_pick_uses_whole_candidate_pool() {
        let mut engine = engine_with(11);
        engine.set_players(names(&["A", "B", "C", "D"]));
        engine.set_judge(0).unwrap();
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[engine.pick_judge_index().unwrap().index] = true;
        }
        assert_eq!(seen, [false, true, true, true]);
    }
}
