//! Column selection for the automated opponent.
//!
//! The bot is intentionally near-random; it never reads the board for
//! threats, only for which columns still have room.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::Board;

/// How the bot chooses a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotPolicy {
    /// Uniformly random among columns that still have room.
    #[default]
    Uniform,
    /// The last played column plus a delta in {-1, 0, +1}, clamped to the
    /// board, falling back to [`BotPolicy::Uniform`] when the whole
    /// neighborhood is full or no column has been played yet.
    Nearby,
}

impl fmt::Display for BotPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotPolicy::Uniform => write!(f, "uniform"),
            BotPolicy::Nearby => write!(f, "nearby"),
        }
    }
}

impl FromStr for BotPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform" => Ok(BotPolicy::Uniform),
            "nearby" => Ok(BotPolicy::Nearby),
            other => Err(format!(
                "unknown bot policy '{other}' (expected 'uniform' or 'nearby')"
            )),
        }
    }
}

/// Picks the bot's column. Both policies only ever return a column with room,
/// so the bot never forfeits a turn on a full or out-of-range pick.
pub struct ColumnPicker {
    policy: BotPolicy,
    rng: StdRng,
}

impl ColumnPicker {
    pub fn new(policy: BotPolicy) -> Self {
        ColumnPicker {
            policy,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn policy(&self) -> BotPolicy {
        self.policy
    }

    /// Choose a column for the bot's move, or `None` if no column has room
    /// (unreachable while a session is still in progress).
    pub fn pick(&mut self, board: &Board, last_column: Option<usize>) -> Option<usize> {
        match (self.policy, last_column) {
            (BotPolicy::Uniform, _) | (BotPolicy::Nearby, None) => self.pick_uniform(board),
            (BotPolicy::Nearby, Some(last)) => self.pick_nearby(board, last),
        }
    }

    fn pick_uniform(&mut self, board: &Board) -> Option<usize> {
        let open: Vec<usize> = board.open_columns().collect();
        if open.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..open.len());
        Some(open[idx])
    }

    fn pick_nearby(&mut self, board: &Board, last: usize) -> Option<usize> {
        let max_col = board.width().saturating_sub(1) as isize;
        let mut candidates: Vec<usize> = (-1isize..=1)
            .map(|delta| (last as isize + delta).clamp(0, max_col) as usize)
            .collect();
        candidates.dedup();
        candidates.retain(|&col| board.has_room(col));

        if candidates.is_empty() {
            return self.pick_uniform(board);
        }
        let idx = self.rng.random_range(0..candidates.len());
        Some(candidates[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PlayerId;

    fn fill_column(board: &mut Board, col: usize) {
        while let Some(row) = board.lowest_empty_row(col) {
            board.place(row, col, PlayerId(0));
        }
    }

    #[test]
    fn test_uniform_only_picks_open_columns() {
        let mut board = Board::new(7, 6);
        fill_column(&mut board, 0);
        fill_column(&mut board, 3);

        let mut picker = ColumnPicker::new(BotPolicy::Uniform);
        for _ in 0..100 {
            let col = picker.pick(&board, None).unwrap();
            assert!(col != 0 && col != 3);
            assert!(board.has_room(col));
        }
    }

    #[test]
    fn test_uniform_returns_none_on_full_board() {
        let mut board = Board::new(2, 2);
        fill_column(&mut board, 0);
        fill_column(&mut board, 1);

        let mut picker = ColumnPicker::new(BotPolicy::Uniform);
        assert_eq!(picker.pick(&board, None), None);
    }

    #[test]
    fn test_nearby_stays_within_one_of_last_column() {
        let board = Board::new(7, 6);
        let mut picker = ColumnPicker::new(BotPolicy::Nearby);
        for _ in 0..100 {
            let col = picker.pick(&board, Some(2)).unwrap();
            assert!((1..=3).contains(&col), "picked {col}, expected 1..=3");
        }
    }

    #[test]
    fn test_nearby_clamps_at_the_left_edge() {
        let board = Board::new(7, 6);
        let mut picker = ColumnPicker::new(BotPolicy::Nearby);
        for _ in 0..100 {
            let col = picker.pick(&board, Some(0)).unwrap();
            assert!(col <= 1, "picked {col}, expected 0 or 1");
        }
    }

    #[test]
    fn test_nearby_clamps_at_the_right_edge() {
        let board = Board::new(7, 6);
        let mut picker = ColumnPicker::new(BotPolicy::Nearby);
        for _ in 0..100 {
            let col = picker.pick(&board, Some(6)).unwrap();
            assert!((5..=6).contains(&col), "picked {col}, expected 5 or 6");
        }
    }

    #[test]
    fn test_nearby_falls_back_to_uniform_when_neighborhood_is_full() {
        let mut board = Board::new(7, 6);
        fill_column(&mut board, 1);
        fill_column(&mut board, 2);
        fill_column(&mut board, 3);

        let mut picker = ColumnPicker::new(BotPolicy::Nearby);
        for _ in 0..100 {
            let col = picker.pick(&board, Some(2)).unwrap();
            assert!(board.has_room(col));
        }
    }

    #[test]
    fn test_nearby_without_history_is_uniform() {
        let board = Board::new(7, 6);
        let mut picker = ColumnPicker::new(BotPolicy::Nearby);
        for _ in 0..100 {
            let col = picker.pick(&board, None).unwrap();
            assert!(col < 7);
        }
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("uniform".parse::<BotPolicy>().unwrap(), BotPolicy::Uniform);
        assert_eq!("nearby".parse::<BotPolicy>().unwrap(), BotPolicy::Nearby);
        assert!("smart".parse::<BotPolicy>().is_err());
    }
}
