//! Scoring module - row completions scaled by elapsed game time
//!
//! Each row-completion event of `n` rows at `t` seconds into the game is worth
//!
//! ```text
//! 2^n * (t^(difficulty + 1) / SCORE_SCALER) * 100
//! ```
//!
//! so clearing several rows at once pays exponentially more, and the same
//! clear is worth more the longer the game has been running. `difficulty` is
//! in `[0, 1]`.

use crate::types::SCORE_SCALER;

/// Elapsed-time multiplier at `game_time_secs`.
pub fn time_multiplier(game_time_secs: f64, difficulty: f32) -> f64 {
    game_time_secs.max(0.0).powf(difficulty as f64 + 1.0) / SCORE_SCALER
}

/// Points for completing `rows` rows at once.
pub fn row_completion_points(rows: u32, game_time_secs: f64, difficulty: f32) -> f64 {
    if rows == 0 {
        return 0.0;
    }
    2f64.powi(rows as i32) * time_multiplier(game_time_secs, difficulty) * 100.0
}

/// Running score for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Score {
    points: f64,
}

impl Score {
    pub fn points(&self) -> f64 {
        self.points
    }

    /// Add the points for one row-completion event and return them.
    pub fn add_rows(&mut self, rows: u32, game_time_secs: f64, difficulty: f32) -> f64 {
        let gained = row_completion_points(rows, game_time_secs, difficulty);
        self.points += gained;
        gained
    }

    pub fn reset(&mut self) {
        self.points = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_no_rows_no_points() {
        assert_eq!(row_completion_points(0, 120.0, 0.5), 0.0);
    }

    #[test]
    fn test_points_double_per_extra_row() {
        let one = row_completion_points(1, 10.0, 0.0);
        let two = row_completion_points(2, 10.0, 0.0);
        let four = row_completion_points(4, 10.0, 0.0);
        assert!(close(two, one * 2.0));
        assert!(close(four, one * 8.0));
    }

    #[test]
    fn test_difficulty_raises_time_exponent() {
        // t = 10s: difficulty 0 -> 10/50, difficulty 1 -> 100/50.
        assert!(close(time_multiplier(10.0, 0.0), 0.2));
        assert!(close(time_multiplier(10.0, 1.0), 2.0));
        assert!(close(row_completion_points(1, 10.0, 0.0), 40.0));
    }

    #[test]
    fn test_clear_at_game_start_is_worth_nothing() {
        assert_eq!(row_completion_points(3, 0.0, 0.3), 0.0);
    }

    #[test]
    fn test_score_accumulates() {
        let mut score = Score::default();
        let gained = score.add_rows(1, 10.0, 0.0);
        score.add_rows(2, 10.0, 0.0);
        assert!(close(gained, 40.0));
        assert!(close(score.points(), 120.0));
        score.reset();
        assert_eq!(score.points(), 0.0);
    }
}
