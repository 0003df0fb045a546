//! Recoverable errors raised by the core.
//!
//! Contract violations (diagonal shifts, moving a placed block) are panics,
//! not variants here.

use crate::types::{Coordinate, MAX_BLOCK_CELLS};

/// Errors that can occur when building a [`crate::Block`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockError {
    #[error("a block needs at least one cell")]
    Empty,

    #[error("a block holds at most {max} cells, got {count}", max = MAX_BLOCK_CELLS)]
    TooManyCells { count: usize },

    #[error("cell {0} appears more than once")]
    DuplicateCell(Coordinate),
}

/// Errors that can occur when validating a [`crate::GameConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_error_display() {
        let err = BlockError::TooManyCells { count: 6 };
        assert_eq!(err.to_string(), "a block holds at most 4 cells, got 6");

        let err = BlockError::DuplicateCell(Coordinate::new(1, 2));
        assert_eq!(err.to_string(), "cell C(1, 2) appears more than once");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("gravity_ms must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: gravity_ms must be > 0"
        );
    }
}
