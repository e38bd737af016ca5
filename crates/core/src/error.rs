//! Error types surfaced by the core.
//!
//! Illegal moves are not errors; the engine simply leaves the session unchanged.
//! Only seeds without a valid target and unreadable session blobs are reported.

use crate::types::Tier;

/// A seed whose board leaves no legal place for the target crate.
///
/// Fatal for that seed: the caller must not start a session with it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("seed {seed:?} produced a {size}x{size} board with no interior crate for the target")]
    NoTargetCandidate { seed: String, size: u8 },
}

impl GenerationError {
    pub fn code(&self) -> &'static str {
        match self {
            GenerationError::NoTargetCandidate { .. } => "no_target_candidate",
        }
    }
}

/// A session blob that is malformed or describes an impossible session.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("session blob is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported session format {format:?} version {version}")]
    UnsupportedFormat { format: String, version: u32 },

    #[error("board must have 8 to 12 rows, got {0}")]
    BoardSize(usize),

    #[error("board row {row} has {len} cells, expected {size}")]
    RaggedRow { row: usize, len: usize, size: usize },

    #[error("cell ({row}, {col}) holds tier {tier}, expected 0 to 3")]
    InvalidTier { row: usize, col: usize, tier: Tier },

    #[error("operator at ({row}, {col}) is outside the board")]
    OperatorOutOfBounds { row: i8, col: i8 },

    #[error("operator at ({row}, {col}) is standing on a crate")]
    OperatorOnCrate { row: i8, col: i8 },

    #[error("door column {0} is outside the board")]
    DoorOutOfBounds(i8),

    #[error("target at ({row}, {col}) is outside the board")]
    TargetOutOfBounds { row: i8, col: i8 },

    #[error("target at ({row}, {col}) does not hold a crate")]
    TargetNotCrate { row: i8, col: i8 },

    #[error("session is marked finished but the target is not on the door")]
    FinishedWithoutWin,
}

impl FormatError {
    pub fn code(&self) -> &'static str {
        match self {
            FormatError::Json(_) => "invalid_json",
            FormatError::UnsupportedFormat { .. } => "unsupported_format",
            FormatError::BoardSize(_) | FormatError::RaggedRow { .. } => "invalid_board_shape",
            FormatError::InvalidTier { .. } => "invalid_tier",
            FormatError::OperatorOutOfBounds { .. }
            | FormatError::OperatorOnCrate { .. }
            | FormatError::DoorOutOfBounds(_) => "invalid_operator",
            FormatError::TargetOutOfBounds { .. } | FormatError::TargetNotCrate { .. } => {
                "invalid_target"
            }
            FormatError::FinishedWithoutWin => "inconsistent_state",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_error_display() {
        let err = GenerationError::NoTargetCandidate {
            seed: "abc".to_string(),
            size: 8,
        };
        assert_eq!(
            err.to_string(),
            "seed \"abc\" produced a 8x8 board with no interior crate for the target"
        );
        assert_eq!(err.code(), "no_target_candidate");
    }

    #[test]
    fn test_format_error_display() {
        let err = FormatError::RaggedRow {
            row: 3,
            len: 7,
            size: 9,
        };
        assert_eq!(err.to_string(), "board row 3 has 7 cells, expected 9");
        assert_eq!(err.code(), "invalid_board_shape");

        let err = FormatError::OperatorOnCrate { row: 8, col: 2 };
        assert_eq!(err.to_string(), "operator at (8, 2) is standing on a crate");
        assert_eq!(err.code(), "invalid_operator");
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = FormatError::from(json_err);
        assert_eq!(err.code(), "invalid_json");
        assert!(err.to_string().starts_with("session blob is not valid JSON"));
    }
}
