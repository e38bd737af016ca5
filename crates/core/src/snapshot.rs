//! Session codec - suspend and resume a session exactly
//!
//! The blob is JSON tagged with a format name and version. Decoding re-validates the
//! whole state, so a blob that was edited or produced elsewhere either describes a
//! session the engine could be in, or is rejected with a [`FormatError`].

use log::debug;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::FormatError;
use crate::game_state::{Operator, SessionState};
use crate::types::{Direction, Tier};

pub const SNAPSHOT_FORMAT: &str = "tui-warehouse/session";
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OperatorSnapshot {
    pub row: i8,
    pub col: i8,
    pub direction: Direction,
    pub door_col: i8,
    pub target_row: i8,
    pub target_col: i8,
}

impl From<Operator> for OperatorSnapshot {
    fn from(value: Operator) -> Self {
        Self {
            row: value.row,
            col: value.col,
            direction: value.direction,
            door_col: value.door_col,
            target_row: value.target_row,
            target_col: value.target_col,
        }
    }
}

impl From<OperatorSnapshot> for Operator {
    fn from(value: OperatorSnapshot) -> Self {
        Self {
            row: value.row,
            col: value.col,
            direction: value.direction,
            door_col: value.door_col,
            target_row: value.target_row,
            target_col: value.target_col,
        }
    }
}

/// Wire form of a [`SessionState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SessionSnapshot {
    pub format: String,
    pub version: u32,
    pub seed: String,
    pub board: Vec<Vec<Tier>>,
    pub bob: OperatorSnapshot,
    pub score: u32,
    pub is_playing: bool,
}

impl From<&SessionState> for SessionSnapshot {
    fn from(state: &SessionState) -> Self {
        Self {
            format: SNAPSHOT_FORMAT.to_string(),
            version: SNAPSHOT_VERSION,
            seed: state.seed().to_string(),
            board: state.board().to_rows(),
            bob: state.operator().into(),
            score: state.score(),
            is_playing: state.is_playing(),
        }
    }
}

impl TryFrom<SessionSnapshot> for SessionState {
    type Error = FormatError;

    fn try_from(snapshot: SessionSnapshot) -> Result<Self, Self::Error> {
        if snapshot.format != SNAPSHOT_FORMAT || snapshot.version != SNAPSHOT_VERSION {
            return Err(FormatError::UnsupportedFormat {
                format: snapshot.format,
                version: snapshot.version,
            });
        }
        let board = Board::from_rows(&snapshot.board)?;
        SessionState::from_parts(
            snapshot.seed,
            board,
            snapshot.bob.into(),
            snapshot.score,
            snapshot.is_playing,
        )
    }
}

/// Encode `state` as an opaque blob.
pub fn serialize(state: &SessionState) -> Result<String, FormatError> {
    Ok(serde_json::to_string(&SessionSnapshot::from(state))?)
}

/// Decode a blob produced by [`serialize`].
pub fn deserialize(blob: &str) -> Result<SessionState, FormatError> {
    let decoded = serde_json::from_str::<SessionSnapshot>(blob)
        .map_err(FormatError::from)
        .and_then(SessionState::try_from);
    if let Err(err) = &decoded {
        debug!("rejected session blob: {} ({})", err, err.code());
    }
    decoded
}
