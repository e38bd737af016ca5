//! Game state module - the complete mutable state of one puzzle session
//!
//! Ties together the board, the operator and the score, and implements the three
//! actions a player has: turn, move (with pushing) and demolish. Every action either
//! fully applies or leaves the session untouched and returns `false`.

use log::trace;

use crate::board::{Board, PushChain};
use crate::error::{FormatError, GenerationError};
use crate::generator;
use crate::types::*;

/// The player-controlled warehouse operator ("Bob").
///
/// Besides its own position and facing, the operator carries the fixed door column
/// and the coordinates of the target crate it has to deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operator {
    pub row: i8,
    pub col: i8,
    pub direction: Direction,
    /// Column of the door on the bottom row. Fixed for the whole session.
    pub door_col: i8,
    pub target_row: i8,
    pub target_col: i8,
}

impl Operator {
    pub fn position(&self) -> (i8, i8) {
        (self.row, self.col)
    }

    pub fn target(&self) -> (i8, i8) {
        (self.target_row, self.target_col)
    }

    /// The cell directly in front of the operator (may be off the board).
    pub fn ahead(&self) -> (i8, i8) {
        let (dr, dc) = self.direction.delta();
        (self.row + dr, self.col + dc)
    }
}

/// Complete session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    seed: String,
    board: Board,
    operator: Operator,
    score: u32,
    is_playing: bool,
}

impl SessionState {
    /// Generate the initial session for `seed`.
    pub fn new(seed: &str) -> Result<Self, GenerationError> {
        generator::generate(seed)
    }

    /// Freshly generated state; the generator upholds the invariants itself.
    pub(crate) fn from_generated(seed: &str, board: Board, operator: Operator) -> Self {
        Self {
            seed: seed.to_string(),
            board,
            operator,
            score: 0,
            is_playing: true,
        }
    }

    /// Assemble a session from its parts, checking that they describe a state the
    /// engine can actually be in.
    pub fn from_parts(
        seed: impl Into<String>,
        board: Board,
        operator: Operator,
        score: u32,
        is_playing: bool,
    ) -> Result<Self, FormatError> {
        let (row, col) = operator.position();
        if board.is_out_of_bounds(row, col) {
            return Err(FormatError::OperatorOutOfBounds { row, col });
        }
        if board.is_occupied(row, col) {
            return Err(FormatError::OperatorOnCrate { row, col });
        }
        if board.is_out_of_bounds(board.last_row(), operator.door_col) {
            return Err(FormatError::DoorOutOfBounds(operator.door_col));
        }
        let (row, col) = operator.target();
        if board.is_out_of_bounds(row, col) {
            return Err(FormatError::TargetOutOfBounds { row, col });
        }
        if !board.is_occupied(row, col) {
            return Err(FormatError::TargetNotCrate { row, col });
        }

        let state = Self {
            seed: seed.into(),
            board,
            operator,
            score,
            is_playing,
        };
        if !state.is_playing && !state.check_win() {
            return Err(FormatError::FinishedWithoutWin);
        }
        Ok(state)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Face `direction` without moving. Returns whether the facing changed.
    pub fn try_turn(&mut self, direction: Direction) -> bool {
        let changed = self.operator.direction != direction;
        self.operator.direction = direction;
        self.score = self.score.saturating_add(SCORE_TURN);
        changed
    }

    /// The crates a move in the current facing would push, nearest first.
    ///
    /// `None` when the move is illegal: the line runs into the edge before an empty
    /// cell, or the crates together weigh more than [`MAX_PUSH`].
    pub fn chain_ahead(&self) -> Option<PushChain> {
        let op = &self.operator;
        let chain = self.board.chain_ahead(op.row, op.col, op.direction)?;
        let weight: u32 = chain.iter().map(|&tier| tier as u32).sum();
        (weight <= MAX_PUSH).then_some(chain)
    }

    /// Advance one cell in the current facing, pushing the crates ahead.
    pub fn try_move(&mut self) -> bool {
        let Some(chain) = self.chain_ahead() else {
            trace!(
                "move blocked at ({}, {}) facing {}",
                self.operator.row,
                self.operator.col,
                self.operator.direction.as_str()
            );
            return false;
        };

        let op = self.operator;
        let (dr, dc) = op.direction.delta();

        // The target marks a physical crate: it travels with the chain when it is part of it.
        let carries_target = (0..=chain.len() as i8)
            .any(|k| op.row + dr * k == op.target_row && op.col + dc * k == op.target_col);

        let (row, col) = (op.row + dr, op.col + dc);
        for (i, &tier) in chain.iter().enumerate() {
            let k = i as i8 + 1;
            self.board.set(row + dr * k, col + dc * k, tier);
        }
        self.board.set(row, col, TIER_EMPTY);

        self.operator.row = row;
        self.operator.col = col;
        if carries_target {
            self.operator.target_row += dr;
            self.operator.target_col += dc;
        }
        self.score = self.score.saturating_add(SCORE_MOVE);
        true
    }

    /// Blow up the crate directly ahead. The target crate cannot be demolished.
    pub fn try_demolish(&mut self) -> bool {
        let (row, col) = self.operator.ahead();
        if (row, col) == self.operator.target() {
            trace!("refusing to demolish the target crate at ({}, {})", row, col);
            return false;
        }
        if !self.board.is_occupied(row, col) {
            trace!("nothing to demolish at ({}, {})", row, col);
            return false;
        }

        self.board.set(row, col, TIER_EMPTY);
        self.score = self.score.saturating_add(SCORE_DEMOLISH);
        true
    }

    /// Apply one input symbol. Returns whether the session changed.
    ///
    /// A directional symbol turns the operator unless it already faces that way, in
    /// which case it moves. Once the target sits on the door every input is ignored,
    /// whether or not [`SessionState::finish_if_won`] has run yet.
    pub fn apply_input(&mut self, input: InputSymbol) -> bool {
        if !self.is_playing || self.check_win() {
            return false;
        }

        match input.direction() {
            Some(direction) if direction == self.operator.direction => self.try_move(),
            Some(direction) => self.try_turn(direction),
            None => self.try_demolish(),
        }
    }

    /// Apply an input by hotkey name (`"w"`, `"up"`, `"space"`, ...).
    ///
    /// Unknown names are ignored.
    pub fn apply_key(&mut self, name: &str) -> bool {
        match InputSymbol::from_key_name(name) {
            Some(input) => self.apply_input(input),
            None => false,
        }
    }

    /// The target crate sits on the door: bottom row, door column.
    pub fn check_win(&self) -> bool {
        self.operator.target_col == self.operator.door_col
            && self.operator.target_row == self.board.last_row()
    }

    /// End the session if it is won. Returns whether the session is over.
    ///
    /// Finishing is one-way: later calls never resume play.
    pub fn finish_if_won(&mut self) -> bool {
        if self.is_playing && self.check_win() {
            self.is_playing = false;
        }
        !self.is_playing
    }

    /// Start the same level over from its seed.
    pub fn restart(&mut self) -> Result<(), GenerationError> {
        *self = generator::generate(&self.seed)?;
        Ok(())
    }
}

/// Apply `input` to a copy of `state` and return the result.
///
/// The given state is left untouched, so callers can keep earlier states around.
pub fn apply_input(state: &SessionState, input: InputSymbol) -> SessionState {
    let mut next = state.clone();
    next.apply_input(input);
    next
}

/// Whether the target crate has reached the door.
pub fn check_win(state: &SessionState) -> bool {
    state.check_win()
}
