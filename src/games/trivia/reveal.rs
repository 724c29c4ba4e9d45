//! Clue reveal state machine.
//!
//! Each clue moves through `Hidden → Question → Answer` and stops there.
//! Clues are independent; revealing one never touches another.

use super::types::{Board, CellRef, Clue, RevealState};
use derive_more::Display;
use tracing::{debug, instrument};

impl RevealState {
    /// Transition table. `None` means the state is terminal.
    pub const fn next(self) -> Option<RevealState> {
        match self {
            RevealState::Hidden => Some(RevealState::Question),
            RevealState::Question => Some(RevealState::Answer),
            RevealState::Answer => None,
        }
    }

    /// Whether no further transition exists.
    pub const fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}

impl Clue {
    /// Text the cell currently shows; `None` while hidden.
    pub fn visible_text(&self) -> Option<&str> {
        match self.state() {
            RevealState::Hidden => None,
            RevealState::Question => Some(self.question()),
            RevealState::Answer => Some(self.answer()),
        }
    }

    /// Advances one step and returns the newly exposed text.
    ///
    /// At `Answer` this returns `None` and leaves the clue untouched.
    pub fn reveal(&mut self) -> Option<&str> {
        let next = self.state().next()?;
        self.set_state(next);
        self.visible_text()
    }
}

/// Error raised when an interaction does not resolve to a clue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RevealError {
    /// The cell lies outside the current board, or there is no board.
    #[display("No clue at cell {}", _0)]
    UnknownClue(CellRef),
}

impl std::error::Error for RevealError {}

impl Board {
    /// Reveals the clue at `cell`.
    ///
    /// Returns `Ok(Some(text))` after a transition, `Ok(None)` when the clue
    /// already shows its answer.
    #[instrument(skip(self), fields(cell = %cell))]
    pub fn reveal(&mut self, cell: CellRef) -> Result<Option<&str>, RevealError> {
        let clue = self
            .clue_mut(cell)
            .ok_or(RevealError::UnknownClue(cell))?;
        let before = clue.state();
        debug!(?before, after = ?before.next().unwrap_or(before), "Revealing clue");
        Ok(clue.reveal())
    }
}
