//! Core domain types for the trivia board.

use crate::source::ClueData;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Identifier of a category in the question source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(u64);

impl CategoryId {
    /// Creates a category ID.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Board dimensions: `categories` columns of `clues_per_category` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardShape {
    categories: usize,
    clues_per_category: usize,
}

impl BoardShape {
    /// The classic 6 × 5 board.
    pub const CLASSIC: BoardShape = BoardShape {
        categories: 6,
        clues_per_category: 5,
    };

    /// Creates a shape, or `None` if either dimension is zero.
    pub const fn new(categories: usize, clues_per_category: usize) -> Option<Self> {
        if categories == 0 || clues_per_category == 0 {
            None
        } else {
            Some(Self {
                categories,
                clues_per_category,
            })
        }
    }

    /// Number of categories (N).
    pub const fn categories(&self) -> usize {
        self.categories
    }

    /// Number of clues in every category (K).
    pub const fn clues_per_category(&self) -> usize {
        self.clues_per_category
    }
}

impl Default for BoardShape {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// What a clue cell currently exposes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum RevealState {
    /// Nothing shown yet.
    #[default]
    Hidden,
    /// Question text shown.
    Question,
    /// Answer text shown. Terminal.
    Answer,
}

/// A question/answer pair with its own reveal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clue {
    question: String,
    answer: String,
    state: RevealState,
}

impl Clue {
    /// Creates a hidden clue.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            state: RevealState::Hidden,
        }
    }

    /// Returns the question text.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Returns the answer text.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Returns the current reveal state.
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Sets the reveal state. Only the transition in `reveal.rs` calls this.
    pub(super) fn set_state(&mut self, state: RevealState) {
        self.state = state;
    }
}

impl From<ClueData> for Clue {
    fn from(data: ClueData) -> Self {
        let (question, answer) = data.into_parts();
        Self::new(question, answer)
    }
}

/// A titled column of clues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    id: CategoryId,
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    /// Creates a category.
    pub(crate) fn new(id: CategoryId, title: String, clues: Vec<Clue>) -> Self {
        Self { id, title, clues }
    }

    /// Returns the category ID.
    pub fn id(&self) -> CategoryId {
        self.id
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the clues in board order.
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    pub(super) fn clue_mut(&mut self, idx: usize) -> Option<&mut Clue> {
        self.clues.get_mut(idx)
    }
}

/// The assembled board for one play session.
///
/// Only the board builder creates boards, and only once every category
/// has loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    pub(crate) fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Returns the categories in column order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of categories.
    pub fn width(&self) -> usize {
        self.categories.len()
    }

    /// Number of clues per category.
    pub fn height(&self) -> usize {
        self.categories.first().map_or(0, |c| c.clues.len())
    }

    /// Looks up a clue by cell, or `None` if the cell is out of bounds.
    pub fn clue(&self, cell: CellRef) -> Option<&Clue> {
        self.categories
            .get(cell.category())
            .and_then(|c| c.clues.get(cell.clue()))
    }

    pub(super) fn clue_mut(&mut self, cell: CellRef) -> Option<&mut Clue> {
        self.categories
            .get_mut(cell.category())
            .and_then(|c| c.clue_mut(cell.clue()))
    }

    /// Counts clues in the given state.
    pub fn count_in_state(&self, state: RevealState) -> usize {
        self.categories
            .iter()
            .flat_map(|c| c.clues.iter())
            .filter(|clue| clue.state() == state)
            .count()
    }
}

/// A cell on the board: category column and clue row, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRef {
    category: usize,
    clue: usize,
}

impl CellRef {
    /// Creates a cell reference. Bounds are checked on lookup, not here.
    pub const fn new(category: usize, clue: usize) -> Self {
        Self { category, clue }
    }

    /// Category (column) index.
    pub const fn category(&self) -> usize {
        self.category
    }

    /// Clue (row) index.
    pub const fn clue(&self) -> usize {
        self.clue
    }
}

impl std::fmt::Display for CellRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.category, self.clue)
    }
}

/// Input that is not a `<category>-<clue>` cell reference.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Not a cell reference: {:?}", input)]
pub struct ParseCellError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for CellRef {
    type Err = ParseCellError;

    /// Accepts `"2-3"` or `"2 3"`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCellError {
            input: s.to_string(),
        };
        let trimmed = s.trim();
        let (cat, clue) = trimmed
            .split_once('-')
            .or_else(|| trimmed.split_once(char::is_whitespace))
            .ok_or_else(err)?;
        let category = cat.trim().parse().map_err(|_| err())?;
        let clue = clue.trim().parse().map_err(|_| err())?;
        Ok(Self::new(category, clue))
    }
}
