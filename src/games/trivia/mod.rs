//! Trivia board: data model, board assembly, and clue reveal.

mod builder;
mod reveal;
mod types;

pub use builder::{BoardBuilder, BuildError, DEFAULT_POOL_SIZE};
pub use reveal::RevealError;
pub use types::{
    Board, BoardShape, Category, CategoryId, CellRef, Clue, ParseCellError, RevealState,
};
