//! Trivia board library - category selection, board assembly, clue reveal
//!
//! A board is N categories of K clues drawn at random from a question
//! source. Each clue starts hidden, shows its question on the first
//! interaction, its answer on the second, and stays put after that.
//!
//! # Architecture
//!
//! - **Source**: where categories and clues come from (HTTP or in-memory)
//! - **Builder**: samples categories and clues into a complete board
//! - **Reveal**: per-clue `Hidden → Question → Answer` state machine
//! - **Game**: owns the current board and drives a view
//! - **View**: rendering surface the game calls into
//!
//! # Example
//!
//! ```no_run
//! use trivia_board::{BoardBuilder, BoardShape, CellRef, Game, JServiceSource, TextView};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let source = JServiceSource::new("https://jservice.io");
//! let mut game = Game::new(BoardBuilder::new(source, BoardShape::CLASSIC), None);
//! let mut view = TextView::new(std::io::stdout());
//!
//! game.new_game(&mut view).await?;
//! game.reveal(CellRef::new(0, 0), &mut view)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod game;
mod games;
mod source;
mod view;

// Crate-level exports - Configuration
pub use config::{ConfigError, SOURCE_URL_ENV, TriviaConfig};

// Crate-level exports - Game context
pub use game::Game;

// Crate-level exports - Board model, builder, reveal
pub use games::trivia::{
    Board, BoardBuilder, BoardShape, BuildError, Category, CategoryId, CellRef, Clue,
    DEFAULT_POOL_SIZE, ParseCellError, RevealError, RevealState,
};

// Crate-level exports - Question sources
pub use source::{
    CategoryData, CategorySummary, ClueData, InMemorySource, JServiceSource, QuestionSource,
    SourceError,
};

// Crate-level exports - Views
pub use view::{BoardView, HIDDEN_MARK, TextView};
