//! Game context: owns the current board and routes interactions.

use crate::games::trivia::{Board, BoardBuilder, BuildError, CellRef, RevealError};
use crate::source::QuestionSource;
use crate::view::BoardView;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, error, info, instrument, warn};

/// One play session's state.
///
/// The board is replaced whole on every successful rebuild and never
/// mutated except through reveals. `new_game` holds `&mut self` until the
/// build resolves, so reveals and rebuilds cannot interleave.
#[derive(Debug)]
pub struct Game<S> {
    builder: BoardBuilder<S>,
    rng: ChaCha8Rng,
    board: Option<Board>,
    generation: u64,
}

impl<S: QuestionSource> Game<S> {
    /// Creates a game with no board yet.
    ///
    /// With a seed, every board is reproducible for a given source.
    #[instrument(skip(builder))]
    pub fn new(builder: BoardBuilder<S>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        info!(shape = ?builder.shape(), "Creating game");
        Self {
            builder,
            rng,
            board: None,
            generation: 0,
        }
    }

    /// Returns the current board, if one has been built.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Number of boards built successfully so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the board builder.
    pub fn builder(&self) -> &BoardBuilder<S> {
        &self.builder
    }

    /// Builds a new board and renders it.
    ///
    /// On failure the previous board stays exactly as it was.
    #[instrument(skip(self, view), fields(generation = self.generation))]
    pub async fn new_game<V: BoardView + ?Sized>(
        &mut self,
        view: &mut V,
    ) -> Result<&Board, BuildError> {
        let board = match self.builder.build(&mut self.rng).await {
            Ok(board) => board,
            Err(e) => {
                error!(error = %e, "Board build failed; keeping previous board");
                return Err(e);
            }
        };

        self.generation += 1;
        info!(generation = self.generation, "New board in play");
        let board = self.board.insert(board);
        view.render(board);
        Ok(board)
    }

    /// Reveals the next text of the clue at `cell`.
    ///
    /// Pushes new text to the view. At the terminal state nothing is pushed
    /// and `Ok(None)` comes back. A cell outside the board is logged and
    /// reported as [`RevealError::UnknownClue`].
    #[instrument(skip(self, view), fields(cell = %cell, generation = self.generation))]
    pub fn reveal<V: BoardView + ?Sized>(
        &mut self,
        cell: CellRef,
        view: &mut V,
    ) -> Result<Option<&str>, RevealError> {
        let board = self.board.as_mut().ok_or_else(|| {
            warn!("Reveal before any board was built");
            RevealError::UnknownClue(cell)
        })?;

        match board.reveal(cell) {
            Ok(Some(text)) => {
                view.update_cell(cell, text);
                Ok(Some(text))
            }
            Ok(None) => {
                debug!("Clue already shows its answer");
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, "Ignoring reveal for unknown cell");
                Err(e)
            }
        }
    }
}
