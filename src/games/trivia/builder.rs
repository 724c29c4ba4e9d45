//! Board assembly from a question source.
//!
//! Sampling happens twice, both times uniformly and without replacement:
//! first N categories out of the pool, then K clues out of each category.
//! That alone guarantees no repeated category on a board and no repeated
//! clue within a column.

use super::types::{Board, BoardShape, Category, CategoryId, Clue};
use crate::source::{CategoryData, QuestionSource, SourceError};
use futures::future::try_join_all;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

/// Default number of categories requested from the source.
pub const DEFAULT_POOL_SIZE: usize = 100;

/// Error that can occur while building a board.
#[derive(Debug, Clone, derive_more::Display, derive_more::From)]
pub enum BuildError {
    /// The source offered fewer distinct categories than the board needs.
    #[display("Only {} distinct categories available, {} required", available, required)]
    InsufficientPool {
        /// Distinct categories offered.
        available: usize,
        /// Categories the board needs.
        required: usize,
    },

    /// A selected category holds fewer clues than a column needs.
    #[display(
        "Category {} has only {} clues, {} required",
        category,
        available,
        required
    )]
    InsufficientClues {
        /// The sparse category.
        category: CategoryId,
        /// Clues it holds.
        available: usize,
        /// Clues per column.
        required: usize,
    },

    /// The question source failed; passed through as-is.
    #[display("{}", _0)]
    #[from]
    Source(SourceError),
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::Source(err) => Some(err),
            _ => None,
        }
    }
}

/// Builds boards of a fixed shape from a question source.
#[derive(Debug, Clone)]
pub struct BoardBuilder<S> {
    source: S,
    shape: BoardShape,
    pool_size: usize,
    skip_sparse_categories: bool,
}

impl<S: QuestionSource> BoardBuilder<S> {
    /// Creates a builder with the default pool size.
    #[instrument(skip(source))]
    pub fn new(source: S, shape: BoardShape) -> Self {
        Self {
            source,
            shape,
            pool_size: DEFAULT_POOL_SIZE,
            skip_sparse_categories: false,
        }
    }

    /// Sets how many categories to request from the source.
    ///
    /// Never less than the board width.
    #[must_use]
    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size.max(self.shape.categories());
        self
    }

    /// Drops pool entries advertising fewer than K clues before sampling.
    #[must_use]
    pub fn skip_sparse_categories(mut self, skip: bool) -> Self {
        self.skip_sparse_categories = skip;
        self
    }

    /// Returns the board shape.
    pub fn shape(&self) -> BoardShape {
        self.shape
    }

    /// Returns the question source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Picks N distinct category IDs uniformly from the source's pool.
    #[instrument(skip(self, rng), fields(pool_size = self.pool_size))]
    pub async fn select_category_ids<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<CategoryId>, BuildError> {
        let required = self.shape.categories();
        let min_clues = self.shape.clues_per_category();
        let pool = self.source.list_categories(self.pool_size).await?;
        debug!(offered = pool.len(), "Got category pool");

        let mut seen = HashSet::new();
        let candidates: Vec<CategoryId> = pool
            .iter()
            .filter(|c| !self.skip_sparse_categories || *c.clue_count() >= min_clues)
            .map(|c| *c.id())
            .filter(|id| seen.insert(*id))
            .collect();

        if candidates.len() < required {
            warn!(available = candidates.len(), required, "Category pool too small");
            return Err(BuildError::InsufficientPool {
                available: candidates.len(),
                required,
            });
        }

        let ids = index::sample(rng, candidates.len(), required)
            .into_iter()
            .map(|i| candidates[i])
            .collect();
        Ok(ids)
    }

    /// Fetches one category and samples K hidden clues from it.
    #[instrument(skip(self, rng), fields(category = %id))]
    pub async fn load_category<R: Rng + ?Sized>(
        &self,
        id: CategoryId,
        rng: &mut R,
    ) -> Result<Category, BuildError> {
        let data = self.source.get_category(id).await?;
        self.assemble_category(id, data, rng)
    }

    /// Builds a complete board, or nothing.
    ///
    /// Selects N ids, then runs [`load_category`](Self::load_category) for
    /// each of them concurrently. Every load samples from its own generator,
    /// seeded from `rng` in selection order, so one seed over one source
    /// always gives one board. The first failure aborts the build.
    #[instrument(skip(self, rng), fields(
        categories = self.shape.categories(),
        clues = self.shape.clues_per_category(),
    ))]
    pub async fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board, BuildError> {
        info!("Building board");
        let ids = self.select_category_ids(rng).await?;
        let seeds: Vec<u64> = ids.iter().map(|_| rng.next_u64()).collect();

        let loads = ids.into_iter().zip(seeds).map(|(id, seed)| async move {
            let mut category_rng = ChaCha8Rng::seed_from_u64(seed);
            self.load_category(id, &mut category_rng).await
        });
        let categories = try_join_all(loads).await?;

        info!(
            titles = ?categories.iter().map(Category::title).collect::<Vec<_>>(),
            "Board ready"
        );
        Ok(Board::new(categories))
    }

    fn assemble_category<R: Rng + ?Sized>(
        &self,
        id: CategoryId,
        data: CategoryData,
        rng: &mut R,
    ) -> Result<Category, BuildError> {
        let required = self.shape.clues_per_category();
        let available = data.clues().len();
        if available < required {
            warn!(category = %id, available, required, "Category has too few clues");
            return Err(BuildError::InsufficientClues {
                category: id,
                available,
                required,
            });
        }

        let clues = index::sample(rng, available, required)
            .into_iter()
            .map(|i| Clue::from(data.clues()[i].clone()))
            .collect();

        debug!(category = %id, title = %data.title(), "Assembled category");
        Ok(Category::new(id, data.title().clone(), clues))
    }
}
