//! Question sources: where categories and clues come from.
//!
//! The board builder only ever talks to a [`QuestionSource`]. Two
//! implementations ship with the crate:
//!
//! - [`JServiceSource`]: HTTP client for a jService-compatible API
//! - [`InMemorySource`]: fixed data, loadable from JSON

mod http;
mod memory;

pub use http::JServiceSource;
pub use memory::InMemorySource;

use crate::games::trivia::CategoryId;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One entry of the category pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct CategorySummary {
    /// Category identifier.
    id: CategoryId,
    /// Category title.
    title: String,
    /// Number of clues the source advertises for this category.
    clue_count: usize,
}

/// A single question/answer pair as delivered by a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct ClueData {
    /// Question text.
    #[new(into)]
    question: String,
    /// Answer text.
    #[new(into)]
    answer: String,
}

impl ClueData {
    /// Splits into `(question, answer)`.
    pub fn into_parts(self) -> (String, String) {
        (self.question, self.answer)
    }
}

/// Full category contents as delivered by a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct CategoryData {
    /// Category title.
    title: String,
    /// Every clue the source holds for this category.
    clues: Vec<ClueData>,
}

/// External provider of category and clue data.
///
/// Both queries are read-only and idempotent. Implementations own any
/// timeout or retry policy; the builder never retries.
#[async_trait::async_trait]
pub trait QuestionSource: Send + Sync {
    /// Lists up to `count` available categories.
    ///
    /// Callers may ask for a larger pool than they need.
    async fn list_categories(&self, count: usize) -> Result<Vec<CategorySummary>, SourceError>;

    /// Fetches the title and every clue of one category.
    async fn get_category(&self, id: CategoryId) -> Result<CategoryData, SourceError>;
}

#[async_trait::async_trait]
impl<S: QuestionSource + ?Sized> QuestionSource for std::sync::Arc<S> {
    async fn list_categories(&self, count: usize) -> Result<Vec<CategorySummary>, SourceError> {
        (**self).list_categories(count).await
    }

    async fn get_category(&self, id: CategoryId) -> Result<CategoryData, SourceError> {
        (**self).get_category(id).await
    }
}

/// Failure reported by a question source.
#[derive(Debug, Clone, Display, Error)]
#[display("Source error: {} at {}:{}", message, file, line)]
pub struct SourceError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SourceError {
    /// Creates a new source error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<reqwest::Error> for SourceError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::new(format!("HTTP error: {}", err))
    }
}

impl From<serde_json::Error> for SourceError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}
