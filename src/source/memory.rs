//! In-memory question source.

use super::{CategoryData, CategorySummary, ClueData, QuestionSource, SourceError};
use crate::games::trivia::CategoryId;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// One stored category, as it appears in the JSON form.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredCategory {
    id: CategoryId,
    title: String,
    clues: Vec<ClueData>,
}

/// Question source holding a fixed set of categories.
///
/// Categories are listed in insertion order. The JSON form is an array of
/// `{"id": 1, "title": "...", "clues": [{"question": "...", "answer": "..."}]}`.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    categories: Vec<StoredCategory>,
}

impl InMemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a category.
    ///
    /// Duplicate ids all appear in the pool; lookups return the first match.
    #[must_use]
    pub fn with_category(
        mut self,
        id: CategoryId,
        title: impl Into<String>,
        clues: Vec<ClueData>,
    ) -> Self {
        self.categories.push(StoredCategory {
            id,
            title: title.into(),
            clues,
        });
        self
    }

    /// Parses a source from its JSON form.
    #[instrument(skip(json))]
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        let categories: Vec<StoredCategory> = serde_json::from_str(json)?;
        info!(categories = categories.len(), "Loaded in-memory question source");
        Ok(Self { categories })
    }

    /// Reads and parses a JSON file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SourceError::new(format!("Failed to read question file: {}", e)))?;
        Self::from_json(&content)
    }

    /// Number of stored categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the source holds no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[async_trait::async_trait]
impl QuestionSource for InMemorySource {
    #[instrument(skip(self))]
    async fn list_categories(&self, count: usize) -> Result<Vec<CategorySummary>, SourceError> {
        let pool: Vec<_> = self
            .categories
            .iter()
            .take(count)
            .map(|c| CategorySummary::new(c.id, c.title.clone(), c.clues.len()))
            .collect();
        debug!(returned = pool.len(), "Listed categories");
        Ok(pool)
    }

    #[instrument(skip(self), fields(category = %id))]
    async fn get_category(&self, id: CategoryId) -> Result<CategoryData, SourceError> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| CategoryData::new(c.title.clone(), c.clues.clone()))
            .ok_or_else(|| SourceError::new(format!("Category {} not found", id)))
    }
}
