//! HTTP question source for jService-compatible APIs.

use super::{CategoryData, CategorySummary, ClueData, QuestionSource, SourceError};
use crate::games::trivia::CategoryId;
use serde::Deserialize;
use tracing::{debug, info, instrument};

/// Category pool entry as returned by `GET /api/categories`.
#[derive(Debug, Deserialize)]
struct RemoteCategory {
    id: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    clues_count: usize,
}

/// Category body as returned by `GET /api/category`.
#[derive(Debug, Deserialize)]
struct RemoteCategoryDetail {
    #[serde(default)]
    title: String,
    #[serde(default)]
    clues: Vec<RemoteClue>,
}

#[derive(Debug, Deserialize)]
struct RemoteClue {
    #[serde(default)]
    question: String,
    #[serde(default)]
    answer: String,
}

impl From<RemoteCategory> for CategorySummary {
    fn from(remote: RemoteCategory) -> Self {
        CategorySummary::new(CategoryId::new(remote.id), remote.title, remote.clues_count)
    }
}

impl From<RemoteCategoryDetail> for CategoryData {
    fn from(remote: RemoteCategoryDetail) -> Self {
        let clues = remote
            .clues
            .into_iter()
            .map(|c| ClueData::new(c.question, c.answer))
            .collect();
        CategoryData::new(remote.title, clues)
    }
}

/// Question source backed by a jService-compatible HTTP API.
#[derive(Debug, Clone)]
pub struct JServiceSource {
    base_url: String,
    client: reqwest::Client,
}

impl JServiceSource {
    /// Creates a source rooted at `base_url` (e.g. `https://jservice.io`).
    #[instrument(skip_all, fields(base_url = %base_url.as_ref()))]
    pub fn new(base_url: impl AsRef<str>) -> Self {
        let base_url = base_url.as_ref().trim_end_matches('/').to_string();
        info!("Creating jService question source");
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Returns the API root this source queries.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn categories_url(&self, count: usize) -> String {
        format!("{}/api/categories?count={}", self.base_url, count)
    }

    fn category_url(&self, id: CategoryId) -> String {
        format!("{}/api/category?id={}", self.base_url, id.raw())
    }
}

#[async_trait::async_trait]
impl QuestionSource for JServiceSource {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn list_categories(&self, count: usize) -> Result<Vec<CategorySummary>, SourceError> {
        let url = self.categories_url(count);
        debug!(url = %url, "Requesting category pool");

        let remote: Vec<RemoteCategory> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(received = remote.len(), "Got category pool");
        Ok(remote.into_iter().map(CategorySummary::from).collect())
    }

    #[instrument(skip(self), fields(base_url = %self.base_url, category = %id))]
    async fn get_category(&self, id: CategoryId) -> Result<CategoryData, SourceError> {
        let url = self.category_url(id);
        debug!(url = %url, "Requesting category");

        let remote: RemoteCategoryDetail = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(clues = remote.clues.len(), "Got category");
        Ok(remote.into())
    }
}
