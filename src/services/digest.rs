use std::sync::Arc;

use log::info;

use crate::base::repository::ArticleRepository;
use crate::error::{Result, ValidationError};
use crate::models::Digest;
use crate::services::article::sort_by_impact;

/// Count requested on startup, before `total_found` is known
pub const INITIAL_SUMMARIZE_COUNT: usize = 1;

/// Checks `1 <= requested <= total_found`.
pub fn validate_summarize_count(
    requested: i64,
    total_found: usize,
) -> std::result::Result<usize, ValidationError> {
    match usize::try_from(requested) {
        Ok(count) if count >= 1 && count <= total_found => Ok(count),
        _ => Err(ValidationError::SummarizeCountOutOfRange {
            requested,
            total_found,
        }),
    }
}

/// Requests digests and ranks the returned articles by impact
#[derive(Clone)]
pub struct DigestService {
    repository: Arc<dyn ArticleRepository>,
}

impl DigestService {
    pub fn new(repository: Arc<dyn ArticleRepository>) -> Self {
        Self { repository }
    }

    /// First load: asks for a single article without validation.
    pub async fn initial(&self) -> Result<Digest> {
        self.fetch(INITIAL_SUMMARIZE_COUNT).await
    }

    /// Validates the requested count against the last known total, then
    /// fetches. Nothing is sent when validation fails.
    pub async fn summarize(&self, requested: i64, total_found: usize) -> Result<Digest> {
        let count = validate_summarize_count(requested, total_found)?;
        self.fetch(count).await
    }

    async fn fetch(&self, count: usize) -> Result<Digest> {
        info!("Requesting digest of {} article(s)", count);
        let mut digest = self.repository.summarize(count).await?;
        digest.summarized_articles = sort_by_impact(&digest.summarized_articles);
        info!(
            "Digest returned {} of {} new article(s)",
            digest.summarized_articles.len(),
            digest.total_found
        );
        Ok(digest)
    }
}
