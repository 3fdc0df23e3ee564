use std::sync::Arc;

use log::{debug, info};
use url::Url;

use crate::base::repository::KeywordRepository;
use crate::error::{Result, ValidationError};
use crate::models::{Keyword, KeywordId, NewKeyword};

/// Trims the input and requires an absolute URL.
pub fn validate_keyword_url(input: &str) -> std::result::Result<NewKeyword, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty("keyword URL"));
    }

    let url = Url::parse(trimmed).map_err(|e| ValidationError::InvalidUrl {
        input: trimmed.to_string(),
        reason: e.to_string(),
    })?;

    Ok(NewKeyword { url: url.to_string() })
}

/// Manages tracked feed URLs; every write is followed by a full refetch
#[derive(Clone)]
pub struct KeywordService {
    repository: Arc<dyn KeywordRepository>,
}

impl KeywordService {
    pub fn new(repository: Arc<dyn KeywordRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_keywords(&self) -> Result<Vec<Keyword>> {
        let keywords = self.repository.list_keywords().await?;
        debug!("Fetched {} keywords", keywords.len());
        Ok(keywords)
    }

    pub async fn add_keyword(&self, input: &str) -> Result<Vec<Keyword>> {
        let keyword = validate_keyword_url(input)?;
        info!("Adding keyword {}", keyword.url);
        self.repository.create_keyword(&keyword).await?;
        self.list_keywords().await
    }

    pub async fn delete_keyword(&self, id: &KeywordId) -> Result<Vec<Keyword>> {
        info!("Deleting keyword {}", id);
        self.repository.delete_keyword(id).await?;
        self.list_keywords().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::InMemoryStore;

    #[test]
    fn test_validate_keyword_url() {
        assert_eq!(
            validate_keyword_url("  https://example.com/feed  ").unwrap().url,
            "https://example.com/feed"
        );
        assert_eq!(validate_keyword_url("   "), Err(ValidationError::Empty("keyword URL")));
        assert!(matches!(
            validate_keyword_url("example.com/feed"),
            Err(ValidationError::InvalidUrl { .. })
        ));
    }

    #[tokio::test]
    async fn test_add_refetches() {
        let store = Arc::new(InMemoryStore::default());
        let service = KeywordService::new(store.clone());

        let keywords = service.add_keyword("https://a.example/rss").await.unwrap();
        let keywords_after_second = service.add_keyword("https://b.example/rss").await.unwrap();

        assert_eq!(keywords.len(), 1);
        assert_eq!(keywords_after_second[0].url, "https://b.example/rss");
        assert_eq!(keywords_after_second[1].url, "https://a.example/rss");
    }

    #[tokio::test]
    async fn test_invalid_input_makes_no_call() {
        let store = Arc::new(InMemoryStore::default());
        let service = KeywordService::new(store.clone());

        assert!(service.add_keyword("").await.unwrap_err().is_validation());
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn test_delete_missing_keyword_fails() {
        let store = Arc::new(InMemoryStore::default());
        let service = KeywordService::new(store.clone());
        service.add_keyword("https://a.example/rss").await.unwrap();

        let err = service.delete_keyword(&KeywordId::from("missing")).await.unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert_eq!(service.list_keywords().await.unwrap().len(), 1);
    }
}
