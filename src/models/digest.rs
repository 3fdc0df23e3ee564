use serde::{Deserialize, Serialize};

use super::article::Article;

/// A newly found article before summarization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundArticle {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub source: String,
}

/// Result of a digest request
///
/// When nothing new was found the backend answers with only
/// `total_found: 0`, so every list defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Digest {
    #[serde(default)]
    pub total_found: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summarized_count: Option<usize>,
    #[serde(default)]
    pub summarized_articles: Vec<Article>,
    #[serde(default)]
    pub full_article_list: Vec<FoundArticle>,
}
