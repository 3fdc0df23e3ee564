use serde::{Deserialize, Serialize};
use std::fmt;

use super::id::record_id;

record_id! {
    /// Unique identifier for tracked keywords/feeds
    KeywordId
}

/// A tracked feed URL or keyword string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub id: KeywordId,
    /// The tracked URL; older tables call this column `keyword`
    #[serde(alias = "keyword")]
    pub url: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

/// Payload for creating a keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewKeyword {
    pub url: String,
}
