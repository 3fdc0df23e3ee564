use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::id::record_id;

record_id! {
    /// Unique identifier for articles stored in the hosted tables
    ArticleId
}

/// How much a piece of news matters to us
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

impl ImpactLevel {
    pub const ALL: [ImpactLevel; 3] = [ImpactLevel::Low, ImpactLevel::Medium, ImpactLevel::High];

    /// Fixed ranking used for ordering: High=3, Medium=2, Low=1.
    pub fn rank(self) -> u8 {
        match self {
            ImpactLevel::High => 3,
            ImpactLevel::Medium => 2,
            ImpactLevel::Low => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ImpactLevel::Low => "Low",
            ImpactLevel::Medium => "Medium",
            ImpactLevel::High => "High",
        }
    }

    /// Case-insensitive parse; `None` for anything that is not a known level.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Some(ImpactLevel::Low),
            "medium" => Some(ImpactLevel::Medium),
            "high" => Some(ImpactLevel::High),
            _ => None,
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImpactLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown impact level: {s}"))
    }
}

/// Rank of an optional impact level; unknown or missing ranks 0.
pub fn impact_rank(impact: Option<ImpactLevel>) -> u8 {
    impact.map(ImpactLevel::rank).unwrap_or(0)
}

fn lenient_impact<'de, D>(deserializer: D) -> Result<Option<ImpactLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(ImpactLevel::parse))
}

/// A summarized competitor-intelligence article
///
/// Articles are produced by the backend and never mutated here. The REST
/// digest omits `id` and `created_at`; the hosted table omits `link`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ArticleId>,
    #[serde(default)]
    pub title: String,
    /// Original URL to the article
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Publication the article came from
    #[serde(default)]
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_time: Option<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_content: Option<String>,
    #[serde(default, alias = "impact_level", deserialize_with = "lenient_impact")]
    pub impact: Option<ImpactLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Article {
    pub fn new(title: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            link: None,
            source: source.into(),
            posted_time: None,
            summary: String::new(),
            full_content: None,
            impact: None,
            created_at: None,
        }
    }

    pub fn with_impact(mut self, impact: ImpactLevel) -> Self {
        self.impact = Some(impact);
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn rank(&self) -> u8 {
        impact_rank(self.impact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_parse_is_case_insensitive() {
        assert_eq!(ImpactLevel::parse("HIGH"), Some(ImpactLevel::High));
        assert_eq!(ImpactLevel::parse("medium"), Some(ImpactLevel::Medium));
        assert_eq!(ImpactLevel::parse(" Low "), Some(ImpactLevel::Low));
        assert_eq!(ImpactLevel::parse("critical"), None);
    }

    #[test]
    fn test_rest_digest_article() {
        let json = r#"{
            "title": "Acme ships v2",
            "link": "https://acme.example/v2",
            "source": "Acme Blog",
            "summary": "Acme released a new version.",
            "impact": "High"
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();

        assert!(article.id.is_none());
        assert_eq!(article.impact, Some(ImpactLevel::High));
        assert_eq!(article.link.as_deref(), Some("https://acme.example/v2"));
        assert_eq!(article.rank(), 3);
    }

    #[test]
    fn test_hosted_table_article() {
        let json = r#"{
            "id": "7f9c0d7e-1111-4c4c-9a9a-000000000001",
            "title": "Rival raises Series B",
            "source": "TechNews",
            "posted_time": "2h ago",
            "impact_level": "medium",
            "summary": "Funding round.",
            "full_content": "Long text",
            "created_at": "2025-10-04T10:00:00+00:00"
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();

        assert_eq!(article.id, Some(ArticleId::from("7f9c0d7e-1111-4c4c-9a9a-000000000001")));
        assert_eq!(article.impact, Some(ImpactLevel::Medium));
        assert_eq!(article.full_content.as_deref(), Some("Long text"));
    }

    #[test]
    fn test_unknown_or_missing_impact_ranks_zero() {
        let unknown: Article =
            serde_json::from_str(r#"{"title": "x", "impact": "Severe"}"#).unwrap();
        let missing: Article = serde_json::from_str(r#"{"title": "y"}"#).unwrap();
        let null: Article = serde_json::from_str(r#"{"title": "z", "impact": null}"#).unwrap();

        assert_eq!(unknown.rank(), 0);
        assert_eq!(missing.rank(), 0);
        assert_eq!(null.rank(), 0);
    }

    #[test]
    fn test_numeric_article_id() {
        let article: Article = serde_json::from_str(r#"{"id": 12, "title": "t"}"#).unwrap();
        assert_eq!(article.id, Some(ArticleId("12".to_string())));
    }
}
