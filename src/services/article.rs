use std::cmp::Reverse;
use std::sync::Arc;

use log::debug;

use crate::base::repository::ArticleRepository;
use crate::error::Result;
use crate::models::article::{Article, ImpactLevel};

/// What an impact filter shows while no level is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptySelection {
    /// Everything, until a level is picked (Home)
    ShowAll,
    /// Nothing, until a level is picked (Categories)
    ShowNothing,
}

/// Orders articles High, Medium, Low, then unknown. Equal ranks keep their
/// input order.
pub fn sort_by_impact(articles: &[Article]) -> Vec<Article> {
    let mut sorted = articles.to_vec();
    sorted.sort_by_key(|article| Reverse(article.rank()));
    sorted
}

/// Case-insensitive substring search over title, summary and source.
///
/// A blank query returns the list unchanged.
pub fn search_articles(articles: &[Article], query: &str) -> Vec<Article> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return articles.to_vec();
    }

    articles
        .iter()
        .filter(|article| {
            [&article.title, &article.summary, &article.source]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Keeps the articles at the selected impact level.
pub fn filter_by_impact(
    articles: &[Article],
    selected: Option<ImpactLevel>,
    when_empty: EmptySelection,
) -> Vec<Article> {
    match selected {
        Some(level) => articles
            .iter()
            .filter(|article| article.impact == Some(level))
            .cloned()
            .collect(),
        None => match when_empty {
            EmptySelection::ShowAll => articles.to_vec(),
            EmptySelection::ShowNothing => Vec::new(),
        },
    }
}

/// Clicking the selected level again clears the selection.
pub fn toggle_impact(current: Option<ImpactLevel>, clicked: ImpactLevel) -> Option<ImpactLevel> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Number of articles per impact level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImpactCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl ImpactCounts {
    pub fn get(&self, level: ImpactLevel) -> usize {
        match level {
            ImpactLevel::Low => self.low,
            ImpactLevel::Medium => self.medium,
            ImpactLevel::High => self.high,
        }
    }
}

pub fn impact_counts(articles: &[Article]) -> ImpactCounts {
    articles
        .iter()
        .fold(ImpactCounts::default(), |mut counts, article| {
            match article.impact {
                Some(ImpactLevel::Low) => counts.low += 1,
                Some(ImpactLevel::Medium) => counts.medium += 1,
                Some(ImpactLevel::High) => counts.high += 1,
                None => {}
            }
            counts
        })
}

/// Reads stored articles for browsing by impact
#[derive(Clone)]
pub struct ArticleService {
    repository: Arc<dyn ArticleRepository>,
}

impl ArticleService {
    pub fn new(repository: Arc<dyn ArticleRepository>) -> Self {
        Self { repository }
    }

    /// Articles newest first, as stored.
    pub async fn list_articles(&self) -> Result<Vec<Article>> {
        let articles = self.repository.list_articles().await?;
        debug!("Fetched {} articles", articles.len());
        Ok(articles)
    }
}
