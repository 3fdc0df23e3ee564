pub mod article;
pub mod digest;
pub mod keyword;
pub mod todo;

#[cfg(test)]
pub(crate) mod testing;

pub use article::{
    filter_by_impact, impact_counts, search_articles, sort_by_impact, toggle_impact,
    ArticleService, EmptySelection, ImpactCounts,
};
pub use digest::{validate_summarize_count, DigestService, INITIAL_SUMMARIZE_COUNT};
pub use keyword::{validate_keyword_url, KeywordService};
pub use todo::{
    due_status, parse_reminder, prioritize_todos, DueStatus, DueStyle, TodoService, Urgency,
};
