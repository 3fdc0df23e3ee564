pub mod base;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export repository traits
pub use base::repository::{ArticleRepository, KeywordRepository, TodoRepository};

// Re-export models
pub use models::{
    Article, ArticleId, Digest, FoundArticle, ImpactLevel, Keyword, KeywordId, NewKeyword,
    NewTodo, Todo, TodoId, TodoPatch,
};

pub use config::{AppConfig, BackendConfig};
pub use data::{Backend, HostedRepository, RestRepository};
pub use error::{Error, Result};

// Re-export services selectively
pub use services::{ArticleService, DigestService, KeywordService, TodoService};
