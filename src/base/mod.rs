pub mod repository;

pub use repository::{ArticleRepository, KeywordRepository, TodoRepository};
