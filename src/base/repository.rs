use async_trait::async_trait;

use crate::error::Result;
use crate::models::{
    article::Article,
    digest::Digest,
    keyword::{Keyword, KeywordId, NewKeyword},
    todo::{NewTodo, Todo, TodoId, TodoPatch},
};

// Every list is ordered by creation time, newest first, as the store returns it.

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Fetches the current articles
    async fn list_articles(&self) -> Result<Vec<Article>>;

    /// Asks the backend to select and summarize up to `count` new articles.
    ///
    /// Callers validate `count` against the last known `total_found` first.
    async fn summarize(&self, count: usize) -> Result<Digest>;
}

#[async_trait]
pub trait KeywordRepository: Send + Sync {
    async fn list_keywords(&self) -> Result<Vec<Keyword>>;
    async fn create_keyword(&self, keyword: &NewKeyword) -> Result<()>;
    async fn delete_keyword(&self, id: &KeywordId) -> Result<()>;
}

#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn list_todos(&self) -> Result<Vec<Todo>>;
    async fn create_todo(&self, todo: &NewTodo) -> Result<()>;
    async fn update_todo(&self, id: &TodoId, patch: &TodoPatch) -> Result<()>;
    async fn delete_todo(&self, id: &TodoId) -> Result<()>;
}
