//! In-memory repositories for service and page tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::base::repository::{ArticleRepository, KeywordRepository, TodoRepository};
use crate::error::{Error, MutationKind, Result, TransportError};
use crate::models::{
    Article, Digest, Keyword, KeywordId, NewKeyword, NewTodo, Todo, TodoId, TodoPatch,
};

#[derive(Default)]
struct State {
    articles: Vec<Article>,
    keywords: Vec<Keyword>,
    todos: Vec<Todo>,
    fail_reads: bool,
}

/// Keeps every list newest first, like the real stores.
#[derive(Default)]
pub(crate) struct InMemoryStore {
    state: Mutex<State>,
    calls: AtomicUsize,
}

fn not_found() -> TransportError {
    TransportError::Status {
        status: 404,
        message: Some("not found".to_string()),
    }
}

impl InMemoryStore {
    pub fn set_articles(&self, articles: Vec<Article>) {
        self.state.lock().unwrap().articles = articles;
    }

    pub fn set_todos(&self, todos: Vec<Todo>) {
        self.state.lock().unwrap().todos = todos;
    }

    pub fn fail_reads(&self, fail: bool) {
        self.state.lock().unwrap().fail_reads = fail;
    }

    /// Number of repository calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn read(&self, resource: &'static str) -> Result<std::sync::MutexGuard<'_, State>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();
        if state.fail_reads {
            return Err(Error::fetch(
                resource,
                TransportError::Status {
                    status: 503,
                    message: None,
                },
            ));
        }
        Ok(state)
    }

    fn write(&self) -> std::sync::MutexGuard<'_, State> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.state.lock().unwrap()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryStore {
    async fn list_articles(&self) -> Result<Vec<Article>> {
        Ok(self.read("articles")?.articles.clone())
    }

    async fn summarize(&self, count: usize) -> Result<Digest> {
        let state = self.read("digest")?;
        let summarized_articles: Vec<Article> =
            state.articles.iter().take(count).cloned().collect();
        Ok(Digest {
            total_found: state.articles.len(),
            summarized_count: Some(summarized_articles.len()),
            summarized_articles,
            full_article_list: Vec::new(),
        })
    }
}

#[async_trait]
impl KeywordRepository for InMemoryStore {
    async fn list_keywords(&self) -> Result<Vec<Keyword>> {
        Ok(self.read("keywords")?.keywords.clone())
    }

    async fn create_keyword(&self, keyword: &NewKeyword) -> Result<()> {
        self.write().keywords.insert(
            0,
            Keyword {
                id: KeywordId(Uuid::new_v4().to_string()),
                url: keyword.url.clone(),
                created_at: None,
            },
        );
        Ok(())
    }

    async fn delete_keyword(&self, id: &KeywordId) -> Result<()> {
        let mut state = self.write();
        let before = state.keywords.len();
        state.keywords.retain(|k| &k.id != id);
        if state.keywords.len() == before {
            return Err(Error::mutation("keywords", MutationKind::Delete, not_found()));
        }
        Ok(())
    }
}

#[async_trait]
impl TodoRepository for InMemoryStore {
    async fn list_todos(&self) -> Result<Vec<Todo>> {
        Ok(self.read("todos")?.todos.clone())
    }

    async fn create_todo(&self, todo: &NewTodo) -> Result<()> {
        self.write()
            .todos
            .insert(0, Todo::new(Uuid::new_v4().to_string(), todo.task.clone()));
        Ok(())
    }

    async fn update_todo(&self, id: &TodoId, patch: &TodoPatch) -> Result<()> {
        let mut state = self.write();
        let todo = state
            .todos
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| Error::mutation("todos", MutationKind::Update, not_found()))?;
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        if let Some(days) = patch.reminder_days {
            todo.reminder_days = days;
        }
        Ok(())
    }

    async fn delete_todo(&self, id: &TodoId) -> Result<()> {
        let mut state = self.write();
        let before = state.todos.len();
        state.todos.retain(|t| &t.id != id);
        if state.todos.len() == before {
            return Err(Error::mutation("todos", MutationKind::Delete, not_found()));
        }
        Ok(())
    }
}
