use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use crate::base::repository::{ArticleRepository, KeywordRepository, TodoRepository};
use crate::data::http::{check_status, join, read_json};
use crate::error::{Error, MutationKind, Result, TransportError};
use crate::models::{
    Article, Digest, Keyword, KeywordId, NewKeyword, NewTodo, Todo, TodoId, TodoPatch,
};

pub const ARTICLES_TABLE: &str = "articles";
pub const KEYWORDS_TABLE: &str = "keywords";
pub const TODOS_TABLE: &str = "todos";

/// Client for a hosted database that exposes tables at `/rest/v1/{table}`
///
/// Reads are `select=*` ordered by `created_at` descending; writes filter
/// rows with `id=eq.{id}`.
#[derive(Clone)]
pub struct HostedRepository {
    client: Client,
    rest_url: String,
    api_key: String,
}

impl HostedRepository {
    pub fn new(project_url: &Url, api_key: impl Into<String>) -> Self {
        Self::with_client(Client::new(), project_url, api_key)
    }

    pub fn with_client(client: Client, project_url: &Url, api_key: impl Into<String>) -> Self {
        Self {
            client,
            rest_url: join(project_url.as_str(), "/rest/v1"),
            api_key: api_key.into(),
        }
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.client
            .request(method, join(&self.rest_url, &format!("/{table}")))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn select<T: DeserializeOwned>(&self, table: &'static str) -> Result<Vec<T>> {
        debug!("select * from {} order by created_at desc", table);
        let response = self
            .request(Method::GET, table)
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await
            .map_err(|e| Error::fetch(table, e))?;
        read_json(response).await.map_err(|e| Error::fetch(table, e))
    }

    async fn write(
        &self,
        table: &'static str,
        kind: MutationKind,
        request: RequestBuilder,
    ) -> Result<()> {
        let outcome: std::result::Result<_, TransportError> = async {
            let response = request.header("Prefer", "return=minimal").send().await?;
            check_status(response).await
        }
        .await;
        outcome.map_err(|e| Error::mutation(table, kind, e))?;
        Ok(())
    }

    fn by_id(&self, method: Method, table: &str, id: &str) -> RequestBuilder {
        self.request(method, table).query(&[("id", format!("eq.{id}"))])
    }
}

#[async_trait]
impl ArticleRepository for HostedRepository {
    async fn list_articles(&self) -> Result<Vec<Article>> {
        self.select(ARTICLES_TABLE).await
    }

    /// Stored articles are already summarized; the newest `count` of them
    /// make up the digest.
    async fn summarize(&self, count: usize) -> Result<Digest> {
        let articles: Vec<Article> = self.select(ARTICLES_TABLE).await?;
        let total_found = articles.len();
        let summarized_articles: Vec<Article> = articles.into_iter().take(count).collect();
        Ok(Digest {
            total_found,
            summarized_count: Some(summarized_articles.len()),
            summarized_articles,
            full_article_list: Vec::new(),
        })
    }
}

#[async_trait]
impl KeywordRepository for HostedRepository {
    async fn list_keywords(&self) -> Result<Vec<Keyword>> {
        self.select(KEYWORDS_TABLE).await
    }

    async fn create_keyword(&self, keyword: &NewKeyword) -> Result<()> {
        let request = self.request(Method::POST, KEYWORDS_TABLE).json(keyword);
        self.write(KEYWORDS_TABLE, MutationKind::Create, request).await
    }

    async fn delete_keyword(&self, id: &KeywordId) -> Result<()> {
        let request = self.by_id(Method::DELETE, KEYWORDS_TABLE, &id.0);
        self.write(KEYWORDS_TABLE, MutationKind::Delete, request).await
    }
}

#[async_trait]
impl TodoRepository for HostedRepository {
    async fn list_todos(&self) -> Result<Vec<Todo>> {
        self.select(TODOS_TABLE).await
    }

    async fn create_todo(&self, todo: &NewTodo) -> Result<()> {
        let request = self.request(Method::POST, TODOS_TABLE).json(todo);
        self.write(TODOS_TABLE, MutationKind::Create, request).await
    }

    async fn update_todo(&self, id: &TodoId, patch: &TodoPatch) -> Result<()> {
        let request = self
            .by_id(Method::PATCH, TODOS_TABLE, &id.0)
            .json(&patch.to_json("completed"));
        self.write(TODOS_TABLE, MutationKind::Update, request).await
    }

    async fn delete_todo(&self, id: &TodoId) -> Result<()> {
        let request = self.by_id(Method::DELETE, TODOS_TABLE, &id.0);
        self.write(TODOS_TABLE, MutationKind::Delete, request).await
    }
}
