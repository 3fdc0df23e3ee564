use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use url::Url;

use crate::base::repository::{ArticleRepository, KeywordRepository, TodoRepository};
use crate::data::http::{check_status, join, read_json};
use crate::error::{Error, MutationKind, Result};
use crate::models::{
    Article, Digest, Keyword, KeywordId, NewKeyword, NewTodo, Todo, TodoId, TodoPatch,
};

/// Client for the local REST backend
///
/// Endpoints: `/api/digest[/{n}]`, `/api/keywords[/{id}]`, `/api/tasks[/{id}]`.
/// Ids are numeric on this backend and appear only in the path.
#[derive(Clone)]
pub struct RestRepository {
    client: Client,
    base_url: String,
}

impl RestRepository {
    pub fn new(base_url: &Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &Url) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        join(&self.base_url, path)
    }

    async fn get_digest(&self, path: &str) -> Result<Digest> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::fetch("digest", e))?;
        read_json(response).await.map_err(|e| Error::fetch("digest", e))
    }

    async fn send_mutation(
        &self,
        resource: &'static str,
        kind: MutationKind,
        request: reqwest::RequestBuilder,
    ) -> Result<()> {
        let response = request
            .send()
            .await
            .map_err(|e| Error::mutation(resource, kind, e))?;
        check_status(response)
            .await
            .map_err(|e| Error::mutation(resource, kind, e))?;
        Ok(())
    }

    async fn list<T: serde::de::DeserializeOwned>(
        &self,
        resource: &'static str,
        path: &str,
    ) -> Result<Vec<T>> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::fetch(resource, e))?;
        read_json(response).await.map_err(|e| Error::fetch(resource, e))
    }
}

#[async_trait]
impl ArticleRepository for RestRepository {
    /// The backend has no plain article listing; the bare digest route
    /// summarizes its default batch and returns those articles.
    async fn list_articles(&self) -> Result<Vec<Article>> {
        Ok(self.get_digest("/api/digest").await?.summarized_articles)
    }

    async fn summarize(&self, count: usize) -> Result<Digest> {
        self.get_digest(&format!("/api/digest/{count}")).await
    }
}

#[async_trait]
impl KeywordRepository for RestRepository {
    async fn list_keywords(&self) -> Result<Vec<Keyword>> {
        self.list("keywords", "/api/keywords").await
    }

    async fn create_keyword(&self, keyword: &NewKeyword) -> Result<()> {
        let request = self.client.post(self.url("/api/keywords")).json(keyword);
        self.send_mutation("keywords", MutationKind::Create, request).await
    }

    async fn delete_keyword(&self, id: &KeywordId) -> Result<()> {
        let request = self.client.delete(self.url(&format!("/api/keywords/{id}")));
        self.send_mutation("keywords", MutationKind::Delete, request).await
    }
}

#[async_trait]
impl TodoRepository for RestRepository {
    async fn list_todos(&self) -> Result<Vec<Todo>> {
        self.list("tasks", "/api/tasks").await
    }

    async fn create_todo(&self, todo: &NewTodo) -> Result<()> {
        let request = self.client.post(self.url("/api/tasks")).json(todo);
        self.send_mutation("tasks", MutationKind::Create, request).await
    }

    async fn update_todo(&self, id: &TodoId, patch: &TodoPatch) -> Result<()> {
        let request = self
            .client
            .put(self.url(&format!("/api/tasks/{id}")))
            .json(&patch.to_json("is_completed"));
        self.send_mutation("tasks", MutationKind::Update, request).await
    }

    async fn delete_todo(&self, id: &TodoId) -> Result<()> {
        let request = self.client.delete(self.url(&format!("/api/tasks/{id}")));
        self.send_mutation("tasks", MutationKind::Delete, request).await
    }
}
