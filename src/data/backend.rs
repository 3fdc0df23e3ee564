use std::sync::Arc;

use log::info;

use crate::base::repository::{ArticleRepository, KeywordRepository, TodoRepository};
use crate::config::BackendConfig;
use crate::data::repositories::{HostedRepository, RestRepository};

/// The repositories of whichever data store is configured
#[derive(Clone)]
pub struct Backend {
    name: &'static str,
    articles: Arc<dyn ArticleRepository>,
    keywords: Arc<dyn KeywordRepository>,
    todos: Arc<dyn TodoRepository>,
}

impl Backend {
    pub fn connect(config: &BackendConfig) -> Self {
        match config {
            BackendConfig::Rest { base_url } => {
                info!("Using REST backend at {}", base_url);
                Self::from_shared(config.name(), Arc::new(RestRepository::new(base_url)))
            }
            BackendConfig::Hosted { project_url, api_key } => {
                info!("Using hosted database at {}", project_url);
                Self::from_shared(
                    config.name(),
                    Arc::new(HostedRepository::new(project_url, api_key.clone())),
                )
            }
        }
    }

    /// Uses one value for all three repositories.
    pub fn from_shared<R>(name: &'static str, repository: Arc<R>) -> Self
    where
        R: ArticleRepository + KeywordRepository + TodoRepository + 'static,
    {
        Self {
            name,
            articles: repository.clone(),
            keywords: repository.clone(),
            todos: repository,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn article_repository(&self) -> Arc<dyn ArticleRepository> {
        self.articles.clone()
    }

    pub fn keyword_repository(&self) -> Arc<dyn KeywordRepository> {
        self.keywords.clone()
    }

    pub fn todo_repository(&self) -> Arc<dyn TodoRepository> {
        self.todos.clone()
    }
}
