use anyhow::{anyhow, bail, Context, Result};
use log::{debug, info};
use url::Url;

use crate::services::{DueStyle, EmptySelection};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Which data store the dashboard talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendConfig {
    /// The local REST backend (`/api/digest`, `/api/keywords`, `/api/tasks`)
    Rest { base_url: Url },
    /// A hosted database exposing its tables over REST
    Hosted { project_url: Url, api_key: String },
}

impl BackendConfig {
    pub fn name(&self) -> &'static str {
        match self {
            BackendConfig::Rest { .. } => "rest",
            BackendConfig::Hosted { .. } => "hosted",
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub backend: BackendConfig,
    /// What the Home page shows when no impact level is selected
    pub home_filter: EmptySelection,
    /// What the Categories page shows when no impact level is selected
    pub categories_filter: EmptySelection,
    pub due_style: DueStyle,
}

impl AppConfig {
    /// Loads configuration from the process environment, after reading an
    /// optional `.env` file.
    pub fn from_env() -> Result<Self> {
        match dotenv::dotenv() {
            Ok(path) => info!("Loaded environment from {}", path.display()),
            Err(e) => debug!("No .env file loaded: {}", e),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let backend = match get("COMPINTEL_BACKEND").as_deref().unwrap_or("rest") {
            "rest" => {
                let raw = get("COMPINTEL_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
                BackendConfig::Rest {
                    base_url: parse_url("COMPINTEL_API_URL", &raw)?,
                }
            }
            "hosted" => {
                let raw = get("COMPINTEL_DB_URL")
                    .ok_or_else(|| anyhow!("COMPINTEL_DB_URL must be set for the hosted backend"))?;
                let api_key = get("COMPINTEL_DB_KEY")
                    .ok_or_else(|| anyhow!("COMPINTEL_DB_KEY must be set for the hosted backend"))?;
                BackendConfig::Hosted {
                    project_url: parse_url("COMPINTEL_DB_URL", &raw)?,
                    api_key,
                }
            }
            other => bail!("COMPINTEL_BACKEND must be \"rest\" or \"hosted\", got {other:?}"),
        };

        Ok(Self {
            backend,
            home_filter: parse_policy("COMPINTEL_HOME_FILTER", get("COMPINTEL_HOME_FILTER"))?
                .unwrap_or(EmptySelection::ShowAll),
            categories_filter: parse_policy(
                "COMPINTEL_CATEGORIES_FILTER",
                get("COMPINTEL_CATEGORIES_FILTER"),
            )?
            .unwrap_or(EmptySelection::ShowNothing),
            due_style: match get("COMPINTEL_DUE_STYLE").as_deref() {
                None => DueStyle::Simple,
                Some("simple") => DueStyle::Simple,
                Some("extended") => DueStyle::Extended,
                Some(other) => {
                    bail!("COMPINTEL_DUE_STYLE must be \"simple\" or \"extended\", got {other:?}")
                }
            },
        })
    }
}

fn parse_url(key: &str, raw: &str) -> Result<Url> {
    Url::parse(raw).with_context(|| format!("{key} is not a valid URL: {raw}"))
}

fn parse_policy(key: &str, raw: Option<String>) -> Result<Option<EmptySelection>> {
    match raw.as_deref() {
        None => Ok(None),
        Some("all") => Ok(Some(EmptySelection::ShowAll)),
        Some("none") => Ok(Some(EmptySelection::ShowNothing)),
        Some(other) => bail!("{key} must be \"all\" or \"none\", got {other:?}"),
    }
}
