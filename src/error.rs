use std::fmt;

use thiserror::Error;

/// What a failed write was trying to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MutationKind::Create => "create",
            MutationKind::Update => "update",
            MutationKind::Delete => "delete",
        })
    }
}

/// Failure talking to the backend
#[derive(Debug, Error)]
pub enum TransportError {
    /// Non-2xx answer; `message` is the body's `message` field when present.
    #[error("{}", status_text(.status, .message))]
    Status { status: u16, message: Option<String> },

    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

fn status_text(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) if !message.is_empty() => message.clone(),
        _ => format!("HTTP error! Status: {status}"),
    }
}

/// Locally detected bad input; raised before any network call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a number between 1 and {total_found}.")]
    SummarizeCountOutOfRange { requested: i64, total_found: usize },

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("invalid URL {input:?}: {reason}")]
    InvalidUrl { input: String, reason: String },

    #[error("reminder must be a whole number of days, got {0:?}")]
    InvalidReminder(String),
}

#[derive(Debug, Error)]
pub enum Error {
    /// Read failure: unreachable backend, non-2xx status or malformed JSON
    #[error("failed to fetch {resource}: {source}")]
    Fetch {
        resource: &'static str,
        #[source]
        source: TransportError,
    },

    /// Write failure
    #[error("failed to {kind} {resource}: {source}")]
    Mutation {
        resource: &'static str,
        kind: MutationKind,
        #[source]
        source: TransportError,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    pub fn fetch(resource: &'static str, source: impl Into<TransportError>) -> Self {
        Error::Fetch {
            resource,
            source: source.into(),
        }
    }

    pub fn mutation(
        resource: &'static str,
        kind: MutationKind,
        source: impl Into<TransportError>,
    ) -> Self {
        Error::Mutation {
            resource,
            kind,
            source: source.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// HTTP status of a remote failure, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Fetch { source, .. } | Error::Mutation { source, .. } => match source {
                TransportError::Status { status, .. } => Some(*status),
                TransportError::Request(e) => e.status().map(|s| s.as_u16()),
                TransportError::Decode(_) => None,
            },
            Error::Validation(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
