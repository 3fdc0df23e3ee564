use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::TransportError;

/// Error body returned by both backends
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Turns a non-2xx response into `TransportError::Status`.
pub(crate) async fn check_status(response: Response) -> Result<Response, TransportError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.bytes().await.unwrap_or_default();
    let message = serde_json::from_slice::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message);

    Err(TransportError::Status {
        status: status.as_u16(),
        message,
    })
}

/// Checks the status, then decodes the JSON body.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: Response,
) -> Result<T, TransportError> {
    let response = check_status(response).await?;
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Joins an absolute path onto a base URL, tolerating a trailing slash.
pub(crate) fn join(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
