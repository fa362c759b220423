// ABOUTME: Single GET request returning a decoded JSON body.
// ABOUTME: Maps non-success statuses, transport failures and invalid JSON to FetchError.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::error::FetchError;

/// Issues one GET to `url` and decodes the body as JSON.
///
/// `context` names the operation in errors and log events.
pub async fn fetch_json(
    client: &reqwest::Client,
    url: &Url,
    headers: &HashMap<String, String>,
    context: &str,
) -> Result<Value, FetchError> {
    debug!(%url, context, "sending request");

    let mut request = client.get(url.clone()).header("accept", "application/json");
    for (key, value) in headers {
        request = request.header(key, value);
    }

    let response = request
        .send()
        .await
        .map_err(|e| FetchError::transport(context, e))?;

    let status = response.status();
    if !status.is_success() {
        warn!(%url, status = status.as_u16(), context, "non-success response");
        return Err(FetchError::http(status.as_u16(), context));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| FetchError::transport(context, e))?;

    serde_json::from_slice(&body).map_err(|e| FetchError::decode(context, e))
}
