//! HTTP plumbing shared by every operation: client construction, headers,
//! URL building and status handling.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Response, Url};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ClawsinoError, Result};

/// Build a reqwest client honouring the configured timeout.
pub fn build_client(config: &ClientConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout())
        .user_agent(concat!("clawsino/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Default headers for a JSON request, with a Bearer token when given.
///
/// A token that cannot be sent as a header value is a configuration error;
/// the request is never sent without it.
pub fn json_headers(token: Option<&str>, with_body: bool) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if with_body {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    if let Some(token) = token {
        let mut val = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
            ClawsinoError::Configuration("session token is not a valid header value".to_string())
        })?;
        val.set_sensitive(true);
        headers.insert(AUTHORIZATION, val);
    }
    Ok(headers)
}

/// Join path segments onto the base URL, percent-encoding each segment.
pub fn endpoint(base_url: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base_url)
        .map_err(|e| ClawsinoError::Configuration(format!("invalid base URL '{base_url}': {e}")))?;
    {
        let mut path = url.path_segments_mut().map_err(|_| {
            ClawsinoError::Configuration(format!("base URL '{base_url}' cannot carry a path"))
        })?;
        path.pop_if_empty().extend(segments);
    }
    Ok(url)
}

/// Read a response body as JSON, mapping non-2xx statuses to errors.
///
/// An empty 2xx body decodes as `{}`.
pub async fn read_json(resp: Response) -> Result<Value> {
    let status = resp.status();
    let text = resp.text().await?;
    if !status.is_success() {
        return Err(ClawsinoError::from_status(status.as_u16(), text));
    }
    parse_body(&text)
}

/// Parse a body, treating blank text as an empty object.
pub fn parse_body(text: &str) -> Result<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    Ok(serde_json::from_str(text)?)
}
