use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::collections::HashMap;

use super::config::ClientConfig;

/// Builds the effective header set for one request.
///
/// Layering, later layers winning key-for-key: built-in `Content-Type` and
/// `Authorization`, then the configured default headers, then per-call
/// overrides. `default_json` suppresses the built-in JSON content type for
/// payloads that carry their own (multipart boundaries).
pub(crate) fn build_headers(
    config: &ClientConfig,
    extra: Option<&HeaderMap>,
    default_json: bool,
) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    if default_json {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }

    let bearer = format!("Bearer {}", config.api_key.expose_secret());
    let mut auth = HeaderValue::from_str(&bearer)
        .map_err(|_| Error::invalid_request("API key is not a valid header value"))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);

    for (name, value) in &config.default_headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| Error::invalid_request(format!("Invalid header name: {name}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| Error::invalid_request(format!("Invalid value for header {name}")))?;
        headers.insert(name, value);
    }

    if let Some(extra) = extra {
        for (name, value) in extra {
            headers.insert(name.clone(), value.clone());
        }
    }

    Ok(headers)
}

/// Converts a response `HeaderMap` into a plain string mapping for the
/// response envelope.
pub(crate) fn headers_to_map(headers: &HeaderMap) -> HashMap<String, String> {
    let mut map = HashMap::with_capacity(headers.len());
    for (key, value) in headers {
        map.insert(
            key.as_str().to_string(),
            value.to_str().unwrap_or("").to_string(),
        );
    }
    map
}
