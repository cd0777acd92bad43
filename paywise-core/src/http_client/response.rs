use crate::error::{ApiErrorDetails, Error, NetworkError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, error, instrument};

use super::builder::HttpClient;
use super::headers::headers_to_map;

const BODY_PREVIEW_SIZE: usize = 200;

/// Uniform success envelope.
///
/// Returned for every response with a 2xx status; resource clients usually
/// unwrap `data` straight into a typed model via
/// [`json`](ApiResponse::json).
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Decoded response body: structured data for JSON responses, a string
    /// value for everything else.
    pub data: Value,
    /// HTTP status code.
    pub status: u16,
    /// HTTP status text.
    pub status_text: String,
    /// Response headers.
    pub headers: HashMap<String, String>,
}

impl ApiResponse {
    /// Deserializes the decoded body into a typed model.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(self) -> Result<T> {
        Ok(serde_json::from_value(self.data)?)
    }
}

impl HttpClient {
    /// Decodes a response and classifies it as success or failure.
    ///
    /// The body is decoded according to the response content type: JSON
    /// bodies become structured data (decode failures propagate as
    /// [`Error::Parse`]), everything else is kept as text. Non-2xx statuses
    /// reject with a normalized [`Error::Api`].
    #[instrument(name = "api_response", skip(self, response), fields(status))]
    pub(crate) async fn process_response(&self, response: Response) -> Result<ApiResponse> {
        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let header_map = response.headers().clone();

        tracing::Span::current().record("status", status.as_u16());

        let is_json = header_map
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains("application/json"));

        let body_text = response.text().await.map_err(|e| {
            error!(error = %e, "failed to read response body");
            Error::Network(Box::new(NetworkError::Body(Box::new(e))))
        })?;

        let body_length = body_text.len();
        let body_preview: String = body_text.chars().take(BODY_PREVIEW_SIZE).collect();

        let data: Value = if is_json {
            serde_json::from_str(&body_text)?
        } else {
            Value::String(body_text)
        };

        debug!(
            status = %status,
            body_length,
            body_preview = %body_preview,
            "response received"
        );

        if !status.is_success() {
            let err = normalize_error(status, &status_text, data);
            error!(
                status = status.as_u16(),
                error = %err,
                "API error response"
            );
            return Err(err);
        }

        Ok(ApiResponse {
            data,
            status: status.as_u16(),
            status_text,
            headers: headers_to_map(&header_map),
        })
    }
}

/// Shapes a non-2xx response into the normalized error form.
///
/// Message precedence: a text body verbatim, then a string `message` field
/// of a structured body, then the HTTP status text. The machine `code` is
/// taken from the body when it is a string; the full decoded body rides
/// along as details.
pub(crate) fn normalize_error(status: StatusCode, status_text: &str, body: Value) -> Error {
    let message = match &body {
        Value::String(text) => text.clone(),
        Value::Object(map) => map
            .get("message")
            .and_then(Value::as_str)
            .map_or_else(|| status_text.to_string(), str::to_string),
        _ => status_text.to_string(),
    };

    let code = body
        .as_object()
        .and_then(|map| map.get("code"))
        .and_then(Value::as_str)
        .map(str::to_string);

    let mut details = ApiErrorDetails::new(status.as_u16(), message).with_details(body);
    if let Some(code) = code {
        details = details.with_code(code);
    }

    Error::api(details)
}
