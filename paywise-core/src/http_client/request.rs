use crate::error::{Error, Result};
use reqwest::header::HeaderMap;
use reqwest::{Method, Url};
use tracing::{error, instrument, warn};

use super::body::RequestBody;
use super::builder::HttpClient;
use super::headers::build_headers;
use super::query::QueryParams;
use super::response::ApiResponse;

/// Per-call request options.
///
/// Ephemeral; one descriptor per call. Produces exactly one response
/// envelope or exactly one error, never both.
#[derive(Debug, Default)]
pub struct RequestOptions {
    /// Optional request payload.
    pub body: Option<RequestBody>,
    /// Optional query parameters, appended in insertion order.
    pub query: Option<QueryParams>,
    /// Per-call header overrides; they win over the configured defaults and
    /// the built-in headers key-for-key.
    pub headers: Option<HeaderMap>,
}

impl HttpClient {
    /// Executes one HTTP request and normalizes its outcome.
    ///
    /// The network call runs inside `tokio::time::timeout` armed with the
    /// configured per-call timeout. If the timer fires first the in-flight
    /// request is dropped (aborting it) and the call rejects with
    /// [`Error::Timeout`]; otherwise the timer is disarmed when the call
    /// resolves. One call is one attempt; nothing is retried here.
    ///
    /// # Errors
    ///
    /// - [`Error::Api`] for responses with a status outside 2xx
    /// - [`Error::Timeout`] if the configured timeout elapses first
    /// - [`Error::Network`] if no response was received
    /// - [`Error::Parse`] if a JSON response body fails to decode
    /// - [`Error::InvalidRequest`] if the URL or headers cannot be built
    #[instrument(
        name = "api_request",
        skip(self, options),
        fields(method = %method, path = %path, timeout_ms = %self.config().timeout.as_millis())
    )]
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse> {
        let RequestOptions {
            body,
            query,
            headers,
        } = options;

        let url = self.build_url(path, query.as_ref())?;
        // Multipart payloads carry their own content type (with boundary);
        // everything else defaults to JSON unless overridden per call.
        let default_json = !matches!(body, Some(RequestBody::Multipart(_)));
        let headers = build_headers(self.config(), headers.as_ref(), default_json)?;

        let timeout = self.config().timeout;
        match tokio::time::timeout(timeout, self.dispatch(method, url, headers, body)).await {
            Ok(result) => result,
            Err(_elapsed) => {
                warn!(
                    timeout_ms = %timeout.as_millis(),
                    "request timed out"
                );
                Err(Error::Timeout)
            }
        }
    }

    async fn dispatch(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<RequestBody>,
    ) -> Result<ApiResponse> {
        let mut request = self.client().request(method, url).headers(headers);

        match body {
            Some(RequestBody::Json(value)) => {
                let text = serde_json::to_string(&value).map_err(|e| {
                    Error::invalid_request(format!("JSON serialization failed: {e}"))
                })?;
                request = request.body(text);
            }
            Some(RequestBody::Raw(bytes)) => {
                request = request.body(bytes);
            }
            Some(RequestBody::Multipart(form)) => {
                request = request.multipart(form);
            }
            None => {}
        }

        let response = request.send().await.map_err(|e| {
            error!(error = %e, "request send failed");
            Error::from(e)
        })?;

        self.process_response(response).await
    }

    /// Resolves `path` against the base address and appends the query
    /// parameters that carry a value, preserving insertion order.
    pub(crate) fn build_url(&self, path: &str, query: Option<&QueryParams>) -> Result<Url> {
        let mut url = self
            .base_url()
            .join(path)
            .map_err(|e| Error::invalid_request(format!("Invalid request path {path:?}: {e}")))?;

        if let Some(params) = query {
            if params.entries().iter().any(|(_, value)| value.is_some()) {
                let mut pairs = url.query_pairs_mut();
                for (key, value) in params.entries() {
                    if let Some(value) = value {
                        pairs.append_pair(key, value);
                    }
                }
            }
        }

        Ok(url)
    }

    /// Executes a GET request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; see
    /// [`execute`](HttpClient::execute).
    #[instrument(name = "api_get", skip(self, query, headers), fields(path = %path))]
    pub async fn get(
        &self,
        path: &str,
        query: Option<QueryParams>,
        headers: Option<HeaderMap>,
    ) -> Result<ApiResponse> {
        self.execute(
            Method::GET,
            path,
            RequestOptions {
                query,
                headers,
                ..Default::default()
            },
        )
        .await
    }

    /// Executes a POST request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; see
    /// [`execute`](HttpClient::execute).
    #[instrument(name = "api_post", skip(self, body, headers), fields(path = %path))]
    pub async fn post(
        &self,
        path: &str,
        body: Option<RequestBody>,
        headers: Option<HeaderMap>,
    ) -> Result<ApiResponse> {
        self.execute(
            Method::POST,
            path,
            RequestOptions {
                body,
                headers,
                ..Default::default()
            },
        )
        .await
    }

    /// Executes a PUT request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; see
    /// [`execute`](HttpClient::execute).
    #[instrument(name = "api_put", skip(self, body, headers), fields(path = %path))]
    pub async fn put(
        &self,
        path: &str,
        body: Option<RequestBody>,
        headers: Option<HeaderMap>,
    ) -> Result<ApiResponse> {
        self.execute(
            Method::PUT,
            path,
            RequestOptions {
                body,
                headers,
                ..Default::default()
            },
        )
        .await
    }

    /// Executes a PATCH request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; see
    /// [`execute`](HttpClient::execute).
    #[instrument(name = "api_patch", skip(self, body, headers), fields(path = %path))]
    pub async fn patch(
        &self,
        path: &str,
        body: Option<RequestBody>,
        headers: Option<HeaderMap>,
    ) -> Result<ApiResponse> {
        self.execute(
            Method::PATCH,
            path,
            RequestOptions {
                body,
                headers,
                ..Default::default()
            },
        )
        .await
    }

    /// Executes a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; see
    /// [`execute`](HttpClient::execute).
    #[instrument(name = "api_delete", skip(self, query, headers), fields(path = %path))]
    pub async fn delete(
        &self,
        path: &str,
        query: Option<QueryParams>,
        headers: Option<HeaderMap>,
    ) -> Result<ApiResponse> {
        self.execute(
            Method::DELETE,
            path,
            RequestOptions {
                query,
                headers,
                ..Default::default()
            },
        )
        .await
    }
}
