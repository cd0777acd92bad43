use crate::error::Result;
use reqwest::multipart::Form;
use serde::Serialize;
use std::fmt;

/// Request payload.
///
/// JSON bodies are serialized to text before transmission; raw and
/// multipart bodies pass through unserialized, and the transport never
/// forces the JSON content type onto them (see
/// [`execute`](super::HttpClient::execute)).
pub enum RequestBody {
    /// Structured payload, serialized to JSON text.
    Json(serde_json::Value),
    /// Pre-encoded payload passed through untouched. The caller supplies
    /// the matching `Content-Type` as a per-call header override.
    Raw(Vec<u8>),
    /// Multipart form. The content type (including the boundary) is derived
    /// from the form itself.
    Multipart(Form),
}

impl RequestBody {
    /// Creates a JSON body from any serializable value.
    pub fn json<T: Serialize>(value: &T) -> Result<Self> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    /// Creates a raw byte body.
    pub fn raw(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Raw(bytes.into())
    }

    /// Creates a multipart form body.
    pub fn multipart(form: Form) -> Self {
        Self::Multipart(form)
    }
}

impl From<serde_json::Value> for RequestBody {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

impl fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => f.debug_tuple("Json").field(value).finish(),
            Self::Raw(bytes) => write!(f, "Raw({} bytes)", bytes.len()),
            Self::Multipart(_) => f.write_str("Multipart"),
        }
    }
}
