//! Report Service Client
//!
//! HTTP bindings to the report backend, organized by resource.

mod report;

use gloo_net::http::Response;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config;
use crate::error::ApiError;

// Re-export all public items
pub use report::*;

/// Characters escaped inside query values
const QUERY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`');

/// Absolute URL for `path` with percent-encoded query parameters
pub fn endpoint(path: &str, query: &[(&str, &str)]) -> String {
    let mut url = config::join_url(config::api_base_url(), path);
    for (i, (key, value)) in query.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        url.push_str(&utf8_percent_encode(value, QUERY_ENCODE_SET).to_string());
    }
    url
}

/// Validate a response envelope and deserialize its payload.
///
/// Every body is expected to be a JSON object with a boolean `success` flag
/// and an optional `message`.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    let ok_status = (200..300).contains(&status);
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if !ok_status => return Err(ApiError::Http { status, message: None }),
        Err(e) => return Err(ApiError::Decode(e.to_string())),
    };

    let message = value
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string);

    if !ok_status {
        return Err(ApiError::Http { status, message });
    }

    match value.get("success").and_then(Value::as_bool) {
        Some(true) => serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string())),
        Some(false) => Err(ApiError::Rejected { message }),
        None => Err(ApiError::Decode("missing `success` flag".to_string())),
    }
}

/// Read the body of `response` and decode it
async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode_response(status, &body)
}
