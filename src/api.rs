//! Remote Collection Source
//!
//! REST bindings over the browser fetch API. Admin-scoped calls carry a
//! bearer token; public calls carry none. Errors are surfaced to the
//! caller, which keeps the last-good collection rendered.

use std::cell::Cell;
use std::rc::Rc;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::{ContactStats, ItemEnvelope, ListEnvelope, StatusEnvelope};

pub const API_BASE: &str = "/api";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("request rejected: {0}")]
    Rejected(String),
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

/// Upper bound on a list fetch. Collections are fetched whole and
/// filtered client-side; a response that fills the bound is logged so a
/// truncated collection does not go unnoticed.
pub const LIST_LIMIT: u32 = 500;

fn collection_truncated(count: usize) -> bool {
    count >= LIST_LIMIT as usize
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

/// Monotonic guard against overlapping fetches: a response whose ticket
/// is no longer current lost the race and must be discarded.
#[derive(Debug, Clone, Default)]
pub struct RequestSeq(Rc<Cell<u64>>);

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch a new request, invalidating all earlier tickets.
    pub fn begin(&self) -> u64 {
        let ticket = self.0.get() + 1;
        self.0.set(ticket);
        ticket
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }
}

fn js_text(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

async fn send(
    method: &str,
    path: &str,
    body: Option<String>,
    token: Option<&str>,
) -> Result<JsValue, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    let has_body = body.is_some();
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(path, &opts)
        .map_err(|e| ApiError::Network(js_text(&e)))?;
    let headers = request.headers();
    headers
        .set("Accept", "application/json")
        .map_err(|e| ApiError::Network(js_text(&e)))?;
    if has_body {
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| ApiError::Network(js_text(&e)))?;
    }
    if let Some(token) = token {
        headers
            .set("Authorization", &format!("Bearer {token}"))
            .map_err(|e| ApiError::Network(js_text(&e)))?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(js_text(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ApiError::Decode("fetch resolved to a non-Response".into()))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    let json = response.json().map_err(|e| ApiError::Network(js_text(&e)))?;
    JsFuture::from(json)
        .await
        .map_err(|e| ApiError::Decode(js_text(&e)))
}

fn decode<T: DeserializeOwned>(value: JsValue) -> Result<T, ApiError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn rejection(message: Option<String>) -> ApiError {
    ApiError::Rejected(message.unwrap_or_else(|| "unspecified server error".into()))
}

fn serialize<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET /{resource}?limit=...`: the whole collection, filtered client-side.
pub async fn fetch_all<T: DeserializeOwned>(
    resource: &str,
    token: Option<&str>,
) -> Result<Vec<T>, ApiError> {
    let path = format!("{API_BASE}/{resource}?limit={LIST_LIMIT}");
    let envelope: ListEnvelope<T> = decode(send("GET", &path, None, token).await?)?;
    if !envelope.success {
        return Err(rejection(envelope.message));
    }
    if collection_truncated(envelope.data.len()) {
        web_sys::console::warn_1(
            &format!("[api] {resource}: response filled limit={LIST_LIMIT}, collection may be truncated").into(),
        );
    }
    Ok(envelope.data)
}

/// `POST /{resource}`
pub async fn create<T, B>(resource: &str, body: &B, token: Option<&str>) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let path = format!("{API_BASE}/{resource}");
    let envelope: ItemEnvelope<T> =
        decode(send("POST", &path, Some(serialize(body)?), token).await?)?;
    if !envelope.success {
        return Err(rejection(envelope.message));
    }
    envelope
        .data
        .ok_or_else(|| ApiError::Decode("create response carried no record".into()))
}

/// `PUT /{resource}/{id}`: status transitions and field edits.
pub async fn update<T, B>(
    resource: &str,
    id: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let path = format!("{API_BASE}/{resource}/{}", encode(id));
    let envelope: ItemEnvelope<T> =
        decode(send("PUT", &path, Some(serialize(body)?), token).await?)?;
    if !envelope.success {
        return Err(rejection(envelope.message));
    }
    envelope
        .data
        .ok_or_else(|| ApiError::Decode("update response carried no record".into()))
}

/// `DELETE /{resource}/{id}`
pub async fn delete(resource: &str, id: &str, token: Option<&str>) -> Result<(), ApiError> {
    let path = format!("{API_BASE}/{resource}/{}", encode(id));
    let envelope: StatusEnvelope = decode(send("DELETE", &path, None, token).await?)?;
    if !envelope.success {
        return Err(rejection(envelope.message));
    }
    Ok(())
}

/// `GET /contact/stats`: parallel summary query. Callers fall back to
/// client-side aggregates when it fails.
pub async fn fetch_contact_stats(token: Option<&str>) -> Result<ContactStats, ApiError> {
    let path = format!("{API_BASE}/contact/stats");
    let envelope: ItemEnvelope<ContactStats> = decode(send("GET", &path, None, token).await?)?;
    if !envelope.success {
        return Err(rejection(envelope.message));
    }
    envelope
        .data
        .ok_or_else(|| ApiError::Decode("stats response carried no data".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segments_are_percent_encoded() {
        assert_eq!(encode("msg-41"), "msg%2D41");
        assert_eq!(encode("dr. khan/2"), "dr%2E%20khan%2F2");
        assert_eq!(encode("plain123"), "plain123");
    }

    #[test]
    fn truncation_fires_only_at_the_limit() {
        assert!(!collection_truncated(0));
        assert!(!collection_truncated(LIST_LIMIT as usize - 1));
        assert!(collection_truncated(LIST_LIMIT as usize));
    }

    #[test]
    fn stale_tickets_are_not_current() {
        let seq = RequestSeq::new();
        let first = seq.begin();
        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
        assert!(second > first);
    }
}
