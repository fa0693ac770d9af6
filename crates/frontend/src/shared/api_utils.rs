//! API utilities for frontend-backend communication.
//!
//! Builds request URLs from the current window location and attaches the
//! session token (`authToken` cookie) as a Bearer header on every request.

use gloo_net::http::{Request, RequestBuilder, Response};

use crate::system::auth::storage::auth_token;

/// Base URL for API requests, derived from the current window location.
/// Returns an empty string when no window is available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location.host().unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}", protocol, host)
}

/// Full API URL from a path starting with `/api/v1/`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match auth_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

pub fn get(path: &str) -> RequestBuilder {
    with_auth(Request::get(&api_url(path)))
}

pub fn post(path: &str) -> RequestBuilder {
    with_auth(Request::post(&api_url(path)))
}

pub fn put(path: &str) -> RequestBuilder {
    with_auth(Request::put(&api_url(path)))
}

pub fn delete(path: &str) -> RequestBuilder {
    with_auth(Request::delete(&api_url(path)))
}

/// User-facing message for a failed response: the backend's `message` field
/// when present, otherwise a generic status line.
pub async fn error_message(response: &Response) -> String {
    if let Ok(body) = response.json::<serde_json::Value>().await {
        if let Some(msg) = body.get("message").and_then(|m| m.as_str()) {
            return msg.to_string();
        }
    }
    format!("Error del servidor: {}", response.status())
}
