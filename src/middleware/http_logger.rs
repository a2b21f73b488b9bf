use std::time::Instant;

use axum::{
    body::Body,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use http::{HeaderMap, HeaderValue, Method, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;

const SENSITIVE_FIELDS: [&str; 8] = [
    "password",
    "new_password",
    "token",
    "access_token",
    "authorization",
    "secret",
    "jwt_secret",
    "credentials",
];

const SENSITIVE_HEADERS: [header::HeaderName; 3] =
    [header::AUTHORIZATION, header::COOKIE, header::SET_COOKIE];

fn should_ignore_path(path: &str) -> bool {
    matches!(path, "/health" | "/health/")
        || path.starts_with("/swagger-ui")
        || path.starts_with("/api-docs")
}

fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|ct| ct.to_str().ok())
        .map(|ct| ct.starts_with("multipart/form-data"))
        .unwrap_or(false)
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|ct| ct.to_str().ok())
        .map(|ct| ct.starts_with("application/json"))
        .unwrap_or(false)
}

/// Replaces top-level credential fields with a marker.
fn filter_sensitive_data(mut value: Value) -> Value {
    if let Value::Object(ref mut map) = value {
        for field in SENSITIVE_FIELDS {
            if map.contains_key(field) {
                map.insert(field.to_string(), Value::String("[REDACTED]".to_string()));
            }
        }
    }
    value
}

fn filter_sensitive_headers(headers: &HeaderMap) -> HeaderMap {
    let mut filtered_headers = headers.clone();
    for name in SENSITIVE_HEADERS {
        if filtered_headers.contains_key(&name) {
            filtered_headers.insert(name, HeaderValue::from_static("[REDACTED]"));
        }
    }
    filtered_headers
}

fn json_or_empty(bytes: &[u8]) -> Value {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(json) => filter_sensitive_data(json),
        Err(_) => Value::Object(serde_json::Map::new()),
    }
}

pub async fn http_logger(
    req: Request,
    next: Next,
) -> std::result::Result<impl IntoResponse, (StatusCode, String)> {
    let start_time = Instant::now();

    let method = req.method().clone();
    let uri = req.uri().clone();
    let path = uri.path().to_string();
    let version = req.version();
    let req_headers = req.headers().clone();
    let x_request_id = req_headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if method == Method::OPTIONS || should_ignore_path(&path) {
        return Ok(next.run(req).await);
    }

    // Uploads are passed through unbuffered.
    let (req, req_body) = if is_multipart(&req_headers) {
        (req, Value::Object(serde_json::Map::new()))
    } else {
        let (parts, body) = req.into_parts();
        let bytes = buffer_body("request", body).await?;
        let req_body = json_or_empty(&bytes);
        (Request::from_parts(parts, Body::from(bytes)), req_body)
    };

    let mut response = next.run(req).await;

    let latency = start_time.elapsed();
    let status = response.status();
    let res_headers = response.headers().clone();

    let should_log_body =
        matches!(method, Method::POST | Method::PUT | Method::PATCH) && is_json(&res_headers);
    let res_body = if should_log_body {
        let (parts, body) = response.into_parts();
        let bytes = buffer_body("response", body).await?;
        let json_body = json_or_empty(&bytes);
        response = Response::from_parts(parts, Body::from(bytes));
        json_body
    } else {
        Value::Object(serde_json::Map::new())
    };

    let filtered_req_headers = filter_sensitive_headers(&req_headers);
    let filtered_res_headers = filter_sensitive_headers(&res_headers);

    tracing::info!(
        method = ?method,
        uri = ?uri,
        path = %path,
        x_request_id = %x_request_id,
        version = ?version,
        req_headers = ?filtered_req_headers,
        req_body = %req_body,
        status = ?status,
        latency_ms = latency.as_millis(),
        res_headers = ?filtered_res_headers,
        res_body = %res_body,
        "HTTP request completed"
    );

    Ok(response)
}

pub async fn buffer_body<B>(
    direction: &str,
    body: B,
) -> std::result::Result<Bytes, (StatusCode, String)>
where
    B: BodyExt,
    B::Error: std::fmt::Display,
{
    match body.collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(err) => Err((
            StatusCode::BAD_REQUEST,
            format!("failed to read {direction} body: {err}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn credentials_are_redacted() {
        let filtered = filter_sensitive_data(json!({
            "username": "a@dept.edu",
            "password": "hunter2",
            "access_token": "abc"
        }));
        assert_eq!(filtered["username"], "a@dept.edu");
        assert_eq!(filtered["password"], "[REDACTED]");
        assert_eq!(filtered["access_token"], "[REDACTED]");
    }

    #[test]
    fn authorization_header_is_redacted() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("*/*"));
        let filtered = filter_sensitive_headers(&headers);
        assert_eq!(filtered.get(header::AUTHORIZATION).unwrap(), "[REDACTED]");
        assert_eq!(filtered.get(header::ACCEPT).unwrap(), "*/*");
    }

    #[test]
    fn docs_and_health_are_not_logged() {
        assert!(should_ignore_path("/health"));
        assert!(should_ignore_path("/swagger-ui/index.html"));
        assert!(!should_ignore_path("/notice/all"));
    }
}
