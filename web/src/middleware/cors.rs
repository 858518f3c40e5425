use axum::{
    extract::{Request, State},
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE, ORIGIN,
        },
        HeaderMap, HeaderValue, Method, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use log::*;

use crate::AppState;

const ALLOW_METHODS: &str = "POST, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type";
const MAX_AGE_SECS: &str = "86400";
const WILDCARD: &str = "*";

/// CORS middleware wrapped around the whole router.
///
/// Answers every `OPTIONS` request itself with a 204 preflight response and stamps the
/// CORS headers onto every other response, including 404s and errors.
pub async fn apply_cors(
    State(app_state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request
        .headers()
        .get(ORIGIN)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let mut response = if *request.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    let allowed_origins = app_state.config.allowed_origins();
    insert_cors_headers(response.headers_mut(), &origin, &allowed_origins);
    response
}

/// Picks the `Access-Control-Allow-Origin` value for a request.
///
/// The request origin is echoed when it is listed or the list holds `*`. Anything else,
/// including a request without an origin, falls back to the first configured origin.
/// Returns `None` only when no origins are configured.
pub fn allow_origin<'a>(origin: &'a str, allowed_origins: &[&'a str]) -> Option<&'a str> {
    let permitted = !origin.is_empty()
        && allowed_origins
            .iter()
            .any(|allowed| *allowed == origin || *allowed == WILDCARD);

    if permitted {
        Some(origin)
    } else {
        allowed_origins.first().copied()
    }
}

fn insert_cors_headers(headers: &mut HeaderMap, origin: &str, allowed_origins: &[&str]) {
    if let Some(allowed) = allow_origin(origin, allowed_origins) {
        match HeaderValue::from_str(allowed) {
            Ok(value) => {
                headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, value);
            }
            Err(e) => warn!("Skipping unusable CORS origin {allowed:?}: {e}"),
        }
    }
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.insert(ACCESS_CONTROL_MAX_AGE, HeaderValue::from_static(MAX_AGE_SECS));
}
