//! Controller for OAuth authorization code exchanges.
//!
//! One handler serves every provider; the provider is taken from the path and everything
//! provider-specific is resolved by `domain::token_exchange`.

use crate::error::{Result, WebErrorKind};
use crate::params::token_exchange::TokenExchangeParams;
use crate::response::{self, ErrorEnvelope};
use crate::{AppState, Error};

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use log::*;

use domain::{token_exchange, ProviderKind};

/// POST exchange an authorization code for tokens
///
/// Injects the server-side client credentials for `provider` and relays the provider's
/// token response. Upstream rejections keep the provider's status code.
#[utoipa::path(
    post,
    path = "/auth/{provider}/token",
    params(
        ("provider" = String, Path, description = "One of video, chat, music, social, streaming"),
    ),
    request_body = TokenExchangeParams,
    responses(
        (status = 200, description = "Token response from the provider, passed through"),
        (status = 400, description = "Missing required fields", body = ErrorEnvelope),
        (status = 404, description = "Unknown provider", body = ErrorEnvelope),
        (status = 500, description = "Unexpected failure", body = ErrorEnvelope),
    )
)]
pub async fn exchange(
    State(app_state): State<AppState>,
    Path(provider): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let kind: ProviderKind = provider
        .parse()
        .map_err(|_| Error::Web(WebErrorKind::NotFound))?;

    let params: TokenExchangeParams = serde_json::from_slice(&body).map_err(|e| {
        warn!("Failed to parse {kind} token exchange body: {e}");
        Error::Web(WebErrorKind::MalformedBody)
    })?;

    let tokens = token_exchange::exchange_code(&app_state.config, kind, &params.into()).await?;

    Ok(response::json(StatusCode::OK, &tokens))
}
