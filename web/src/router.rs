use crate::{
    controller::{health_check_controller, token_controller},
    error::WebErrorKind,
    middleware::cors::apply_cors,
    params::token_exchange::TokenExchangeParams,
    response::{ErrorEnvelope, HealthStatus},
    AppState, Error,
};
use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Token Relay API"
        ),
        paths(
            health_check_controller::health_check,
            token_controller::exchange,
        ),
        components(
            schemas(
                TokenExchangeParams,
                ErrorEnvelope,
                HealthStatus,
            )
        ),
        tags(
            (name = "token_relay", description = "OAuth authorization code exchange on behalf of client applications")
        )
    )]
pub struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    let mut router = Router::new()
        .merge(health_routes())
        .merge(token_exchange_routes(app_state.clone()));

    if app_state.config.api_docs {
        router = router
            .merge(RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/rapidoc"));
    }

    router
        .fallback(not_found)
        .layer(from_fn_with_state(app_state, apply_cors))
}

fn health_routes() -> Router {
    Router::new().route(
        "/health",
        get(health_check_controller::health_check)
            .head(not_found)
            .fallback(not_found),
    )
}

/// Routes for the per-provider authorization code exchange
fn token_exchange_routes(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/auth/{provider}/token",
            post(token_controller::exchange).fallback(not_found),
        )
        .with_state(app_state)
}

// Unknown paths and unsupported methods on known paths both answer 404. `get` also serves
// HEAD unless a `head` handler is registered.
async fn not_found() -> Error {
    Error::Web(WebErrorKind::NotFound)
}
