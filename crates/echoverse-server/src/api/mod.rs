//! HTTP routes

mod catalog;
mod sessions;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::state::AppState;
use echoverse_core::ServerConfig;

pub fn create_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    let sessions = Router::new()
        .route("/", post(sessions::create))
        .route("/:id", get(sessions::get).delete(sessions::end))
        .route("/:id/text", put(sessions::set_text))
        .route(
            "/:id/upload",
            post(sessions::upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/:id/settings", put(sessions::update_settings))
        .route("/:id/rewrite", post(sessions::rewrite))
        .route("/:id/synthesize", post(sessions::synthesize))
        .route("/:id/download", get(sessions::download))
        .route("/:id/comparison", get(sessions::comparison));

    let mut router = Router::new()
        .route("/health", get(catalog::health))
        .route("/v1/tones", get(catalog::tones))
        .route("/v1/voices", get(catalog::voices))
        .nest("/v1/sessions", sessions)
        .layer(TraceLayer::new_for_http());

    if state.config.cors_enabled {
        router = router.layer(cors_layer(&state.config));
    }

    router.with_state(state)
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(origins)
}
