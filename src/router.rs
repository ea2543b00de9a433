use crate::{
    config::Configuration, middleware::enforce_ip_allowlist, routes::hello, service::AppState,
};
use axum::{http::StatusCode, routing::get, Router};

pub fn http_ip_gateway_router(configuration: Configuration) -> Router {
    let state = AppState { configuration };

    Router::new()
        .route("/", get(hello))
        .layer(axum::middleware::from_fn_with_state(
            state,
            enforce_ip_allowlist,
        ))
        .method_not_allowed_fallback(|| async { (StatusCode::METHOD_NOT_ALLOWED, ()) })
}
