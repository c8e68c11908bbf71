use std::sync::Arc;

use axum::{Router, middleware};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    middleware::{catch_panic_layer, json_error_middleware},
    routes::router,
    state::AppState,
};

/// Routes plus the middleware stack shared by the binary and the tests.
pub fn build_app(state: Arc<AppState>) -> Router {
    let cors_allow_any = state.config.http.cors_allow_any;

    let app = Router::new()
        .merge(router(state))
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
        .layer(TraceLayer::new_for_http());

    if cors_allow_any {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}
