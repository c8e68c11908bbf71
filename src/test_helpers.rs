use axum::Router;
use serde_json::Value;

use crate::{app::build_app, config::AppConfig, description::DescriptionDocument, state::AppState};

/// Full application around an in-memory document, with default config.
pub fn test_router(document: Value) -> Router {
    test_router_with_config(AppConfig::default(), document)
}

pub fn test_router_with_config(config: AppConfig, document: Value) -> Router {
    let state = AppState::new(config, DescriptionDocument::from_value(document));
    build_app(state)
}
