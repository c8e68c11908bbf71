use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

use super::description;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().merge(description::router(state))
}
