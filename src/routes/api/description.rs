use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
    routing::get,
};

use crate::{services::ServiceContext, state::AppState};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/description", get(describe))
        .with_state(state)
}

/// Query pairs in request order, so repeated keys are kept.
type QueryPairs = Vec<(String, String)>;

/// First `category` value wins when the key is repeated.
fn first_category(pairs: QueryPairs) -> Option<String> {
    pairs
        .into_iter()
        .find(|(key, _)| key == "category")
        .map(|(_, value)| value)
}

async fn describe(
    State(state): State<Arc<AppState>>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Response {
    let category = match query {
        Ok(Query(pairs)) => first_category(pairs),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "ignoring unparsable description query");
            None
        }
    };

    let service = ServiceContext::from_state(state.as_ref()).description();
    Json(service.describe(category.as_deref())).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> QueryPairs {
        raw.iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn picks_first_category_pair() {
        assert_eq!(
            first_category(pairs(&[("lang", "fr"), ("category", "intro"), ("category", "x")])),
            Some("intro".to_string())
        );
        assert_eq!(first_category(pairs(&[("lang", "fr")])), None);
        assert_eq!(
            first_category(pairs(&[("category", "")])),
            Some(String::new())
        );
    }
}
