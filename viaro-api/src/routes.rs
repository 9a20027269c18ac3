use axum::{extract::State, routing::get, Json, Router};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/routes", get(list_routes))
}

/// City -> stops, as maintained by the admin side. An empty map is a
/// valid answer (no routes configured yet).
async fn list_routes(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, BTreeSet<String>>>, AppError> {
    let routes = state
        .admin
        .routes()
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;
    Ok(Json(routes))
}
