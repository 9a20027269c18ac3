use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/seatmap", get(seatmap))
}

#[derive(Debug, Serialize)]
struct SeatMapResponse {
    /// One token per slot: seat id when free, `*` when sold, blank for
    /// the aisle gap.
    rows: Vec<Vec<String>>,
    sold_count: usize,
}

async fn seatmap(State(state): State<AppState>) -> Json<SeatMapResponse> {
    let inventory = state.inventory.lock().await;
    Json(SeatMapResponse {
        rows: inventory.render().collect(),
        sold_count: inventory.sold_count(),
    })
}
