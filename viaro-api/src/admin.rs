use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/admin/login", post(login))
        .route("/v1/admin/cities", post(add_city))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
struct LoginResponse {
    status: String,
}

/// Boolean credential check against the admin user table. No token or
/// session is issued.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let valid = state
        .admin
        .verify_credentials(&req.username, &req.password)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    if !valid {
        return Err(AppError::AuthenticationError(
            "invalid credentials".to_string(),
        ));
    }

    info!(username = %req.username, "admin login");
    Ok(Json(LoginResponse {
        status: "ok".to_string(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct AddCityRequest {
    pub city_name: String,
    pub stops: Vec<String>,
}

#[derive(Debug, Serialize)]
struct AddCityResponse {
    status: String,
}

async fn add_city(
    State(state): State<AppState>,
    Json(req): Json<AddCityRequest>,
) -> Result<(StatusCode, Json<AddCityResponse>), AppError> {
    if req.city_name.trim().is_empty() {
        return Err(AppError::ValidationError("city name is required".to_string()));
    }
    if req.stops.is_empty() {
        return Err(AppError::ValidationError(
            "at least one stop is required".to_string(),
        ));
    }

    // City row and stop rows land in one transaction on the store side.
    state
        .admin
        .insert_city_with_stops(&req.city_name, &req.stops)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    info!(city = %req.city_name, stops = req.stops.len(), "city added");
    Ok((
        StatusCode::CREATED,
        Json(AddCityResponse {
            status: "created".to_string(),
        }),
    ))
}
