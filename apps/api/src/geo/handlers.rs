use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::geo::{haversine_km, within_radius, Coordinate};
use crate::search::handlers::validate_radius;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DistanceRequest {
    pub from: Coordinate,
    pub to: Coordinate,
    #[serde(default)]
    pub radius_km: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResponse {
    pub distance_km: f64,
    pub radius_km: f64,
    pub within_radius: bool,
}

/// POST /api/v1/geo/distance
pub async fn handle_distance(
    State(state): State<AppState>,
    Json(req): Json<DistanceRequest>,
) -> Result<Json<DistanceResponse>, AppError> {
    validate_coordinate("from", &req.from)?;
    validate_coordinate("to", &req.to)?;
    let radius_km = req.radius_km.unwrap_or(state.board.default_radius_km());
    validate_radius(radius_km)?;

    let distance_km = haversine_km(req.from, req.to);
    Ok(Json(DistanceResponse {
        distance_km,
        radius_km,
        within_radius: within_radius(req.from, req.to, radius_km),
    }))
}

pub fn validate_coordinate(label: &str, coord: &Coordinate) -> Result<(), AppError> {
    if coord.is_valid() {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "{label} must have latitude in [-90, 90] and longitude in [-180, 180]"
        )))
    }
}
