use axum::Json;

use crate::message::{CalcRequest, CalcResponse};
use crate::services::emissions;

/// Footprint estimate from monthly electricity, fuel and travel figures.
/// Pure arithmetic, so the handler always answers 200.
pub async fn calc_handler(Json(payload): Json<CalcRequest>) -> Json<CalcResponse> {
    let total = emissions::estimate_kg(payload.electricity, payload.fuel, payload.travel);
    Json(CalcResponse {
        total_emission: emissions::format_kg(total),
    })
}
