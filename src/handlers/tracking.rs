use axum::{
    extract::{Json, Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{error::Result, handlers::AppState};

/// Tracking form submission
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingQuery {
    #[serde(default)]
    pub tracking_number: String,
}

/// Look up a shipment by the number in the path
pub async fn get_tracking(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<impl IntoResponse> {
    let view = state.tracking.track(&number).await?;
    Ok((StatusCode::OK, Json(view)))
}

/// Look up a shipment from a submitted tracking form
pub async fn submit_tracking(
    State(state): State<AppState>,
    payload: std::result::Result<Json<TrackingQuery>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(query) = payload?;
    let view = state.tracking.track(&query.tracking_number).await?;
    Ok((StatusCode::OK, Json(view)))
}
