use axum::{
    extract::{Json, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::Result,
    handlers::AppState,
    models::booking::BookingRequest,
};

/// Handler for booking form submissions
///
/// Malformed bodies are answered with the `bad_request` error body.
pub async fn create_booking(
    State(state): State<AppState>,
    payload: std::result::Result<Json<BookingRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(request) = payload?;
    let confirmation = state.booking.book(&request).await?;

    Ok((StatusCode::CREATED, Json(confirmation)))
}
