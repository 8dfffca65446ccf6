use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::services::{BookingError, TrackingError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Booking rejected: {0}")]
    Booking(#[from] BookingError),

    #[error("Tracking failed: {0}")]
    Tracking(#[from] TrackingError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    /// Machine-readable error kind
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Booking(BookingError::MissingField(_)) => "missing_field",
            AppError::Booking(BookingError::InvalidEmail) => "invalid_email",
            AppError::Booking(BookingError::InvalidPhone) => "invalid_phone",
            AppError::Booking(BookingError::Submit(_)) => "booking_unavailable",
            AppError::Tracking(TrackingError::EmptyInput) => "empty_tracking_input",
            AppError::Tracking(TrackingError::NotFound { .. }) => "tracking_not_found",
            AppError::Tracking(TrackingError::Lookup(_)) => "tracking_unavailable",
            AppError::BadRequest(_) => "bad_request",
            AppError::Internal(_) => "internal",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Booking(BookingError::Submit(_))
            | AppError::Tracking(TrackingError::Lookup(_)) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Booking(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Tracking(TrackingError::EmptyInput) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Tracking(TrackingError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> Vec<String> {
        match self {
            AppError::Booking(BookingError::MissingField(fields)) => {
                fields.iter().map(|field| field.to_string()).collect()
            }
            AppError::Tracking(TrackingError::NotFound { samples, .. }) => {
                samples.iter().map(|number| number.to_string()).collect()
            }
            _ => Vec::new(),
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::Booking(err) => err.notification().body,
            AppError::Tracking(err) => err.notification().body,
            AppError::BadRequest(reason) => reason.clone(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

// Convert AppError to an HTTP response
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(?self);
        } else {
            tracing::debug!(?self);
        }

        let body = Json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.message(),
            details: self.details(),
        });

        (status, body).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

pub type Result<T> = std::result::Result<T, AppError>;
