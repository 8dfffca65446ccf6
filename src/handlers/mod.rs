pub mod booking;
pub mod tracking;

use std::{any::Any, sync::Arc};

use axum::{
    Router,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{
    config::Config,
    error::AppError,
    local_storage::StaticShipmentStore,
    services::{BookingService, DiscardingSubmitter, TrackingService},
};

/// Shared state for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub booking: BookingService,
    pub tracking: TrackingService,
}

impl AppState {
    pub fn new(booking: BookingService, tracking: TrackingService) -> Self {
        Self { booking, tracking }
    }

    /// State wired to the seeded shipment table and the discarding submitter
    pub fn from_config(config: &Config) -> Self {
        let booking = BookingService::new(Arc::new(DiscardingSubmitter), config.contact_phone.clone());
        let tracking = TrackingService::new(
            Arc::new(StaticShipmentStore::seeded()),
            config.expose_sample_numbers,
        );

        Self::new(booking, tracking)
    }
}

async fn health() -> &'static str {
    "Aldiron Logistics booking & tracking service is running."
}

/// Turn a handler panic into the usual JSON 500 body
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let reason = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(%reason, "Handler panicked");
    AppError::Internal(reason).into_response()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/bookings", post(booking::create_booking))
        .route("/api/tracking", post(tracking::submit_tracking))
        .route("/api/tracking/{number}", get(tracking::get_tracking))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
