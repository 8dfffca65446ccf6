pub mod booking_service;
pub mod tracking_service;

pub use booking_service::{BookingError, BookingService, BookingSubmitter, DiscardingSubmitter, SubmitError};
pub use tracking_service::{LookupError, ShipmentLookup, TrackingError, TrackingService};
