pub mod booking;
pub mod shipment;
pub mod view;

pub use booking::{BookingConfirmation, BookingField, BookingRequest};
pub use shipment::{ShipmentRecord, ShipmentStatus, TrackingEvent, TrackingNumber, status_label};
pub use view::{Notification, NotificationLevel, TimelineEntry, TimelineMarker, TrackingView};
