use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::shipment::TrackingNumber;

/// Booking form submission. Lives only for the duration of one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub origin: String,
    pub destination: String,
    pub weight: String,
    pub service: String,
    pub description: String,
}

impl BookingRequest {
    /// Copy of the request with every field trimmed
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            mobile: self.mobile.trim().to_string(),
            origin: self.origin.trim().to_string(),
            destination: self.destination.trim().to_string(),
            weight: self.weight.trim().to_string(),
            service: self.service.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }

    pub fn value(&self, field: BookingField) -> &str {
        match field {
            BookingField::Name => &self.name,
            BookingField::Email => &self.email,
            BookingField::Mobile => &self.mobile,
            BookingField::Origin => &self.origin,
            BookingField::Destination => &self.destination,
            BookingField::Weight => &self.weight,
            BookingField::Service => &self.service,
        }
    }
}

/// Required booking fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingField {
    Name,
    Email,
    Mobile,
    Origin,
    Destination,
    Weight,
    Service,
}

impl BookingField {
    pub const REQUIRED: [BookingField; 7] = [
        BookingField::Name,
        BookingField::Email,
        BookingField::Mobile,
        BookingField::Origin,
        BookingField::Destination,
        BookingField::Weight,
        BookingField::Service,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingField::Name => "name",
            BookingField::Email => "email",
            BookingField::Mobile => "mobile",
            BookingField::Origin => "origin",
            BookingField::Destination => "destination",
            BookingField::Weight => "weight",
            BookingField::Service => "service",
        }
    }
}

impl fmt::Display for BookingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepted booking, shown once and never stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub tracking_number: TrackingNumber,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub origin: String,
    pub destination: String,
    pub weight: String,
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl BookingConfirmation {
    pub fn new(request: BookingRequest, tracking_number: TrackingNumber) -> Self {
        let description = if request.description.is_empty() {
            None
        } else {
            Some(request.description)
        };

        Self {
            tracking_number,
            name: request.name,
            email: request.email,
            mobile: request.mobile,
            origin: request.origin,
            destination: request.destination,
            weight: request.weight,
            service: request.service,
            description,
            submitted_at: Utc::now(),
        }
    }
}
