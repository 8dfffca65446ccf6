use std::fmt;

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Prefix shared by every tracking number issued by the website
pub const TRACKING_PREFIX: &str = "ALR";

const TRACKING_DIGITS_SPACE: u32 = 1_000_000_000;

static TRACKING_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ALR[0-9]{9}$").expect("tracking number pattern is valid"));

/// Shipment identifier, `ALR` followed by nine digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingNumber(String);

impl TrackingNumber {
    /// Normalize user input: trims surrounding whitespace and uppercases.
    ///
    /// Returns `None` when nothing is left after trimming.
    pub fn normalize(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_uppercase()))
    }

    /// Draw a fresh tracking number.
    ///
    /// Neither unpredictable nor unique: two bookings can receive the same
    /// number. The format is kept because the lookup keys share it.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let digits = rng.random_range(0..TRACKING_DIGITS_SPACE);
        Self(format!("{}{:09}", TRACKING_PREFIX, digits))
    }

    /// Wrap a number known to be normalized already (seed data, tests)
    pub(crate) fn from_trusted(number: &str) -> Self {
        Self(number.to_string())
    }

    pub fn is_well_formed(&self) -> bool {
        TRACKING_NUMBER_RE.is_match(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shipment status code
///
/// Stored codes outside the known set are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShipmentStatus {
    Pending,
    InTransit,
    OutForDelivery,
    Delivered,
    Failed,
    Other(String),
}

impl ShipmentStatus {
    pub fn from_code(code: &str) -> Self {
        match code {
            "pending" => Self::Pending,
            "in-transit" => Self::InTransit,
            "out-for-delivery" => Self::OutForDelivery,
            "delivered" => Self::Delivered,
            "failed" => Self::Failed,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::InTransit => "in-transit",
            Self::OutForDelivery => "out-for-delivery",
            Self::Delivered => "delivered",
            Self::Failed => "failed",
            Self::Other(code) => code,
        }
    }

    /// Display label; unknown codes render as themselves
    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::InTransit => "In Transit",
            Self::OutForDelivery => "Out for Delivery",
            Self::Delivered => "Delivered",
            Self::Failed => "Failed",
            Self::Other(code) => code,
        }
    }
}

impl From<String> for ShipmentStatus {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<ShipmentStatus> for String {
    fn from(status: ShipmentStatus) -> Self {
        status.code().to_string()
    }
}

/// Label for a raw status code, passing unknown codes through.
pub fn status_label(code: &str) -> String {
    ShipmentStatus::from_code(code).label().to_string()
}

/// One milestone in a shipment's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingEvent {
    pub date: String,
    pub status: String,
    pub location: String,
    pub active: bool,
}

impl TrackingEvent {
    pub fn new(date: &str, status: &str, location: &str, active: bool) -> Self {
        Self {
            date: date.to_string(),
            status: status.to_string(),
            location: location.to_string(),
            active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRecord {
    pub tracking_number: TrackingNumber,
    pub status: ShipmentStatus,
    pub sender: String,
    pub recipient: String,
    pub origin: String,
    pub destination: String,
    pub weight: String,
    pub service: String,
    pub estimated_delivery: String,
    /// Newest first
    pub history: Vec<TrackingEvent>,
}

impl ShipmentRecord {
    /// Exactly one event is active and it is the newest one.
    pub fn has_consistent_history(&self) -> bool {
        let active_count = self.history.iter().filter(|event| event.active).count();
        active_count == 1 && self.history.first().is_some_and(|event| event.active)
    }
}
