use serde::{Deserialize, Serialize};

use super::shipment::{ShipmentRecord, TrackingEvent, TrackingNumber};

/// Tracking result as handed to the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingView {
    pub tracking_number: TrackingNumber,
    pub status: String,
    pub status_label: String,
    pub sender: String,
    pub recipient: String,
    pub origin: String,
    pub destination: String,
    pub weight: String,
    pub service: String,
    pub estimated_delivery: String,
    pub timeline: Vec<TimelineEntry>,
}

impl From<&ShipmentRecord> for TrackingView {
    fn from(record: &ShipmentRecord) -> Self {
        Self {
            tracking_number: record.tracking_number.clone(),
            status: record.status.code().to_string(),
            status_label: record.status.label().to_string(),
            sender: record.sender.clone(),
            recipient: record.recipient.clone(),
            origin: record.origin.clone(),
            destination: record.destination.clone(),
            weight: record.weight.clone(),
            service: record.service.clone(),
            estimated_delivery: record.estimated_delivery.clone(),
            // stored order, never re-sorted
            timeline: record.history.iter().map(TimelineEntry::from).collect(),
        }
    }
}

impl TrackingView {
    pub fn current_entry(&self) -> Option<&TimelineEntry> {
        self.timeline
            .iter()
            .find(|entry| entry.marker == TimelineMarker::Current)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineMarker {
    /// Most recent milestone, rendered highlighted
    Current,
    Past,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub date: String,
    pub status: String,
    pub location: String,
    pub marker: TimelineMarker,
}

impl From<&TrackingEvent> for TimelineEntry {
    fn from(event: &TrackingEvent) -> Self {
        Self {
            date: event.date.clone(),
            status: event.status.clone(),
            location: event.location.clone(),
            marker: if event.active {
                TimelineMarker::Current
            } else {
                TimelineMarker::Past
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// User-facing message; presentation is up to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}
