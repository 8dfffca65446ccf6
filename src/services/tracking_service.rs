use std::sync::Arc;

use async_trait::async_trait;

use crate::models::{Notification, ShipmentRecord, TrackingNumber, TrackingView};

/// Source of shipment records.
///
/// Backed by the in-memory seed table today; a remote query can take its
/// place without changing what the tracking view receives.
#[async_trait]
pub trait ShipmentLookup: Send + Sync {
	/// Exact-match lookup of an already normalized tracking number
	async fn find(&self, number: &TrackingNumber) -> Result<Option<ShipmentRecord>, LookupError>;

	/// Known numbers a visitor can try
	async fn sample_numbers(&self) -> Vec<TrackingNumber>;
}

#[derive(Clone)]
pub struct TrackingService {
	lookup: Arc<dyn ShipmentLookup>,
	expose_sample_numbers: bool,
}

impl TrackingService {
	pub fn new(lookup: Arc<dyn ShipmentLookup>, expose_sample_numbers: bool) -> Self {
		Self {
			lookup,
			expose_sample_numbers,
		}
	}

	pub async fn track(&self, raw: &str) -> Result<TrackingView, TrackingError> {
		let number = TrackingNumber::normalize(raw).ok_or(TrackingError::EmptyInput)?;

		tracing::debug!("Tracking lookup for {}", number);

		match self.lookup.find(&number).await? {
			Some(record) => Ok(TrackingView::from(&record)),
			None => {
				tracing::warn!("No shipment found for {}", number);
				let samples = if self.expose_sample_numbers {
					self.lookup.sample_numbers().await
				} else {
					Vec::new()
				};
				Err(TrackingError::NotFound { number, samples })
			}
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
	#[error("Shipment lookup unavailable: {0}")]
	Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TrackingError {
	#[error("Tracking number is empty")]
	EmptyInput,
	#[error("Tracking number not found: {number}")]
	NotFound {
		number: TrackingNumber,
		samples: Vec<TrackingNumber>,
	},
	#[error(transparent)]
	Lookup(#[from] LookupError),
}

impl TrackingError {
	pub fn notification(&self) -> Notification {
		match self {
			TrackingError::EmptyInput => Notification::error(
				"Nomor resi kosong",
				"Mohon masukkan nomor resi pengiriman Anda.",
			),
			TrackingError::NotFound { samples, .. } if !samples.is_empty() => {
				let list = samples
					.iter()
					.map(|number| format!("• {}", number))
					.collect::<Vec<_>>()
					.join("\n");
				Notification::error(
					"Nomor resi tidak ditemukan",
					format!(
						"Nomor resi yang Anda masukkan tidak terdaftar.\n\nContoh nomor resi untuk demo:\n{}",
						list
					),
				)
			}
			TrackingError::NotFound { .. } => Notification::error(
				"Nomor resi tidak ditemukan",
				"Tidak ada pengiriman dengan nomor resi tersebut.",
			),
			TrackingError::Lookup(_) => Notification::error(
				"Layanan pelacakan tidak tersedia",
				"Silakan coba beberapa saat lagi.",
			),
		}
	}
}
