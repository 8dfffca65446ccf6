use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{BookingConfirmation, BookingField, BookingRequest, Notification, TrackingNumber};

static EMAIL_RE: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

// Indonesian numbers: +62, 62 or a leading 0, then 9 to 13 digits
static PHONE_RE: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^(\+62|62|0)[0-9]{9,13}$").expect("phone pattern is valid"));

pub fn is_valid_email(email: &str) -> bool {
	EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(mobile: &str) -> bool {
	let cleaned: String = mobile
		.chars()
		.filter(|c| !c.is_whitespace() && *c != '-')
		.collect();
	PHONE_RE.is_match(&cleaned)
}

/// Trim every field and check the request. First failing rule wins.
pub fn validate_booking(request: &BookingRequest) -> Result<BookingRequest, BookingError> {
	let request = request.trimmed();

	let missing: Vec<BookingField> = BookingField::REQUIRED
		.into_iter()
		.filter(|field| request.value(*field).is_empty())
		.collect();
	if !missing.is_empty() {
		return Err(BookingError::MissingField(missing));
	}

	if !is_valid_email(&request.email) {
		return Err(BookingError::InvalidEmail);
	}

	if !is_valid_phone(&request.mobile) {
		return Err(BookingError::InvalidPhone);
	}

	Ok(request)
}

/// Receives validated bookings and assigns their tracking number
#[async_trait]
pub trait BookingSubmitter: Send + Sync {
	async fn submit(&self, booking: &BookingRequest) -> Result<TrackingNumber, SubmitError>;
}

/// Assigns a random tracking number and keeps nothing.
///
/// The number is never added to the shipment store, so it cannot be tracked.
pub struct DiscardingSubmitter;

#[async_trait]
impl BookingSubmitter for DiscardingSubmitter {
	async fn submit(&self, booking: &BookingRequest) -> Result<TrackingNumber, SubmitError> {
		let number = TrackingNumber::generate(&mut rand::rng());
		tracing::info!(
			"Booking accepted for {} ({} -> {}), tracking number {}",
			booking.name,
			booking.origin,
			booking.destination,
			number
		);
		Ok(number)
	}
}

#[derive(Clone)]
pub struct BookingService {
	submitter: Arc<dyn BookingSubmitter>,
	contact_phone: String,
}

impl BookingService {
	pub fn new(submitter: Arc<dyn BookingSubmitter>, contact_phone: impl Into<String>) -> Self {
		Self {
			submitter,
			contact_phone: contact_phone.into(),
		}
	}

	pub async fn book(&self, request: &BookingRequest) -> Result<BookingConfirmation, BookingError> {
		let booking = validate_booking(request)?;
		let tracking_number = self.submitter.submit(&booking).await?;
		Ok(BookingConfirmation::new(booking, tracking_number))
	}

	pub fn confirmation_notification(&self, confirmation: &BookingConfirmation) -> Notification {
		let mut body = format!(
			"Permintaan booking Anda telah diterima.\n\n\
			 Detail:\n\
			 Nama: {}\n\
			 Email: {}\n\
			 Mobile: {}\n\
			 Rute: {} → {}\n\
			 Nomor resi: {}\n",
			confirmation.name,
			confirmation.email,
			confirmation.mobile,
			confirmation.origin,
			confirmation.destination,
			confirmation.tracking_number,
		);
		if let Some(description) = &confirmation.description {
			body.push_str(&format!("Deskripsi: {}\n", description));
		}
		body.push_str(&format!(
			"\nKami akan menghubungi Anda segera melalui email atau telepon.\n\n\
			 Untuk informasi lebih lanjut, hubungi: {}",
			self.contact_phone
		));

		Notification::success(format!("Terima kasih, {}!", confirmation.name), body)
	}
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
	#[error("Booking backend unavailable: {0}")]
	Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
	#[error("Missing required fields: {}", join_fields(.0))]
	MissingField(Vec<BookingField>),
	#[error("Invalid email address")]
	InvalidEmail,
	#[error("Invalid phone number")]
	InvalidPhone,
	#[error(transparent)]
	Submit(#[from] SubmitError),
}

fn join_fields(fields: &[BookingField]) -> String {
	fields
		.iter()
		.map(BookingField::as_str)
		.collect::<Vec<_>>()
		.join(", ")
}

impl BookingError {
	pub fn notification(&self) -> Notification {
		match self {
			BookingError::MissingField(_) => Notification::error(
				"Data belum lengkap",
				"Mohon lengkapi semua field yang wajib diisi!",
			),
			BookingError::InvalidEmail => Notification::error(
				"Email tidak valid",
				"Format email tidak valid!\nContoh: nama@example.com",
			),
			BookingError::InvalidPhone => Notification::error(
				"Nomor telepon tidak valid",
				"Format nomor telepon tidak valid!\n\n\
				 Gunakan format:\n\
				 • 08xx-xxxx-xxxx\n\
				 • +62xxx-xxxx-xxxx\n\
				 • 62xxx-xxxx-xxxx",
			),
			BookingError::Submit(_) => Notification::error(
				"Booking gagal dikirim",
				"Silakan coba beberapa saat lagi.",
			),
		}
	}
}
