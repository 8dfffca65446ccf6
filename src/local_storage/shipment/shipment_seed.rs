use crate::models::{ShipmentRecord, ShipmentStatus, TrackingEvent, TrackingNumber};

/// Sample shipments available to the tracking form.
///
/// Each history is newest first with only the newest event active.
pub fn seed_records() -> Vec<ShipmentRecord> {
    vec![
        ShipmentRecord {
            tracking_number: seed_number("ALR001234567"),
            status: ShipmentStatus::Delivered,
            sender: "PT Borneo Sejahtera".to_string(),
            recipient: "Budi Santoso".to_string(),
            origin: "Samarinda".to_string(),
            destination: "Jakarta".to_string(),
            weight: "12.5 kg".to_string(),
            service: "Express (1-2 hari)".to_string(),
            estimated_delivery: "08 Okt 2025".to_string(),
            history: vec![
                TrackingEvent::new("08 Okt 2025, 14:20", "Package Delivered", "Jakarta Selatan", true),
                TrackingEvent::new("08 Okt 2025, 08:05", "Out for Delivery", "Jakarta Hub", false),
                TrackingEvent::new("07 Okt 2025, 21:40", "Arrived at Destination Hub", "Jakarta Hub", false),
                TrackingEvent::new("07 Okt 2025, 06:15", "Departed Origin Hub", "Balikpapan Hub", false),
                TrackingEvent::new("06 Okt 2025, 17:30", "Package Picked Up", "Samarinda", false),
                TrackingEvent::new("06 Okt 2025, 10:00", "Booking Confirmed", "Samarinda", false),
            ],
        },
        ShipmentRecord {
            tracking_number: seed_number("ALR002345678"),
            status: ShipmentStatus::InTransit,
            sender: "CV Mahakam Jaya".to_string(),
            recipient: "Siti Rahmawati".to_string(),
            origin: "Balikpapan".to_string(),
            destination: "Surabaya".to_string(),
            weight: "48 kg".to_string(),
            service: "Regular (3-5 hari)".to_string(),
            estimated_delivery: "13 Okt 2025".to_string(),
            history: vec![
                TrackingEvent::new("10 Okt 2025, 11:45", "In Transit", "Laut Jawa (Kapal Kargo)", true),
                TrackingEvent::new("09 Okt 2025, 19:10", "Departed Origin Hub", "Pelabuhan Semayang", false),
                TrackingEvent::new("09 Okt 2025, 09:30", "Package Picked Up", "Balikpapan", false),
                TrackingEvent::new("08 Okt 2025, 16:00", "Booking Confirmed", "Balikpapan", false),
            ],
        },
        ShipmentRecord {
            tracking_number: seed_number("ALR003456789"),
            status: ShipmentStatus::OutForDelivery,
            sender: "Toko Elektronik Sentosa".to_string(),
            recipient: "Andi Wijaya".to_string(),
            origin: "Jakarta".to_string(),
            destination: "Samarinda".to_string(),
            weight: "3.2 kg".to_string(),
            service: "Express (1-2 hari)".to_string(),
            estimated_delivery: "10 Okt 2025".to_string(),
            history: vec![
                TrackingEvent::new("10 Okt 2025, 07:50", "Out for Delivery", "Samarinda Hub", true),
                TrackingEvent::new("09 Okt 2025, 22:15", "Arrived at Destination Hub", "Samarinda Hub", false),
                TrackingEvent::new("09 Okt 2025, 05:40", "Departed Origin Hub", "Jakarta Hub", false),
                TrackingEvent::new("08 Okt 2025, 18:25", "Package Picked Up", "Jakarta Utara", false),
                TrackingEvent::new("08 Okt 2025, 13:10", "Booking Confirmed", "Jakarta", false),
            ],
        },
        ShipmentRecord {
            tracking_number: seed_number("ALR004567890"),
            status: ShipmentStatus::Pending,
            sender: "UD Sumber Rejeki".to_string(),
            recipient: "Dewi Lestari".to_string(),
            origin: "Makassar".to_string(),
            destination: "Samarinda".to_string(),
            weight: "120 kg".to_string(),
            service: "Cargo (5-7 hari)".to_string(),
            estimated_delivery: "17 Okt 2025".to_string(),
            history: vec![
                TrackingEvent::new("10 Okt 2025, 09:00", "Booking Confirmed", "Makassar", true),
            ],
        },
    ]
}

fn seed_number(number: &str) -> TrackingNumber {
    TrackingNumber::from_trusted(number)
}
