use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;

use crate::local_storage::shipment::shipment_seed::seed_records;
use crate::models::{ShipmentRecord, TrackingNumber};
use crate::services::{LookupError, ShipmentLookup};

/// Read-only in-memory shipment table
pub struct StaticShipmentStore {
    records: HashMap<TrackingNumber, ShipmentRecord>,
    // insertion order, used for the sample list
    order: Vec<TrackingNumber>,
}

impl StaticShipmentStore {
    pub fn new(records: Vec<ShipmentRecord>) -> Self {
        let mut order = Vec::with_capacity(records.len());
        let mut map = HashMap::with_capacity(records.len());

        for record in records {
            if !record.has_consistent_history() {
                tracing::warn!(
                    "Shipment {} does not have exactly one leading active event",
                    record.tracking_number
                );
            }
            let number = record.tracking_number.clone();
            match map.entry(number.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(record);
                    order.push(number);
                }
                Entry::Occupied(_) => {
                    tracing::warn!("Ignoring duplicate shipment {}", number);
                }
            }
        }

        Self {
            records: map,
            order,
        }
    }

    /// Store holding the sample shipments
    pub fn seeded() -> Self {
        Self::new(seed_records())
    }

    pub fn get(&self, number: &TrackingNumber) -> Option<&ShipmentRecord> {
        self.records.get(number)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl ShipmentLookup for StaticShipmentStore {
    async fn find(&self, number: &TrackingNumber) -> Result<Option<ShipmentRecord>, LookupError> {
        Ok(self.get(number).cloned())
    }

    async fn sample_numbers(&self) -> Vec<TrackingNumber> {
        self.order.clone()
    }
}
