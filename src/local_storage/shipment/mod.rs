pub mod shipment_local_storage;
pub mod shipment_seed;

pub use shipment_local_storage::StaticShipmentStore;
