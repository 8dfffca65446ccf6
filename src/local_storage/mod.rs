pub mod shipment;

pub use shipment::StaticShipmentStore;
