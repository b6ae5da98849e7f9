//! Collaborator interfaces consumed by the engine.

pub mod fleet_store;

pub use fleet_store::{FleetStore, InMemoryFleetStore};
