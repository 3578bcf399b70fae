//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod snapshot_store_port;

#[cfg(test)]
pub use snapshot_store_port::MockSnapshotStorePort;
pub use snapshot_store_port::SnapshotStorePort;
