//! In-memory record store for a car-repair shop.
//!
//! Holds owners, mechanics, cars, workshops and repair orders, answers
//! aggregate questions over repair orders, and persists every collection as
//! `;`-delimited text files.

pub mod logging;
pub mod model;
pub mod persist;
pub mod stats;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::car::Car;
pub use model::mechanic::Mechanic;
pub use model::owner::Owner;
pub use model::repair_order::RepairOrder;
pub use model::workshop::Workshop;
pub use model::{EntityKind, Record};
pub use persist::{FileLoad, LoadReport};
pub use stats::Statistics;
pub use store::{Collection, RecordStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
