//! Domain records for the repair-shop store.
//!
//! # Responsibility
//! - Define the five plain value records kept by [`crate::RecordStore`].
//! - Expose a common [`Record`] contract used by generic collection code.
//!
//! # Invariants
//! - Key fields are expected unique but uniqueness is never enforced here.
//! - Records carry no cross-references beyond plain key strings.

use std::fmt::{Display, Formatter};

pub mod car;
pub mod mechanic;
pub mod owner;
pub mod repair_order;
pub mod workshop;

/// Entity category, used in errors and log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Owner,
    Mechanic,
    Car,
    Workshop,
    RepairOrder,
}

impl EntityKind {
    /// Stable lowercase name used in log events and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Mechanic => "mechanic",
            Self::Car => "car",
            Self::Workshop => "workshop",
            Self::RepairOrder => "repair_order",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared contract for records stored in a [`crate::store::Collection`].
pub trait Record: Clone {
    /// Category reported in `NotFound` errors.
    const KIND: EntityKind;

    /// Key used by update/delete/find.
    fn key(&self) -> &str;

    /// Text fields scanned by substring search, in a fixed order.
    fn search_fields(&self) -> Vec<&str>;

    /// Copies every non-key field from `other` into `self`.
    fn overwrite_from(&mut self, other: &Self);

    /// Case-sensitive substring match over [`Record::search_fields`].
    ///
    /// Empty fields are valid values; an empty `term` matches every record.
    fn matches(&self, term: &str) -> bool {
        self.search_fields()
            .into_iter()
            .any(|field| field.contains(term))
    }
}
