//! Workshop record.

use super::repair_order::RepairOrder;
use super::{EntityKind, Record};
use serde::{Deserialize, Serialize};

/// Repair workshop.
///
/// `orders` is filled by callers (see
/// [`crate::RecordStore::attach_workshop_orders`]) and is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workshop {
    pub workshop_id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    #[serde(default)]
    pub orders: Vec<RepairOrder>,
}

impl Workshop {
    pub fn new(
        workshop_id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            workshop_id: workshop_id.into(),
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
            orders: Vec::new(),
        }
    }
}

impl Record for Workshop {
    const KIND: EntityKind = EntityKind::Workshop;

    fn key(&self) -> &str {
        &self.workshop_id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.address.as_str(), self.phone.as_str()]
    }

    fn overwrite_from(&mut self, other: &Self) {
        self.name.clone_from(&other.name);
        self.address.clone_from(&other.address);
        self.phone.clone_from(&other.phone);
        self.orders.clone_from(&other.orders);
    }
}
