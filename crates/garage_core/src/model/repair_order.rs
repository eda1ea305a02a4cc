//! Repair order record.
//!
//! # Invariants
//! - `total_cost` is stored as given; it is expected to equal labor plus
//!   `parts_cost` but the store neither derives nor validates it.
//! - `hours_worked` and `parts_cost` are expected to be non-negative.

use super::{EntityKind, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One repair job performed on a car by a mechanic in a workshop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepairOrder {
    pub order_id: String,
    pub car_id: String,
    pub workshop_id: String,
    pub mechanic_id: String,
    /// Serialized as `YYYY-MM-DD`.
    pub repair_date: NaiveDate,
    pub description: String,
    pub hours_worked: f64,
    pub parts_cost: f64,
    pub total_cost: f64,
}

impl RepairOrder {
    /// Creates an order with empty description and zeroed amounts.
    pub fn new(
        order_id: impl Into<String>,
        car_id: impl Into<String>,
        workshop_id: impl Into<String>,
        mechanic_id: impl Into<String>,
        repair_date: NaiveDate,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            car_id: car_id.into(),
            workshop_id: workshop_id.into(),
            mechanic_id: mechanic_id.into(),
            repair_date,
            description: String::new(),
            hours_worked: 0.0,
            parts_cost: 0.0,
            total_cost: 0.0,
        }
    }
}

impl Record for RepairOrder {
    const KIND: EntityKind = EntityKind::RepairOrder;

    fn key(&self) -> &str {
        &self.order_id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.description.as_str()]
    }

    fn overwrite_from(&mut self, other: &Self) {
        self.car_id.clone_from(&other.car_id);
        self.workshop_id.clone_from(&other.workshop_id);
        self.mechanic_id.clone_from(&other.mechanic_id);
        self.repair_date = other.repair_date;
        self.description.clone_from(&other.description);
        self.hours_worked = other.hours_worked;
        self.parts_cost = other.parts_cost;
        self.total_cost = other.total_cost;
    }
}
