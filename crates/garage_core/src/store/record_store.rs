//! Store facade over the five entity collections.

use super::{Collection, StoreError, StoreResult};
use crate::model::car::Car;
use crate::model::mechanic::Mechanic;
use crate::model::owner::Owner;
use crate::model::repair_order::RepairOrder;
use crate::model::workshop::Workshop;
use crate::model::EntityKind;
use crate::persist::{self, LoadReport};
use crate::stats::{self, Statistics};
use std::collections::BTreeMap;
use std::path::Path;

/// In-memory holder of owners, mechanics, cars, workshops and repair orders.
///
/// Single-threaded: callers sharing a store across threads must wrap it in a
/// lock themselves.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    owners: Collection<Owner>,
    mechanics: Collection<Mechanic>,
    cars: Collection<Car>,
    workshops: Collection<Workshop>,
    orders: Collection<RepairOrder>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owners(&self) -> &Collection<Owner> {
        &self.owners
    }

    pub fn mechanics(&self) -> &Collection<Mechanic> {
        &self.mechanics
    }

    pub fn cars(&self) -> &Collection<Car> {
        &self.cars
    }

    pub fn workshops(&self) -> &Collection<Workshop> {
        &self.workshops
    }

    pub fn orders(&self) -> &Collection<RepairOrder> {
        &self.orders
    }

    pub(crate) fn owners_mut(&mut self) -> &mut Collection<Owner> {
        &mut self.owners
    }

    pub(crate) fn mechanics_mut(&mut self) -> &mut Collection<Mechanic> {
        &mut self.mechanics
    }

    pub(crate) fn cars_mut(&mut self) -> &mut Collection<Car> {
        &mut self.cars
    }

    pub(crate) fn workshops_mut(&mut self) -> &mut Collection<Workshop> {
        &mut self.workshops
    }

    pub(crate) fn orders_mut(&mut self) -> &mut Collection<RepairOrder> {
        &mut self.orders
    }

    // Owners

    pub fn add_owner(&mut self, owner: Owner) {
        self.owners.add(owner);
    }

    pub fn update_owner(&mut self, owner: &Owner) -> StoreResult<()> {
        self.owners.update(owner)
    }

    pub fn delete_owner(&mut self, license_number: &str) -> StoreResult<usize> {
        self.owners.delete(license_number)
    }

    pub fn find_owner(&self, license_number: &str) -> Option<&Owner> {
        self.owners.find(license_number)
    }

    /// Matches `term` against full name, address and phone.
    pub fn search_owners(&self, term: &str) -> Vec<&Owner> {
        self.owners.search(term)
    }

    // Mechanics

    pub fn add_mechanic(&mut self, mechanic: Mechanic) {
        self.mechanics.add(mechanic);
    }

    pub fn update_mechanic(&mut self, mechanic: &Mechanic) -> StoreResult<()> {
        self.mechanics.update(mechanic)
    }

    pub fn delete_mechanic(&mut self, employee_id: &str) -> StoreResult<usize> {
        self.mechanics.delete(employee_id)
    }

    pub fn find_mechanic(&self, employee_id: &str) -> Option<&Mechanic> {
        self.mechanics.find(employee_id)
    }

    /// Matches `term` against full name and qualification.
    pub fn search_mechanics(&self, term: &str) -> Vec<&Mechanic> {
        self.mechanics.search(term)
    }

    // Cars

    pub fn add_car(&mut self, car: Car) {
        self.cars.add(car);
    }

    pub fn update_car(&mut self, car: &Car) -> StoreResult<()> {
        self.cars.update(car)
    }

    pub fn delete_car(&mut self, car_id: &str) -> StoreResult<usize> {
        self.cars.delete(car_id)
    }

    pub fn find_car(&self, car_id: &str) -> Option<&Car> {
        self.cars.find(car_id)
    }

    pub fn search_cars(&self, term: &str) -> Vec<&Car> {
        self.cars.search(term)
    }

    // Workshops

    pub fn add_workshop(&mut self, workshop: Workshop) {
        self.workshops.add(workshop);
    }

    pub fn update_workshop(&mut self, workshop: &Workshop) -> StoreResult<()> {
        self.workshops.update(workshop)
    }

    pub fn delete_workshop(&mut self, workshop_id: &str) -> StoreResult<usize> {
        self.workshops.delete(workshop_id)
    }

    pub fn find_workshop(&self, workshop_id: &str) -> Option<&Workshop> {
        self.workshops.find(workshop_id)
    }

    pub fn search_workshops(&self, term: &str) -> Vec<&Workshop> {
        self.workshops.search(term)
    }

    // Repair orders

    pub fn add_order(&mut self, order: RepairOrder) {
        self.orders.add(order);
    }

    pub fn update_order(&mut self, order: &RepairOrder) -> StoreResult<()> {
        self.orders.update(order)
    }

    pub fn delete_order(&mut self, order_id: &str) -> StoreResult<usize> {
        self.orders.delete(order_id)
    }

    pub fn find_order(&self, order_id: &str) -> Option<&RepairOrder> {
        self.orders.find(order_id)
    }

    pub fn search_orders(&self, term: &str) -> Vec<&RepairOrder> {
        self.orders.search(term)
    }

    /// Returns orders placed with `workshop_id`, in insertion order.
    pub fn orders_for_workshop(&self, workshop_id: &str) -> Vec<&RepairOrder> {
        self.orders
            .iter()
            .filter(|order| order.workshop_id == workshop_id)
            .collect()
    }

    /// Replaces `orders` of the first workshop with `workshop_id` by a copy of
    /// its current repair orders and returns how many were attached.
    ///
    /// # Errors
    /// - `NotFound` when no such workshop exists.
    pub fn attach_workshop_orders(&mut self, workshop_id: &str) -> StoreResult<usize> {
        let orders: Vec<RepairOrder> = self
            .orders_for_workshop(workshop_id)
            .into_iter()
            .cloned()
            .collect();

        let Some(workshop) = self.workshops.find_mut(workshop_id) else {
            return Err(StoreError::NotFound {
                entity: EntityKind::Workshop,
                key: workshop_id.to_string(),
            });
        };

        let attached = orders.len();
        workshop.orders = orders;
        Ok(attached)
    }

    // Aggregates

    /// Summary figures over every repair order; all zeros when there are none.
    pub fn statistics(&self) -> Statistics {
        stats::compute_statistics(self.orders.as_slice())
    }

    pub fn revenue_by_workshop(&self) -> BTreeMap<String, f64> {
        stats::revenue_by_workshop(self.orders.as_slice())
    }

    pub fn orders_by_mechanic(&self) -> BTreeMap<String, usize> {
        stats::orders_by_mechanic(self.orders.as_slice())
    }

    // Persistence

    /// Appends records from the five data files under `base_path`.
    ///
    /// Missing files are skipped; malformed lines are dropped and counted.
    ///
    /// # Errors
    /// - `Io` when an existing file cannot be read.
    pub fn load_all(&mut self, base_path: impl AsRef<Path>) -> StoreResult<LoadReport> {
        persist::load_all(self, base_path.as_ref())
    }

    /// Overwrites the five data files under `base_path`.
    ///
    /// # Errors
    /// - `Io` when the directory or a file cannot be written.
    pub fn save_all(&self, base_path: impl AsRef<Path>) -> StoreResult<()> {
        persist::save_all(self, base_path.as_ref())
    }
}
