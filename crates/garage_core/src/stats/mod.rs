//! Aggregates over repair orders.
//!
//! # Invariants
//! - Every figure is recomputed from the current orders; nothing is cached.
//! - Grouping is a single pass into a key-ordered map.
//! - Empty input yields zeros, never a division by zero.

use crate::model::repair_order::RepairOrder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary figures over a set of repair orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_orders: usize,
    pub total_revenue: f64,
    pub average_order_cost: f64,
    pub max_order_cost: f64,
    pub min_order_cost: f64,
    pub total_hours_worked: f64,
}

/// Computes count, sum, mean, max and min of `total_cost` plus total hours.
pub fn compute_statistics(orders: &[RepairOrder]) -> Statistics {
    let Some(first) = orders.first() else {
        return Statistics::default();
    };

    let mut stats = Statistics {
        total_orders: orders.len(),
        max_order_cost: first.total_cost,
        min_order_cost: first.total_cost,
        ..Statistics::default()
    };
    for order in orders {
        stats.total_revenue += order.total_cost;
        stats.total_hours_worked += order.hours_worked;
        stats.max_order_cost = stats.max_order_cost.max(order.total_cost);
        stats.min_order_cost = stats.min_order_cost.min(order.total_cost);
    }
    stats.average_order_cost = stats.total_revenue / orders.len() as f64;
    stats
}

/// Sums `total_cost` per `workshop_id`. Workshops without orders are absent.
pub fn revenue_by_workshop(orders: &[RepairOrder]) -> BTreeMap<String, f64> {
    let mut revenue = BTreeMap::new();
    for order in orders {
        *revenue.entry(order.workshop_id.clone()).or_insert(0.0) += order.total_cost;
    }
    revenue
}

/// Counts orders per `mechanic_id`. Mechanics without orders are absent.
pub fn orders_by_mechanic(orders: &[RepairOrder]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for order in orders {
        *counts.entry(order.mechanic_id.clone()).or_insert(0) += 1;
    }
    counts
}
