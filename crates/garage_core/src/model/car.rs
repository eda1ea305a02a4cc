//! Car record.

use super::{EntityKind, Record};
use serde::{Deserialize, Serialize};

/// Car brought in for repair.
///
/// `owner_license_number` points at [`crate::Owner::license_number`] but is
/// not checked against the owner collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub car_id: String,
    pub brand: String,
    pub power: i32,
    pub color: String,
    pub owner_license_number: String,
}

impl Car {
    pub fn new(
        car_id: impl Into<String>,
        brand: impl Into<String>,
        power: i32,
        color: impl Into<String>,
        owner_license_number: impl Into<String>,
    ) -> Self {
        Self {
            car_id: car_id.into(),
            brand: brand.into(),
            power,
            color: color.into(),
            owner_license_number: owner_license_number.into(),
        }
    }
}

impl Record for Car {
    const KIND: EntityKind = EntityKind::Car;

    fn key(&self) -> &str {
        &self.car_id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.brand.as_str(),
            self.color.as_str(),
            self.owner_license_number.as_str(),
        ]
    }

    fn overwrite_from(&mut self, other: &Self) {
        self.brand.clone_from(&other.brand);
        self.power = other.power;
        self.color.clone_from(&other.color);
        self.owner_license_number
            .clone_from(&other.owner_license_number);
    }
}
