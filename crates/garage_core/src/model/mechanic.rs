//! Mechanic record.

use super::{EntityKind, Record};
use serde::{Deserialize, Serialize};

/// Workshop employee who performs repairs.
///
/// `hourly_rate` is expected to be non-negative; the store does not check it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mechanic {
    pub employee_id: String,
    pub full_name: String,
    pub address: String,
    pub phone: String,
    pub qualification: String,
    pub hourly_rate: f64,
}

impl Mechanic {
    pub fn new(
        employee_id: impl Into<String>,
        full_name: impl Into<String>,
        qualification: impl Into<String>,
        hourly_rate: f64,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            full_name: full_name.into(),
            qualification: qualification.into(),
            hourly_rate,
            ..Self::default()
        }
    }
}

impl Record for Mechanic {
    const KIND: EntityKind = EntityKind::Mechanic;

    fn key(&self) -> &str {
        &self.employee_id
    }

    // Address and phone are deliberately left out of mechanic search.
    fn search_fields(&self) -> Vec<&str> {
        vec![self.full_name.as_str(), self.qualification.as_str()]
    }

    fn overwrite_from(&mut self, other: &Self) {
        self.full_name.clone_from(&other.full_name);
        self.address.clone_from(&other.address);
        self.phone.clone_from(&other.phone);
        self.qualification.clone_from(&other.qualification);
        self.hourly_rate = other.hourly_rate;
    }
}
