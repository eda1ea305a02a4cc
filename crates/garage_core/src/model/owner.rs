//! Car owner record.

use super::{EntityKind, Record};
use serde::{Deserialize, Serialize};

/// Registered car owner, keyed by driving license number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub license_number: String,
    pub full_name: String,
    pub address: String,
    pub phone: String,
}

impl Owner {
    pub fn new(
        license_number: impl Into<String>,
        full_name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            license_number: license_number.into(),
            full_name: full_name.into(),
            address: address.into(),
            phone: phone.into(),
        }
    }
}

impl Record for Owner {
    const KIND: EntityKind = EntityKind::Owner;

    fn key(&self) -> &str {
        &self.license_number
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.full_name.as_str(), self.address.as_str(), self.phone.as_str()]
    }

    fn overwrite_from(&mut self, other: &Self) {
        self.full_name.clone_from(&other.full_name);
        self.address.clone_from(&other.address);
        self.phone.clone_from(&other.phone);
    }
}

#[cfg(test)]
mod tests {
    use super::Owner;
    use crate::model::Record;

    #[test]
    fn license_number_is_not_searchable() {
        let owner = Owner::new("AB123", "Jane Smith", "1 Elm St", "555-0100");
        assert!(owner.matches("Smith"));
        assert!(owner.matches("Elm"));
        assert!(!owner.matches("AB123"));
    }

    #[test]
    fn search_is_case_sensitive() {
        let owner = Owner::new("AB123", "Jane Smith", "", "");
        assert!(!owner.matches("smith"));
    }
}
