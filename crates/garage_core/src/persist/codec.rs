//! Positional `;`-delimited record codec.
//!
//! Quoting is disabled in both directions: fields are written verbatim, so an
//! embedded `;` or newline corrupts the row.

use crate::model::car::Car;
use crate::model::mechanic::Mechanic;
use crate::model::owner::Owner;
use crate::model::repair_order::RepairOrder;
use crate::model::workshop::Workshop;
use chrono::NaiveDate;
use csv::{QuoteStyle, Reader, ReaderBuilder, StringRecord, Terminator, Writer, WriterBuilder};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{Read, Write};

pub const DELIMITER: u8 = b';';
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reason a data row was rejected during load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    TooFewFields { expected: usize, found: usize },
    InvalidNumber { column: &'static str, value: String },
    InvalidDate { column: &'static str, value: String },
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewFields { expected, found } => {
                write!(f, "expected at least {expected} fields, found {found}")
            }
            Self::InvalidNumber { column, value } => {
                write!(f, "invalid number `{value}` in column {column}")
            }
            Self::InvalidDate { column, value } => {
                write!(f, "invalid date `{value}` in column {column}")
            }
        }
    }
}

impl Error for FieldError {}

/// Record that maps positionally onto one delimited row.
pub trait DelimitedRecord: Sized {
    /// Column names written as the header row. A data row needs at least this
    /// many fields; extra fields are ignored.
    const HEADER: &'static [&'static str];

    fn to_fields(&self) -> Vec<String>;

    /// Builds a record from a data row, rejecting rows that are too short.
    fn from_fields(fields: &StringRecord) -> Result<Self, FieldError>;
}

/// Reader over a data file: header row skipped, rows of any length, no quoting.
pub fn reader<R: Read>(source: R) -> Reader<R> {
    ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(source)
}

/// Writer producing `\n`-terminated rows with fields written verbatim.
pub fn writer<W: Write>(sink: W) -> Writer<W> {
    WriterBuilder::new()
        .delimiter(DELIMITER)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(sink)
}

fn column<'r, T: DelimitedRecord>(
    fields: &'r StringRecord,
    index: usize,
) -> Result<&'r str, FieldError> {
    fields.get(index).ok_or(FieldError::TooFewFields {
        expected: T::HEADER.len(),
        found: fields.len(),
    })
}

fn ensure_width<T: DelimitedRecord>(fields: &StringRecord) -> Result<(), FieldError> {
    if fields.len() < T::HEADER.len() {
        return Err(FieldError::TooFewFields {
            expected: T::HEADER.len(),
            found: fields.len(),
        });
    }
    Ok(())
}

fn parse_f64(column: &'static str, value: &str) -> Result<f64, FieldError> {
    value
        .trim()
        .parse()
        .map_err(|_| FieldError::InvalidNumber {
            column,
            value: value.to_string(),
        })
}

fn parse_i32(column: &'static str, value: &str) -> Result<i32, FieldError> {
    value
        .trim()
        .parse()
        .map_err(|_| FieldError::InvalidNumber {
            column,
            value: value.to_string(),
        })
}

fn parse_date(column: &'static str, value: &str) -> Result<NaiveDate, FieldError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| FieldError::InvalidDate {
        column,
        value: value.to_string(),
    })
}

impl DelimitedRecord for Owner {
    const HEADER: &'static [&'static str] = &["LicenseNumber", "FullName", "Address", "Phone"];

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.license_number.clone(),
            self.full_name.clone(),
            self.address.clone(),
            self.phone.clone(),
        ]
    }

    fn from_fields(fields: &StringRecord) -> Result<Self, FieldError> {
        ensure_width::<Self>(fields)?;
        Ok(Owner::new(
            column::<Self>(fields, 0)?,
            column::<Self>(fields, 1)?,
            column::<Self>(fields, 2)?,
            column::<Self>(fields, 3)?,
        ))
    }
}

impl DelimitedRecord for Mechanic {
    const HEADER: &'static [&'static str] = &[
        "EmployeeId",
        "FullName",
        "Address",
        "Phone",
        "Qualification",
        "HourlyRate",
    ];

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.employee_id.clone(),
            self.full_name.clone(),
            self.address.clone(),
            self.phone.clone(),
            self.qualification.clone(),
            self.hourly_rate.to_string(),
        ]
    }

    fn from_fields(fields: &StringRecord) -> Result<Self, FieldError> {
        ensure_width::<Self>(fields)?;
        Ok(Mechanic {
            employee_id: column::<Self>(fields, 0)?.to_string(),
            full_name: column::<Self>(fields, 1)?.to_string(),
            address: column::<Self>(fields, 2)?.to_string(),
            phone: column::<Self>(fields, 3)?.to_string(),
            qualification: column::<Self>(fields, 4)?.to_string(),
            hourly_rate: parse_f64("HourlyRate", column::<Self>(fields, 5)?)?,
        })
    }
}

impl DelimitedRecord for Car {
    const HEADER: &'static [&'static str] =
        &["CarId", "Brand", "Power", "Color", "OwnerLicenseNumber"];

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.car_id.clone(),
            self.brand.clone(),
            self.power.to_string(),
            self.color.clone(),
            self.owner_license_number.clone(),
        ]
    }

    fn from_fields(fields: &StringRecord) -> Result<Self, FieldError> {
        ensure_width::<Self>(fields)?;
        Ok(Car::new(
            column::<Self>(fields, 0)?,
            column::<Self>(fields, 1)?,
            parse_i32("Power", column::<Self>(fields, 2)?)?,
            column::<Self>(fields, 3)?,
            column::<Self>(fields, 4)?,
        ))
    }
}

// Attached orders live in orders.csv only.
impl DelimitedRecord for Workshop {
    const HEADER: &'static [&'static str] = &["WorkshopId", "Name", "Address", "Phone"];

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.workshop_id.clone(),
            self.name.clone(),
            self.address.clone(),
            self.phone.clone(),
        ]
    }

    fn from_fields(fields: &StringRecord) -> Result<Self, FieldError> {
        ensure_width::<Self>(fields)?;
        Ok(Workshop::new(
            column::<Self>(fields, 0)?,
            column::<Self>(fields, 1)?,
            column::<Self>(fields, 2)?,
            column::<Self>(fields, 3)?,
        ))
    }
}

impl DelimitedRecord for RepairOrder {
    const HEADER: &'static [&'static str] = &[
        "OrderId",
        "CarId",
        "WorkshopId",
        "MechanicId",
        "RepairDate",
        "Description",
        "HoursWorked",
        "PartsCost",
        "TotalCost",
    ];

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.order_id.clone(),
            self.car_id.clone(),
            self.workshop_id.clone(),
            self.mechanic_id.clone(),
            self.repair_date.format(DATE_FORMAT).to_string(),
            self.description.clone(),
            self.hours_worked.to_string(),
            self.parts_cost.to_string(),
            self.total_cost.to_string(),
        ]
    }

    fn from_fields(fields: &StringRecord) -> Result<Self, FieldError> {
        ensure_width::<Self>(fields)?;
        Ok(RepairOrder {
            order_id: column::<Self>(fields, 0)?.to_string(),
            car_id: column::<Self>(fields, 1)?.to_string(),
            workshop_id: column::<Self>(fields, 2)?.to_string(),
            mechanic_id: column::<Self>(fields, 3)?.to_string(),
            repair_date: parse_date("RepairDate", column::<Self>(fields, 4)?)?,
            description: column::<Self>(fields, 5)?.to_string(),
            hours_worked: parse_f64("HoursWorked", column::<Self>(fields, 6)?)?,
            parts_cost: parse_f64("PartsCost", column::<Self>(fields, 7)?)?,
            total_cost: parse_f64("TotalCost", column::<Self>(fields, 8)?)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{reader, writer, DelimitedRecord, FieldError};
    use crate::model::owner::Owner;
    use crate::model::repair_order::RepairOrder;
    use csv::StringRecord;

    fn rows(data: &str) -> Vec<StringRecord> {
        reader(data.as_bytes())
            .records()
            .collect::<Result<_, _>>()
            .expect("in-memory data should be readable")
    }

    fn written<T: DelimitedRecord>(record: &T) -> String {
        let mut out = writer(Vec::new());
        out.write_record(record.to_fields())
            .expect("writing to a Vec should succeed");
        let bytes = out
            .into_inner()
            .map_err(|err| err.into_error())
            .expect("flush to a Vec should succeed");
        String::from_utf8(bytes).expect("written row should be UTF-8")
    }

    #[test]
    fn owner_row_with_extra_fields_keeps_first_four() {
        let parsed = rows("header\nL1;Ann Lee;Main St 4;555;unused\n");
        let owner = Owner::from_fields(&parsed[0]).unwrap();
        assert_eq!(owner, Owner::new("L1", "Ann Lee", "Main St 4", "555"));
    }

    #[test]
    fn short_row_is_rejected_with_field_counts() {
        let parsed = rows("header\nL1;Ann Lee\n");
        let err = Owner::from_fields(&parsed[0]).unwrap_err();
        assert_eq!(
            err,
            FieldError::TooFewFields {
                expected: 4,
                found: 2
            }
        );
    }

    #[test]
    fn from_fields_on_a_short_record_returns_an_error() {
        let err = RepairOrder::from_fields(&StringRecord::from(vec!["O1"])).unwrap_err();
        assert_eq!(
            err,
            FieldError::TooFewFields {
                expected: 9,
                found: 1
            }
        );
    }

    #[test]
    fn empty_fields_are_preserved() {
        let parsed = rows("header\nL1;;;\n");
        let owner = Owner::from_fields(&parsed[0]).unwrap();
        assert_eq!(owner.full_name, "");
        assert_eq!(written(&owner), "L1;;;\n");
    }

    #[test]
    fn quotes_are_plain_characters() {
        let parsed = rows("header\nL1;\"Ann\" Lee;x;y\n");
        let owner = Owner::from_fields(&parsed[0]).unwrap();
        assert_eq!(owner.full_name, "\"Ann\" Lee");
        assert_eq!(written(&owner), "L1;\"Ann\" Lee;x;y\n");
    }

    #[test]
    fn order_row_parses_date_and_amounts() {
        let parsed = rows("header\nO1;C1;W1;M1;2024-05-17;brake pads;1.5;80;155.25\n");
        let order = RepairOrder::from_fields(&parsed[0]).unwrap();
        assert_eq!(order.repair_date.to_string(), "2024-05-17");
        assert_eq!(order.hours_worked, 1.5);
        assert_eq!(order.total_cost, 155.25);
        assert_eq!(
            written(&order),
            "O1;C1;W1;M1;2024-05-17;brake pads;1.5;80;155.25\n"
        );
    }

    #[test]
    fn order_row_with_bad_date_is_rejected() {
        let parsed = rows("header\nO1;C1;W1;M1;17.05.2024;x;1;1;1\n");
        let err = RepairOrder::from_fields(&parsed[0]).unwrap_err();
        assert!(matches!(err, FieldError::InvalidDate { column: "RepairDate", .. }));
    }
}
