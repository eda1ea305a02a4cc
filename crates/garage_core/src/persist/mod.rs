//! Delimited-file persistence for the record store.
//!
//! # Responsibility
//! - Map each collection onto one fixed file name under a base directory.
//! - Load tolerantly (missing files, short or unparsable rows) and save by
//!   full overwrite, both through the `csv` reader and writer from [`codec`].
//!
//! # Invariants
//! - The first line of every file is a header and is never parsed as data.
//! - Blank lines carry no record and are neither loaded nor counted.
//! - Loaded records are appended; existing records are kept.
//! - I/O failures on existing files are returned, never swallowed.
//! - Saving then loading then saving yields byte-identical files.

use crate::model::Record;
use crate::store::{Collection, RecordStore, StoreError, StoreResult};
use log::{debug, info, warn};
use serde::Serialize;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

pub mod codec;

use codec::DelimitedRecord;

pub const OWNERS_FILE: &str = "owners.csv";
pub const MECHANICS_FILE: &str = "mechanics.csv";
pub const CARS_FILE: &str = "cars.csv";
pub const WORKSHOPS_FILE: &str = "workshops.csv";
pub const ORDERS_FILE: &str = "orders.csv";

/// Outcome of loading one data file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileLoad {
    /// The file did not exist; the collection was left untouched.
    pub missing: bool,
    pub loaded: usize,
    /// Data lines dropped as malformed.
    pub skipped: usize,
}

/// Per-entity outcome of [`RecordStore::load_all`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub owners: FileLoad,
    pub mechanics: FileLoad,
    pub cars: FileLoad,
    pub workshops: FileLoad,
    pub orders: FileLoad,
}

impl LoadReport {
    fn files(&self) -> [&FileLoad; 5] {
        [
            &self.owners,
            &self.mechanics,
            &self.cars,
            &self.workshops,
            &self.orders,
        ]
    }

    pub fn total_loaded(&self) -> usize {
        self.files().iter().map(|file| file.loaded).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.files().iter().map(|file| file.skipped).sum()
    }
}

pub(crate) fn load_all(store: &mut RecordStore, base_path: &Path) -> StoreResult<LoadReport> {
    let started_at = Instant::now();
    info!(
        "event=store_load module=persist status=start base_path={}",
        base_path.display()
    );

    let result = load_collections(store, base_path);

    match &result {
        Ok(report) => info!(
            "event=store_load module=persist status=ok duration_ms={} loaded={} skipped={}",
            started_at.elapsed().as_millis(),
            report.total_loaded(),
            report.total_skipped()
        ),
        Err(err) => warn!(
            "event=store_load module=persist status=error duration_ms={} error={}",
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}

fn load_collections(store: &mut RecordStore, base_path: &Path) -> StoreResult<LoadReport> {
    Ok(LoadReport {
        owners: load_file(&base_path.join(OWNERS_FILE), store.owners_mut())?,
        mechanics: load_file(&base_path.join(MECHANICS_FILE), store.mechanics_mut())?,
        cars: load_file(&base_path.join(CARS_FILE), store.cars_mut())?,
        workshops: load_file(&base_path.join(WORKSHOPS_FILE), store.workshops_mut())?,
        orders: load_file(&base_path.join(ORDERS_FILE), store.orders_mut())?,
    })
}

pub(crate) fn save_all(store: &RecordStore, base_path: &Path) -> StoreResult<()> {
    let started_at = Instant::now();
    std::fs::create_dir_all(base_path).map_err(|err| StoreError::io(base_path, err))?;

    let result = save_file(&base_path.join(OWNERS_FILE), store.owners())
        .and_then(|()| save_file(&base_path.join(MECHANICS_FILE), store.mechanics()))
        .and_then(|()| save_file(&base_path.join(CARS_FILE), store.cars()))
        .and_then(|()| save_file(&base_path.join(WORKSHOPS_FILE), store.workshops()))
        .and_then(|()| save_file(&base_path.join(ORDERS_FILE), store.orders()));

    match &result {
        Ok(()) => info!(
            "event=store_save module=persist status=ok duration_ms={} base_path={}",
            started_at.elapsed().as_millis(),
            base_path.display()
        ),
        Err(err) => warn!(
            "event=store_save module=persist status=error duration_ms={} error={}",
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}

/// Appends every well-formed data row of `path` to `collection`.
pub fn load_file<T>(path: &Path, collection: &mut Collection<T>) -> StoreResult<FileLoad>
where
    T: Record + DelimitedRecord,
{
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(
                "event=file_load module=persist status=missing entity={} path={}",
                T::KIND,
                path.display()
            );
            return Ok(FileLoad {
                missing: true,
                ..FileLoad::default()
            });
        }
        Err(err) => return Err(StoreError::io(path, err)),
    };

    let mut outcome = FileLoad::default();
    for row in codec::reader(file).records() {
        let parsed = match row {
            Ok(fields) => T::from_fields(&fields)
                .map_err(|err| (fields.position().map(|pos| pos.line()), err.to_string())),
            Err(err) if err.is_io_error() => return Err(StoreError::io(path, err.into())),
            Err(err) => Err((err.position().map(|pos| pos.line()), err.to_string())),
        };

        match parsed {
            Ok(record) => {
                collection.add(record);
                outcome.loaded += 1;
            }
            Err((line, reason)) => {
                outcome.skipped += 1;
                warn!(
                    "event=line_skipped module=persist entity={} path={} line={} reason={}",
                    T::KIND,
                    path.display(),
                    line.unwrap_or_default(),
                    reason
                );
            }
        }
    }

    debug!(
        "event=file_load module=persist status=ok entity={} loaded={} skipped={}",
        T::KIND,
        outcome.loaded,
        outcome.skipped
    );
    Ok(outcome)
}

/// Overwrites `path` with the header row and one row per record.
pub fn save_file<T>(path: &Path, collection: &Collection<T>) -> StoreResult<()>
where
    T: Record + DelimitedRecord,
{
    let file = File::create(path).map_err(|err| StoreError::io(path, err))?;
    let mut writer = codec::writer(file);

    writer
        .write_record(T::HEADER)
        .map_err(|err| StoreError::io(path, err.into()))?;
    for record in collection {
        writer
            .write_record(record.to_fields())
            .map_err(|err| StoreError::io(path, err.into()))?;
    }
    writer.flush().map_err(|err| StoreError::io(path, err))?;

    debug!(
        "event=file_save module=persist status=ok entity={} records={}",
        T::KIND,
        collection.len()
    );
    Ok(())
}
