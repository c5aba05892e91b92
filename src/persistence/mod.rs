use crate::duty::{DutyDay, duty_on};
use crate::roster::RosterEntry;
use polars::prelude::PolarsError;
use rust_xlsxwriter::XlsxError;
use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum PersistenceError {
    Serialization(SerdeJsonError),
    DataFrame(PolarsError),
    Io(io::Error),
    Csv(csv::Error),
    Xlsx(XlsxError),
    InvalidData(String),
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Serialization(err) => write!(f, "serialization error: {err}"),
            PersistenceError::DataFrame(err) => write!(f, "dataframe conversion error: {err}"),
            PersistenceError::Io(err) => write!(f, "io error: {err}"),
            PersistenceError::Csv(err) => write!(f, "csv error: {err}"),
            PersistenceError::Xlsx(err) => write!(f, "xlsx error: {err}"),
            PersistenceError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<SerdeJsonError> for PersistenceError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<PolarsError> for PersistenceError {
    fn from(value: PolarsError) -> Self {
        Self::DataFrame(value)
    }
}

impl From<io::Error> for PersistenceError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for PersistenceError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<XlsxError> for PersistenceError {
    fn from(value: XlsxError) -> Self {
        Self::Xlsx(value)
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Check the roster invariants before anything is written: at least one
/// entry, the first entry is a work day, dates advance by exactly one day,
/// and every label matches the cycle anchored at the first entry.
pub fn validate_roster(entries: &[RosterEntry]) -> PersistenceResult<()> {
    let first = entries.first().ok_or_else(|| {
        PersistenceError::InvalidData("roster contains no entries".into())
    })?;

    if first.duty != DutyDay::Work {
        return Err(PersistenceError::InvalidData(format!(
            "roster must open with a work day, got '{}' on {}",
            first.duty.as_str(),
            first.date
        )));
    }

    for pair in entries.windows(2) {
        let gap = (pair[1].date - pair[0].date).num_days();
        if gap != 1 {
            return Err(PersistenceError::InvalidData(format!(
                "roster dates must be contiguous: {} is followed by {}",
                pair[0].date, pair[1].date
            )));
        }
    }

    for entry in entries {
        let expected = duty_on(first.date, entry.date);
        if entry.duty != expected {
            return Err(PersistenceError::InvalidData(format!(
                "label for {} breaks the work/rest cycle (expected '{}', got '{}')",
                entry.date,
                expected.as_str(),
                entry.duty.as_str()
            )));
        }
    }

    Ok(())
}

pub mod excel;
pub mod file;

pub use excel::save_roster_to_xlsx;
pub use file::{save_roster_to_csv, save_roster_to_json};
