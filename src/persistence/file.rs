use super::PersistenceResult;
use crate::metadata::RosterMetadata;
use crate::roster::{Roster, RosterEntry};
use chrono::NaiveDate;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

// Export only: re-importing a saved roster is out of scope, so the snapshot
// and record types never need to deserialize.

#[derive(Serialize)]
struct RosterSnapshot {
    metadata: RosterMetadata,
    entries: Vec<RosterEntry>,
}

impl RosterSnapshot {
    fn from_roster(roster: &Roster) -> PersistenceResult<Self> {
        let entries = roster.entries()?;
        super::validate_roster(&entries)?;
        Ok(Self {
            metadata: roster.metadata().clone(),
            entries,
        })
    }
}

pub fn save_roster_to_json<P: AsRef<Path>>(roster: &Roster, path: P) -> PersistenceResult<()> {
    let snapshot = RosterSnapshot::from_roster(roster)?;
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &snapshot)?;
    Ok(())
}

#[derive(Serialize)]
struct RosterCsvRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Day")]
    day: String,
}

impl From<&RosterEntry> for RosterCsvRecord {
    fn from(entry: &RosterEntry) -> Self {
        Self {
            date: format_date(entry.date),
            day: entry.duty.as_str().to_string(),
        }
    }
}

pub fn save_roster_to_csv<P: AsRef<Path>>(roster: &Roster, path: P) -> PersistenceResult<()> {
    let entries = roster.entries()?;
    super::validate_roster(&entries)?;

    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    for entry in &entries {
        writer.serialize(RosterCsvRecord::from(entry))?;
    }
    writer.flush()?;
    Ok(())
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
