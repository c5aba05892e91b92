pub mod calendar;
pub mod duty;
pub mod metadata;
pub mod persistence;
pub mod roster;

pub use calendar::MonthSpan;
pub use duty::{DutyDay, duty_on};
pub use metadata::RosterMetadata;
pub use persistence::{
    PersistenceError, PersistenceResult, save_roster_to_csv, save_roster_to_json,
    save_roster_to_xlsx, validate_roster,
};
pub use roster::{Roster, RosterEntry, RosterSummary};
