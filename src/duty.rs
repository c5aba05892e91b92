use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Length of the repeating duty cycle: one work day, two rest days.
pub const CYCLE_DAYS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DutyDay {
    Work,
    Rest,
}

impl DutyDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            DutyDay::Work => "work",
            DutyDay::Rest => "rest",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "work" => Some(DutyDay::Work),
            "rest" => Some(DutyDay::Rest),
            _ => None,
        }
    }
}

/// Duty label for an arbitrary date, anchored at the first work day.
/// Dates before the anchor count as rest.
pub fn duty_on(first_work_day: NaiveDate, date: NaiveDate) -> DutyDay {
    if date < first_work_day {
        return DutyDay::Rest;
    }
    let offset = (date - first_work_day).num_days();
    if offset % CYCLE_DAYS == 0 {
        DutyDay::Work
    } else {
        DutyDay::Rest
    }
}
