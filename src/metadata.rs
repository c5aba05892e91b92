use crate::calendar::MonthSpan;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RosterMetadata {
    pub roster_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl RosterMetadata {
    pub fn for_month(span: &MonthSpan) -> Self {
        Self {
            roster_name: format!("Duty roster {}", span.start().format("%Y-%m")),
            start_date: span.start(),
            end_date: span.end(),
        }
    }
}
