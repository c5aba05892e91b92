use crate::calendar::MonthSpan;
use crate::duty::DutyDay;
use crate::metadata::RosterMetadata;
use chrono::{Duration, NaiveDate};
use polars::prelude::PlSmallStr;
use polars::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub date: NaiveDate,
    pub duty: DutyDay,
}

impl RosterEntry {
    pub fn from_dataframe_row(df: &DataFrame, row_idx: usize) -> PolarsResult<Self> {
        let date_days = df.column("date")?.date()?.get(row_idx).ok_or_else(|| {
            PolarsError::ComputeError("roster row missing date".into())
        })?;

        let label = df.column("day")?.str()?.get(row_idx).ok_or_else(|| {
            PolarsError::ComputeError("roster row missing day label".into())
        })?;
        let duty = DutyDay::from_str(label).ok_or_else(|| {
            PolarsError::ComputeError(format!("unknown day label '{label}'").into())
        })?;

        Ok(Self {
            date: Self::date_from_i32(date_days),
            duty,
        })
    }

    fn date_to_i32(date: NaiveDate) -> i32 {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        (date - epoch).num_days() as i32
    }

    fn date_from_i32(days: i32) -> NaiveDate {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        epoch + Duration::days(days as i64)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterSummary {
    pub total_days: usize,
    pub work_days: usize,
    pub rest_days: usize,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl RosterSummary {
    pub fn to_cli_summary(&self) -> String {
        let mut parts = Vec::new();
        parts.push(format!("days={}", self.total_days));
        parts.push(format!("work={}", self.work_days));
        parts.push(format!("rest={}", self.rest_days));
        parts.push(format!("span={}..{}", self.start_date, self.end_date));
        parts.join(", ")
    }
}

pub struct Roster {
    df: DataFrame,
    metadata: RosterMetadata,
}

impl Roster {
    /// Generate the roster for the month of `start`, anchored so `start`
    /// itself is a work day. Each pass emits a full work/rest/rest triplet,
    /// truncated at the month end; the tail cycle is never padded and never
    /// carries into the next month.
    pub fn for_month(start: NaiveDate) -> PolarsResult<Self> {
        let span = MonthSpan::from_start(start);
        let mut entries = Vec::with_capacity(span.num_days() as usize);

        let mut cursor = start;
        while cursor <= span.end() {
            entries.push(RosterEntry {
                date: cursor,
                duty: DutyDay::Work,
            });
            cursor = cursor + Duration::days(1);
            if cursor <= span.end() {
                entries.push(RosterEntry {
                    date: cursor,
                    duty: DutyDay::Rest,
                });
            }
            cursor = cursor + Duration::days(1);
            if cursor <= span.end() {
                entries.push(RosterEntry {
                    date: cursor,
                    duty: DutyDay::Rest,
                });
            }
            cursor = cursor + Duration::days(1);
        }

        Ok(Self {
            df: Self::dataframe_from_entries(&entries)?,
            metadata: RosterMetadata::for_month(&span),
        })
    }

    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    pub fn metadata(&self) -> &RosterMetadata {
        &self.metadata
    }

    /// Reconstruct the typed entries from the backing frame, in row order.
    pub fn entries(&self) -> PolarsResult<Vec<RosterEntry>> {
        let mut entries = Vec::with_capacity(self.df.height());
        for row_idx in 0..self.df.height() {
            entries.push(RosterEntry::from_dataframe_row(&self.df, row_idx)?);
        }
        Ok(entries)
    }

    pub fn summary(&self) -> PolarsResult<RosterSummary> {
        let entries = self.entries()?;
        let work_days = entries
            .iter()
            .filter(|entry| entry.duty == DutyDay::Work)
            .count();

        Ok(RosterSummary {
            total_days: entries.len(),
            work_days,
            rest_days: entries.len() - work_days,
            start_date: self.metadata.start_date,
            end_date: self.metadata.end_date,
        })
    }

    fn default_schema() -> Schema {
        Schema::from_iter(vec![
            Field::new("date".into(), DataType::Date),
            Field::new("day".into(), DataType::String),
        ])
    }

    fn dataframe_from_entries(entries: &[RosterEntry]) -> PolarsResult<DataFrame> {
        let dates: Vec<i32> = entries
            .iter()
            .map(|entry| RosterEntry::date_to_i32(entry.date))
            .collect();
        let labels: Vec<&str> = entries.iter().map(|entry| entry.duty.as_str()).collect();

        let date_series =
            Series::new(PlSmallStr::from_static("date"), dates).cast(&DataType::Date)?;
        let day_series = Series::new(PlSmallStr::from_static("day"), labels);

        DataFrame::new(vec![date_series.into_column(), day_series.into_column()])
    }
}
