use chrono::{Datelike, Duration, NaiveDate};

/// Calendar window covering a start date through the end of its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSpan {
    start: NaiveDate,
    end: NaiveDate,
}

impl MonthSpan {
    /// Build the span from a start date to the last day of the same month.
    pub fn from_start(start: NaiveDate) -> Self {
        Self {
            start,
            end: Self::end_of_month(start),
        }
    }

    /// Last calendar day of the given date's month. December stays within
    /// the same year (Dec 31), it never rolls into January.
    pub fn end_of_month(date: NaiveDate) -> NaiveDate {
        let next_month_first = if date.month() == 12 {
            NaiveDate::from_ymd_opt(date.year() + 1, 1, 1).unwrap()
        } else {
            NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1).unwrap()
        };
        next_month_first - Duration::days(1)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of calendar days in the span, inclusive of both ends.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Every calendar day in the span, in order.
    pub fn days(&self) -> Vec<NaiveDate> {
        let mut days = Vec::with_capacity(self.num_days() as usize);
        let mut current = self.start;

        while current <= self.end {
            days.push(current);
            current = current + Duration::days(1);
        }
        days
    }
}
