//! Date span tracking and whole-month arithmetic.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Whole months between two dates, ignoring the day of month.
///
/// Jan 31 to Feb 1 is one month; any two dates in the same month are zero.
/// Callers must pass (earliest, latest) to get a non-negative result.
pub fn months_between(earliest: NaiveDate, latest: NaiveDate) -> i32 {
    (latest.year() - earliest.year()) * 12 + (latest.month() as i32 - earliest.month() as i32)
}

/// Earliest and latest transaction dates seen so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

impl DateSpan {
    /// Span covering a single date
    pub fn at(date: NaiveDate) -> Self {
        Self {
            earliest: date,
            latest: date,
        }
    }

    /// Widen the span to include `date`
    pub fn include(&mut self, date: NaiveDate) {
        self.earliest = self.earliest.min(date);
        self.latest = self.latest.max(date);
    }

    pub fn months(&self) -> i32 {
        months_between(self.earliest, self.latest)
    }

    /// Month count usable as a divisor, or `DegenerateSpan`
    pub fn divisor_months(&self) -> CoreResult<u32> {
        let months = self.months();
        if months <= 0 {
            return Err(CoreError::DegenerateSpan {
                earliest: self.earliest,
                latest: self.latest,
                months,
            });
        }
        Ok(months as u32)
    }
}
