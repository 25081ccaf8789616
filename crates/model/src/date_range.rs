// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::ModelError;

#[derive(Deserialize)]
struct DateRangeFields {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<DateRangeFields> for DateRange {
    type Error = ModelError;

    fn try_from(fields: DateRangeFields) -> Result<Self, Self::Error> {
        Self::new(fields.start, fields.end)
    }
}

/// A closed interval of calendar days.
/// `start` is never after `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateRangeFields")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range covering `start` to `end`, both inclusive.
    ///
    /// # Errors
    ///
    /// `ModelError::InvalidDateRange` if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ModelError> {
        if start > end {
            return Err(ModelError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The range covering a whole calendar year.
    ///
    /// # Errors
    ///
    /// `ModelError::InvalidYear` if the year is out of the supported range.
    pub fn year(year: i32) -> Result<Self, ModelError> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(ModelError::InvalidYear(year))?;
        let end = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(ModelError::InvalidYear(year))?;
        Ok(Self { start, end })
    }

    /// The range covering a whole calendar month.
    ///
    /// # Errors
    ///
    /// `ModelError::InvalidMonth` if `month` is not within `1..=12`,
    /// or the year is out of the supported range.
    pub fn month(year: i32, month: u32) -> Result<Self, ModelError> {
        let invalid = || ModelError::InvalidMonth { year, month };
        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let end = last_day_of_month(start).ok_or_else(invalid)?;
        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days from start to end;
    /// `0` for a single day range.
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Returns the last day of the month `date` lies in.
#[must_use]
pub fn last_day_of_month(date: NaiveDate) -> Option<NaiveDate> {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1).and_then(|first| first.pred_opt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn rejects_inverted_bounds() {
        assert!(matches!(
            DateRange::new(ymd(2017, 2, 1), ymd(2017, 1, 1)),
            Err(ModelError::InvalidDateRange { .. })
        ));
        assert!(DateRange::new(ymd(2017, 1, 1), ymd(2017, 1, 1)).is_ok());
    }

    #[test]
    fn whole_year() {
        let range = DateRange::year(2017).unwrap();
        assert_eq!(range.start(), ymd(2017, 1, 1));
        assert_eq!(range.end(), ymd(2017, 12, 31));
        assert_eq!(range.days(), 364);
    }

    #[test]
    fn whole_month_respects_month_lengths() {
        let june = DateRange::month(2017, 6).unwrap();
        assert_eq!(june.start(), ymd(2017, 6, 1));
        assert_eq!(june.end(), ymd(2017, 6, 30));

        assert_eq!(DateRange::month(2016, 2).unwrap().end(), ymd(2016, 2, 29));
        assert_eq!(DateRange::month(2017, 2).unwrap().end(), ymd(2017, 2, 28));
        assert_eq!(DateRange::month(2017, 12).unwrap().end(), ymd(2017, 12, 31));
        assert!(DateRange::month(2017, 13).is_err());
        assert!(DateRange::month(2017, 0).is_err());
    }

    #[test]
    fn deserialization_validates_bounds() {
        let ok: DateRange =
            serde_json::from_str(r#"{"start": "2017-01-01", "end": "2017-03-01"}"#).unwrap();
        assert_eq!(ok.end(), ymd(2017, 3, 1));
        let inverted =
            serde_json::from_str::<DateRange>(r#"{"start": "2017-03-01", "end": "2017-01-01"}"#);
        assert!(inverted.is_err());
    }
}
