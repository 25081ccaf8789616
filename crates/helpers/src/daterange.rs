// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use chrono::{Datelike, NaiveDate};
use datacat_model::{last_day_of_month, DateRange};

use crate::Locale;

fn is_first_month_day(date: NaiveDate) -> bool {
    date.day() == 1
}

fn is_last_month_day(date: NaiveDate) -> bool {
    last_day_of_month(date) == Some(date)
}

fn is_first_year_day(date: NaiveDate) -> bool {
    date.ordinal() == 1
}

fn is_last_year_day(date: NaiveDate) -> bool {
    date.month() == 12 && date.day() == 31
}

fn short_month(date: NaiveDate) -> String {
    date.format("%Y/%m").to_string()
}

fn short_day(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}

/// Displays a date range in the shortest possible manner:
///
/// - full calendar years as `2017` or `2017 to 2019`
/// - full calendar months as `2017/06` or `2017/06 to 2017/08`
/// - anything else as `2017/06/03` or `2017/06/03 to 2017/06/10`
#[must_use]
pub fn daterange(range: &DateRange, locale: &Locale) -> String {
    let (start, end) = (range.start(), range.end());
    let days = range.days();
    let (first, last) = if is_first_year_day(start) && is_last_year_day(end) {
        (
            start.year().to_string(),
            (days > 365).then(|| end.year().to_string()),
        )
    } else if is_first_month_day(start) && is_last_month_day(end) {
        (short_month(start), (days > 31).then(|| short_month(end)))
    } else {
        (short_day(start), (start != end).then(|| short_day(end)))
    };
    match last {
        Some(last) => format!("{first} {} {last}", locale.range_joiner()),
        None => first,
    }
}
