// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use convert_case::{Case, Casing};

use crate::{avatar::escape_attr, HelperError};

const GRID_COLUMNS: u8 = 12;

/// Bootstrap grid classes for a horizontal form row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormGrid {
    pub label: String,
    pub control: String,
    pub offset: String,
}

/// Computes the grid classes from a spec like `"md-3,lg-2"`,
/// where the number is the label width (out of 12) at that screen size.
///
/// # Errors
///
/// If one of the comma separated parts is not of the form `<size>-<columns>`,
/// with columns being at most 12.
pub fn form_grid(specs: &str) -> Result<Option<FormGrid>, HelperError> {
    if specs.is_empty() {
        return Ok(None);
    }
    let invalid = || HelperError::InvalidFormGrid(specs.to_owned());
    let mut label = Vec::new();
    let mut control = Vec::new();
    let mut offset = Vec::new();
    for spec in specs.split(',').map(str::trim) {
        let (size, cols) = spec.split_once('-').ok_or_else(invalid)?;
        let cols: u8 = cols.parse().map_err(|_| invalid())?;
        if size.is_empty() || cols > GRID_COLUMNS {
            return Err(invalid());
        }
        label.push(format!("col-{size}-{cols}"));
        control.push(format!("col-{size}-{}", GRID_COLUMNS - cols));
        offset.push(format!("col-{size}-offset-{cols}"));
    }
    Ok(Some(FormGrid {
        label: label.join(" "),
        control: control.join(" "),
        offset: offset.join(" "),
    }))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// `6/3/17`
    #[default]
    Short,
    /// `Jun 3, 2017`
    Medium,
    /// `June 3, 2017`
    Long,
    /// `Saturday, June 3, 2017`
    Full,
}

impl DateFormat {
    const fn pattern(self) -> &'static str {
        match self {
            Self::Short => "%-m/%-d/%y",
            Self::Medium => "%b %-d, %Y",
            Self::Long => "%B %-d, %Y",
            Self::Full => "%A, %B %-d, %Y",
        }
    }
}

/// Renders a `YYYY-MM-DD` date text in the given format.
///
/// # Errors
///
/// If `value` is not a valid ISO date.
pub fn isodate(value: &str, format: DateFormat) -> Result<String, HelperError> {
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|err| {
        tracing::debug!("Not an ISO date: '{value}'");
        HelperError::InvalidIsoDate {
            value: value.to_owned(),
            reason: err.to_string(),
        }
    })?;
    Ok(date.format(format.pattern()).to_string())
}

pub trait IsoFormat {
    /// The ISO 8601 representation of the value.
    fn isoformat(&self) -> String;
}

impl IsoFormat for NaiveDate {
    fn isoformat(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }
}

impl IsoFormat for NaiveDateTime {
    fn isoformat(&self) -> String {
        self.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
    }
}

impl<Tz: TimeZone> IsoFormat for DateTime<Tz>
where
    Tz::Offset: std::fmt::Display,
{
    fn isoformat(&self) -> String {
        self.to_rfc3339()
    }
}

#[must_use]
pub fn isoformat<T: IsoFormat + ?Sized>(value: &T) -> String {
    value.isoformat()
}

/// `someName` -> `some_name`
#[must_use]
pub fn camel_to_lodash(name: &str) -> String {
    name.from_case(Case::Camel).to_case(Case::Snake)
}

/// Truncates `source` to `length` characters,
/// appending an ellipsis that shows the full text as tooltip.
///
/// `length` comes straight from the template;
/// if it is not an integer, `source` is returned unchanged,
/// and so it is if `length` is 0.
#[must_use]
pub fn tooltip_ellipsis(source: &str, length: &str) -> String {
    let Ok(length) = length.trim().parse::<usize>() else {
        return source.to_owned();
    };
    match source.char_indices().nth(length) {
        Some((cut, _)) if length > 0 => format!(
            r#"{}<a href rel="tooltip" data-container="body" title="{}">...</a>"#,
            source.get(..cut).unwrap_or(source),
            escape_attr(source)
        ),
        _ => source.to_owned(),
    }
}

/// `value` as a percentage of `max_value`,
/// capped at 100 unless `over` is set.
#[must_use]
pub fn percent(value: Option<f64>, max_value: f64, over: bool) -> f64 {
    let percent = value.unwrap_or_default() * 100.0 / max_value;
    if over {
        percent
    } else {
        percent.min(100.0)
    }
}

/// The CSS classes of a font icon;
/// Font Awesome if the name starts with "fa", a Glyphicon otherwise.
#[must_use]
pub fn ficon(value: &str) -> String {
    if value.starts_with("fa") {
        format!("fa {value}")
    } else {
        format!("glyphicon glyphicon-{value}")
    }
}

/// Maps facet values (usually IDs) to display labels.
#[derive(Debug, Clone, Default)]
pub struct FacetFormatter {
    labels: HashMap<String, String>,
}

impl FacetFormatter {
    #[must_use]
    pub fn new(labels: HashMap<String, String>) -> Self {
        Self { labels }
    }

    /// The label of `value`, or `value` itself if it has none.
    #[must_use]
    pub fn format<'a>(&'a self, value: &'a str) -> &'a str {
        self.labels.get(value).map_or(value, String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FacetFormatter {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
