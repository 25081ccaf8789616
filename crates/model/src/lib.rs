// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

mod catalog;
mod dataset;
mod date_range;
mod license;
mod owner;
mod urls;

pub use catalog::Catalog;
pub use dataset::{Checksum, Dataset, Resource, EXTRA_IDENTIFIER, EXTRA_URI};
pub use date_range::{last_day_of_month, DateRange};
pub use license::{License, LicenseLookup};
pub use owner::{Organization, Owner, User};
pub use urls::SiteUrls;

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("A date range has to start before it ends, but {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Not a valid calendar month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("Not a valid calendar year: {0}")]
    InvalidYear(i32),

    #[error("Invalid site base URL '{url}': {from}")]
    InvalidBaseUrl { url: String, from: url::ParseError },

    #[error("Failed to read the catalog file '{}': {from}", path.display())]
    CatalogRead { path: PathBuf, from: std::io::Error },

    #[error("Failed to parse the catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),
}
