// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

mod avatar;
mod daterange;
mod format;
mod i18n;
mod query;

pub use avatar::{
    avatar, avatar_url, gravatar, owner_avatar, owner_avatar_url, owner_name, owner_url,
    placeholder, static_url,
};
pub use daterange::daterange;
pub use format::{
    camel_to_lodash, ficon, form_grid, isodate, isoformat, percent, tooltip_ellipsis, DateFormat,
    FacetFormatter, FormGrid, IsoFormat,
};
pub use i18n::{i18n_alternate_links, Locale};
pub use query::{in_url, url_add, url_del, url_rewrite};

use thiserror::Error;
use url::Url;

// This tests rust code in the README with doc-tests.
// Though, It will not appear in the generated documentation.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HelperError {
    #[error("Invalid form grid spec '{0}', expected something like 'md-3,lg-2'")]
    InvalidFormGrid(String),

    #[error("Invalid ISO date '{value}': {reason}")]
    InvalidIsoDate { value: String, reason: String },
}

/// What the helpers need to know about the request being rendered.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The full URL of the current request.
    pub url: Url,
    /// Whether the request came in over HTTPS.
    pub secure: bool,
    /// Whether the current page lives under a language prefix,
    /// e.g. `/en/datasets/`.
    pub localized: bool,
    pub locale: Locale,
    /// All languages the site is available in.
    pub languages: Vec<String>,
}

impl RequestContext {
    /// A non-localized context for `url`,
    /// secure if the URL uses HTTPS.
    #[must_use]
    pub fn new(url: Url) -> Self {
        let secure = url.scheme() == "https";
        Self {
            url,
            secure,
            localized: false,
            locale: Locale::default(),
            languages: vec![Locale::default().language],
        }
    }
}
