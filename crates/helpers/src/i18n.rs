// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use crate::{avatar::escape_attr, RequestContext};

pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// ISO 639-1 code, e.g. "en" or "fr".
    pub language: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.language.fmt(f)
    }
}

impl Locale {
    #[must_use]
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_lowercase(),
        }
    }

    /// The word joining the two ends of a range,
    /// as in "2017 to 2018".
    /// Unknown languages fall back to English.
    #[must_use]
    pub fn range_joiner(&self) -> &'static str {
        match self.language.as_str() {
            "fr" => "au",
            "es" | "pt" | "it" => "a",
            "de" => "bis",
            _ => "to",
        }
    }
}

/// Replaces the language prefix (the first path segment) of `path`.
fn with_language(path: &str, language: &str) -> String {
    let rest = path
        .trim_start_matches('/')
        .split_once('/')
        .map_or("", |(_, rest)| rest);
    format!("/{language}/{rest}")
}

/// `<link rel="alternate" .../>` tags pointing to the current page
/// in all the other languages of the site.
/// Empty if the current page is not localized.
#[must_use]
pub fn i18n_alternate_links(ctx: &RequestContext) -> String {
    if !ctx.localized {
        return String::new();
    }
    ctx.languages
        .iter()
        .filter(|lang| **lang != ctx.locale.language)
        .map(|lang| {
            let mut href = with_language(ctx.url.path(), lang);
            if let Some(query) = ctx.url.query() {
                href.push('?');
                href.push_str(query);
            }
            format!(
                r#"<link rel="alternate" href="{}" hreflang="{}" />"#,
                escape_attr(&href),
                escape_attr(lang)
            )
        })
        .collect()
}
