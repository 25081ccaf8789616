// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static WRAPPED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\s*<([a-zA-Z][a-zA-Z0-9]*)(?:\s[^>]*)?>(.*)</([a-zA-Z][a-zA-Z0-9]*)\s*>\s*$")
        .unwrap()
});
static TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9]*)[^>]*?(/?)>").unwrap());

fn group<'t>(caps: &Captures<'t>, idx: usize) -> &'t str {
    caps.get(idx).map_or("", |mat| mat.as_str())
}

/// Whether the closing tag at the very end of `inner` + `</tag>`
/// really closes the opening tag at the very start,
/// e.g. not so for `<b>a</b> and <b>b</b>`.
fn closes_outermost(inner: &str, tag: &str) -> bool {
    let mut depth = 0_usize;
    for caps in TAG.captures_iter(inner) {
        if !group(&caps, 2).eq_ignore_ascii_case(tag) || !group(&caps, 3).is_empty() {
            continue;
        }
        if group(&caps, 1).is_empty() {
            depth += 1;
        } else if depth == 0 {
            return false;
        } else {
            depth -= 1;
        }
    }
    depth == 0
}

/// Strips exactly one HTML element wrapping the whole of `text`,
/// as some catalogs publish their descriptions as HTML fragments.
/// Any other text is returned as is.
#[must_use]
pub fn unwrap_html(text: &str) -> String {
    if let Some(caps) = WRAPPED.captures(text) {
        let (open, inner, close) = (group(&caps, 1), group(&caps, 2), group(&caps, 3));
        if open.eq_ignore_ascii_case(close) && closes_outermost(inner, open) {
            return inner.trim().to_owned();
        }
    }
    text.to_owned()
}
