// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct License {
    /// Short, stable identifier, e.g. `cc-by`.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Finds known licenses by what remote catalogs tell about them.
///
/// When several licenses share a URL or title,
/// the first one in iteration order is returned.
pub trait LicenseLookup {
    fn by_url(&self, url: &str) -> Option<&License>;
    fn by_title(&self, title: &str) -> Option<&License>;
}

impl LicenseLookup for [License] {
    fn by_url(&self, url: &str) -> Option<&License> {
        self.iter()
            .find(|license| license.url.as_deref() == Some(url))
    }

    fn by_title(&self, title: &str) -> Option<&License> {
        self.iter().find(|license| license.title == title)
    }
}

impl LicenseLookup for Vec<License> {
    fn by_url(&self, url: &str) -> Option<&License> {
        self.as_slice().by_url(url)
    }

    fn by_title(&self, title: &str) -> Option<&License> {
        self.as_slice().by_title(title)
    }
}
