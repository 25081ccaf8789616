// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

use crate::{DateRange, License, Owner};

/// Extras key holding the identifier a dataset carries
/// in the repository it was harvested from.
pub const EXTRA_IDENTIFIER: &str = "dct:identifier";
/// Extras key holding the URI of the dataset
/// in the repository it was harvested from.
pub const EXTRA_URI: &str = "uri";

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checksum {
    /// Lower-case algorithm name, e.g. `sha1`.
    #[serde(rename = "type")]
    pub algorithm: String,
    /// Hex encoded digest.
    pub value: String,
}

/// A single file or service (a DCAT distribution) of a dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(default = "now")]
    pub published: NaiveDateTime,
    #[serde(default = "now")]
    pub modified: NaiveDateTime,
    #[serde(default)]
    pub filesize: Option<u64>,
    #[serde(default)]
    pub mime: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub checksum: Option<Checksum>,
}

impl Resource {
    /// Creates a resource with a fresh id,
    /// published and modified right now.
    #[must_use]
    pub fn new(title: String, url: String) -> Self {
        let now = now();
        Self {
            id: Uuid::new_v4(),
            title,
            description: None,
            url,
            published: now,
            modified: now,
            filesize: None,
            mime: None,
            format: None,
            checksum: None,
        }
    }

    /// Whether this resource is the one published under `url`.
    /// An empty URL never matches.
    #[must_use]
    pub fn has_url(&self, url: &str) -> bool {
        !url.is_empty() && self.url == url
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// `None` as long as the dataset was not persisted in a catalog.
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub slug: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "now")]
    pub created_at: NaiveDateTime,
    #[serde(default = "now")]
    pub last_modified: NaiveDateTime,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub temporal_coverage: Option<DateRange>,
    #[serde(default)]
    pub license: Option<License>,
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub extras: BTreeMap<String, String>,
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl Dataset {
    /// Creates a new, not yet persisted dataset.
    #[must_use]
    pub fn new(title: String) -> Self {
        let now = now();
        Self {
            id: None,
            slug: None,
            title,
            description: None,
            created_at: now,
            last_modified: now,
            tags: BTreeSet::new(),
            temporal_coverage: None,
            license: None,
            owner: None,
            resources: Vec::new(),
            extras: BTreeMap::new(),
        }
    }

    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// The identifier to publish:
    /// the one of the originating repository if known,
    /// else our own id (if persisted).
    #[must_use]
    pub fn identifier(&self) -> Option<String> {
        self.extras
            .get(EXTRA_IDENTIFIER)
            .cloned()
            .or_else(|| self.id.map(|id| id.to_string()))
    }

    /// The URI of the dataset in the repository it was harvested from.
    #[must_use]
    pub fn remote_uri(&self) -> Option<&str> {
        self.extras.get(EXTRA_URI).map(String::as_str)
    }

    /// Returns the resource published under `url`,
    /// appending a new (otherwise empty) one if there is none yet.
    pub fn resource_for_url_mut(&mut self, url: &str) -> &mut Resource {
        let idx = if let Some(idx) = self.resources.iter().position(|res| res.has_url(url)) {
            idx
        } else {
            tracing::trace!("No resource with URL '{url}' yet, appending a new one");
            self.resources
                .push(Resource::new(String::new(), url.to_owned()));
            self.resources.len() - 1
        };
        #[allow(clippy::indexing_slicing)]
        &mut self.resources[idx]
    }

    /// Replaces the resource with the same URL in place,
    /// keeping its id and position, or appends `resource`.
    pub fn upsert_resource(&mut self, resource: Resource) -> &Resource {
        let idx = if let Some(idx) = self
            .resources
            .iter()
            .position(|res| res.has_url(&resource.url))
        {
            #[allow(clippy::indexing_slicing)]
            let slot = &mut self.resources[idx];
            *slot = Resource {
                id: slot.id,
                ..resource
            };
            idx
        } else {
            self.resources.push(resource);
            self.resources.len() - 1
        };
        #[allow(clippy::indexing_slicing)]
        &self.resources[idx]
    }
}
