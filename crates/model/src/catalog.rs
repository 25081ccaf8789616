// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use uuid::Uuid;

use crate::{Dataset, License, LicenseLookup, ModelError};

/// In-memory store of the known licenses and datasets.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    licenses: Vec<License>,
    #[serde(default)]
    datasets: Vec<Dataset>,
}

impl Catalog {
    #[must_use]
    pub fn new(licenses: Vec<License>) -> Self {
        Self {
            licenses,
            datasets: Vec::new(),
        }
    }

    /// Parses a catalog from its JSON representation.
    /// Datasets without an id get one assigned.
    ///
    /// # Errors
    ///
    /// If the JSON is malformed or does not describe a catalog.
    pub fn from_json(content: &str) -> Result<Self, ModelError> {
        let parsed: Self = serde_json::from_str(content)?;
        let mut catalog = Self::new(parsed.licenses);
        for dataset in parsed.datasets {
            catalog.insert_dataset(dataset);
        }
        Ok(catalog)
    }

    /// Reads a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// If the file could not be read or parsed.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let path = path.as_ref();
        tracing::debug!("Loading catalog from '{}' ...", path.display());
        let content = fs::read_to_string(path).map_err(|from| ModelError::CatalogRead {
            path: path.to_path_buf(),
            from,
        })?;
        let catalog = Self::from_json(&content)?;
        tracing::info!(
            "Loaded catalog with {} datasets and {} licenses",
            catalog.datasets.len(),
            catalog.licenses.len()
        );
        Ok(catalog)
    }

    /// Persists the dataset, assigning it an id if it has none yet.
    /// A dataset with the same id is replaced.
    pub fn insert_dataset(&mut self, mut dataset: Dataset) -> Uuid {
        let id = *dataset.id.get_or_insert_with(Uuid::new_v4);
        if let Some(existing) = self.datasets.iter_mut().find(|ds| ds.id == Some(id)) {
            *existing = dataset;
        } else {
            self.datasets.push(dataset);
        }
        id
    }

    #[must_use]
    pub fn licenses(&self) -> &[License] {
        &self.licenses
    }

    #[must_use]
    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    #[must_use]
    pub fn dataset_by_id(&self, id: Uuid) -> Option<&Dataset> {
        self.datasets.iter().find(|dataset| dataset.id == Some(id))
    }

    /// Looks up a dataset by its id or, failing that, by its slug.
    #[must_use]
    pub fn dataset(&self, id_or_slug: &str) -> Option<&Dataset> {
        Uuid::parse_str(id_or_slug)
            .ok()
            .and_then(|id| self.dataset_by_id(id))
            .or_else(|| {
                self.datasets
                    .iter()
                    .find(|dataset| dataset.slug.as_deref() == Some(id_or_slug))
            })
    }
}

impl LicenseLookup for Catalog {
    fn by_url(&self, url: &str) -> Option<&License> {
        self.licenses.by_url(url)
    }

    fn by_title(&self, title: &str) -> Option<&License> {
        self.licenses.by_title(title)
    }
}
