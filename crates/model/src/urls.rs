// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::Display;
use url::Url;

use crate::ModelError;

/// Builds the canonical URLs of the site.
///
/// All `*_path` methods return site-local, absolute paths,
/// all other methods return full URLs below the base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteUrls {
    base: Url,
}

impl SiteUrls {
    /// # Errors
    ///
    /// If `base` is not an absolute URL that may serve as a base.
    pub fn new(base: &str) -> Result<Self, ModelError> {
        let invalid = |from| ModelError::InvalidBaseUrl {
            url: base.to_owned(),
            from,
        };
        let mut parsed = Url::parse(base).map_err(invalid)?;
        if parsed.cannot_be_a_base() {
            return Err(invalid(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }
        if !parsed.path().ends_with('/') {
            let path = format!("{}/", parsed.path());
            parsed.set_path(&path);
        }
        Ok(Self { base: parsed })
    }

    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }

    fn absolute(&self, path: &str) -> String {
        let relative = path.trim_start_matches('/');
        self.base.join(relative).map_or_else(
            |_| format!("{}{relative}", self.base),
            |joined| joined.to_string(),
        )
    }

    #[must_use]
    pub fn dataset_path(id: impl Display) -> String {
        format!("/datasets/{id}/")
    }

    #[must_use]
    pub fn resource_path(id: impl Display) -> String {
        format!("/datasets/r/{id}")
    }

    #[must_use]
    pub fn organization_path(id: impl Display) -> String {
        format!("/organizations/{id}/")
    }

    #[must_use]
    pub fn user_path(id: impl Display) -> String {
        format!("/users/{id}/")
    }

    #[must_use]
    pub fn static_path(file: &str) -> String {
        format!("/static/{}", file.trim_start_matches('/'))
    }

    #[must_use]
    pub fn context_path() -> &'static str {
        "/context.jsonld"
    }

    #[must_use]
    pub fn dataset_rdf_format_path(id: impl Display, suffix: &str) -> String {
        format!("/datasets/{id}/rdf.{suffix}")
    }

    /// The dataset's public page.
    #[must_use]
    pub fn dataset(&self, id: impl Display) -> String {
        self.absolute(&Self::dataset_path(id))
    }

    /// The permanent link to a resource,
    /// redirecting to wherever the resource currently lives.
    #[must_use]
    pub fn resource(&self, id: impl Display) -> String {
        self.absolute(&Self::resource_path(id))
    }

    #[must_use]
    pub fn organization(&self, id: impl Display) -> String {
        self.absolute(&Self::organization_path(id))
    }

    #[must_use]
    pub fn user(&self, id: impl Display) -> String {
        self.absolute(&Self::user_path(id))
    }

    /// The site-wide JSON-LD context document.
    #[must_use]
    pub fn context(&self) -> String {
        self.absolute(Self::context_path())
    }
}
