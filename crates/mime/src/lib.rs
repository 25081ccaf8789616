// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

mod negotiate;

pub use negotiate::negotiate;

use mediatype::{MediaType, MediaTypeError};
use once_cell::sync::Lazy;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, collections::HashMap, fmt::Display, str::FromStr};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Unrecognized RDF content-type (mime-type): '{0}'")]
    UnrecognizedContentType(String),

    #[error("Generic content-type, could be any RDF type or none: '{0}'")]
    CouldBeAny(String),

    #[error("Not a valid/parsable content-type format: '{0}'")]
    InvalidFormat(#[from] MediaTypeError),

    #[error("Unrecognized RDF format suffix: '{0}'")]
    UnrecognizedSuffix(String),
}

const MIME_TYPE_JSON_LD: &str = "application/ld+json";
const MIME_TYPE_N3: &str = "text/n3";
const MIME_TYPE_N_TRIPLES: &str = "application/n-triples";
const MIME_TYPE_RDF_XML: &str = "application/rdf+xml";
const MIME_TYPE_TRIG: &str = "application/trig";
const MIME_TYPE_TURTLE: &str = "application/x-turtle";

const MIME_TYPE_TEXT_PLAIN: &str = "text/plain";

const SUFFIX_JSON: &str = "json";
const SUFFIX_JSON_LD: &str = "jsonld";
const SUFFIX_N3: &str = "n3";
const SUFFIX_N_TRIPLES: &str = "nt";
const SUFFIX_RDF_XML: &str = "xml";
const SUFFIX_RDF_XML_2: &str = "rdf";
const SUFFIX_RDF_XML_3: &str = "rdfs";
const SUFFIX_RDF_XML_4: &str = "owl";
const SUFFIX_TRIG: &str = "trig";
const SUFFIX_TURTLE: &str = "ttl";

/// Maps media-type essences (lower-case, without parameters)
/// to the format they stand for.
/// Besides the canonical types, this includes the aliases
/// clients commonly send in their `Accept` header.
static ESSENCE_2_TYPE: Lazy<HashMap<&'static str, Type>> = Lazy::new(|| {
    vec![
        (MIME_TYPE_JSON_LD, Type::JsonLd),
        ("application/json", Type::JsonLd),
        ("application/json-ld", Type::JsonLd), // JSON-LD (invalid/inofficial form)
        (MIME_TYPE_N3, Type::N3),
        ("text/rdf+n3", Type::N3),
        (MIME_TYPE_N_TRIPLES, Type::NTriples),
        (MIME_TYPE_RDF_XML, Type::RdfXml),
        ("application/xml", Type::RdfXml),
        ("text/xml", Type::RdfXml),
        (MIME_TYPE_TRIG, Type::TriG),
        ("application/x-trig", Type::TriG),
        ("text/trig", Type::TriG),
        (MIME_TYPE_TURTLE, Type::Turtle),
        ("text/turtle", Type::Turtle),
    ]
    .into_iter()
    .collect()
});

/**
 * The RDF serialization formats a catalog entry can be published in.
 */
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    #[default]
    JsonLd,
    N3,
    NTriples,
    RdfXml,
    TriG,
    Turtle,
}

impl FromStr for Type {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_mime_type(s)
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.name().fmt(f)
    }
}

fn essence_key(media_type: &MediaType) -> String {
    media_type.essence().to_string().to_lowercase()
}

impl Type {
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::JsonLd,
            Self::N3,
            Self::NTriples,
            Self::RdfXml,
            Self::TriG,
            Self::Turtle,
        ]
    }

    /// Parses a MIME type string, e.g. the value of a `Content-Type` header.
    ///
    /// # Errors
    ///
    /// - `ParseError::InvalidFormat` if the string is not a media type at all
    /// - `ParseError::CouldBeAny` for `text/plain`
    /// - `ParseError::UnrecognizedContentType` for any other non-RDF type
    pub fn from_mime_type<'a, T>(mime_type: T) -> Result<Self, ParseError>
    where
        T: Into<Cow<'a, str>>,
    {
        let mime_type_cow = mime_type.into();
        let media_type = MediaType::parse(mime_type_cow.as_ref())?;
        Self::from_media_type(&media_type)
    }

    /// Looks up the format of an already parsed media type.
    /// Parameters (like `charset` or `q`) are ignored.
    ///
    /// # Errors
    ///
    /// See [`Self::from_mime_type`].
    pub fn from_media_type(media_type: &MediaType) -> Result<Self, ParseError> {
        let essence = essence_key(media_type);
        if essence == MIME_TYPE_TEXT_PLAIN {
            return Err(ParseError::CouldBeAny(media_type.to_string()));
        }
        ESSENCE_2_TYPE
            .get(essence.as_str())
            .copied()
            .ok_or_else(|| ParseError::UnrecognizedContentType(media_type.to_string()))
    }

    /// Maps a format suffix, as used in `rdf.<suffix>` URLs, to its format.
    ///
    /// # Errors
    ///
    /// `ParseError::UnrecognizedSuffix` if the suffix is not known.
    pub fn from_suffix(suffix: &str) -> Result<Self, ParseError> {
        Ok(match suffix.to_lowercase().as_str() {
            SUFFIX_JSON | SUFFIX_JSON_LD => Self::JsonLd,
            SUFFIX_N3 => Self::N3,
            SUFFIX_N_TRIPLES => Self::NTriples,
            SUFFIX_RDF_XML | SUFFIX_RDF_XML_2 | SUFFIX_RDF_XML_3 | SUFFIX_RDF_XML_4 => {
                Self::RdfXml
            }
            SUFFIX_TRIG => Self::TriG,
            SUFFIX_TURTLE => Self::Turtle,
            _ => return Err(ParseError::UnrecognizedSuffix(suffix.to_string())),
        })
    }

    /// The content type a serialization in this format is served with.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::JsonLd => MIME_TYPE_JSON_LD,
            Self::N3 => MIME_TYPE_N3,
            Self::NTriples => MIME_TYPE_N_TRIPLES,
            Self::RdfXml => MIME_TYPE_RDF_XML,
            Self::TriG => MIME_TYPE_TRIG,
            Self::Turtle => MIME_TYPE_TURTLE,
        }
    }

    /// The canonical suffix of the format specific URL.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::JsonLd => SUFFIX_JSON,
            Self::N3 => SUFFIX_N3,
            Self::NTriples => SUFFIX_N_TRIPLES,
            Self::RdfXml => SUFFIX_RDF_XML,
            Self::TriG => SUFFIX_TRIG,
            Self::Turtle => SUFFIX_TURTLE,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::JsonLd => "JSON-LD",
            Self::N3 => "N3",
            Self::NTriples => "N-Triples",
            Self::RdfXml => "RDF/XML",
            Self::TriG => "TriG",
            Self::Turtle => "Turtle",
        }
    }

    /// Whether the format can carry `@prefix` like namespace declarations.
    #[must_use]
    pub const fn supports_prefixes(self) -> bool {
        match self {
            Self::N3 | Self::RdfXml | Self::TriG | Self::Turtle => true,
            Self::JsonLd | Self::NTriples => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffixes_map_to_their_formats() {
        assert_eq!(Type::from_suffix("json").unwrap(), Type::JsonLd);
        assert_eq!(Type::from_suffix("jsonld").unwrap(), Type::JsonLd);
        assert_eq!(Type::from_suffix("n3").unwrap(), Type::N3);
        assert_eq!(Type::from_suffix("ttl").unwrap(), Type::Turtle);
        for suffix in ["xml", "rdf", "rdfs", "owl"] {
            assert_eq!(Type::from_suffix(suffix).unwrap(), Type::RdfXml);
        }
        assert_eq!(Type::from_suffix("nt").unwrap(), Type::NTriples);
        assert_eq!(Type::from_suffix("trig").unwrap(), Type::TriG);
        assert!(matches!(
            Type::from_suffix("csv"),
            Err(ParseError::UnrecognizedSuffix(_))
        ));
    }

    #[test]
    fn canonical_suffix_maps_back() {
        for typ in Type::all() {
            assert_eq!(Type::from_suffix(typ.suffix()).unwrap(), typ);
        }
    }

    #[test]
    fn served_mime_types() {
        assert_eq!(Type::JsonLd.mime_type(), "application/ld+json");
        assert_eq!(Type::N3.mime_type(), "text/n3");
        assert_eq!(Type::Turtle.mime_type(), "application/x-turtle");
        assert_eq!(Type::RdfXml.mime_type(), "application/rdf+xml");
        assert_eq!(Type::NTriples.mime_type(), "application/n-triples");
        assert_eq!(Type::TriG.mime_type(), "application/trig");
    }

    #[test]
    fn mime_type_aliases_and_parameters() {
        assert_eq!(Type::from_str("text/turtle").unwrap(), Type::Turtle);
        assert_eq!(
            Type::from_str("application/xml; charset=utf-8").unwrap(),
            Type::RdfXml
        );
        assert_eq!(Type::from_str("Application/LD+JSON").unwrap(), Type::JsonLd);
        assert!(matches!(
            Type::from_str("text/plain"),
            Err(ParseError::CouldBeAny(_))
        ));
        assert!(matches!(
            Type::from_str("image/png"),
            Err(ParseError::UnrecognizedContentType(_))
        ));
    }
}
