// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Provides ready to use [`NamedNodeRef`](oxrdf::NamedNodeRef)s
//! for the vocabularies used to describe a data catalog.

pub mod dcat;
pub mod dct;
pub mod foaf;
pub mod schema;
pub mod spdx;

// This tests rust code in the README with doc-tests.
// Though, It will not appear in the generated documentation.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

#[macro_export]
macro_rules! named_node {
    ($const:ident, $base:expr, $node:literal, $doc:literal) => {
        #[doc=$doc]
        pub const $const: oxrdf::NamedNodeRef<'_> =
            oxrdf::NamedNodeRef::new_unchecked(const_format::concatcp!($base, $node));
    };
}

/// All `(prefix, namespace)` pairs of the vocabularies in this crate,
/// plus the basic W3C ones the catalog output relies on.
#[must_use]
pub const fn all_prefixes() -> [(&'static str, &'static str); 8] {
    [
        (dcat::NS_PREFERRED_PREFIX, dcat::NS_BASE),
        (dct::NS_PREFERRED_PREFIX, dct::NS_BASE),
        (foaf::NS_PREFERRED_PREFIX, foaf::NS_BASE),
        (schema::NS_PREFERRED_PREFIX, schema::NS_BASE),
        (spdx::NS_PREFERRED_PREFIX, spdx::NS_BASE),
        ("rdf", basics::NS_BASE_RDF),
        ("rdfs", basics::NS_BASE_RDFS),
        ("xsd", basics::NS_BASE_XSD),
    ]
}

pub mod basics {
    pub const NS_BASE_RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const NS_BASE_RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const NS_BASE_XSD: &str = "http://www.w3.org/2001/XMLSchema#";
}
