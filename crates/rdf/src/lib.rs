// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Conversion of catalog datasets and resources
//! from and to DCAT flavored RDF.

mod export;
mod html;
mod import;
mod serialize;
mod temporal;
mod terms;

pub use export::{dataset_to_rdf, resource_to_rdf};
pub use html::unwrap_html;
pub use import::{dataset_from_rdf, dataset_from_rdf_node, resource_from_graph, resource_from_rdf};
pub use serialize::{jsonld_context, parse, serialize, SerializeOptions};
pub use temporal::temporal_from_rdf;

use datacat_mime as mime;
use oxrdf::{Graph, NamedNode, NamedNodeRef, Subject, SubjectRef, TermRef};
use oxrdfio::RdfParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RdfError {
    #[error("The graph contains no node of type <{0}>")]
    MissingSubject(NamedNode),

    #[error("The RDF format {0} is not supported for this operation")]
    UnsupportedFormat(mime::Type),

    #[error("Invalid IRI: {0}")]
    InvalidIri(#[from] oxrdf::IriParseError),

    #[error("RDF syntax error: {0}")]
    Syntax(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to write JSON-LD: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<RdfParseError> for RdfError {
    fn from(parse_err: RdfParseError) -> Self {
        match parse_err {
            RdfParseError::Io(io_err) => Self::Io(io_err),
            RdfParseError::Syntax(syntax_err) => Self::Syntax(syntax_err.to_string()),
        }
    }
}

/// A graph together with the node in it
/// that describes the exported object.
#[derive(Debug, Clone)]
pub struct GraphResource {
    pub graph: Graph,
    pub subject: Subject,
}

impl GraphResource {
    #[must_use]
    pub fn subject(&self) -> SubjectRef<'_> {
        self.subject.as_ref()
    }

    /// Any one object of `predicate` on our subject.
    #[must_use]
    pub fn value(&self, predicate: NamedNodeRef<'_>) -> Option<TermRef<'_>> {
        self.graph
            .object_for_subject_predicate(self.subject.as_ref(), predicate)
    }

    /// All objects of `predicate` on our subject.
    pub fn objects<'a>(
        &'a self,
        predicate: NamedNodeRef<'a>,
    ) -> impl Iterator<Item = TermRef<'a>> + 'a {
        self.graph
            .objects_for_subject_predicate(self.subject.as_ref(), predicate)
    }

    /// The lexical value of the literal object of `predicate`, if any.
    #[must_use]
    pub fn literal(&self, predicate: NamedNodeRef<'_>) -> Option<&str> {
        terms::literal_value(self.value(predicate)?)
    }

    /// Follows `predicate` to another node of the same graph.
    #[must_use]
    pub fn follow(&self, predicate: NamedNodeRef<'_>) -> Option<SubjectRef<'_>> {
        terms::as_subject(self.value(predicate)?)
    }
}
