// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use datacat_mime as mime;
use datacat_vocab::all_prefixes;
use oxrdf::{
    vocab::{rdf, xsd},
    Graph, SubjectRef, TermRef, TripleRef,
};
use oxrdfio::{RdfFormat, RdfParser, RdfSerializer};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

use crate::RdfError;

#[derive(Debug, Clone)]
pub struct SerializeOptions {
    /// The URL of the JSON-LD context document to reference.
    /// If not set, the context is embedded into the document.
    pub context: Option<String>,
    /// Whether to declare our vocabulary prefixes,
    /// for the formats that support that.
    pub prefixes: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            context: None,
            prefixes: true,
        }
    }
}

impl SerializeOptions {
    #[must_use]
    pub fn with_context(context: String) -> Self {
        Self {
            context: Some(context),
            ..Self::default()
        }
    }
}

const fn to_oxrdf_format(fmt: mime::Type) -> Option<RdfFormat> {
    match fmt {
        mime::Type::N3 => Some(RdfFormat::N3),
        mime::Type::NTriples => Some(RdfFormat::NTriples),
        mime::Type::RdfXml => Some(RdfFormat::RdfXml),
        mime::Type::TriG => Some(RdfFormat::TriG),
        mime::Type::Turtle => Some(RdfFormat::Turtle),
        mime::Type::JsonLd => None,
    }
}

fn context_object() -> Map<String, Value> {
    all_prefixes()
        .into_iter()
        .map(|(prefix, namespace)| (prefix.to_owned(), Value::from(namespace)))
        .collect()
}

/// The JSON-LD context document of the site,
/// mapping our vocabulary prefixes to their namespaces.
#[must_use]
pub fn jsonld_context() -> Value {
    json!({ "@context": context_object() })
}

fn jsonld_id(subject: SubjectRef<'_>) -> Option<String> {
    match subject {
        SubjectRef::NamedNode(node) => Some(node.as_str().to_owned()),
        SubjectRef::BlankNode(node) => Some(format!("_:{}", node.as_str())),
        _ => None,
    }
}

fn jsonld_object(term: TermRef<'_>) -> Option<Value> {
    match term {
        TermRef::NamedNode(node) => Some(json!({ "@id": node.as_str() })),
        TermRef::BlankNode(node) => Some(json!({ "@id": format!("_:{}", node.as_str()) })),
        TermRef::Literal(literal) => Some(if let Some(language) = literal.language() {
            json!({ "@value": literal.value(), "@language": language })
        } else if literal.datatype() == xsd::STRING {
            json!({ "@value": literal.value() })
        } else {
            json!({ "@value": literal.value(), "@type": literal.datatype().as_str() })
        }),
        _ => None,
    }
}

fn push(node: &mut Map<String, Value>, key: &str, value: Value) {
    if let Value::Array(values) = node
        .entry(key)
        .or_insert_with(|| Value::Array(Vec::new()))
    {
        values.push(value);
    }
}

/// Writes the graph as flattened JSON-LD:
/// one node object per subject, listed under `@graph`.
fn serialize_jsonld(graph: &Graph, options: &SerializeOptions) -> Result<Vec<u8>, RdfError> {
    let mut nodes: BTreeMap<String, Map<String, Value>> = BTreeMap::new();
    for triple in graph {
        let (Some(id), Some(object)) = (jsonld_id(triple.subject), jsonld_object(triple.object))
        else {
            tracing::warn!("Skipping triple not representable in JSON-LD: {triple}");
            continue;
        };
        let node = nodes.entry(id.clone()).or_insert_with(|| {
            let mut node = Map::new();
            node.insert("@id".to_owned(), Value::from(id));
            node
        });
        match triple.object {
            TermRef::NamedNode(typ) if triple.predicate == rdf::TYPE => {
                push(node, "@type", Value::from(typ.as_str()));
            }
            _ => push(node, triple.predicate.as_str(), object),
        }
    }

    let context = options.context.as_ref().map_or_else(
        || Value::Object(context_object()),
        |url| Value::from(url.as_str()),
    );
    let document = json!({
        "@context": context,
        "@graph": nodes.into_values().map(Value::Object).collect::<Vec<_>>(),
    });
    Ok(serde_json::to_vec_pretty(&document)?)
}

/// Serializes the graph into the given format.
///
/// # Errors
///
/// If writing fails, which for our in-memory output
/// practically only happens with triples the format can not represent.
pub fn serialize(
    graph: &Graph,
    fmt: mime::Type,
    options: &SerializeOptions,
) -> Result<Vec<u8>, RdfError> {
    let Some(rdf_format) = to_oxrdf_format(fmt) else {
        return serialize_jsonld(graph, options);
    };
    let mut serializer = RdfSerializer::from_format(rdf_format);
    if options.prefixes && fmt.supports_prefixes() {
        for (prefix, namespace) in all_prefixes() {
            serializer = serializer.with_prefix(prefix, namespace)?;
        }
    }
    let mut writer = serializer.for_writer(Vec::new());
    for triple in graph {
        writer.serialize_triple(triple)?;
    }
    Ok(writer.finish()?)
}

/// Parses RDF content in any of our formats but JSON-LD.
/// Quads of named graphs end up in the default graph.
///
/// # Errors
///
/// - `RdfError::UnsupportedFormat` for JSON-LD
/// - `RdfError::Syntax` if the content is not valid in the given format
pub fn parse(content: &[u8], fmt: mime::Type) -> Result<Graph, RdfError> {
    let rdf_format = to_oxrdf_format(fmt).ok_or(RdfError::UnsupportedFormat(fmt))?;
    let mut graph = Graph::new();
    for quad_res in RdfParser::from_format(rdf_format).for_reader(content) {
        let quad = quad_res?;
        graph.insert(TripleRef::new(
            quad.subject.as_ref(),
            quad.predicate.as_ref(),
            quad.object.as_ref(),
        ));
    }
    tracing::debug!("Parsed {} triples of {fmt}", graph.len());
    Ok(graph)
}
