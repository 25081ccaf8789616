// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use datacat_model::{Dataset, DateRange, Owner, Resource, SiteUrls};
use datacat_vocab::{dcat, dct, foaf, schema, spdx};
use oxrdf::{
    vocab::{rdf, xsd},
    BlankNode, Graph, Literal, LiteralRef, NamedNode, NamedNodeRef, Subject, SubjectRef, TermRef,
    TripleRef,
};

use crate::{terms, GraphResource};

fn add_literal(
    graph: &mut Graph,
    subject: SubjectRef<'_>,
    predicate: NamedNodeRef<'_>,
    value: &str,
) {
    graph.insert(TripleRef::new(
        subject,
        predicate,
        LiteralRef::new_simple_literal(value),
    ));
}

fn add_typed(
    graph: &mut Graph,
    subject: SubjectRef<'_>,
    predicate: NamedNodeRef<'_>,
    value: &Literal,
) {
    graph.insert(TripleRef::new(subject, predicate, value.as_ref()));
}

fn add_link(
    graph: &mut Graph,
    subject: SubjectRef<'_>,
    predicate: NamedNodeRef<'_>,
    object: &Subject,
) {
    graph.insert(TripleRef::new(
        subject,
        predicate,
        TermRef::from(object.as_ref()),
    ));
}

fn add_url(
    graph: &mut Graph,
    subject: SubjectRef<'_>,
    predicate: NamedNodeRef<'_>,
    url: &str,
) {
    let object = terms::url_term(url);
    graph.insert(TripleRef::new(subject, predicate, object.as_ref()));
}

fn add_temporal(graph: &mut Graph, subject: SubjectRef<'_>, range: &DateRange) {
    let period: Subject = BlankNode::default().into();
    let pot = period.as_ref();
    graph.insert(TripleRef::new(pot, rdf::TYPE, dct::PERIOD_OF_TIME));
    add_typed(
        graph,
        pot,
        schema::START_DATE,
        &terms::date_literal(&range.start()),
    );
    add_typed(
        graph,
        pot,
        schema::END_DATE,
        &terms::date_literal(&range.end()),
    );
    add_link(graph, subject, dct::TEMPORAL, &period);
}

fn add_publisher(graph: &mut Graph, subject: SubjectRef<'_>, owner: &Owner, urls: &SiteUrls) {
    let (node, typ) = match owner {
        Owner::Organization(org) => (
            terms::iri_or_blank(&urls.organization(org.id)),
            foaf::ORGANIZATION,
        ),
        Owner::User(user) => (terms::iri_or_blank(&urls.user(user.id)), foaf::PERSON),
    };
    graph.insert(TripleRef::new(node.as_ref(), rdf::TYPE, typ));
    add_literal(graph, node.as_ref(), foaf::NAME, owner.name());
    add_link(graph, subject, dct::PUBLISHER, &node);
}

fn checksum_algorithm(algorithm: &str) -> Option<NamedNode> {
    NamedNode::new(format!(
        "{}{}{}",
        spdx::NS_BASE,
        spdx::CHECKSUM_ALGORITHM_PREFIX,
        algorithm.to_lowercase()
    ))
    .map_err(|err| tracing::warn!("Unusable checksum algorithm '{algorithm}': {err}"))
    .ok()
}

fn add_resource(
    graph: &mut Graph,
    resource: &Resource,
    dataset: Option<&Dataset>,
    urls: &SiteUrls,
) -> Subject {
    let distribution: Subject = BlankNode::default().into();
    let node = distribution.as_ref();
    graph.insert(TripleRef::new(node, rdf::TYPE, dcat::DISTRIBUTION));
    add_literal(graph, node, dct::TITLE, &resource.title);
    if let Some(description) = &resource.description {
        add_literal(graph, node, dct::DESCRIPTION, description);
    }
    if !resource.url.is_empty() {
        add_url(graph, node, dcat::DOWNLOAD_URL, &resource.url);
    }
    if dataset.is_some() {
        add_url(graph, node, dcat::ACCESS_URL, &urls.resource(resource.id));
    }
    add_typed(
        graph,
        node,
        dct::ISSUED,
        &terms::date_time_literal(&resource.published),
    );
    add_typed(
        graph,
        node,
        dct::MODIFIED,
        &terms::date_time_literal(&resource.modified),
    );
    if let Some(filesize) = resource.filesize {
        add_typed(
            graph,
            node,
            dcat::BYTES_SIZE,
            &Literal::new_typed_literal(filesize.to_string(), xsd::INTEGER),
        );
    }
    if let Some(mime) = &resource.mime {
        add_literal(graph, node, dcat::MEDIA_TYPE, mime);
    }
    if let Some(format) = &resource.format {
        add_literal(graph, node, dct::FORMAT, format);
    }
    if let Some(license) = dataset.and_then(|dataset| dataset.license.as_ref()) {
        if let Some(url) = &license.url {
            add_url(graph, node, dct::LICENSE, url);
        }
        add_literal(graph, node, dct::RIGHTS, &license.title);
    }
    if let Some(checksum) = &resource.checksum {
        if let Some(algorithm) = checksum_algorithm(&checksum.algorithm) {
            let checksum_node: Subject = BlankNode::default().into();
            let chk = checksum_node.as_ref();
            graph.insert(TripleRef::new(chk, rdf::TYPE, spdx::CHECKSUM));
            graph.insert(TripleRef::new(chk, spdx::ALGORITHM, algorithm.as_ref()));
            add_literal(graph, chk, spdx::CHECKSUM_VALUE, &checksum.value);
            add_link(graph, node, spdx::HAS_CHECKSUM, &checksum_node);
        }
    }
    distribution
}

/// Describes a single resource as a `dcat:Distribution` (blank) node.
///
/// The parent `dataset` contributes the license,
/// and enables linking to the resource's permalink (`dcat:accessURL`).
#[must_use]
pub fn resource_to_rdf(
    resource: &Resource,
    dataset: Option<&Dataset>,
    urls: &SiteUrls,
) -> GraphResource {
    let mut graph = Graph::new();
    let subject = add_resource(&mut graph, resource, dataset, urls);
    GraphResource { graph, subject }
}

fn dataset_subject(dataset: &Dataset, urls: &SiteUrls) -> Subject {
    if let Some(uri) = dataset.remote_uri() {
        match NamedNode::new(uri) {
            Ok(node) => return node.into(),
            Err(err) => tracing::warn!("Ignoring invalid remote dataset URI <{uri}>: {err}"),
        }
    }
    dataset.id.map_or_else(
        || BlankNode::default().into(),
        |id| terms::iri_or_blank(&urls.dataset(id)),
    )
}

/// Describes a dataset, its resources and its publisher
/// as a `dcat:Dataset` node and the nodes hanging off of it.
///
/// The dataset node is identified by (in this order of preference)
/// the URI it has in the repository it was harvested from,
/// its page on this site if it is persisted,
/// or a blank node.
#[must_use]
pub fn dataset_to_rdf(dataset: &Dataset, urls: &SiteUrls) -> GraphResource {
    let mut graph = Graph::new();
    let subject = dataset_subject(dataset, urls);
    let node = subject.as_ref();

    graph.insert(TripleRef::new(node, rdf::TYPE, dcat::DATASET));
    if let Some(identifier) = dataset.identifier() {
        add_literal(&mut graph, node, dct::IDENTIFIER, &identifier);
    }
    add_literal(&mut graph, node, dct::TITLE, &dataset.title);
    if let Some(description) = &dataset.description {
        add_literal(&mut graph, node, dct::DESCRIPTION, description);
    }
    add_typed(
        &mut graph,
        node,
        dct::ISSUED,
        &terms::date_time_literal(&dataset.created_at),
    );
    add_typed(
        &mut graph,
        node,
        dct::MODIFIED,
        &terms::date_time_literal(&dataset.last_modified),
    );
    for tag in &dataset.tags {
        add_literal(&mut graph, node, dcat::KEYWORD, tag);
    }
    if let Some(range) = &dataset.temporal_coverage {
        add_temporal(&mut graph, node, range);
    }
    if let Some(owner) = &dataset.owner {
        add_publisher(&mut graph, node, owner, urls);
    }
    for resource in &dataset.resources {
        let distribution = add_resource(&mut graph, resource, Some(dataset), urls);
        add_link(&mut graph, node, dcat::HAS_DISTRIBUTION, &distribution);
    }

    tracing::debug!(
        "Exported dataset '{}' as {} triples",
        dataset.title,
        graph.len()
    );
    GraphResource { graph, subject }
}
