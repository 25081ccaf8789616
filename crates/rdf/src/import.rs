// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use datacat_model::{
    Checksum, Dataset, License, LicenseLookup, Resource, EXTRA_IDENTIFIER, EXTRA_URI,
};
use datacat_vocab::{dcat, dct, spdx};
use oxrdf::{vocab::rdf, Graph, NamedNodeRef, SubjectRef, TermRef, TripleRef};

use crate::{html::unwrap_html, temporal::temporal_from_rdf, terms, RdfError};

const NAMELESS_RESOURCE: &str = "Nameless resource";

fn first_subject_of_type<'a>(
    graph: &'a Graph,
    typ: NamedNodeRef<'static>,
) -> Result<SubjectRef<'a>, RdfError> {
    graph
        .subjects_for_predicate_object(rdf::TYPE, typ)
        .next()
        .ok_or_else(|| RdfError::MissingSubject(typ.into_owned()))
}

fn date_time(
    graph: &Graph,
    node: SubjectRef<'_>,
    predicate: NamedNodeRef<'_>,
) -> Option<chrono::NaiveDateTime> {
    let value = terms::literal(graph, node, predicate)?;
    let parsed = terms::parse_date_time(value);
    if parsed.is_none() {
        tracing::warn!("Ignoring unparsable {predicate} date-time value '{value}'");
    }
    parsed
}

fn description(graph: &Graph, node: SubjectRef<'_>) -> Option<String> {
    terms::literal(graph, node, dct::DESCRIPTION).map(unwrap_html)
}

fn url<'a>(graph: &'a Graph, node: SubjectRef<'_>) -> Option<&'a str> {
    [dcat::DOWNLOAD_URL, dcat::ACCESS_URL]
        .into_iter()
        .find_map(|predicate| {
            graph
                .object_for_subject_predicate(node, predicate)
                .and_then(terms::iri_or_literal_value)
        })
}

/// Names a resource after the last segment of its URL.
fn title_from_url(url: &str) -> String {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty() && !segment.contains(':'))
        .map_or_else(|| NAMELESS_RESOURCE.to_owned(), ToOwned::to_owned)
}

fn checksum_from_rdf(graph: &Graph, node: SubjectRef<'_>) -> Option<Checksum> {
    let checksum = graph
        .objects_for_subject_predicate(node, spdx::HAS_CHECKSUM)
        .filter_map(terms::as_subject)
        .find(|checksum| graph.contains(TripleRef::new(*checksum, rdf::TYPE, spdx::CHECKSUM)))?;
    let algorithm = match graph.object_for_subject_predicate(checksum, spdx::ALGORITHM)? {
        TermRef::NamedNode(algorithm) => {
            let local = algorithm
                .as_str()
                .rsplit(['#', '/'])
                .next()
                .unwrap_or_default();
            local
                .strip_prefix(spdx::CHECKSUM_ALGORITHM_PREFIX)
                .unwrap_or(local)
                .to_lowercase()
        }
        TermRef::Literal(algorithm) => algorithm.value().to_lowercase(),
        _ => return None,
    };
    let value = terms::literal(graph, checksum, spdx::CHECKSUM_VALUE)?;
    Some(Checksum {
        algorithm,
        value: value.to_owned(),
    })
}

fn fill_resource(graph: &Graph, node: SubjectRef<'_>, resource: &mut Resource) {
    if let Some(title) = terms::literal(graph, node, dct::TITLE) {
        title.clone_into(&mut resource.title);
    } else if resource.title.is_empty() {
        resource.title = title_from_url(&resource.url);
    }
    if let Some(description) = description(graph, node) {
        resource.description = Some(description);
    }
    if let Some(published) = date_time(graph, node, dct::ISSUED) {
        resource.published = published;
    }
    if let Some(modified) = date_time(graph, node, dct::MODIFIED) {
        resource.modified = modified;
    }
    if let Some(size) = [dcat::BYTES_SIZE, dcat::BYTE_SIZE]
        .into_iter()
        .find_map(|predicate| terms::literal(graph, node, predicate))
    {
        match size.trim().parse::<u64>() {
            Ok(filesize) => resource.filesize = Some(filesize),
            Err(err) => tracing::warn!("Ignoring invalid distribution size '{size}': {err}"),
        }
    }
    if let Some(mime) = terms::literal(graph, node, dcat::MEDIA_TYPE) {
        resource.mime = Some(mime.to_owned());
    }
    if let Some(format) = terms::literal(graph, node, dct::FORMAT) {
        resource.format = Some(format.to_lowercase());
    }
    if let Some(checksum) = checksum_from_rdf(graph, node) {
        resource.checksum = Some(checksum);
    }
}

/// Reads the `dcat:Distribution` at `node` into a resource.
///
/// With a `dataset` given, the resource with the same URL is updated in place
/// (keeping its id), or a new one is appended to the dataset;
/// either way, a copy of the stored resource is returned.
pub fn resource_from_rdf(
    graph: &Graph,
    node: SubjectRef<'_>,
    dataset: Option<&mut Dataset>,
) -> Resource {
    let url = url(graph, node).unwrap_or_default();
    if let Some(dataset) = dataset {
        let resource = dataset.resource_for_url_mut(url);
        fill_resource(graph, node, resource);
        resource.clone()
    } else {
        let mut resource = Resource::new(String::new(), url.to_owned());
        fill_resource(graph, node, &mut resource);
        resource
    }
}

/// Reads the first `dcat:Distribution` in the graph into a new resource.
///
/// # Errors
///
/// `RdfError::MissingSubject` if the graph contains no distribution.
pub fn resource_from_graph(graph: &Graph) -> Result<Resource, RdfError> {
    let node = first_subject_of_type(graph, dcat::DISTRIBUTION)?;
    Ok(resource_from_rdf(graph, node, None))
}

fn license_from_rdf<'l, L: LicenseLookup + ?Sized>(
    graph: &Graph,
    distribution: SubjectRef<'_>,
    licenses: &'l L,
) -> Option<&'l License> {
    enum By {
        Url,
        Title,
    }
    let license = graph.object_for_subject_predicate(distribution, dct::LICENSE);
    let rights = graph.object_for_subject_predicate(distribution, dct::RIGHTS);
    let iri = |term: Option<TermRef<'_>>| match term? {
        TermRef::NamedNode(node) => Some(node.as_str().to_owned()),
        _ => None,
    };
    let literal = |term: Option<TermRef<'_>>| terms::literal_value(term?).map(ToOwned::to_owned);

    // Tried in order, the first match wins.
    let candidates = [
        (iri(license), By::Url),
        (iri(rights), By::Url),
        (literal(license), By::Url),
        (literal(license), By::Title),
    ];
    candidates.into_iter().find_map(|(value, by)| {
        let value = value?;
        match by {
            By::Url => licenses.by_url(&value),
            By::Title => licenses.by_title(&value),
        }
    })
}

/// Updates (or creates) a dataset from the `dcat:Dataset` at `node`.
pub fn dataset_from_rdf_node<L: LicenseLookup + ?Sized>(
    graph: &Graph,
    node: SubjectRef<'_>,
    dataset: Option<Dataset>,
    licenses: &L,
) -> Dataset {
    let mut dataset = dataset.unwrap_or_default();

    if let Some(title) = terms::literal(graph, node, dct::TITLE) {
        title.clone_into(&mut dataset.title);
    }
    if let Some(description) = description(graph, node) {
        dataset.description = Some(description);
    }
    if let Some(created_at) = date_time(graph, node, dct::ISSUED) {
        dataset.created_at = created_at;
    }
    if let Some(last_modified) = date_time(graph, node, dct::MODIFIED) {
        dataset.last_modified = last_modified;
    }
    dataset.tags = [dcat::KEYWORD, dcat::THEME]
        .into_iter()
        .flat_map(|predicate| graph.objects_for_subject_predicate(node, predicate))
        .filter_map(terms::literal_value)
        .map(ToOwned::to_owned)
        .collect();
    if let Some(temporal) = graph.object_for_subject_predicate(node, dct::TEMPORAL) {
        if let Some(range) = temporal_from_rdf(graph, temporal) {
            dataset.temporal_coverage = Some(range);
        }
    }

    if let Some(identifier) = terms::literal(graph, node, dct::IDENTIFIER) {
        dataset
            .extras
            .insert(EXTRA_IDENTIFIER.to_owned(), identifier.to_owned());
    }
    if let SubjectRef::NamedNode(uri) = node {
        dataset
            .extras
            .insert(EXTRA_URI.to_owned(), uri.as_str().to_owned());
    }

    let distributions: Vec<_> = graph
        .objects_for_subject_predicate(node, dcat::HAS_DISTRIBUTION)
        .filter_map(terms::as_subject)
        .collect();
    let mut license = None;
    for distribution in distributions {
        resource_from_rdf(graph, distribution, Some(&mut dataset));
        if license.is_none() {
            license = license_from_rdf(graph, distribution, licenses);
        }
    }
    if let Some(license) = license {
        dataset.license = Some(license.clone());
    }

    tracing::debug!(
        "Imported dataset '{}' with {} resources",
        dataset.title,
        dataset.resources.len()
    );
    dataset
}

/// Reads the first `dcat:Dataset` in the graph
/// into `dataset` (if given) or a new dataset.
///
/// Licenses referenced by the distributions are resolved through `licenses`.
///
/// # Errors
///
/// `RdfError::MissingSubject` if the graph contains no dataset.
pub fn dataset_from_rdf<L: LicenseLookup + ?Sized>(
    graph: &Graph,
    dataset: Option<Dataset>,
    licenses: &L,
) -> Result<Dataset, RdfError> {
    let node = first_subject_of_type(graph, dcat::DATASET)?;
    Ok(dataset_from_rdf_node(graph, node, dataset, licenses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use datacat_model::{DateRange, SiteUrls};
    use oxrdf::{vocab::xsd, BlankNode, Literal, LiteralRef, NamedNode, Subject};
    use std::collections::BTreeSet;
    use uuid::Uuid;

    use crate::export::dataset_to_rdf;

    fn no_licenses() -> Vec<License> {
        Vec::new()
    }

    fn license() -> License {
        License {
            id: "odc-odbl".to_owned(),
            title: "Open Data Commons Open Database License".to_owned(),
            url: Some("http://opendatacommons.org/licenses/odbl/summary/".to_owned()),
        }
    }

    fn licenses() -> Vec<License> {
        vec![
            License {
                id: "other".to_owned(),
                title: "Some other license".to_owned(),
                url: Some("http://example.org/licenses/other".to_owned()),
            },
            license(),
        ]
    }

    fn blank() -> Subject {
        BlankNode::default().into()
    }

    fn add_literal(graph: &mut Graph, node: &Subject, predicate: NamedNodeRef<'_>, value: &str) {
        graph.insert(TripleRef::new(
            node.as_ref(),
            predicate,
            LiteralRef::new_simple_literal(value),
        ));
    }

    fn add_type(graph: &mut Graph, node: &Subject, typ: NamedNodeRef<'_>) {
        graph.insert(TripleRef::new(node.as_ref(), rdf::TYPE, typ));
    }

    fn add_link(graph: &mut Graph, node: &Subject, predicate: NamedNodeRef<'_>, object: &Subject) {
        graph.insert(TripleRef::new(
            node.as_ref(),
            predicate,
            TermRef::from(object.as_ref()),
        ));
    }

    fn dataset_with_distribution(
        build: impl FnOnce(&mut Graph, &Subject),
    ) -> Graph {
        let mut graph = Graph::new();
        let node = blank();
        add_type(&mut graph, &node, dcat::DATASET);
        let distribution = blank();
        add_type(&mut graph, &distribution, dcat::DISTRIBUTION);
        build(&mut graph, &distribution);
        add_link(&mut graph, &node, dcat::HAS_DISTRIBUTION, &distribution);
        graph
    }

    #[test]
    fn minimal() {
        let mut graph = Graph::new();
        let node = blank();
        add_type(&mut graph, &node, dcat::DATASET);
        add_literal(&mut graph, &node, dct::TITLE, "A dataset title");

        let dataset = dataset_from_rdf(&graph, None, &no_licenses()).unwrap();
        assert_eq!(dataset.title, "A dataset title");
        assert!(!dataset.is_persisted());
        assert!(!dataset.extras.contains_key(EXTRA_URI));
    }

    #[test]
    fn missing_dataset() {
        assert!(matches!(
            dataset_from_rdf(&Graph::new(), None, &no_licenses()),
            Err(RdfError::MissingSubject(_))
        ));
        assert!(matches!(
            resource_from_graph(&Graph::new()),
            Err(RdfError::MissingSubject(_))
        ));
    }

    #[test]
    fn update() {
        let mut original = Dataset::new("Original title".to_owned());
        let id = Uuid::new_v4();
        original.id = Some(id);

        let mut graph = Graph::new();
        let node: Subject = NamedNode::new_unchecked("https://test.org/dataset").into();
        add_type(&mut graph, &node, dcat::DATASET);
        add_literal(&mut graph, &node, dct::TITLE, "New title");

        let dataset = dataset_from_rdf(&graph, Some(original), &no_licenses()).unwrap();
        assert_eq!(dataset.id, Some(id));
        assert_eq!(dataset.title, "New title");
    }

    #[test]
    fn all_fields() {
        let mut graph = Graph::new();
        let node: Subject = NamedNode::new_unchecked("https://test.org/dataset").into();
        let identifier = Uuid::new_v4().to_string();
        add_type(&mut graph, &node, dcat::DATASET);
        add_literal(&mut graph, &node, dct::IDENTIFIER, &identifier);
        add_literal(&mut graph, &node, dct::TITLE, "A title");
        add_literal(&mut graph, &node, dct::DESCRIPTION, "A description");
        for tag in ["one", "two", "three"] {
            add_literal(&mut graph, &node, dcat::KEYWORD, tag);
        }
        let pot = blank();
        add_type(&mut graph, &pot, dct::PERIOD_OF_TIME);
        graph.insert(TripleRef::new(
            pot.as_ref(),
            datacat_vocab::schema::START_DATE,
            Literal::new_typed_literal("2017-02-01", xsd::DATE).as_ref(),
        ));
        graph.insert(TripleRef::new(
            pot.as_ref(),
            datacat_vocab::schema::END_DATE,
            Literal::new_typed_literal("2017-03-15", xsd::DATE).as_ref(),
        ));
        add_link(&mut graph, &node, dct::TEMPORAL, &pot);

        let dataset = dataset_from_rdf(&graph, None, &no_licenses()).unwrap();

        assert_eq!(dataset.title, "A title");
        assert_eq!(dataset.description.as_deref(), Some("A description"));
        assert_eq!(
            dataset.tags,
            BTreeSet::from(["one".to_owned(), "two".to_owned(), "three".to_owned()])
        );
        let range = dataset.temporal_coverage.unwrap();
        assert_eq!(range.start(), NaiveDate::from_ymd_opt(2017, 2, 1).unwrap());
        assert_eq!(range.end(), NaiveDate::from_ymd_opt(2017, 3, 15).unwrap());
        assert_eq!(dataset.extras.get(EXTRA_IDENTIFIER), Some(&identifier));
        assert_eq!(
            dataset.extras.get(EXTRA_URI).map(String::as_str),
            Some("https://test.org/dataset")
        );
    }

    #[test]
    fn html_description() {
        let mut graph = Graph::new();
        let node = blank();
        add_type(&mut graph, &node, dcat::DATASET);
        add_literal(&mut graph, &node, dct::TITLE, "A title");
        add_literal(&mut graph, &node, dct::DESCRIPTION, "<div>a description</div>");

        let dataset = dataset_from_rdf(&graph, None, &no_licenses()).unwrap();
        assert_eq!(dataset.description.as_deref(), Some("a description"));
    }

    #[test]
    fn theme_and_tags() {
        let mut graph = Graph::new();
        let node = blank();
        add_type(&mut graph, &node, dcat::DATASET);
        for tag in ["air", "water"] {
            add_literal(&mut graph, &node, dcat::KEYWORD, tag);
        }
        for theme in ["environment", "air"] {
            add_literal(&mut graph, &node, dcat::THEME, theme);
        }

        let dataset = dataset_from_rdf(&graph, None, &no_licenses()).unwrap();
        assert_eq!(
            dataset.tags,
            BTreeSet::from(["air".to_owned(), "environment".to_owned(), "water".to_owned()])
        );
    }

    #[test]
    fn minimal_resource_fields() {
        let mut graph = Graph::new();
        let node = blank();
        add_type(&mut graph, &node, dcat::DISTRIBUTION);
        add_literal(&mut graph, &node, dct::TITLE, "A resource");
        add_literal(&mut graph, &node, dcat::DOWNLOAD_URL, "http://example.org/a.csv");

        let resource = resource_from_rdf(&graph, node.as_ref(), None);
        assert_eq!(resource.title, "A resource");
        assert_eq!(resource.url, "http://example.org/a.csv");
    }

    #[test]
    fn all_resource_fields() {
        let mut graph = Graph::new();
        let node = blank();
        let sha1 = "a94a8fe5ccb19ba61c4c0873d391e987982fbbd3";
        add_type(&mut graph, &node, dcat::DISTRIBUTION);
        add_literal(&mut graph, &node, dct::TITLE, "A resource");
        add_literal(&mut graph, &node, dct::DESCRIPTION, "A resource description");
        add_literal(&mut graph, &node, dcat::DOWNLOAD_URL, "http://example.org/a.csv");
        add_literal(&mut graph, &node, dct::ISSUED, "2017-01-05T10:20:30");
        add_literal(&mut graph, &node, dct::MODIFIED, "2017-02-06T11:21:31");
        graph.insert(TripleRef::new(
            node.as_ref(),
            dcat::BYTES_SIZE,
            Literal::new_typed_literal("4242", xsd::INTEGER).as_ref(),
        ));
        add_literal(&mut graph, &node, dcat::MEDIA_TYPE, "text/csv");
        add_literal(&mut graph, &node, dct::FORMAT, "CSV");
        let checksum = blank();
        add_type(&mut graph, &checksum, spdx::CHECKSUM);
        graph.insert(TripleRef::new(
            checksum.as_ref(),
            spdx::ALGORITHM,
            spdx::CHECKSUM_ALGORITHM_SHA1,
        ));
        add_literal(&mut graph, &checksum, spdx::CHECKSUM_VALUE, sha1);
        add_link(&mut graph, &node, spdx::HAS_CHECKSUM, &checksum);

        let resource = resource_from_graph(&graph).unwrap();

        assert_eq!(resource.title, "A resource");
        assert_eq!(resource.url, "http://example.org/a.csv");
        assert_eq!(resource.description.as_deref(), Some("A resource description"));
        assert_eq!(resource.filesize, Some(4242));
        assert_eq!(resource.mime.as_deref(), Some("text/csv"));
        assert_eq!(
            resource.checksum,
            Some(Checksum {
                algorithm: "sha1".to_owned(),
                value: sha1.to_owned(),
            })
        );
        assert_eq!(
            resource.published,
            NaiveDate::from_ymd_opt(2017, 1, 5)
                .unwrap()
                .and_hms_opt(10, 20, 30)
                .unwrap()
        );
        assert_eq!(
            resource.modified,
            NaiveDate::from_ymd_opt(2017, 2, 6)
                .unwrap()
                .and_hms_opt(11, 21, 31)
                .unwrap()
        );
        assert_eq!(resource.format.as_deref(), Some("csv"));
    }

    #[test]
    fn untyped_checksum_is_ignored() {
        let mut graph = Graph::new();
        let node = blank();
        add_type(&mut graph, &node, dcat::DISTRIBUTION);
        let checksum = blank();
        graph.insert(TripleRef::new(
            checksum.as_ref(),
            spdx::ALGORITHM,
            spdx::CHECKSUM_ALGORITHM_SHA1,
        ));
        add_literal(&mut graph, &checksum, spdx::CHECKSUM_VALUE, "abc");
        add_link(&mut graph, &node, spdx::HAS_CHECKSUM, &checksum);

        assert_eq!(resource_from_graph(&graph).unwrap().checksum, None);
    }

    #[test]
    fn download_url_over_access_url() {
        let mut graph = Graph::new();
        let node = blank();
        add_type(&mut graph, &node, dcat::DISTRIBUTION);
        add_literal(&mut graph, &node, dct::TITLE, "A resource");
        add_literal(&mut graph, &node, dcat::ACCESS_URL, "http://example.org/access");

        let resource = resource_from_rdf(&graph, node.as_ref(), None);
        assert_eq!(resource.url, "http://example.org/access");

        graph.insert(TripleRef::new(
            node.as_ref(),
            dcat::DOWNLOAD_URL,
            NamedNodeRef::new_unchecked("http://example.org/download"),
        ));
        let resource = resource_from_rdf(&graph, node.as_ref(), None);
        assert_eq!(resource.url, "http://example.org/download");
    }

    #[test]
    fn resource_html_description() {
        let mut graph = Graph::new();
        let node = blank();
        add_type(&mut graph, &node, dcat::DISTRIBUTION);
        add_literal(&mut graph, &node, dct::DESCRIPTION, "<div>Some words</div>");

        let resource = resource_from_rdf(&graph, node.as_ref(), None);
        assert_eq!(resource.description.as_deref(), Some("Some words"));
    }

    #[test]
    fn nameless_resource_gets_title_from_url() {
        let mut graph = Graph::new();
        let node = blank();
        add_type(&mut graph, &node, dcat::DISTRIBUTION);
        add_literal(&mut graph, &node, dcat::DOWNLOAD_URL, "http://example.org/data/air.csv");
        assert_eq!(resource_from_rdf(&graph, node.as_ref(), None).title, "air.csv");

        let mut graph = Graph::new();
        add_type(&mut graph, &node, dcat::DISTRIBUTION);
        assert_eq!(
            resource_from_rdf(&graph, node.as_ref(), None).title,
            NAMELESS_RESOURCE
        );
    }

    #[test]
    fn match_existing_resource_by_url() {
        let mut dataset = Dataset::new("With resources".to_owned());
        for idx in 0..3 {
            dataset.resources.push(Resource::new(
                format!("Resource {idx}"),
                format!("http://example.org/{idx}.csv"),
            ));
        }
        let existing_id = dataset.resources[1].id;

        let mut graph = Graph::new();
        let node = blank();
        add_type(&mut graph, &node, dcat::DISTRIBUTION);
        add_literal(&mut graph, &node, dct::TITLE, "New title");
        add_literal(&mut graph, &node, dcat::DOWNLOAD_URL, "http://example.org/1.csv");

        let resource = resource_from_rdf(&graph, node.as_ref(), Some(&mut dataset));
        assert_eq!(resource.title, "New title");
        assert_eq!(resource.id, existing_id);
        assert_eq!(dataset.resources.len(), 3);
        assert_eq!(dataset.resources[1].title, "New title");
    }

    #[test]
    fn dataset_has_resources() {
        let mut graph = Graph::new();
        let node = blank();
        add_type(&mut graph, &node, dcat::DATASET);
        add_literal(&mut graph, &node, dct::TITLE, "A title");
        for idx in 0..3 {
            let distribution = blank();
            add_type(&mut graph, &distribution, dcat::DISTRIBUTION);
            add_literal(&mut graph, &distribution, dct::TITLE, &format!("Resource {idx}"));
            graph.insert(TripleRef::new(
                distribution.as_ref(),
                dcat::DOWNLOAD_URL,
                NamedNode::new_unchecked(format!("http://example.org/{idx}.csv")).as_ref(),
            ));
            add_link(&mut graph, &node, dcat::HAS_DISTRIBUTION, &distribution);
        }

        let dataset = dataset_from_rdf(&graph, None, &no_licenses()).unwrap();
        assert_eq!(dataset.resources.len(), 3);
    }

    #[test]
    fn match_license_from_license_uri() {
        let graph = dataset_with_distribution(|graph, distribution| {
            graph.insert(TripleRef::new(
                distribution.as_ref(),
                dct::LICENSE,
                NamedNodeRef::new_unchecked("http://opendatacommons.org/licenses/odbl/summary/"),
            ));
        });
        let dataset = dataset_from_rdf(&graph, None, &licenses()).unwrap();
        assert_eq!(dataset.license, Some(license()));
    }

    #[test]
    fn match_license_from_rights_uri() {
        let graph = dataset_with_distribution(|graph, distribution| {
            graph.insert(TripleRef::new(
                distribution.as_ref(),
                dct::RIGHTS,
                NamedNodeRef::new_unchecked("http://opendatacommons.org/licenses/odbl/summary/"),
            ));
        });
        let dataset = dataset_from_rdf(&graph, None, &licenses()).unwrap();
        assert_eq!(dataset.license, Some(license()));
    }

    #[test]
    fn match_license_from_license_uri_literal() {
        let graph = dataset_with_distribution(|graph, distribution| {
            add_literal(
                graph,
                distribution,
                dct::LICENSE,
                "http://opendatacommons.org/licenses/odbl/summary/",
            );
        });
        let dataset = dataset_from_rdf(&graph, None, &licenses()).unwrap();
        assert_eq!(dataset.license, Some(license()));
    }

    #[test]
    fn match_license_from_license_title() {
        let graph = dataset_with_distribution(|graph, distribution| {
            add_literal(
                graph,
                distribution,
                dct::LICENSE,
                "Open Data Commons Open Database License",
            );
        });
        let dataset = dataset_from_rdf(&graph, None, &licenses()).unwrap();
        assert_eq!(dataset.license, Some(license()));
    }

    #[test]
    fn license_uri_wins_over_rights_uri() {
        let graph = dataset_with_distribution(|graph, distribution| {
            graph.insert(TripleRef::new(
                distribution.as_ref(),
                dct::RIGHTS,
                NamedNodeRef::new_unchecked("http://example.org/licenses/other"),
            ));
            graph.insert(TripleRef::new(
                distribution.as_ref(),
                dct::LICENSE,
                NamedNodeRef::new_unchecked("http://opendatacommons.org/licenses/odbl/summary/"),
            ));
        });
        let dataset = dataset_from_rdf(&graph, None, &licenses()).unwrap();
        assert_eq!(dataset.license, Some(license()));
    }

    #[test]
    fn unknown_license_is_left_unset() {
        let graph = dataset_with_distribution(|graph, distribution| {
            add_literal(graph, distribution, dct::LICENSE, "Some unknown license");
        });
        let dataset = dataset_from_rdf(&graph, None, &licenses()).unwrap();
        assert_eq!(dataset.license, None);
    }

    #[test]
    fn unicode() {
        let mut graph = Graph::new();
        let node = blank();
        add_type(&mut graph, &node, dcat::DATASET);
        add_literal(&mut graph, &node, dct::TITLE, "ééé");
        add_literal(&mut graph, &node, dct::DESCRIPTION, "éééé");
        let distribution = blank();
        add_type(&mut graph, &distribution, dcat::DISTRIBUTION);
        add_literal(&mut graph, &distribution, dct::TITLE, "ééé");
        add_literal(&mut graph, &distribution, dct::DESCRIPTION, "éééé");
        add_link(&mut graph, &node, dcat::HAS_DISTRIBUTION, &distribution);

        let dataset = dataset_from_rdf(&graph, None, &no_licenses()).unwrap();
        assert_eq!(dataset.title, "ééé");
        assert_eq!(dataset.description.as_deref(), Some("éééé"));
        assert_eq!(dataset.resources[0].title, "ééé");
        assert_eq!(dataset.resources[0].description.as_deref(), Some("éééé"));
    }

    #[test]
    fn round_trip() {
        let mut dataset = Dataset::new("Round trip".to_owned());
        dataset.description = Some("Goes out and comes back".to_owned());
        dataset.tags = BTreeSet::from(["out".to_owned(), "back".to_owned()]);
        dataset.temporal_coverage = Some(DateRange::month(2016, 2).unwrap());
        dataset
            .extras
            .insert(EXTRA_IDENTIFIER.to_owned(), "an-identifier".to_owned());
        dataset
            .extras
            .insert(EXTRA_URI.to_owned(), "https://somewhere.org/dataset".to_owned());
        dataset.license = Some(license());
        let mut resource = Resource::new(
            "A resource".to_owned(),
            "http://example.org/a.csv".to_owned(),
        );
        resource.checksum = Some(Checksum {
            algorithm: "sha256".to_owned(),
            value: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855".to_owned(),
        });
        dataset.resources.push(resource);

        let urls = SiteUrls::new("http://local.test/").unwrap();
        let exported = dataset_to_rdf(&dataset, &urls);
        let imported = dataset_from_rdf(&exported.graph, None, &licenses()).unwrap();

        assert_eq!(imported.title, dataset.title);
        assert_eq!(imported.description, dataset.description);
        assert_eq!(imported.tags, dataset.tags);
        assert_eq!(imported.temporal_coverage, dataset.temporal_coverage);
        assert_eq!(imported.extras, dataset.extras);
        assert_eq!(imported.created_at, dataset.created_at);
        assert_eq!(imported.last_modified, dataset.last_modified);
        assert_eq!(imported.license, dataset.license);
        assert_eq!(imported.resources.len(), 1);
        assert_eq!(imported.resources[0].url, dataset.resources[0].url);
        assert_eq!(imported.resources[0].checksum, dataset.resources[0].checksum);
        assert_eq!(imported.resources[0].published, dataset.resources[0].published);
    }

    #[test]
    fn reimport_into_own_output_is_stable() {
        let mut dataset = Dataset::new("Harvested".to_owned());
        dataset.temporal_coverage = Some(DateRange::year(2019).unwrap());
        dataset
            .extras
            .insert(EXTRA_URI.to_owned(), "https://somewhere.org/harvested".to_owned());
        dataset.license = Some(license());
        dataset.resources.push(Resource::new(
            "Yearly figures".to_owned(),
            "http://example.org/figures.csv".to_owned(),
        ));
        let urls = SiteUrls::new("http://local.test/").unwrap();

        let first_graph = dataset_to_rdf(&dataset, &urls).graph;
        let first = dataset_from_rdf(&first_graph, None, &licenses()).unwrap();
        let second_graph = dataset_to_rdf(&first, &urls).graph;
        let second = dataset_from_rdf(&second_graph, Some(first.clone()), &licenses()).unwrap();

        assert_eq!(second.resources.len(), first.resources.len());
        assert_eq!(second.resources[0].id, first.resources[0].id);
        assert_eq!(second.resources[0].url, first.resources[0].url);
        assert_eq!(second.extras, first.extras);
        assert_eq!(second.temporal_coverage, first.temporal_coverage);
        assert_eq!(second.license, first.license);
        assert_eq!(dataset_to_rdf(&second, &urls).graph.len(), second_graph.len());
    }
}
