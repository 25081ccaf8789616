// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use datacat_model::DateRange;
use datacat_vocab::{dcat, dct, schema};
use once_cell::sync::Lazy;
use oxrdf::{vocab::rdf, Graph, NamedNodeRef, SubjectRef, TermRef, TripleRef};
use regex::Regex;

use crate::terms;

static ISO_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").unwrap());
static ISO_MONTH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})$").unwrap());
static YEAR_URI: Lazy<Regex> = Lazy::new(|| Regex::new(r"/year/(\d{4})/?$").unwrap());

type TemporalParser = fn(&Graph, TermRef<'_>) -> Option<DateRange>;

/// Tried in order, the first one that yields a range wins.
const PARSERS: [(&str, TemporalParser); 5] = [
    ("period of time", from_period_of_time),
    ("ISO interval", from_iso_interval),
    ("ISO year", from_iso_year),
    ("ISO month", from_iso_month),
    ("year URI", from_year_uri),
];

fn bound(
    graph: &Graph,
    period: SubjectRef<'_>,
    predicates: [NamedNodeRef<'_>; 2],
) -> Option<chrono::NaiveDate> {
    predicates
        .into_iter()
        .find_map(|predicate| terms::literal(graph, period, predicate))
        .and_then(terms::parse_date)
}

fn from_period_of_time(graph: &Graph, term: TermRef<'_>) -> Option<DateRange> {
    let period = terms::as_subject(term)?;
    if !graph.contains(TripleRef::new(period, rdf::TYPE, dct::PERIOD_OF_TIME)) {
        return None;
    }
    let start = bound(graph, period, [schema::START_DATE, dcat::START_DATE])?;
    let end = bound(graph, period, [schema::END_DATE, dcat::END_DATE])?;
    DateRange::new(start, end).ok()
}

fn from_iso_interval(_graph: &Graph, term: TermRef<'_>) -> Option<DateRange> {
    let (start, end) = terms::literal_value(term)?.split_once('/')?;
    DateRange::new(terms::parse_date(start)?, terms::parse_date(end)?).ok()
}

fn from_iso_year(_graph: &Graph, term: TermRef<'_>) -> Option<DateRange> {
    let value = terms::literal_value(term)?.trim();
    if !ISO_YEAR.is_match(value) {
        return None;
    }
    DateRange::year(value.parse().ok()?).ok()
}

fn from_iso_month(_graph: &Graph, term: TermRef<'_>) -> Option<DateRange> {
    let caps = ISO_MONTH.captures(terms::literal_value(term)?.trim())?;
    let year = caps.get(1)?.as_str().parse().ok()?;
    let month = caps.get(2)?.as_str().parse().ok()?;
    DateRange::month(year, month).ok()
}

fn from_year_uri(_graph: &Graph, term: TermRef<'_>) -> Option<DateRange> {
    let TermRef::NamedNode(node) = term else {
        return None;
    };
    let caps = YEAR_URI.captures(node.as_str())?;
    DateRange::year(caps.get(1)?.as_str().parse().ok()?).ok()
}

/// Extracts a temporal coverage from a `dct:temporal` object.
///
/// This never fails;
/// anything not recognized as one of the supported encodings
/// results in `None`, and a logged warning.
#[must_use]
pub fn temporal_from_rdf(graph: &Graph, term: TermRef<'_>) -> Option<DateRange> {
    let parsed = PARSERS.iter().find_map(|(name, parser)| {
        parser(graph, term).inspect(|range| {
            tracing::trace!("Parsed temporal coverage {range:?} as {name}");
        })
    });
    if parsed.is_none() {
        tracing::warn!("Unable to parse temporal coverage from {term}");
    }
    parsed
}
