// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use oxrdf::{
    vocab::xsd, BlankNode, Graph, Literal, NamedNode, NamedNodeRef, Subject, SubjectRef, Term,
    TermRef,
};

const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn as_subject(term: TermRef<'_>) -> Option<SubjectRef<'_>> {
    match term {
        TermRef::NamedNode(node) => Some(node.into()),
        TermRef::BlankNode(node) => Some(node.into()),
        _ => None,
    }
}

pub fn literal_value(term: TermRef<'_>) -> Option<&str> {
    if let TermRef::Literal(literal) = term {
        Some(literal.value())
    } else {
        None
    }
}

/// The IRI of a named node, or the value of a literal.
pub fn iri_or_literal_value(term: TermRef<'_>) -> Option<&str> {
    match term {
        TermRef::NamedNode(node) => Some(node.as_str()),
        TermRef::Literal(literal) => Some(literal.value()),
        _ => None,
    }
}

pub fn literal<'a>(
    graph: &'a Graph,
    subject: SubjectRef<'_>,
    predicate: NamedNodeRef<'_>,
) -> Option<&'a str> {
    graph
        .objects_for_subject_predicate(subject, predicate)
        .find_map(literal_value)
}

/// Emits a URL as IRI if it is a valid one,
/// and as a plain literal otherwise.
pub fn url_term(url: &str) -> Term {
    NamedNode::new(url).map_or_else(
        |_| Literal::new_simple_literal(url).into(),
        Into::into,
    )
}

/// A named node if `iri` is valid, a fresh blank node otherwise.
pub fn iri_or_blank(iri: &str) -> Subject {
    NamedNode::new(iri).map_or_else(
        |err| {
            tracing::warn!("Not a valid IRI, using a blank node instead of <{iri}>: {err}");
            BlankNode::default().into()
        },
        Into::into,
    )
}

pub fn date_time_literal(date_time: &NaiveDateTime) -> Literal {
    Literal::new_typed_literal(date_time.format(DATE_TIME_FORMAT).to_string(), xsd::DATE_TIME)
}

pub fn date_literal(date: &NaiveDate) -> Literal {
    Literal::new_typed_literal(date.format(DATE_FORMAT).to_string(), xsd::DATE)
}

/// Parses an `xsd:dateTime` like value.
/// Values with a time zone are converted to UTC,
/// bare dates are taken as midnight.
pub fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .map(|date_time| date_time.naive_utc())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Parses an `xsd:date` like value.
/// Date-times are accepted too, and cut down to their date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .or_else(|| parse_date_time(value).map(|date_time| date_time.date()))
}
