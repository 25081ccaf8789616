// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::{header::ACCEPT, request::Parts, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    RequestPartsExt,
};
use datacat_mime as mime;
use datacat_model::Dataset;

use crate::AppState;

const REPRESENTATION_RDF: &str = "rdf";

/// How the client asked for the dataset.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Representation {
    /// `.../rdf`, the format got chosen from the `Accept` header.
    Negotiated(mime::Type),
    /// `.../rdf.{suffix}`
    Format(mime::Type),
}

#[derive(Debug)]
pub struct RdfRequest {
    pub dataset: Dataset,
    pub representation: Representation,
}

fn not_found(msg: String) -> Response {
    (StatusCode::NOT_FOUND, msg).into_response()
}

fn extract_accept(headers: &HeaderMap) -> Result<Option<&str>, Response> {
    headers
        .get(ACCEPT)
        .map(|accept| {
            HeaderValue::to_str(accept).map_err(|err| {
                (
                    StatusCode::BAD_REQUEST,
                    format!("Failed to convert header value for 'accept' to string: {err}"),
                )
                    .into_response()
            })
        })
        .transpose()
}

fn extract_representation(
    representation: &str,
    headers: &HeaderMap,
) -> Result<Representation, Response> {
    if representation == REPRESENTATION_RDF {
        let accept = extract_accept(headers)?;
        return Ok(Representation::Negotiated(mime::negotiate(accept)));
    }
    let suffix = representation
        .strip_prefix(REPRESENTATION_RDF)
        .and_then(|rest| rest.strip_prefix('.'))
        .ok_or_else(|| not_found(format!("No such dataset representation: '{representation}'")))?;
    let fmt = mime::Type::from_suffix(suffix).map_err(|err| not_found(err.to_string()))?;
    Ok(Representation::Format(fmt))
}

#[async_trait]
impl FromRequestParts<AppState> for RdfRequest {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path((dataset_ref, representation)): Path<(String, String)> =
            parts.extract().await.map_err(IntoResponse::into_response)?;
        let headers: HeaderMap = parts.extract().await.map_err(IntoResponse::into_response)?;

        let dataset = state
            .catalog
            .dataset(&dataset_ref)
            .cloned()
            .ok_or_else(|| not_found(format!("No such dataset: '{dataset_ref}'")))?;
        let representation = extract_representation(&representation, &headers)?;

        Ok(Self {
            dataset,
            representation,
        })
    }
}
