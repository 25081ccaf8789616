// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

pub mod cli;
pub mod constants;
mod rdf_request;

use std::{io, net::SocketAddr, path::PathBuf, sync::Arc};

use axum::{
    extract::State,
    http::{
        header::{CONTENT_TYPE, LOCATION},
        StatusCode,
    },
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use datacat_mime as mime;
use datacat_model::{Catalog, ModelError, SiteUrls};
use datacat_rdf::{dataset_to_rdf, jsonld_context, serialize, SerializeOptions};
use git_version::git_version;
use thiserror::Error;
use tower_http::trace::TraceLayer;

pub use rdf_request::{RdfRequest, Representation};

// This tests rust code in the README with doc-tests.
// Though, It will not appear in the generated documentation.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

pub const VERSION: &str = git_version!(cargo_prefix = "", fallback = "unknown");

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to set up the catalog: {0}")]
    Model(#[from] ModelError),

    #[error("Network I/O failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Where to listen for HTTP requests.
    pub addr: SocketAddr,
    /// The public URL the site is reachable under;
    /// all RDF subjects and links are built from it.
    pub base_url: String,
    /// JSON file to load the catalog from.
    /// If not set, the catalog starts out empty.
    pub catalog: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub urls: SiteUrls,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog, urls: SiteUrls) -> Self {
        Self {
            catalog: Arc::new(catalog),
            urls,
        }
    }

    /// # Errors
    ///
    /// - the base URL is invalid
    /// - the catalog file could not be read or parsed
    pub fn from_config(config: &Config) -> Result<Self, ServerError> {
        let urls = SiteUrls::new(&config.base_url)?;
        let catalog = match &config.catalog {
            Some(path) => Catalog::from_json_file(path)?,
            None => {
                tracing::warn!("No catalog file given; serving an empty catalog");
                Catalog::default()
            }
        };
        Ok(Self::new(catalog, urls))
    }
}

/// Builds the router with all our routes.
#[must_use]
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/datasets/:dataset/:representation", get(handler_dataset_rdf))
        .route(SiteUrls::context_path(), get(handler_context))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn redirect(path: String) -> Response {
    (StatusCode::FOUND, [(LOCATION, path)]).into_response()
}

fn respond_with_content(mime_type: mime::Type, content: Vec<u8>) -> Response {
    ([(CONTENT_TYPE, mime_type.mime_type())], content).into_response()
}

async fn handler_dataset_rdf(
    State(state): State<AppState>,
    rdf_request: RdfRequest,
) -> Result<Response, (StatusCode, String)> {
    let RdfRequest {
        dataset,
        representation,
    } = rdf_request;
    match representation {
        Representation::Negotiated(fmt) => {
            let id = dataset.id.map_or_else(
                || dataset.slug.clone().unwrap_or_default(),
                |id| id.to_string(),
            );
            tracing::debug!("Redirecting to the {fmt} representation of dataset {id}");
            Ok(redirect(SiteUrls::dataset_rdf_format_path(id, fmt.suffix())))
        }
        Representation::Format(fmt) => {
            let graph = dataset_to_rdf(&dataset, &state.urls).graph;
            let options = if fmt == mime::Type::JsonLd {
                SerializeOptions::with_context(state.urls.context())
            } else {
                SerializeOptions::default()
            };
            let content = serialize(&graph, fmt, &options).map_err(|err| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to serialize dataset '{}' as {fmt}: {err}", dataset.title),
                )
            })?;
            Ok(respond_with_content(fmt, content))
        }
    }
}

async fn handler_context() -> Result<Response, (StatusCode, String)> {
    let content = serde_json::to_vec_pretty(&jsonld_context()).map_err(|err| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to serialize the JSON-LD context: {err}"),
        )
    })?;
    Ok(respond_with_content(mime::Type::JsonLd, content))
}

/// Loads the catalog and serves it until the process is stopped.
///
/// # Errors
///
/// - the catalog could not be set up (see [`AppState::from_config`])
/// - binding to the configured address failed
pub async fn serve(config: &Config) -> Result<(), ServerError> {
    let state = AppState::from_config(config)?;
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
