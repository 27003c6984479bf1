//! # KEGG REST Access Module
//!
//! ## Aim
//! This module provides access to the KEGG REST API (https://rest.kegg.jp). It covers the
//! three operations the rest of the crate needs: `get` (one flat-text record by identifier),
//! `list` (tab-separated listings of pathways/organisms) and `info` (database release notes).
//! All responses are plain text, parsing of record text lives in the sibling modules.
//!
//! ## Main Data Structures and Logic
//! - `HttpClient`: trait with dependency injection for the HTTP client (enables testing)
//! - `KeggRest<C>`: generic client building request URLs and classifying empty responses
//! - `RecordFetcher`: the one-method boundary (`fetch`) consumed by the record parsers,
//!   so parsers can be driven by a mock fetcher with canned record text in tests
//! - `KeggError`: error taxonomy of the retrieval layer
//!
//! ## Usage
//! ```rust, ignore
//! let rest = KeggRest::new();
//! let record = rest.get("hsa00250")?;
//! let pathways = rest.list("pathway/hsa")?;
//! ```

use reqwest::blocking::Client;
use thiserror::Error;
use url::Url;

const KEGG_BASE_URL: &str = "https://rest.kegg.jp";

/// HTTP client trait for dependency injection
pub trait HttpClient {
    fn get_text(&self, url: &str) -> Result<String, reqwest::Error>;
}

// Implementation for the real reqwest client
impl HttpClient for Client {
    fn get_text(&self, url: &str) -> Result<String, reqwest::Error> {
        self.get(url).send()?.text()
    }
}

/// error types for the retrieval layer
#[derive(Debug, Error)]
pub enum KeggError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
    #[error("URL parsing error: {0}")]
    UrlError(#[from] url::ParseError),
    #[error("Record not found: {0}")]
    RecordNotFound(String),
    #[error("Invalid data format: {0}")]
    InvalidDataFormat(String),
}

/// The single operation the record parsers consume: raw flat text by identifier.
/// `KeggRest` implements it against the live API, tests implement it with canned text.
pub trait RecordFetcher {
    fn fetch(&self, identifier: &str) -> Result<String, KeggError>;
}

pub struct KeggRest<C: HttpClient> {
    client: C,
}

impl KeggRest<Client> {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for KeggRest<Client> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: HttpClient> KeggRest<C> {
    pub fn with_client(client: C) -> Self {
        Self { client }
    }

    pub fn construct_url(&self, operation: &str, argument: &str) -> Result<Url, KeggError> {
        Ok(Url::parse(&format!(
            "{}/{}/{}",
            KEGG_BASE_URL, operation, argument
        ))?)
    }

    /// release information of a KEGG database, e.g. `info("kegg")`
    pub fn info(&self, database: &str) -> Result<String, KeggError> {
        let url = self.construct_url("info", database)?;
        Ok(self.client.get_text(url.as_str())?)
    }

    /// tab-separated listing, e.g. `list("pathway")`, `list("organism")`, `list("pathway/hsa")`
    pub fn list(&self, query: &str) -> Result<String, KeggError> {
        let url = self.construct_url("list", query)?;
        Ok(self.client.get_text(url.as_str())?)
    }

    /// one flat-text record by identifier, e.g. `get("hsa00250")`, `get("ec:6.3.4.4")`,
    /// `get("rn:R00256")`. KEGG answers unknown identifiers with an empty body.
    pub fn get(&self, identifier: &str) -> Result<String, KeggError> {
        let url = self.construct_url("get", identifier)?;
        let body = self.client.get_text(url.as_str())?;
        if body.trim().is_empty() {
            return Err(KeggError::RecordNotFound(identifier.to_string()));
        }
        Ok(body)
    }
}

impl<C: HttpClient> RecordFetcher for KeggRest<C> {
    fn fetch(&self, identifier: &str) -> Result<String, KeggError> {
        self.get(identifier)
    }
}
