//! Fuel-price API HTTP client.
//!
//! Pagination, the single alternate attempt for city search, and the
//! degrade-to-partial-results policy all live here. The decisions are
//! free functions over a page producer; `fetch_page` is the only code
//! that touches the network.

use std::future::Future;

use tracing::{debug, warn};

use crate::domain::Station;

use super::convert::convert_results;
use super::error::OpendataError;
use super::types::RecordsPage;

/// Default base URL for the fuel-price records endpoint.
const DEFAULT_BASE_URL: &str = "https://public.opendatasoft.com/api/explore/v2.1/catalog/datasets/prix-des-carburants-j-1/records";

/// Default page size for paginated fetches.
const DEFAULT_PAGE_SIZE: u64 = 100;

/// Configuration for the fuel-price API client.
#[derive(Debug, Clone)]
pub struct OpendataConfig {
    /// Base URL for the records endpoint
    pub base_url: String,
    /// Records per page for paginated fetches
    pub page_size: u64,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for OpendataConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: 30,
        }
    }
}

impl OpendataConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, size: u64) -> Self {
        self.page_size = size;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the fuel-price records API.
///
/// All fetch methods return a plain `Vec<Station>`: transport and
/// envelope failures are logged and degrade to empty or partial output,
/// never to an error the caller must handle.
#[derive(Debug, Clone)]
pub struct OpendataClient {
    http: reqwest::Client,
    base_url: String,
    page_size: u64,
}

impl OpendataClient {
    /// Create a new client with the given configuration.
    pub fn new(config: OpendataConfig) -> Result<Self, OpendataError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            page_size: config.page_size,
        })
    }

    /// Fetch every station, page by page, until the reported total is
    /// exhausted or the server stops returning records.
    ///
    /// A failed page truncates the sequence: whatever was collected so
    /// far is returned, with no retry.
    pub async fn fetch_all(&self) -> Vec<Station> {
        collect_pages(self.page_size, |offset| {
            let query = [
                ("limit", self.page_size.to_string()),
                ("offset", offset.to_string()),
            ];
            async move { self.fetch_page(&query).await }
        })
        .await
    }

    /// Fetch stations whose city matches `city` server side, then verify
    /// the match client side (the LIKE query overmatches).
    ///
    /// On failure of the primary where-clause query, one attempt is made
    /// against the alternate facet-refine form before giving up with an
    /// empty result.
    pub async fn fetch_by_city(&self, city: &str) -> Vec<Station> {
        city_stations(
            city,
            || {
                let query = [
                    ("where", city_where_clause(city)),
                    ("limit", self.page_size.to_string()),
                ];
                async move { self.fetch_page(&query).await }
            },
            || {
                let query = [
                    ("refine", city_refine(city)),
                    ("limit", self.page_size.to_string()),
                ];
                async move { self.fetch_page(&query).await }
            },
        )
        .await
    }

    /// Issue one GET against the records endpoint and parse the envelope.
    async fn fetch_page(&self, query: &[(&str, String)]) -> Result<RecordsPage, OpendataError> {
        let response = self.http.get(&self.base_url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OpendataError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(OpendataError::EmptyBody);
        }

        serde_json::from_str(&body).map_err(|e| OpendataError::Json {
            message: e.to_string(),
        })
    }
}

impl crate::query::StationSource for OpendataClient {
    async fn fetch_all(&self) -> Vec<Station> {
        OpendataClient::fetch_all(self).await
    }

    async fn fetch_by_city(&self, city: &str) -> Vec<Station> {
        OpendataClient::fetch_by_city(self, city).await
    }
}

/// Collect stations page by page from `fetch`, which maps an offset to
/// one page request.
///
/// The loop stops on the first failed or malformed page (keeping what
/// was collected so far, no retry), on a page shorter than `page_size`,
/// and when the first page's declared `total_count` is exhausted.
async fn collect_pages<F, Fut>(page_size: u64, mut fetch: F) -> Vec<Station>
where
    F: FnMut(u64) -> Fut,
    Fut: Future<Output = Result<RecordsPage, OpendataError>>,
{
    let mut stations = Vec::new();
    let mut offset: u64 = 0;
    let mut total: Option<u64> = None;

    loop {
        let page = match fetch(offset).await {
            Ok(page) => page,
            Err(e) => {
                warn!("page at offset {offset} failed, returning partial results: {e}");
                break;
            }
        };

        let Some(results) = page.results else {
            warn!(
                "page at offset {offset} failed, returning partial results: {}",
                OpendataError::MissingResults
            );
            break;
        };

        if total.is_none() {
            total = page.total_count;
        }

        let page_len = results.len() as u64;
        stations.extend(convert_results(results));
        debug!("fetched page at offset {offset} ({page_len} records)");

        // A short or empty page means the server has no more records.
        if page_len < page_size {
            break;
        }
        offset += page_size;
        if let Some(total) = total
            && offset >= total
        {
            break;
        }
    }

    stations
}

/// Resolve a city query from `primary`, falling back once to
/// `alternate` on failure, then keep only the stations whose city
/// actually contains `city`.
async fn city_stations<P, PF, A, AF>(city: &str, primary: P, alternate: A) -> Vec<Station>
where
    P: FnOnce() -> PF,
    PF: Future<Output = Result<RecordsPage, OpendataError>>,
    A: FnOnce() -> AF,
    AF: Future<Output = Result<RecordsPage, OpendataError>>,
{
    let page = match primary().await {
        Ok(page) => Ok(page),
        Err(e) => {
            warn!("city query for '{city}' failed, trying facet refine: {e}");
            alternate().await
        }
    };

    let page = match page {
        Ok(page) => page,
        Err(e) => {
            warn!("city query for '{city}' failed on both endpoints: {e}");
            return Vec::new();
        }
    };

    let Some(results) = page.results else {
        warn!("city query for '{city}': {}", OpendataError::MissingResults);
        return Vec::new();
    };

    let needle = city.to_lowercase();
    convert_results(results)
        .into_iter()
        .filter(|station| station.city.to_lowercase().contains(&needle))
        .collect()
}

/// Build the ODSQL where clause for a server-side LIKE match on the city
/// field. Embedded double quotes are stripped rather than escaped.
fn city_where_clause(city: &str) -> String {
    format!("com_arm_name like \"{}\"", city.replace('"', ""))
}

/// Build the facet-refine form of the same city match (the alternate
/// attempt when the where clause fails).
fn city_refine(city: &str) -> String {
    format!("com_arm_name:\"{}\"", city.replace('"', ""))
}
