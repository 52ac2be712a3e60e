//! Smarkets REST API client wrapper.

use std::time::Duration;

use reqwest::StatusCode;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::{CatalogError, ProbeError};
use crate::quotes::types::QuotesResponse;

use super::types::{Event, EventState, EventsResponse};

/// User-Agent sent on every request.
const USER_AGENT: &str = concat!("smarkets-scout/", env!("CARGO_PKG_VERSION"));

/// Classification of an HTTP status from the quotes endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 2xx: body carries an order book.
    Success,
    /// 404: contract closed or quote data unavailable. Expected.
    NotFound,
    /// Anything else: a genuine failure.
    Failure,
}

/// Classify a quotes-endpoint status into success / not-found / failure.
pub fn classify_status(status: StatusCode) -> StatusClass {
    if status.is_success() {
        StatusClass::Success
    } else if status == StatusCode::NOT_FOUND {
        StatusClass::NotFound
    } else {
        StatusClass::Failure
    }
}

/// Smarkets REST API client.
#[derive(Debug, Clone)]
pub struct SmarketsClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Base URL for the REST API, no trailing slash.
    base_url: String,
    /// Lifecycle state filter for the listing call.
    state: EventState,
    /// Maximum events per listing call.
    limit: u32,
    /// Per-probe timeout for quotes requests.
    probe_timeout: Duration,
}

impl SmarketsClient {
    /// Create a new Smarkets client from config with tuned HTTP settings.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_millis(config.http_timeout_ms))
            // Fast connection establishment
            .connect_timeout(Duration::from_millis(500))
            // TCP_NODELAY for low-latency (disable Nagle's algorithm)
            .tcp_nodelay(true)
            // Keep connections alive for reuse across probes
            .tcp_keepalive(Duration::from_secs(30))
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            base_url: config.api_base().to_string(),
            state: config.event_state,
            limit: config.event_limit,
            probe_timeout: Duration::from_millis(config.probe_timeout_ms),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the configured listing state filter.
    pub fn state(&self) -> EventState {
        self.state
    }

    /// Get the configured listing limit.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Fetch the events listing.
    ///
    /// Any failure here is fatal to a scan: non-success statuses,
    /// transport errors, and malformed bodies all surface as
    /// [`CatalogError`].
    #[instrument(skip(self))]
    pub async fn list_events(&self) -> Result<Vec<Event>, CatalogError> {
        let url = format!("{}/events/", self.base_url);

        debug!(url = %url, state = %self.state, limit = self.limit, "Fetching events listing");

        let response = self
            .http
            .get(&url)
            .query(&[("state", self.state.to_string())])
            .query(&[("limit", self.limit)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CatalogError::ListingFailed {
                status: response.status(),
            });
        }

        let listing: EventsResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(format!("events listing body: {}", e)))?;

        debug!(count = listing.events.len(), "Events listing fetched");

        Ok(listing.events)
    }

    /// Fetch the order book for one (market, contract) pair.
    ///
    /// Returns `Ok(None)` on 404: the quotes endpoint answers 404 for
    /// closed markets and contracts without quote data, which is an
    /// expected outcome while scanning, not a failure.
    #[instrument(skip(self), fields(market_id = %market_id, contract_id = %contract_id))]
    pub async fn fetch_quotes(
        &self,
        market_id: &str,
        contract_id: &str,
    ) -> Result<Option<QuotesResponse>, ProbeError> {
        // The quotes endpoint does not accept a limit parameter.
        let url = format!(
            "{}/markets/{}/contracts/{}/quotes/",
            self.base_url, market_id, contract_id
        );

        let response = self
            .http
            .get(&url)
            .timeout(self.probe_timeout)
            .send()
            .await?;

        match classify_status(response.status()) {
            StatusClass::Success => {}
            StatusClass::NotFound => {
                debug!("Quotes endpoint returned 404, contract closed or unavailable");
                return Ok(None);
            }
            StatusClass::Failure => {
                return Err(ProbeError::FetchFailed {
                    market_id: market_id.to_string(),
                    contract_id: contract_id.to_string(),
                    status: response.status(),
                });
            }
        }

        let quotes: QuotesResponse = response
            .json()
            .await
            .map_err(|e| ProbeError::Parse(format!("quotes body: {}", e)))?;

        Ok(Some(quotes))
    }
}
