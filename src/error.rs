//! Unified error types for the liquidity scout.
//!
//! Two failure channels matter here and must stay distinct: a
//! [`CatalogError`] aborts the whole scan before any probing happens,
//! while a [`ProbeError`] is attributable to a single contract and is
//! absorbed by the scanner. "No liquidity" is not an error at all; it
//! travels as `Ok(None)` through the prober.

use thiserror::Error;

/// Unified error type for the scout.
#[derive(Error, Debug)]
pub enum ScoutError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Invalid configuration values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Fatal failure fetching the events listing.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Failure probing a single contract.
    #[error("probe error: {0}")]
    Probe(#[from] ProbeError),
}

/// Fatal errors from the events listing call.
///
/// Any failure here aborts the scan with zero probes attempted.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Listing endpoint returned a non-success status.
    #[error("events listing failed: HTTP {status}")]
    ListingFailed {
        /// Status returned by the listing endpoint.
        status: reqwest::StatusCode,
    },

    /// Transport-level failure reaching the listing endpoint.
    #[error("events listing transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Listing body did not match the expected shape.
    #[error("failed to parse events listing: {0}")]
    Parse(String),
}

/// Errors probing the order book of one contract.
///
/// A 404 from the quotes endpoint is *not* a `ProbeError`; closed and
/// missing markets are expected during a scan and surface as absence.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Probe invoked with an empty identifier.
    #[error("probe requires a non-empty {which} id")]
    EmptyId {
        /// Which identifier was empty ("market" or "contract").
        which: &'static str,
    },

    /// Quotes endpoint returned a non-success, non-404 status.
    #[error("quotes fetch for market {market_id} contract {contract_id} failed: HTTP {status}")]
    FetchFailed {
        /// Market being probed.
        market_id: String,
        /// Contract being probed.
        contract_id: String,
        /// Status returned by the quotes endpoint.
        status: reqwest::StatusCode,
    },

    /// Transport-level failure reaching the quotes endpoint.
    #[error("quotes transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Quotes body did not match the expected shape.
    #[error("failed to parse quotes response: {0}")]
    Parse(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ScoutError>;
