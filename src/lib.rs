//! Smarkets liquidity scout.
//!
//! Walks the Smarkets event catalog (event → market → contract) in
//! listing order, probing each contract's order book until one shows
//! genuine two-sided liquidity, then reports its best bid and ask.
//!
//! ```text
//! events listing ──► scan ──► probe ct-1: 404        (skip)
//!                         ──► probe ct-2: bids only  (skip)
//!                         ──► probe ct-3: bid 1.2345 / ask 1.2360  ✅ stop
//! ```
//!
//! Probing is strictly sequential and short-circuits at the first
//! liquid contract; per-contract failures are absorbed, only a failure
//! of the listing call itself aborts the scan.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`catalog`]: Events listing model and the Smarkets REST client
//! - [`quotes`]: Order-book wire types and the quote prober
//! - [`scanner`]: The scan itself

pub mod catalog;
pub mod config;
pub mod error;
pub mod quotes;
pub mod scanner;

pub use config::Config;
pub use error::{Result, ScoutError};
