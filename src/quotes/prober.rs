//! The quote prober: one contract in, one liquidity verdict out.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::catalog::SmarketsClient;
use crate::error::ProbeError;

use super::types::{QuoteSnapshot, QuotesResponse};

/// Capability to probe one contract's order book.
///
/// The three outcomes are kept on separate channels on purpose:
/// `Ok(Some(_))` is a two-sided book, `Ok(None)` is expected absence
/// (closed, missing, or one-sided), `Err(_)` is a real failure that
/// the caller attributes to this one contract.
#[async_trait]
pub trait QuoteProber: Send + Sync {
    /// Probe the order book of `(market_id, contract_id)`.
    async fn probe(
        &self,
        market_id: &str,
        contract_id: &str,
    ) -> Result<Option<QuoteSnapshot>, ProbeError>;
}

/// Prober backed by the Smarkets REST API.
#[derive(Debug, Clone)]
pub struct HttpQuoteProber {
    client: SmarketsClient,
}

impl HttpQuoteProber {
    /// Create a prober over the given client.
    pub fn new(client: SmarketsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QuoteProber for HttpQuoteProber {
    #[instrument(skip(self), fields(market_id = %market_id, contract_id = %contract_id))]
    async fn probe(
        &self,
        market_id: &str,
        contract_id: &str,
    ) -> Result<Option<QuoteSnapshot>, ProbeError> {
        if market_id.is_empty() {
            return Err(ProbeError::EmptyId { which: "market" });
        }
        if contract_id.is_empty() {
            return Err(ProbeError::EmptyId { which: "contract" });
        }

        let response = match self.client.fetch_quotes(market_id, contract_id).await? {
            Some(response) => response,
            None => return Ok(None),
        };

        let snapshot = snapshot_from_quotes(market_id, contract_id, &response);
        if snapshot.is_none() {
            debug!("Order book empty or one-sided, contract is illiquid");
        }

        Ok(snapshot)
    }
}

/// Extract a normalized snapshot from a quotes payload.
///
/// Only the first book snapshot is inspected even when the payload
/// carries several; later snapshots are ignored outright. Returns
/// `None` unless that first book has at least one bid and one ask.
pub fn snapshot_from_quotes(
    market_id: &str,
    contract_id: &str,
    response: &QuotesResponse,
) -> Option<QuoteSnapshot> {
    let book = response.quotes.first()?;
    if !book.is_two_sided() {
        return None;
    }

    // is_two_sided guarantees both firsts exist
    let best_bid = book.best_bid()?;
    let best_ask = book.best_ask()?;

    Some(QuoteSnapshot {
        market_id: market_id.to_string(),
        contract_id: contract_id.to_string(),
        bid: best_bid.price(),
        ask: best_ask.price(),
        bid_volume: best_bid.volume(),
        ask_volume: best_ask.volume(),
    })
}
