//! Order book wire types and the normalized quote snapshot.
//!
//! Smarkets transmits prices as integers scaled by 10,000 (a price of
//! 1.2345 arrives as 12345). Decoding keeps exactly four fractional
//! digits; the wire format guarantees no finer granularity.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Divisor exponent for fixed-point wire prices (10^4).
const PRICE_SCALE: u32 = 4;

/// One order-book level as transmitted: `[priceMicros, volume]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BookLevel(pub i64, pub i64);

impl BookLevel {
    /// Decode the fixed-point wire price into a decimal.
    pub fn price(&self) -> Decimal {
        Decimal::new(self.0, PRICE_SCALE)
    }

    /// Volume available at this level.
    pub fn volume(&self) -> i64 {
        self.1
    }
}

/// One order-book snapshot from the quotes payload.
#[derive(Debug, Clone, Deserialize)]
pub struct BookSnapshot {
    /// Bid levels, best price first. Missing key reads as empty.
    #[serde(default)]
    pub bids: Vec<BookLevel>,
    /// Ask levels, best price first. Missing key reads as empty.
    #[serde(default)]
    pub asks: Vec<BookLevel>,
}

impl BookSnapshot {
    /// Get the best (first) bid level.
    pub fn best_bid(&self) -> Option<&BookLevel> {
        self.bids.first()
    }

    /// Get the best (first) ask level.
    pub fn best_ask(&self) -> Option<&BookLevel> {
        self.asks.first()
    }

    /// A book is two-sided when both sides have at least one level.
    pub fn is_two_sided(&self) -> bool {
        !self.bids.is_empty() && !self.asks.is_empty()
    }
}

/// Top-level body of the quotes call.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotesResponse {
    /// Book snapshots; only the first is ever inspected.
    #[serde(default)]
    pub quotes: Vec<BookSnapshot>,
}

/// Normalized two-sided liquidity snapshot for one contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSnapshot {
    /// Market the contract belongs to.
    pub market_id: String,
    /// Contract that was probed.
    pub contract_id: String,
    /// Best bid price, decoded from the wire fixed point.
    pub bid: Decimal,
    /// Best ask price, decoded from the wire fixed point.
    pub ask: Decimal,
    /// Volume at the best bid, unchanged from the wire.
    pub bid_volume: i64,
    /// Volume at the best ask, unchanged from the wire.
    pub ask_volume: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn book_level_decodes_fixed_point_price() {
        let level = BookLevel(12345, 7);
        assert_eq!(level.price(), dec!(1.2345));
        assert_eq!(level.volume(), 7);
    }

    #[test]
    fn book_level_keeps_four_fractional_digits() {
        // 0.5000, not 0.5: scale must survive normalization
        assert_eq!(BookLevel(5000, 1).price().scale(), 4);
        assert_eq!(BookLevel(5000, 1).price(), dec!(0.5));
    }

    #[test]
    fn book_level_deserializes_from_pair() {
        let level: BookLevel = serde_json::from_str("[12360, 3]").unwrap();
        assert_eq!(level, BookLevel(12360, 3));
    }

    #[test]
    fn snapshot_two_sided_requires_both_sides() {
        let both = BookSnapshot {
            bids: vec![BookLevel(12345, 7)],
            asks: vec![BookLevel(12360, 3)],
        };
        let no_asks = BookSnapshot {
            bids: vec![BookLevel(12345, 7)],
            asks: vec![],
        };
        let no_bids = BookSnapshot {
            bids: vec![],
            asks: vec![BookLevel(12360, 3)],
        };

        assert!(both.is_two_sided());
        assert!(!no_asks.is_two_sided());
        assert!(!no_bids.is_two_sided());
    }

    #[test]
    fn best_levels_are_the_first_listed() {
        let book = BookSnapshot {
            bids: vec![BookLevel(4800, 50), BookLevel(4700, 100)],
            asks: vec![BookLevel(5000, 50), BookLevel(5100, 100)],
        };

        assert_eq!(book.best_bid(), Some(&BookLevel(4800, 50)));
        assert_eq!(book.best_ask(), Some(&BookLevel(5000, 50)));
    }

    #[test]
    fn quotes_response_tolerates_missing_keys() {
        let empty: QuotesResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.quotes.is_empty());

        let one_sided: QuotesResponse =
            serde_json::from_str(r#"{"quotes": [{"bids": [[4800, 50]]}]}"#).unwrap();
        assert_eq!(one_sided.quotes.len(), 1);
        assert!(one_sided.quotes[0].asks.is_empty());
    }
}
