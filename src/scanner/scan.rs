//! The liquidity scan: an ordered walk over the catalog that stops at
//! the first two-sided order book.

use tracing::{debug, info, instrument, warn};

use crate::catalog::{Event, SmarketsClient};
use crate::error::CatalogError;
use crate::quotes::{HttpQuoteProber, QuoteProber, QuoteSnapshot};

/// A liquid contract located by the scan, with its owning names for
/// reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundQuote {
    /// Name of the owning event.
    pub event_name: String,
    /// Name of the owning market.
    pub market_name: String,
    /// Name of the contract itself.
    pub contract_name: String,
    /// The normalized liquidity snapshot.
    pub snapshot: QuoteSnapshot,
}

/// Definitive result of one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// First liquid contract in catalog order.
    Found(FoundQuote),
    /// Catalog exhausted without a liquid contract.
    NotFound {
        /// Number of contracts probed before giving up.
        examined: u64,
    },
}

impl ScanOutcome {
    /// Number of contracts examined, when the scan came up empty.
    pub fn examined(&self) -> Option<u64> {
        match self {
            ScanOutcome::NotFound { examined } => Some(*examined),
            ScanOutcome::Found(_) => None,
        }
    }
}

/// Walk the catalog in listing order and probe every contract until
/// one shows two-sided liquidity.
///
/// Strictly sequential and short-circuiting: events, markets, and
/// contracts are visited in the order they were listed, one probe at a
/// time, and the first snapshot ends the scan. Probe failures are
/// logged and charged to their contract only; they never abort the
/// walk.
pub async fn scan_catalog<P: QuoteProber>(events: &[Event], prober: &P) -> ScanOutcome {
    let mut examined: u64 = 0;

    for event in events {
        // Events without markets are typically settled or upcoming.
        if event.markets.is_empty() {
            debug!(event_id = %event.id, event = %event.name, "Event has no markets, skipping");
            continue;
        }

        for market in &event.markets {
            if market.contracts.is_empty() {
                debug!(market_id = %market.id, market = %market.name, "Market has no contracts, skipping");
                continue;
            }

            for contract in &market.contracts {
                examined += 1;

                info!(
                    candidate = examined,
                    event = %event.name,
                    market = %market.name,
                    contract = %contract.name,
                    "Probing contract"
                );

                match prober.probe(&market.id, &contract.id).await {
                    Ok(Some(snapshot)) => {
                        info!(
                            event = %event.name,
                            market = %market.name,
                            contract = %contract.name,
                            bid = %snapshot.bid,
                            ask = %snapshot.ask,
                            "First liquid contract found"
                        );

                        return ScanOutcome::Found(FoundQuote {
                            event_name: event.name.clone(),
                            market_name: market.name.clone(),
                            contract_name: contract.name.clone(),
                            snapshot,
                        });
                    }
                    Ok(None) => {
                        debug!(
                            market_id = %market.id,
                            contract_id = %contract.id,
                            "No liquidity, continuing"
                        );
                    }
                    Err(e) => {
                        warn!(
                            market_id = %market.id,
                            contract_id = %contract.id,
                            error = %e,
                            "Probe failed, skipping contract"
                        );
                    }
                }
            }
        }
    }

    info!(examined, "Catalog exhausted without a liquid contract");
    ScanOutcome::NotFound { examined }
}

/// Fetch the events listing and scan it with the HTTP prober.
///
/// A listing failure is fatal and surfaces before any probing starts;
/// a listing that succeeds with zero events is an ordinary not-found
/// outcome.
#[instrument(skip(client))]
pub async fn scan_exchange(client: &SmarketsClient) -> Result<ScanOutcome, CatalogError> {
    info!(base_url = %client.base_url(), "Fetching events listing");

    let events = client.list_events().await?;

    if events.is_empty() {
        info!("Listing returned no events");
        return Ok(ScanOutcome::NotFound { examined: 0 });
    }

    info!(count = events.len(), "Events fetched, starting scan");

    let prober = HttpQuoteProber::new(client.clone());
    Ok(scan_catalog(&events, &prober).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Contract, Event, Market};
    use crate::quotes::{ProbeScript, ScriptedProber};
    use pretty_assertions::assert_eq;
    use reqwest::StatusCode;
    use rust_decimal_macros::dec;

    fn contract(id: &str) -> Contract {
        Contract {
            id: id.to_string(),
            name: format!("Contract {}", id),
        }
    }

    fn market(id: &str, contracts: Vec<Contract>) -> Market {
        Market {
            id: id.to_string(),
            name: format!("Market {}", id),
            contracts,
        }
    }

    fn event(id: &str, markets: Vec<Market>) -> Event {
        Event {
            id: id.to_string(),
            name: format!("Event {}", id),
            markets,
        }
    }

    #[tokio::test]
    async fn empty_catalog_is_not_found_with_zero_examined() {
        let prober = ScriptedProber::new();

        let outcome = scan_catalog(&[], &prober).await;

        assert_eq!(outcome, ScanOutcome::NotFound { examined: 0 });
        assert_eq!(prober.call_count(), 0);
    }

    #[tokio::test]
    async fn events_without_markets_are_skipped_without_probing() {
        let prober = ScriptedProber::new();
        let catalog = vec![event("ev-1", vec![]), event("ev-2", vec![])];

        let outcome = scan_catalog(&catalog, &prober).await;

        assert_eq!(outcome, ScanOutcome::NotFound { examined: 0 });
        assert_eq!(prober.call_count(), 0);
    }

    #[tokio::test]
    async fn markets_without_contracts_are_skipped_without_probing() {
        let prober = ScriptedProber::new();
        let catalog = vec![event(
            "ev-1",
            vec![market("mk-1", vec![]), market("mk-2", vec![])],
        )];

        let outcome = scan_catalog(&catalog, &prober).await;

        assert_eq!(outcome, ScanOutcome::NotFound { examined: 0 });
        assert_eq!(prober.call_count(), 0);
    }

    #[tokio::test]
    async fn scan_stops_at_first_liquid_contract_in_listing_order() {
        let prober = ScriptedProber::new();
        // Third contract in traversal order is liquid; so is a later
        // one, which must never be probed.
        prober.script_liquid("mk-2", "ct-3", dec!(0.4800), dec!(0.5200), 50, 40);
        prober.script_liquid("mk-3", "ct-4", dec!(0.1000), dec!(0.9000), 1, 1);

        let catalog = vec![
            event(
                "ev-1",
                vec![
                    market("mk-1", vec![contract("ct-1"), contract("ct-2")]),
                    market("mk-2", vec![contract("ct-3")]),
                ],
            ),
            event("ev-2", vec![market("mk-3", vec![contract("ct-4")])]),
        ];

        let outcome = scan_catalog(&catalog, &prober).await;

        match outcome {
            ScanOutcome::Found(found) => {
                assert_eq!(found.event_name, "Event ev-1");
                assert_eq!(found.market_name, "Market mk-2");
                assert_eq!(found.contract_name, "Contract ct-3");
                assert_eq!(found.snapshot.bid, dec!(0.4800));
                assert_eq!(found.snapshot.ask, dec!(0.5200));
            }
            other => panic!("expected Found, got {:?}", other),
        }

        // Exactly the first three contracts were probed, in order.
        assert_eq!(
            prober.calls(),
            vec![
                ("mk-1".to_string(), "ct-1".to_string()),
                ("mk-1".to_string(), "ct-2".to_string()),
                ("mk-2".to_string(), "ct-3".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn probe_failures_are_skipped_and_the_scan_continues() {
        let prober = ScriptedProber::new();
        prober.script(
            "mk-1",
            "ct-1",
            ProbeScript::Fail(StatusCode::INTERNAL_SERVER_ERROR),
        );
        prober.script_liquid("mk-1", "ct-2", dec!(1.2345), dec!(1.2360), 7, 3);

        let catalog = vec![event(
            "ev-1",
            vec![market("mk-1", vec![contract("ct-1"), contract("ct-2")])],
        )];

        let outcome = scan_catalog(&catalog, &prober).await;

        match outcome {
            ScanOutcome::Found(found) => {
                assert_eq!(found.contract_name, "Contract ct-2");
                assert_eq!(found.snapshot.bid_volume, 7);
            }
            other => panic!("expected Found, got {:?}", other),
        }
        assert_eq!(prober.call_count(), 2);
    }

    #[tokio::test]
    async fn all_failures_and_absences_end_in_not_found_with_count() {
        let prober = ScriptedProber::new();
        prober.script("mk-1", "ct-1", ProbeScript::Fail(StatusCode::BAD_GATEWAY));
        prober.script("mk-1", "ct-2", ProbeScript::Absent);
        // ct-3 unscripted: also absent

        let catalog = vec![event(
            "ev-1",
            vec![
                market("mk-1", vec![contract("ct-1"), contract("ct-2")]),
                market("mk-2", vec![contract("ct-3")]),
            ],
        )];

        let outcome = scan_catalog(&catalog, &prober).await;

        assert_eq!(outcome, ScanOutcome::NotFound { examined: 3 });
        assert_eq!(outcome.examined(), Some(3));
        assert_eq!(prober.call_count(), 3);
    }

    #[tokio::test]
    async fn repeated_scans_over_static_catalog_are_idempotent() {
        let prober = ScriptedProber::new();
        prober.script_liquid("mk-1", "ct-2", dec!(0.3000), dec!(0.3100), 12, 9);

        let catalog = vec![event(
            "ev-1",
            vec![market("mk-1", vec![contract("ct-1"), contract("ct-2")])],
        )];

        let first = scan_catalog(&catalog, &prober).await;
        let second = scan_catalog(&catalog, &prober).await;

        assert_eq!(first, second);
    }
}
