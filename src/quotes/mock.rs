//! Scripted prober for unit testing.
//!
//! This module provides a prober that replays scripted outcomes per
//! (market, contract) pair without making real network requests, and
//! records every probe call so tests can assert call counts and order.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;
use rust_decimal::Decimal;

use crate::error::ProbeError;

use super::prober::QuoteProber;
use super::types::QuoteSnapshot;

/// Scripted outcome for one (market, contract) pair.
#[derive(Debug, Clone)]
pub enum ProbeScript {
    /// Probe succeeds with this snapshot.
    Liquid(QuoteSnapshot),
    /// Probe reports expected absence (illiquid or 404).
    Absent,
    /// Probe fails with the given status.
    Fail(StatusCode),
}

/// Prober that replays scripted outcomes and records its calls.
#[derive(Debug, Clone, Default)]
pub struct ScriptedProber {
    /// Scripted outcomes keyed by (market_id, contract_id).
    scripts: Arc<Mutex<HashMap<(String, String), ProbeScript>>>,
    /// Every probe call in invocation order.
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl ScriptedProber {
    /// Create a prober with no scripts; unscripted pairs read as absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the outcome for one (market, contract) pair.
    pub fn script(
        &self,
        market_id: impl Into<String>,
        contract_id: impl Into<String>,
        outcome: ProbeScript,
    ) {
        let mut scripts = self.scripts.lock().unwrap();
        scripts.insert((market_id.into(), contract_id.into()), outcome);
    }

    /// Script a liquid outcome with the given prices and volumes.
    pub fn script_liquid(
        &self,
        market_id: &str,
        contract_id: &str,
        bid: Decimal,
        ask: Decimal,
        bid_volume: i64,
        ask_volume: i64,
    ) {
        self.script(
            market_id,
            contract_id,
            ProbeScript::Liquid(QuoteSnapshot {
                market_id: market_id.to_string(),
                contract_id: contract_id.to_string(),
                bid,
                ask,
                bid_volume,
                ask_volume,
            }),
        );
    }

    /// All probe calls so far, in invocation order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of probe calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Clear all scripts and recorded calls.
    pub fn clear(&self) {
        self.scripts.lock().unwrap().clear();
        self.calls.lock().unwrap().clear();
    }
}

#[async_trait]
impl QuoteProber for ScriptedProber {
    async fn probe(
        &self,
        market_id: &str,
        contract_id: &str,
    ) -> Result<Option<QuoteSnapshot>, ProbeError> {
        self.calls
            .lock()
            .unwrap()
            .push((market_id.to_string(), contract_id.to_string()));

        let script = {
            let scripts = self.scripts.lock().unwrap();
            scripts
                .get(&(market_id.to_string(), contract_id.to_string()))
                .cloned()
        };

        match script {
            Some(ProbeScript::Liquid(snapshot)) => Ok(Some(snapshot)),
            Some(ProbeScript::Absent) | None => Ok(None),
            Some(ProbeScript::Fail(status)) => Err(ProbeError::FetchFailed {
                market_id: market_id.to_string(),
                contract_id: contract_id.to_string(),
                status,
            }),
        }
    }
}
