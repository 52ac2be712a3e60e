//! Data model for the Smarkets events listing.
//!
//! The listing is a three-level hierarchy: events contain markets,
//! markets contain contracts. All three levels keep their wire order;
//! the scanner's "first liquid contract" semantics depend on it.

use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumString};

/// Lifecycle state filter for the events listing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EventState {
    /// Newly created events.
    #[default]
    New,
    /// Events scheduled but not yet live.
    Upcoming,
    /// Events currently in play.
    Live,
    /// Settled or closed events.
    Ended,
}

/// Top-level body of the events listing call.
#[derive(Debug, Clone, Deserialize)]
pub struct EventsResponse {
    /// Events in listing order. Missing key reads as empty.
    #[serde(default)]
    pub events: Vec<Event>,
}

/// One event in the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    /// Opaque event identifier.
    #[serde(deserialize_with = "de_opaque_id")]
    pub id: String,
    /// Human-readable event name.
    pub name: String,
    /// Markets in listing order. Events with no markets are skipped.
    #[serde(default)]
    pub markets: Vec<Market>,
}

/// One market within an event.
#[derive(Debug, Clone, Deserialize)]
pub struct Market {
    /// Opaque market identifier.
    #[serde(deserialize_with = "de_opaque_id")]
    pub id: String,
    /// Human-readable market name.
    pub name: String,
    /// Contracts in listing order. Markets with no contracts are skipped.
    #[serde(default)]
    pub contracts: Vec<Contract>,
}

/// One tradable contract within a market.
#[derive(Debug, Clone, Deserialize)]
pub struct Contract {
    /// Opaque contract identifier.
    #[serde(deserialize_with = "de_opaque_id")]
    pub id: String,
    /// Human-readable contract name.
    pub name: String,
}

/// Accept identifiers sent as either JSON strings or numbers.
fn de_opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}
