//! Events listing: data model and the Smarkets REST client.

pub mod client;
pub mod types;

pub use client::{classify_status, SmarketsClient, StatusClass};
pub use types::{Contract, Event, EventState, EventsResponse, Market};
