//! Sequential catalog scan with first-hit early exit.

pub mod scan;

pub use scan::{scan_catalog, scan_exchange, FoundQuote, ScanOutcome};
