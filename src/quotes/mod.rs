//! Order-book probing: wire types, the prober capability, and a
//! scripted prober for tests.

pub mod mock;
pub mod prober;
pub mod types;

pub use mock::{ProbeScript, ScriptedProber};
pub use prober::{snapshot_from_quotes, HttpQuoteProber, QuoteProber};
pub use types::{BookLevel, BookSnapshot, QuoteSnapshot, QuotesResponse};
