//! Aggregation engine for Tally.
//!
//! Turns one page of recent submissions into a per-author activity ledger:
//!
//! ```text
//! ContentSource page ──► window::select ──► Aggregator ──► ActivityLedger ──► Ranker
//!                                            │
//!                                            └── ContentSource comments (per retained submission)
//! ```
//!
//! The engine is synchronous and single-threaded. Sources are the only
//! blocking boundary; the engine never retries them.

pub mod aggregator;
pub mod error;
pub mod fixture;
pub mod memory;
pub mod source;
pub mod window;

pub use aggregator::Aggregator;
pub use error::{EngineError, EngineResult, SourceError, SourceResult};
pub use fixture::{Fixture, FixtureSource};
pub use memory::{InMemorySource, SourceCall};
pub use source::ContentSource;
pub use window::{is_newest_first, select};
