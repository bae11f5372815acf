//! Activity ledger for Tally.
//!
//! The ledger is the per-run accumulator mapping authors to activity counts.
//! This crate provides:
//! - `LedgerWriter` / `LedgerReader` trait boundaries
//! - `ActivityLedger`, the in-memory single-owner implementation
//! - `Ranker`, deterministic top-K views over any reader
//! - `LedgerSummary` totals for reporting

pub mod memory;
pub mod ranking;
pub mod traits;

pub use memory::ActivityLedger;
pub use ranking::{RankedEntry, Ranker};
pub use traits::{LedgerReader, LedgerSummary, LedgerWriter};
