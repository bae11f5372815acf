//! Foundation types for Tally.
//!
//! This crate provides the identity, activity, content, and temporal types
//! shared by every other Tally crate.
//!
//! # Key Types
//!
//! - [`AuthorId`]: Stable author key, with a sentinel for unavailable authors
//! - [`ActivityRecord`]: Per-author post and comment counters
//! - [`RankMetric`]: Which counter a ranking sorts on
//! - [`Submission`] / [`Comment`]: Content items as seen by the engine
//! - [`TimeWindow`]: Trailing window cutoff derived once per run

pub mod activity;
pub mod author;
pub mod content;
pub mod error;
pub mod window;

pub use activity::{ActivityRecord, RankMetric};
pub use author::AuthorId;
pub use content::{Comment, Submission};
pub use error::TypeError;
pub use window::TimeWindow;
