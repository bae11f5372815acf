//! Reddit content source for Tally.
//!
//! [`RedditSource`] implements [`tally_engine::ContentSource`] over Reddit's
//! OAuth API using a blocking HTTP client:
//!
//! - app-only authentication with a client id, secret, and user agent
//! - newest-first submission pages from `/r/{community}/new`
//! - full comment threads, with "load more" and "continue this thread"
//!   placeholders expanded until the list is flat and complete
//!
//! Retry and rate limiting are not implemented; a failed request fails the
//! fetch.

pub mod client;
pub mod config;
pub mod credentials;
pub mod endpoint;
pub mod error;
mod expand;
pub mod flatten;
pub mod listing;

pub use client::RedditSource;
pub use config::RedditConfig;
pub use credentials::Credentials;
pub use error::CredentialsError;
pub use flatten::CommentCollector;
