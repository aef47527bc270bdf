//! Live project statistics for the Clyp website.
//!
//! # Architecture
//!
//! ```text
//! StatsCache::get()
//!   ├── fresh entry (age < TTL) ──► Arc<StatsSnapshot>
//!   └── stale / empty
//!         └── join!(pypi, stars, commits, release downloads)   each bounded by a timeout
//!               └── Ok(n) ──► "1,234"   Err(_) ──► "N/A"
//!                     └── swap entry, return snapshot
//! ```
//!
//! Upstream failures never reach the caller: each one only degrades its own
//! field to [`NOT_AVAILABLE`]. The upstream side is the [`StatsSource`] trait,
//! implemented over HTTP by [`HttpStatsSource`].

mod cache;
mod error;
mod format;
pub mod release;
mod snapshot;
mod source;
mod upstream;

pub use cache::{StatsCache, DEFAULT_TTL, DEFAULT_UPSTREAM_TIMEOUT};
pub use error::UpstreamError;
pub use format::{format_count, NOT_AVAILABLE};
pub use snapshot::StatsSnapshot;
pub use source::StatsSource;
pub use upstream::{last_page, HttpStatsSource, UpstreamConfig};
