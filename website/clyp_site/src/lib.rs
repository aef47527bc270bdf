//! HTTP API of the Clyp website.
//!
//! | Route | Handler |
//! |---|---|
//! | `POST /api/highlight` | [`clyp_highlight`] over the JSON `code` field |
//! | `GET /api/live_stats` | cached [`clyp_stats::StatsSnapshot`] |
//! | `GET /api/examples[/{key}]` | [`catalog`] entries with highlighted code |
//! | `GET /api/releases/{version}` | [`clyp_stats::release::ReleaseDetails`] |
//! | `GET /api/banner` | current [`banner::Banner`] or `null` |
//! | `GET /download`, `/github`, `/docs`... | redirects |

pub mod banner;
pub mod catalog;
pub mod config;
mod error;
pub mod logging;
pub mod routes;
pub mod server;
mod state;

pub use config::SiteConfig;
pub use error::SiteError;
pub use routes::{dispatch, Route, SiteResponse};
pub use state::AppState;
