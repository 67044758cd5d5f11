//! Typed client for the Better Stack Uptime API.
//!
//! Construct a [`Client`] with an API token (directly or from the
//! environment), then drive the monitor and monitor-group CRUD surface.
//! Listing helpers either fetch one page at a time or enumerate a whole
//! collection in server order via [`Client::list_all_monitors`] and
//! [`Client::list_all_monitor_groups`].

/// HTTP client and generic resource operations.
pub mod client;
/// Error taxonomy.
pub mod error;
/// Listing filters.
pub mod filter;
/// Monitor group operations.
pub mod groups;
/// Monitor operations.
pub mod monitors;

pub use client::{Client, DEFAULT_BASE_URL, TOKEN_ENV_VAR};
pub use error::{Error, ListAllError};
pub use filter::MonitorFilter;
