//! Wire types for the Better Stack Uptime API.
//!
//! These structs define the JSON shapes exchanged with the service: the
//! resource attributes themselves, the generic envelopes they travel in,
//! and the pagination links attached to list responses. They live in a
//! separate crate so consumers can depend on the shapes without pulling in
//! the HTTP client.

/// Response envelopes and the [`Resource`] trait.
pub mod envelope;
/// Monitor group attributes.
pub mod group;
/// Monitor attributes.
pub mod monitor;
/// Pagination links and page-count parsing.
pub mod pagination;

pub use envelope::{Document, Entity, ListDocument, Resource};
pub use group::MonitorGroup;
pub use monitor::{Monitor, RequestHeader};
pub use pagination::{Pagination, PaginationError};
