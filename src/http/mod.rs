//! HTTP surface of the counter.
//!
//! # Endpoints
//!
//! - `/count/{page_id}` - Records one view of `page_id` by the calling client
//! - `/stats/{password}` - Plain text page counts and unique views, guarded
//!   by the configured `stats_password`
//!
//! Anything else answers `404 not found`.
//!
//! The client identifier is the peer IP address, or the value of the
//! configured `real_ip` header when the service runs behind a proxy.

/// Data structures shared with the request handlers.
pub mod structs;

/// Server setup and request handlers.
#[allow(clippy::module_inception)]
pub mod http;

#[cfg(test)]
mod tests;
