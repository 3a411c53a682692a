//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the `QueryBackend` seam and its `gloo-net` implementation;
//! `types` defines the wire schema.

pub mod api;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;
