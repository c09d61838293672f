//! Typed REST client.
//!
//! [`RestClient`] is the entry point of the crate: it owns the
//! [`HttpClient`](crate::clients::HttpClient) and hands out the
//! per-resource services.
//!
//! # Path Normalization
//!
//! Paths are relative to the configured base URL. A leading `/` is
//! stripped and an empty path is rejected before anything is sent.

mod client;

pub use client::RestClient;
