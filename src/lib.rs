//! Typed client for the Shortcut API v3.
//!
//! The heart of the crate is the mapping layer: wire JSON in and out of
//! the records under [`model`], with the decode/encode rules in
//! [`codec`]. [`client::ApiClient`] wraps that layer in an async
//! transport covering the full endpoint surface, including cursor-based
//! search pagination.

#![recursion_limit = "256"]

pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod model;
pub mod pagination;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::{Error, Result};
