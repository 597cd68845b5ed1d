//! Directus API integration module
//!
//! Provides the client for fetching the OpenAPI specification from a
//! Directus instance.

pub mod client;
pub mod models;

pub use client::DirectusClient;
pub use models::*;
