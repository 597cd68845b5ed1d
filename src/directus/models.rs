//! Directus API data models
//!
//! Serde view of the OpenAPI document served by `/server/specs/oas`. Only
//! the `components.schemas` section is retained; everything else in the
//! document is ignored during deserialization.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Top-level OpenAPI document
///
/// A document without a `components` section deserializes to an empty
/// schema map rather than failing.
#[derive(Debug, Default, Deserialize)]
pub struct OasSpec {
    #[serde(default)]
    pub components: OasComponents,
}

/// The `components` section of an OpenAPI document
#[derive(Debug, Default, Deserialize)]
pub struct OasComponents {
    #[serde(default)]
    pub schemas: Map<String, Value>,
}
