//! Schema extraction
//!
//! Pulls the `components.schemas` mapping out of a raw OpenAPI document.

use anyhow::Context;
use serde_json::{Map, Value};
use tracing::debug;

use crate::directus::OasSpec;
use crate::error::{LoadError, LoadResult};

/// Extract the schema mapping from the raw specification body.
///
/// A missing `components` or `schemas` key is treated the same as an empty
/// mapping; both yield [`LoadError::EmptySchema`].
pub fn extract_schemas(raw: &str) -> LoadResult<Map<String, Value>> {
    let spec: OasSpec =
        serde_json::from_str(raw).context("failed to parse the OpenAPI specification as JSON")?;

    let schemas = spec.components.schemas;
    if schemas.is_empty() {
        return Err(LoadError::EmptySchema);
    }

    debug!(schema_count = schemas.len(), "Extracted schemas from specification");
    Ok(schemas)
}
