//! Reference file output
//!
//! Writes the extracted schema mapping to `reference/schema.json` under the
//! project root, creating the directory on first run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::LoadResult;

/// Directory that holds the local schema reference
pub const REFERENCE_DIR: &str = "reference";
/// File name of the schema reference
pub const SCHEMA_FILE: &str = "schema.json";

/// Outcome of a successful write
#[derive(Debug)]
pub struct WriteSummary {
    /// Absolute path of the written file
    pub path: PathBuf,
    /// Number of top-level schema definitions written
    pub schema_count: usize,
}

/// Serialize the schema mapping and overwrite the reference file.
///
/// Output is 2-space indented UTF-8 JSON with non-ASCII characters left
/// unescaped. Any previous content is replaced wholesale.
pub fn write_reference_file(
    project_root: &Path,
    schemas: &Map<String, Value>,
) -> LoadResult<WriteSummary> {
    let reference_dir = project_root.join(REFERENCE_DIR);
    fs::create_dir_all(&reference_dir)
        .with_context(|| format!("failed to create directory {}", reference_dir.display()))?;

    let file_path = reference_dir.join(SCHEMA_FILE);
    let json =
        serde_json::to_string_pretty(schemas).context("failed to serialize the schema mapping")?;
    fs::write(&file_path, json)
        .with_context(|| format!("failed to write {}", file_path.display()))?;

    let path = fs::canonicalize(&file_path)
        .with_context(|| format!("failed to resolve {}", file_path.display()))?;
    debug!(path = %path.display(), schema_count = schemas.len(), "Wrote schema reference file");

    Ok(WriteSummary {
        path,
        schema_count: schemas.len(),
    })
}
