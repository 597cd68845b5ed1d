//! Directus schema loader
//!
//! Fetches the OpenAPI specification published by a Directus instance and
//! keeps a local reference copy of its `components.schemas` section under
//! `reference/schema.json`. One-shot: resolve configuration, fetch, extract,
//! write, report.

pub mod config;
pub mod directus;
pub mod error;
pub mod report;
pub mod schema;

use std::path::Path;
use std::time::Duration;

use anyhow::Context;

pub use crate::config::Config;
pub use crate::directus::DirectusClient;
pub use crate::error::{LoadError, LoadResult};
pub use crate::schema::WriteSummary;

/// Timeout applied to the single specification request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Run the full fetch-extract-write pipeline.
///
/// Steps run strictly in sequence and the first failure is terminal; the
/// reference file is only touched after a successful extraction. Progress
/// lines go to stdout; the caller derives the exit status from the returned
/// result.
pub async fn run(config: &Config, project_root: &Path) -> LoadResult<WriteSummary> {
    let http_client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("failed to build HTTP client")?;

    let client = DirectusClient::new(http_client, config);

    println!("🔍 Fetching schema from: {}", client.spec_url());
    let body = client.fetch_oas_spec().await?;

    let schemas = schema::extract_schemas(&body)?;

    let summary = schema::write_reference_file(project_root, &schemas)?;
    println!("✅ Schema successfully saved to: {}", summary.path.display());
    println!("📊 Schema contains {} schemas", summary.schema_count);

    Ok(summary)
}
