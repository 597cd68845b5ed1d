//! Directus schema loader entry point
//!
//! Usage: cargo run
//!
//! Reads `DIRECTUS_URL` (optional) and `DIRECTUS_TOKEN` (required) from the
//! environment, then writes the instance's schema definitions to
//! `reference/schema.json`.

use std::path::Path;
use std::process::ExitCode;

use schema_loader::{report, run, Config};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "schema_loader=info".into()),
        )
        .with_target(true)
        .init();

    report::print_banner();

    let outcome = match Config::from_env() {
        Ok(config) => run(&config, Path::new(".")).await,
        Err(err) => Err(err),
    };

    let code = match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            report::report_failure(&err);
            ExitCode::FAILURE
        }
    };

    report::print_footer();
    code
}
