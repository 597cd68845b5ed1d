//! Operator-facing console reporting
//!
//! The loader talks to a human at a terminal. This module owns the banner
//! and the remediation block for each failure category; classification over
//! the full taxonomy happens once, here.

use crate::config::DEFAULT_DIRECTUS_URL;
use crate::error::LoadError;

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Print the opening banner
pub fn print_banner() {
    println!("{}", rule());
    println!("🚀 Directus Schema Loader");
    println!("{}", rule());
    println!();
}

/// Print the closing rule
pub fn print_footer() {
    println!();
    println!("{}", rule());
}

/// Print the diagnostic block for a failed run
pub fn report_failure(err: &LoadError) {
    match err {
        LoadError::MissingCredential => {
            println!("❌ ERROR: DIRECTUS_TOKEN environment variable is not set");
            println!();
            println!("📋 TODO - Directus Configuration Required:");
            println!("{}", rule());
            println!("1. Create a static API token in your Directus instance:");
            println!("   - Go to: {}/admin/settings/access-tokens", DEFAULT_DIRECTUS_URL);
            println!("   - Click 'Create Token'");
            println!("   - Name: 'Schema Export' (or similar)");
            println!("   - Set appropriate permissions:");
            println!("     • Read access to system collections");
            println!("     • Schema read permissions");
            println!("   - Copy the generated token");
            println!();
            println!("2. Set the token as an environment variable:");
            println!("   export DIRECTUS_TOKEN='your-token-here'");
            println!();
            println!("3. Re-run this tool:");
            println!("   cargo run");
            println!("{}", rule());
        }
        LoadError::AuthenticationFailed => {
            println!("❌ HTTP Error: 401 - Unauthorized");
            println!();
            println!("📋 TODO - Authentication Error:");
            println!("{}", rule());
            println!("Your DIRECTUS_TOKEN appears to be invalid or expired.");
            println!("Please check the following:");
            println!("1. Token is correctly copied (no extra spaces)");
            println!("2. Token has not expired");
            println!("3. Token has appropriate permissions:");
            println!("   - System collections read access");
            println!("   - Schema read permissions");
            println!();
            println!("Generate a new token at:");
            println!("{}/admin/settings/access-tokens", DEFAULT_DIRECTUS_URL);
            println!("{}", rule());
        }
        LoadError::PermissionDenied => {
            println!("❌ HTTP Error: 403 - Forbidden");
            println!();
            println!("📋 TODO - Permission Error:");
            println!("{}", rule());
            println!("Your token does not have sufficient permissions.");
            println!("Please update the token permissions to include:");
            println!("- System collections: Read access");
            println!("- Schema endpoint: Read access");
            println!("{}", rule());
        }
        LoadError::UnexpectedStatus { status, reason } => {
            println!("❌ HTTP Error: {} - {}", status, reason);
        }
        LoadError::Connection(source) => {
            println!("❌ Connection Error: {}", source);
            println!();
            println!("📋 TODO - Connection Issue:");
            println!("{}", rule());
            println!("Unable to connect to Directus instance.");
            println!("Please check:");
            println!("1. Directus URL is correct: {}", DEFAULT_DIRECTUS_URL);
            println!("2. Directus instance is running and accessible");
            println!("3. Your network connection is working");
            println!("4. No firewall is blocking the connection");
            println!("{}", rule());
        }
        LoadError::EmptySchema => {
            println!("❌ ERROR: No schemas found in the OpenAPI specification");
        }
        LoadError::Unexpected(source) => {
            println!("❌ Unexpected Error: {:#}", source);
        }
    }
}
