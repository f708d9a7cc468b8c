//! Fuel Blend Calculator
//!
//! An MCP server for two-component fuel blend calculations.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use fuelblend::build_info;
use fuelblend::mcp::FuelBlendService;
use fuelblend::models::ProfileRevision;

/// Get the default profile revision from environment or use the current table
fn get_default_revision() -> Result<ProfileRevision, Box<dyn std::error::Error>> {
    match std::env::var("FUELBLEND_PROFILE_REVISION") {
        Ok(value) => ProfileRevision::from_str(&value).ok_or_else(|| {
            format!(
                "FUELBLEND_PROFILE_REVISION='{}' is not a known revision (use 'initial' or 'current')",
                value
            )
            .into()
        }),
        Err(_) => Ok(ProfileRevision::default()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fuelblend=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let revision = get_default_revision()?;
    eprintln!("Default profile revision: {}", revision);

    let service = FuelBlendService::new(revision);

    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;

    server.waiting().await?;

    Ok(())
}
