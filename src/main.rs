//! MCP Server Entry Point
//!
//! This is the main entry point for the MCP server. It initializes logging,
//! loads configuration, opens the backing stores, requests capability
//! access, and serves MCP over stdio.

use std::sync::Arc;

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use organizer_mcp_server::core::access::AccessGrants;
use organizer_mcp_server::core::{Config, OrganizerServer, StdioTransport};
use organizer_mcp_server::domains::calendar::FileCalendarStore;
use organizer_mcp_server::domains::contacts::FileContactStore;
use organizer_mcp_server::domains::notifications::CommandNotifier;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!(
        "Calendar store: {}, contact store: {}",
        config.stores.calendar_path.display(),
        config.stores.contacts_path.display()
    );

    let calendar = Arc::new(FileCalendarStore::new(&config.stores.calendar_path));
    let contacts = Arc::new(FileContactStore::new(&config.stores.contacts_path));
    let notifier = match &config.notify.command {
        Some(command) => Arc::new(CommandNotifier::with_command(command.clone())),
        None => Arc::new(CommandNotifier::new()),
    };

    // Access is requested once; handlers consult the recorded grants.
    let grants = Arc::new(
        AccessGrants::request(calendar.as_ref(), contacts.as_ref(), notifier.as_ref()).await,
    );

    let server = OrganizerServer::new(config, calendar, contacts, notifier, grants);

    info!("Server initialized");

    StdioTransport::run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level and format.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
