//! Exchange Calculator
//!
//! An MCP server for food-exchange portion totals and nutrient adequacy.

use std::sync::Arc;

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use exchange_calc::build_info;
use exchange_calc::data;
use exchange_calc::engine::Session;
use exchange_calc::mcp::ExchangeService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("exchange_calc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let data_dir = data::resolve_data_dir();
    match &data_dir {
        Some(dir) => eprintln!("Data directory: {}", dir.display()),
        None => eprintln!("Data directory: none, using builtin datasets"),
    }

    // A catalog that fails to load is fatal for the session
    let dataset = data::load_dataset(data_dir.as_deref())?;
    eprintln!(
        "Loaded {} foods, {} reference groups",
        dataset.catalog.item_count(),
        dataset.reference.len()
    );

    let session = Session::new(Arc::new(dataset.catalog), Arc::new(dataset.reference))?;
    let service = ExchangeService::new(session, dataset.source);

    // Create stdio transport
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
