//! MCP server module

mod server;

pub use server::ExchangeService;
