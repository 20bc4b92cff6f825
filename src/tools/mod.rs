//! Calculator Tools module
//!
//! MCP tool implementations for the exchange calculator.

pub mod catalog;
pub mod session;
pub mod status;
