//! Exchange Calculator Library
//!
//! Food-exchange portion aggregation and nutrient adequacy.

pub mod build_info;
pub mod data;
pub mod engine;
pub mod mcp;
pub mod models;
pub mod tools;
