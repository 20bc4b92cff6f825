//! Exchange Calculator MCP Server Implementation
//!
//! Exposes one calculator session as MCP tools.

use std::sync::{Arc, Mutex, MutexGuard};

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::data::DatasetSource;
use crate::engine::Session;
use crate::tools::catalog;
use crate::tools::session::{self as session_tools, RawAmount};
use crate::tools::status::StatusTracker;

/// Exchange Calculator MCP Service
#[derive(Clone)]
pub struct ExchangeService {
    status_tracker: Arc<StatusTracker>,
    session: Arc<Mutex<Session>>,
    tool_router: ToolRouter<ExchangeService>,
}

impl ExchangeService {
    pub fn new(session: Session, source: DatasetSource) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new(source)),
            session: Arc::new(Mutex::new(session)),
            tool_router: Self::tool_router(),
        }
    }

    fn session(&self) -> Result<MutexGuard<'_, Session>, McpError> {
        self.session
            .lock()
            .map_err(|_| McpError::internal_error("Session lock poisoned", None))
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListFoodsParams {
    /// Food group key: cereales, verduras, frutas, lacteos, carnes, leguminosas, lipidos, aceites, azucares
    pub group: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetPortionParams {
    /// Food id from list_foods
    pub food_id: String,
    /// Portions consumed (number or numeric text). Invalid or negative values are stored as 0, values above 100 as 100.
    pub value: RawAmount,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetPortionParams {
    /// Food id from list_foods
    pub food_id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetRequirementParams {
    /// Nutrient field: energy, protein, carbohydrate or lipid
    pub field: String,
    /// Daily target (number or numeric text). Invalid or negative values are stored as 0.
    pub value: RawAmount,
}

// ============================================================================
// Tools
// ============================================================================

#[tool_router]
impl ExchangeService {
    // --- Status ---

    #[tool(description = "Get the current status of the exchange calculator including build info, dataset sources, and process information")]
    fn calc_status(&self) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        json_result(&self.status_tracker.get_status(&session))
    }

    #[tool(description = "Get instructions for using the exchange calculator. Call this when starting a session or when unsure how the tools fit together.")]
    fn calculator_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CALCULATOR_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CALCULATOR_INSTRUCTIONS)]))
    }

    // --- Catalog ---

    #[tool(description = "List food groups with item counts and nutrients per exchange portion")]
    fn list_food_groups(&self) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        json_result(&catalog::list_food_groups(&session))
    }

    #[tool(description = "List the foods in a group with their reference portion and the portions currently entered")]
    fn list_foods(&self, Parameters(p): Parameters<ListFoodsParams>) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        let result = catalog::list_foods(&session, &p.group).map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    // --- Selections ---

    #[tool(description = "Set the number of portions eaten for a food. Overwrites any previous value; 0 clears it. Returns the updated grand total.")]
    fn set_portion(&self, Parameters(p): Parameters<SetPortionParams>) -> Result<CallToolResult, McpError> {
        let mut session = self.session()?;
        let result = session_tools::set_portion(&mut session, &p.food_id, &p.value)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Get the portions entered for a food (0 if never set)")]
    fn get_portion(&self, Parameters(p): Parameters<GetPortionParams>) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        json_result(&session_tools::get_portion(&session, &p.food_id))
    }

    // --- Requirements ---

    #[tool(description = "Get the patient's daily requirement targets")]
    fn get_requirements(&self) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        json_result(&session_tools::get_requirements(&session))
    }

    #[tool(description = "Set one daily requirement target (energy, protein, carbohydrate or lipid). Returns the updated targets and adequacy.")]
    fn set_requirement(&self, Parameters(p): Parameters<SetRequirementParams>) -> Result<CallToolResult, McpError> {
        let mut session = self.session()?;
        let result = session_tools::set_requirement(&mut session, &p.field, &p.value)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    // --- Reports ---

    #[tool(description = "Get full-precision portions and nutrients per food group plus the grand total")]
    fn get_totals(&self) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        let result = session_tools::get_totals(&session).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Get the percentage of each requirement met by the grand total")]
    fn get_adequacy(&self) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        let result = session_tools::get_adequacy(&session).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Get the rounded summary table: non-empty groups, totals, requirements and adequacy")]
    fn get_summary(&self) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        let result = session_tools::get_summary(&session).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for ExchangeService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "exchange-calc".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Exchange Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Exchange Calculator - food-exchange portion totals and nutrient adequacy. \
                 Call calculator_instructions first. \
                 Catalog: list_food_groups, list_foods. \
                 Portions: set_portion, get_portion. \
                 Requirements: get_requirements, set_requirement. \
                 Reports: get_totals, get_adequacy, get_summary. \
                 Status: calc_status."
                    .into(),
            ),
        }
    }
}
