//! Fuel Blend MCP Server Implementation
//!
//! Implements the MCP server with all fuel blend tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;

use crate::models::{ProfileRevision, RawBlendInput, ShareConvention};
use crate::tools::blend;
use crate::tools::status::StatusTracker;

/// Fuel Blend MCP Service
#[derive(Clone)]
pub struct FuelBlendService {
    status_tracker: Arc<StatusTracker>,
    /// Revision used when a tool call does not name one
    default_revision: ProfileRevision,
    tool_router: ToolRouter<FuelBlendService>,
}

impl FuelBlendService {
    pub fn new(default_revision: ProfileRevision) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new(default_revision)),
            default_revision,
            tool_router: Self::tool_router(),
        }
    }

    fn resolve_revision(&self, requested: Option<&str>) -> Result<ProfileRevision, McpError> {
        match requested {
            None => Ok(self.default_revision),
            Some(s) => ProfileRevision::from_str(s).ok_or_else(|| {
                McpError::invalid_params(
                    format!("Unknown profile revision '{}'. Use 'initial' or 'current'.", s),
                    None,
                )
            }),
        }
    }
}

// ============================================================================
// Blend Parameter Structs
// ============================================================================

/// A numeric field as either a JSON number or a raw string from a form
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    fn into_raw(self) -> String {
        match self {
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateBlendParams {
    /// Total blend mass in grams
    pub total_mass: FieldValue,
    /// Primary fuel share (percent 0-100 or fraction 0-1, see convention)
    pub primary_share: FieldValue,
    /// M5 additive share, same convention as primary_share
    pub secondary_share: FieldValue,
    /// Primary fuel: "Nitro+" or "V-Power"
    pub fuel_type: String,
    /// "percent" (shares sum to 100) or "fraction" (shares sum to 1.0). Default percent.
    #[serde(default = "default_convention")]
    pub convention: String,
    /// Fuel constant revision: "initial" or "current" (optional, server default if omitted)
    pub revision: Option<String>,
}

fn default_convention() -> String {
    "percent".to_string()
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListFuelProfilesParams {
    /// Fuel constant revision: "initial" or "current" (optional, server default if omitted)
    pub revision: Option<String>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl FuelBlendService {
    // --- Status ---

    #[tool(description = "Get the current status of the fuel blend service including build info, default profile revision, and process information")]
    fn fuel_blend_status(&self) -> Result<CallToolResult, McpError> {
        let status = self.status_tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get instructions for sizing a fuel blend: share conventions, profile revisions, output fields and error codes. Call this before the first calculate_blend.")]
    fn blend_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::BLEND_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(BLEND_INSTRUCTIONS)]))
    }

    // --- Blend ---

    #[tool(description = "Calculate mixing volumes (ml), lube volume and rich/lean AFR targets for a primary fuel blended with M5, from total mass in grams and the mass split")]
    fn calculate_blend(&self, Parameters(p): Parameters<CalculateBlendParams>) -> Result<CallToolResult, McpError> {
        let convention = ShareConvention::from_str(&p.convention).ok_or_else(|| {
            McpError::invalid_params(
                format!("Unknown convention '{}'. Use 'percent' or 'fraction'.", p.convention),
                None,
            )
        })?;
        let revision = self.resolve_revision(p.revision.as_deref())?;
        let raw = RawBlendInput {
            total_mass: p.total_mass.into_raw(),
            primary_share: p.primary_share.into_raw(),
            secondary_share: p.secondary_share.into_raw(),
            fuel_type: p.fuel_type,
        };

        let json = match blend::calculate_blend(&raw, convention, revision) {
            Ok(resp) => serde_json::to_string_pretty(&resp),
            Err(resp) => serde_json::to_string_pretty(&resp),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "List fuel profiles (AFR and density) for a profile revision, including the fixed M5 additive")]
    fn list_fuel_profiles(&self, Parameters(p): Parameters<ListFuelProfilesParams>) -> Result<CallToolResult, McpError> {
        let revision = self.resolve_revision(p.revision.as_deref())?;
        let result = blend::list_fuel_profiles(revision).map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for FuelBlendService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "fuelblend".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Fuel Blend Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Fuel Blend Calculator - mixing volumes and AFR targets for a primary fuel blended with M5. \
                 IMPORTANT: Call blend_instructions before the first calculation. \
                 Blend: calculate_blend (total_mass in grams, primary_share/secondary_share, fuel_type, convention). \
                 Profiles: list_fuel_profiles. \
                 Status: fuel_blend_status."
                    .into(),
            ),
        }
    }
}
