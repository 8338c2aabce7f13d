//! Error types for the Guidepost MCP adapter
//!
//! Every variant is a recoverable caller-input problem; the service renders
//! them into error content documents so the protocol responder always emits
//! a well-formed reply.

use guidepost_core::CoreError;
use thiserror::Error;

/// Adapter error types
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Required tool parameter absent or blank
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// Scenario outside the closed enumeration. The engine itself would fall
    /// back to generic; this layer rejects instead.
    #[error("Invalid scenario: {0}. Available scenarios: retail, finance, logistics, generic")]
    InvalidScenario(String),

    /// Error surfaced by the workflow engine
    #[error("{0}")]
    Engine(#[from] CoreError),
}
