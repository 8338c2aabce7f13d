//!
//! Guidepost MCP - Presentation adapter for the Guidepost workflow engine
//!
//! Converts workflow engine replies into the MCP tool and resource payload
//! shapes consumed by the transport layer, and enforces the strict parameter
//! validation that layer expects. The wire transport itself lives elsewhere.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Error types
pub mod error;

/// MCP tool and resource definitions
pub mod tools;

/// Tool execution service
pub mod service;

pub use error::ServiceError;
pub use service::WorkflowToolService;
pub use tools::{
    complete_workflow_tool, start_workflow_tool, workflow_choice_tool, workflow_status_resource,
};
