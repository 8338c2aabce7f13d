//!
//! Guidepost Core - Interactive workflow engine for guided database analysis
//!
//! This crate holds the stateful core of the Guidepost advisory service: the
//! immutable scenario catalog, the concurrent session registry, and the
//! workflow engine that advances sessions through scenario step sequences in
//! response to discrete choice events. The engine never touches a database;
//! suggested queries are opaque strings handed to the caller.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Domain layer - scenarios, sessions, and the registry seam
pub mod domain;

/// Application services - the workflow engine
pub mod application;

/// Reply types handed to the presentation adapter
pub mod types;

/// Error types
pub mod error;

// Re-export key types
pub use error::CoreError;
pub use types::{CompletionSummary, RenderedChoice, StatusSnapshot, StepRendering, WorkflowSummary};

// Re-export main API types for easy use
pub use application::workflow_engine::WorkflowEngine;
pub use domain::catalog::ScenarioCatalog;
pub use domain::registry::{memory::MemorySessionStore, SessionStore};
pub use domain::scenario::{
    ChoiceOption, ScenarioDefinition, ScenarioType, StepDefinition, StepGuidance,
};
pub use domain::session::{ChoiceRecord, WorkflowId, WorkflowSession};
