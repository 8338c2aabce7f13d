/// Scenario vocabulary and step value objects
pub mod scenario;

/// Built-in scenario catalog
pub mod catalog;

/// Workflow session domain models
pub mod session;

/// Session registry interface and in-memory implementation
pub mod registry;
