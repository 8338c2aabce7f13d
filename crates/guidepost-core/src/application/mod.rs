/// Workflow engine service
pub mod workflow_engine;
