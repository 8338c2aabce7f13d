//! Reply types the workflow engine hands to its presentation adapter.
//!
//! Field names serialize in the camelCase wire shape the adapter emits, so
//! these types are the single source of truth for the external payloads.

use serde::{Deserialize, Serialize};

use crate::domain::scenario::{ScenarioType, StepGuidance};
use crate::domain::session::ChoiceRecord;

/// One rendered choice option within a step rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedChoice {
    /// Choice identifier
    pub id: String,

    /// Human label
    pub label: String,

    /// Short explanation of the choice
    pub description: String,

    /// Whether this is the suggested option
    pub recommended: bool,
}

/// Rendering of a session's current step, returned by `start_workflow` and
/// `process_choice`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRendering {
    /// Workflow identifier
    pub workflow_id: String,

    /// Zero-based step index
    pub step_number: usize,

    /// Step type tag
    pub step_type: String,

    /// Step title
    pub title: String,

    /// Step description
    pub description: String,

    /// Suggested SQL, present only on query steps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_query: Option<String>,

    /// Ordered choice options for the step
    pub choices: Vec<RenderedChoice>,

    /// Guidance bundle
    pub guidance: StepGuidance,

    /// Fraction of total steps completed, in `[0.0, 1.0)`
    pub progress: f64,
}

/// Read-only status snapshot of a session, returned by `workflow_status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    /// Workflow identifier
    pub workflow_id: String,

    /// Scenario the session runs through
    pub scenario_type: ScenarioType,

    /// Current step index
    pub current_step: usize,

    /// Total steps in the scenario
    pub total_steps: usize,

    /// Fraction of total steps completed
    pub progress: f64,

    /// Milliseconds since the session was created
    pub elapsed_ms: i64,

    /// Full ordered choice history
    pub choices: Vec<ChoiceRecord>,
}

/// Compact per-session summary, returned by `list_active_workflows`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSummary {
    /// Workflow identifier
    pub workflow_id: String,

    /// Scenario the session runs through
    pub scenario_type: ScenarioType,

    /// Current step index
    pub current_step: usize,

    /// Milliseconds since the session was created
    pub elapsed_ms: i64,
}

/// Terminal summary returned by `complete_workflow`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionSummary {
    /// Workflow identifier
    pub workflow_id: String,

    /// Always true; completion removed the session from the registry
    pub completed: bool,

    /// Scenario the session ran through
    pub scenario_type: ScenarioType,

    /// Step index the session had reached
    pub steps_taken: usize,

    /// Number of recorded choices
    pub choice_count: usize,

    /// Total session duration in milliseconds
    pub duration_ms: i64,

    /// One-line human summary of the run
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_rendering_wire_shape() {
        let rendering = StepRendering {
            workflow_id: "wf_alice_retail_1".to_string(),
            step_number: 0,
            step_type: "welcome".to_string(),
            title: "Welcome".to_string(),
            description: "desc".to_string(),
            suggested_query: None,
            choices: vec![RenderedChoice {
                id: "explore_customers".to_string(),
                label: "Start with Customer Analysis".to_string(),
                description: "Understand who our customers are".to_string(),
                recommended: true,
            }],
            guidance: StepGuidance::new("tip", "expect", "next"),
            progress: 0.0,
        };

        let value = serde_json::to_value(&rendering).unwrap();
        assert_eq!(value["workflowId"], "wf_alice_retail_1");
        assert_eq!(value["stepNumber"], 0);
        assert_eq!(value["stepType"], "welcome");
        assert_eq!(value["guidance"]["whatToExpect"], "expect");
        // Absent query steps omit the field entirely
        assert!(value.get("suggestedQuery").is_none());
    }

    #[test]
    fn test_status_snapshot_wire_shape() {
        let snapshot = StatusSnapshot {
            workflow_id: "wf_u_retail_1".to_string(),
            scenario_type: ScenarioType::Retail,
            current_step: 2,
            total_steps: 4,
            progress: 0.5,
            elapsed_ms: 1200,
            choices: Vec::new(),
        };

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["scenarioType"], "retail");
        assert_eq!(value["currentStep"], 2);
        assert_eq!(value["totalSteps"], 4);
        assert_eq!(value["elapsedMs"], 1200);
    }

    #[test]
    fn test_completion_summary_wire_shape() {
        let completion = CompletionSummary {
            workflow_id: "wf_u_generic_1".to_string(),
            completed: true,
            scenario_type: ScenarioType::Generic,
            steps_taken: 2,
            choice_count: 2,
            duration_ms: 900,
            summary: "Completed generic workflow with 2 steps.".to_string(),
        };

        let value = serde_json::to_value(&completion).unwrap();
        assert_eq!(value["completed"], true);
        assert_eq!(value["stepsTaken"], 2);
        assert_eq!(value["choiceCount"], 2);
    }
}
