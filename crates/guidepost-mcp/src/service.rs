//! MCP integration layer for the workflow engine.
//!
//! This service is the strict side of the scenario-validation split: it
//! rejects missing parameters and unknown scenarios before the permissive
//! engine is reached, then renders engine replies as MCP text-content
//! documents. Every failure becomes an error document; nothing here panics.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use chrono::Utc;
use serde_json::{json, Value};
use tracing::{info, warn};

use guidepost_core::{CompletionSummary, ScenarioType, StepRendering, WorkflowEngine};

use crate::error::ServiceError;

/// Workflow tool service: validates tool calls and formats engine replies.
pub struct WorkflowToolService {
    engine: Arc<WorkflowEngine>,
}

impl WorkflowToolService {
    /// Create a new service over a shared workflow engine.
    pub fn new(engine: Arc<WorkflowEngine>) -> Self {
        Self { engine }
    }

    /// Execute the `start_workflow` tool.
    pub async fn execute_start_workflow(
        &self,
        scenario: Option<&str>,
        user_id: Option<&str>,
    ) -> Value {
        match self.try_start_workflow(scenario, user_id).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = %err, "start_workflow rejected");
                error_response(&err.to_string())
            }
        }
    }

    async fn try_start_workflow(
        &self,
        scenario: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<Value, ServiceError> {
        let scenario = require_param(scenario, "scenario")?;

        // Strict validation at this layer; the engine's own fallback to
        // generic is reached only by direct engine use.
        let scenario_type = ScenarioType::from_str(scenario)
            .map_err(|_| ServiceError::InvalidScenario(scenario.trim().to_string()))?;

        let user_id = user_id.map(str::trim).filter(|u| !u.is_empty()).unwrap_or("user");

        info!(scenario = %scenario_type, user_id = %user_id, "Starting workflow");

        let rendering = self
            .engine
            .start_workflow(scenario_type.as_str(), user_id)
            .await?;

        Ok(text_response(&format_start(&rendering, scenario_type)))
    }

    /// Execute the `workflow_choice` tool.
    pub async fn execute_workflow_choice(
        &self,
        workflow_id: Option<&str>,
        choice_id: Option<&str>,
        additional_data: HashMap<String, String>,
    ) -> Value {
        match self
            .try_workflow_choice(workflow_id, choice_id, additional_data)
            .await
        {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = %err, "workflow_choice rejected");
                error_response(&err.to_string())
            }
        }
    }

    async fn try_workflow_choice(
        &self,
        workflow_id: Option<&str>,
        choice_id: Option<&str>,
        additional_data: HashMap<String, String>,
    ) -> Result<Value, ServiceError> {
        let workflow_id = require_param(workflow_id, "workflowId")?;
        let choice_id = require_param(choice_id, "choiceId")?;

        info!(workflow_id = %workflow_id, choice_id = %choice_id, "Processing workflow choice");

        let rendering = self
            .engine
            .process_choice(workflow_id, choice_id, additional_data)
            .await?;

        Ok(text_response(&format_step(&rendering)))
    }

    /// Execute the `complete_workflow` tool.
    pub async fn execute_complete_workflow(&self, workflow_id: Option<&str>) -> Value {
        match self.try_complete_workflow(workflow_id).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = %err, "complete_workflow rejected");
                error_response(&err.to_string())
            }
        }
    }

    async fn try_complete_workflow(
        &self,
        workflow_id: Option<&str>,
    ) -> Result<Value, ServiceError> {
        let workflow_id = require_param(workflow_id, "workflowId")?;

        let completion = self.engine.complete_workflow(workflow_id).await?;

        Ok(text_response(&format_completion(&completion)))
    }

    /// Content for the `workflow://status` resource: a JSON document with
    /// every active workflow and operator guidance.
    pub async fn status_resource_content(&self) -> Value {
        let workflows = match self.engine.list_active_workflows().await {
            Ok(workflows) => workflows,
            Err(err) => {
                warn!(error = %err, "Failed to list active workflows");
                Vec::new()
            }
        };

        let mut content = json!({
            "title": "Active Workflow Status",
            "timestamp": Utc::now().to_rfc3339(),
            "totalActiveWorkflows": workflows.len(),
        });

        if workflows.is_empty() {
            content["suggestions"] = json!({
                "startWorkflow": "Use 'start_workflow' tool to begin guided analysis",
                "availableScenarios": "retail, finance, logistics, generic",
                "integration": "Workflows integrate with demo data and insight capture",
            });
        } else {
            content["activeWorkflows"] = json!(workflows);
            content["recommendations"] = json!({
                "continueWorkflow": "Use 'workflow_choice' tool to continue active workflows",
                "statusCheck": "Monitor progress and completion status",
                "newWorkflow": "Start additional workflows with 'start_workflow' tool",
            });
        }

        content
    }
}

fn require_param<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, ServiceError> {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed),
        _ => Err(ServiceError::MissingParameter(name.to_string())),
    }
}

fn text_response(text: &str) -> Value {
    json!({
        "content": [{
            "type": "text",
            "text": text,
        }]
    })
}

fn error_response(message: &str) -> Value {
    json!({
        "content": [{
            "type": "text",
            "text": format!("WORKFLOW ERROR\n\n{}", message),
        }],
        "isError": true,
    })
}

fn percent(progress: f64) -> String {
    format!("{:.1}%", progress * 100.0)
}

fn push_choices(text: &mut String, rendering: &StepRendering, heading: &str) {
    text.push_str(&format!("## {}\n\n", heading));
    for choice in &rendering.choices {
        let marker = if choice.recommended { "⭐" } else { "•" };
        text.push_str(&format!("{} **{}** (`{}`)\n", marker, choice.label, choice.id));
        text.push_str(&format!("   {}\n\n", choice.description));
    }
}

fn format_start(rendering: &StepRendering, scenario: ScenarioType) -> String {
    let mut text = String::from("INTERACTIVE WORKFLOW STARTED\n\n");
    text.push_str(&format!("Workflow ID: {}\n", rendering.workflow_id));
    text.push_str(&format!(
        "Scenario: {}\n",
        scenario.as_str().to_uppercase()
    ));
    text.push_str(&format!("Progress: {}\n\n", percent(rendering.progress)));

    text.push_str(&format!("## {}\n\n", rendering.title));
    text.push_str(&format!("{}\n\n", rendering.description));

    push_choices(&mut text, rendering, "What would you like to do?");

    text.push_str("**Next Step:** Use the `workflow_choice` tool with your selected choice ID\n");
    if let Some(first) = rendering.choices.first() {
        text.push_str(&format!(
            "   Example: `{{\"workflowId\": \"{}\", \"choiceId\": \"{}\"}}`\n\n",
            rendering.workflow_id, first.id
        ));
    }

    text.push_str("## Guidance\n\n");
    text.push_str(&format!("**Tip:** {}\n\n", rendering.guidance.tip));
    text.push_str(&format!(
        "**What to Expect:** {}\n\n",
        rendering.guidance.what_to_expect
    ));

    text
}

fn format_step(rendering: &StepRendering) -> String {
    let mut text = format!(
        "## Step {}: {}\n\n",
        rendering.step_number + 1,
        rendering.title
    );
    text.push_str(&format!("Progress: {}\n\n", percent(rendering.progress)));
    text.push_str(&format!("{}\n\n", rendering.description));

    if let Some(query) = &rendering.suggested_query {
        text.push_str("## Suggested Query\n\n");
        text.push_str(&format!("```sql\n{}\n```\n\n", query));
    }

    push_choices(&mut text, rendering, "What would you like to do next?");

    text.push_str("**Continue:** Use the `workflow_choice` tool with your selected choice ID\n");
    if let Some(first) = rendering.choices.first() {
        text.push_str(&format!(
            "   Example: `{{\"workflowId\": \"{}\", \"choiceId\": \"{}\"}}`\n\n",
            rendering.workflow_id, first.id
        ));
    }

    text
}

fn format_completion(completion: &CompletionSummary) -> String {
    format!(
        "WORKFLOW COMPLETED!\n\n\
         Successfully completed {} analysis workflow\n\
         Workflow ID: {}\n\
         Total Steps: {}\n\
         Duration: {:.1} minutes\n\n\
         ## Summary\n\
         {}\n\n\
         ## What's Next?\n\
         • Review captured insights with the insights resources\n\
         • Start a new workflow to explore different aspects\n\
         • Use the knowledge gained for independent analysis\n",
        completion.scenario_type.as_str().to_uppercase(),
        completion.workflow_id,
        completion.steps_taken,
        completion.duration_ms as f64 / (1000.0 * 60.0),
        completion.summary,
    )
}
