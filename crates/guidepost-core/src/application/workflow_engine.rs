use crate::{
    domain::catalog::ScenarioCatalog,
    domain::registry::SessionStore,
    domain::scenario::ScenarioType,
    domain::session::{WorkflowId, WorkflowSession},
    types::{CompletionSummary, RenderedChoice, StatusSnapshot, StepRendering, WorkflowSummary},
    CoreError,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// User identifier substituted when the caller omits one.
const DEFAULT_USER_ID: &str = "user";

/// Service orchestrating the workflow session lifecycle.
///
/// The engine is the only component that mutates session state, and it does
/// so only through the injected [`SessionStore`]. Every operation runs to
/// completion synchronously; nothing here blocks on I/O.
pub struct WorkflowEngine {
    /// Immutable scenario catalog, shared process-wide
    catalog: Arc<ScenarioCatalog>,

    /// Concurrent session registry
    sessions: Arc<dyn SessionStore>,
}

impl WorkflowEngine {
    /// Create a new workflow engine over an injected catalog and registry.
    pub fn new(catalog: Arc<ScenarioCatalog>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { catalog, sessions }
    }

    /// The scenario catalog this engine serves.
    pub fn catalog(&self) -> &ScenarioCatalog {
        &self.catalog
    }

    /// Start a new workflow session and return the rendering of step 0.
    ///
    /// Permissive by contract: an unknown or empty scenario falls back to the
    /// generic scenario, a blank user id substitutes a default. There is no
    /// caller-input error path.
    pub async fn start_workflow(
        &self,
        scenario: &str,
        user_id: &str,
    ) -> Result<StepRendering, CoreError> {
        let scenario = ScenarioType::parse_or_generic(scenario);
        let user_id = match user_id.trim() {
            "" => DEFAULT_USER_ID,
            trimmed => trimmed,
        };

        let session = WorkflowSession::new(user_id, scenario);
        let rendering = self.render_step(&session)?;

        self.sessions.insert(session.clone()).await?;

        info!(
            workflow_id = %session.id,
            user_id = %session.user_id,
            scenario = %scenario,
            "Started new workflow"
        );

        Ok(rendering)
    }

    /// Record a choice on a session and advance it by exactly one step.
    ///
    /// The choice identifier is stored for audit only; all registered choices
    /// lead to the single next step in sequence. At the final step the index
    /// clamps and the same rendering is returned. A miss yields
    /// [`CoreError::WorkflowNotFound`].
    pub async fn process_choice(
        &self,
        workflow_id: &str,
        choice_id: &str,
        additional_data: HashMap<String, String>,
    ) -> Result<StepRendering, CoreError> {
        let id = WorkflowId(workflow_id.to_string());

        // History append and step advance run inside the store's per-key
        // critical section, so concurrent submissions on one session
        // serialize instead of skipping or double-advancing.
        let catalog = Arc::clone(&self.catalog);
        let choice = choice_id.to_string();
        let updated = self
            .sessions
            .update(
                &id,
                Box::new(move |session| {
                    let total_steps = catalog.total_steps(session.scenario);
                    session.record_choice(&choice, additional_data, total_steps);
                }),
            )
            .await?
            .ok_or_else(|| CoreError::WorkflowNotFound(workflow_id.to_string()))?;

        info!(
            workflow_id = %updated.id,
            choice_id = %choice_id,
            current_step = updated.current_step,
            "Processed workflow choice"
        );

        self.render_step(&updated)
    }

    /// Read-only status snapshot of a session. Mutates nothing.
    pub async fn workflow_status(&self, workflow_id: &str) -> Result<StatusSnapshot, CoreError> {
        let id = WorkflowId(workflow_id.to_string());
        let session = self
            .sessions
            .find(&id)
            .await?
            .ok_or_else(|| CoreError::WorkflowNotFound(workflow_id.to_string()))?;

        let total_steps = self.catalog.total_steps(session.scenario);

        Ok(StatusSnapshot {
            workflow_id: session.id.0.clone(),
            scenario_type: session.scenario,
            current_step: session.current_step,
            total_steps,
            progress: session.progress(total_steps),
            elapsed_ms: session.elapsed().num_milliseconds(),
            choices: session.choices,
        })
    }

    /// Compact summaries of every active session, for operational visibility
    /// across all users. Ordered by creation time so operator output is
    /// stable.
    pub async fn list_active_workflows(&self) -> Result<Vec<WorkflowSummary>, CoreError> {
        let mut sessions = self.sessions.list().await?;
        sessions.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.0.cmp(&b.id.0))
        });

        debug!(active = sessions.len(), "Listing active workflows");

        Ok(sessions
            .into_iter()
            .map(|session| WorkflowSummary {
                workflow_id: session.id.0.clone(),
                scenario_type: session.scenario,
                current_step: session.current_step,
                elapsed_ms: session.elapsed().num_milliseconds(),
            })
            .collect())
    }

    /// Complete a session: remove it from the registry and return the
    /// terminal summary. A second completion of the same identifier misses,
    /// because completed sessions are equivalent to absent ones.
    pub async fn complete_workflow(
        &self,
        workflow_id: &str,
    ) -> Result<CompletionSummary, CoreError> {
        let id = WorkflowId(workflow_id.to_string());
        let session = self
            .sessions
            .remove(&id)
            .await?
            .ok_or_else(|| CoreError::WorkflowNotFound(workflow_id.to_string()))?;

        let duration = session.elapsed();

        info!(
            workflow_id = %session.id,
            scenario = %session.scenario,
            steps = session.current_step,
            duration_ms = duration.num_milliseconds(),
            "Completed workflow"
        );

        Ok(CompletionSummary {
            workflow_id: session.id.0.clone(),
            completed: true,
            scenario_type: session.scenario,
            steps_taken: session.current_step,
            choice_count: session.choices.len(),
            duration_ms: duration.num_milliseconds(),
            summary: summarize(&session),
        })
    }

    fn render_step(&self, session: &WorkflowSession) -> Result<StepRendering, CoreError> {
        let definition = self.catalog.definition(session.scenario);
        let step = definition.steps.get(session.current_step).ok_or_else(|| {
            CoreError::Other(format!(
                "Step {} out of range for scenario {}",
                session.current_step, session.scenario
            ))
        })?;

        Ok(StepRendering {
            workflow_id: session.id.0.clone(),
            step_number: session.current_step,
            step_type: step.step_type.clone(),
            title: step.title.clone(),
            description: step.description.clone(),
            suggested_query: step.suggested_query.clone(),
            choices: step
                .choices
                .iter()
                .map(|choice| RenderedChoice {
                    id: choice.id.clone(),
                    label: choice.label.clone(),
                    description: choice.description.clone(),
                    recommended: choice.recommended,
                })
                .collect(),
            guidance: step.guidance.clone(),
            progress: session.progress(definition.total_steps()),
        })
    }
}

/// One-line human summary of a finished session.
fn summarize(session: &WorkflowSession) -> String {
    let mut summary = format!(
        "Completed {} workflow with {} steps. ",
        session.scenario, session.current_step
    );
    summary.push_str("User choices: ");
    for (index, record) in session.choices.iter().enumerate() {
        summary.push_str(&format!("step_{}={}; ", index, record.choice));
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registry::memory::MemorySessionStore;

    fn engine() -> WorkflowEngine {
        WorkflowEngine::new(
            Arc::new(ScenarioCatalog::new()),
            Arc::new(MemorySessionStore::new()),
        )
    }

    #[tokio::test]
    async fn test_start_workflow_renders_step_zero() {
        let engine = engine();

        let rendering = engine.start_workflow("retail", "alice").await.unwrap();

        assert_eq!(rendering.step_number, 0);
        assert_eq!(rendering.step_type, "welcome");
        assert_eq!(rendering.progress, 0.0);
        assert!(!rendering.choices.is_empty());
        assert!(rendering.workflow_id.contains("alice"));
        assert!(rendering.workflow_id.contains("retail"));
    }

    #[tokio::test]
    async fn test_start_workflow_unknown_scenario_falls_back_to_generic() {
        let engine = engine();

        let rendering = engine.start_workflow("warehouse", "bob").await.unwrap();

        assert!(rendering.workflow_id.contains("generic"));
        assert_eq!(rendering.choices[0].id, "explore_tables");
    }

    #[tokio::test]
    async fn test_start_workflow_blank_user_gets_default() {
        let engine = engine();

        let rendering = engine.start_workflow("retail", "  ").await.unwrap();

        assert!(rendering.workflow_id.starts_with("wf_user_retail_"));
    }

    #[tokio::test]
    async fn test_process_choice_advances_and_renders_next_step() {
        let engine = engine();
        let start = engine.start_workflow("retail", "alice").await.unwrap();

        let next = engine
            .process_choice(&start.workflow_id, "explore_customers", HashMap::new())
            .await
            .unwrap();

        assert_eq!(next.step_number, 1);
        assert_eq!(next.step_type, "query_customers");
        assert!(next.progress > 0.0);
        assert!(next.suggested_query.as_ref().unwrap().contains("customers"));
    }

    #[tokio::test]
    async fn test_process_choice_unknown_workflow_is_not_found() {
        let engine = engine();

        let err = engine
            .process_choice("wf_ghost_retail_0", "run_query", HashMap::new())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::WorkflowNotFound("wf_ghost_retail_0".to_string())
        );
        assert_eq!(err.to_string(), "Workflow not found: wf_ghost_retail_0");
        // No session was created by the failed call
        assert!(engine.list_active_workflows().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_process_choice_clamps_at_final_step() {
        let engine = engine();
        let start = engine.start_workflow("generic", "carol").await.unwrap();

        let mut last = start;
        for _ in 0..5 {
            last = engine
                .process_choice(&last.workflow_id, "run_query", HashMap::new())
                .await
                .unwrap();
        }

        // Generic has 3 steps; the rendering pins at the last one
        assert_eq!(last.step_number, 2);

        let status = engine.workflow_status(&last.workflow_id).await.unwrap();
        assert_eq!(status.current_step, 2);
        assert_eq!(status.choices.len(), 5);
        assert!(status.progress < 1.0);
    }

    #[tokio::test]
    async fn test_complete_then_status_misses() {
        let engine = engine();
        let start = engine.start_workflow("finance", "dave").await.unwrap();

        let completion = engine.complete_workflow(&start.workflow_id).await.unwrap();
        assert!(completion.completed);
        assert_eq!(completion.scenario_type, ScenarioType::Finance);

        let err = engine.workflow_status(&start.workflow_id).await.unwrap_err();
        assert!(matches!(err, CoreError::WorkflowNotFound(_)));

        // Completed is equivalent to absent; a second completion misses too
        let err = engine
            .complete_workflow(&start.workflow_id)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::WorkflowNotFound(_)));
    }

    #[tokio::test]
    async fn test_completion_summary_counts_choices() {
        let engine = engine();
        let start = engine.start_workflow("retail", "erin").await.unwrap();

        engine
            .process_choice(&start.workflow_id, "explore_customers", HashMap::new())
            .await
            .unwrap();
        engine
            .process_choice(&start.workflow_id, "run_query", HashMap::new())
            .await
            .unwrap();

        let completion = engine.complete_workflow(&start.workflow_id).await.unwrap();
        assert_eq!(completion.steps_taken, 2);
        assert_eq!(completion.choice_count, 2);
        assert!(completion.summary.contains("retail"));
        assert!(completion.summary.contains("step_0=explore_customers"));
        assert!(completion.summary.contains("step_1=run_query"));
    }
}
