//! Workflow sessions: one user's in-progress run through a scenario's step
//! sequence.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use super::scenario::ScenarioType;

/// Value object: workflow identifier.
///
/// Shape: `wf_<userId>_<scenarioType>_<disambiguator>`. The disambiguator is
/// a v4 UUID so the same user/scenario pair can hold any number of concurrent
/// sessions without collision.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkflowId(pub String);

impl WorkflowId {
    /// Generate a fresh workflow identifier for a user/scenario pair.
    pub fn generate(user_id: &str, scenario: ScenarioType) -> Self {
        WorkflowId(format!(
            "wf_{}_{}_{}",
            user_id,
            scenario,
            Uuid::new_v4().simple()
        ))
    }
}

impl std::fmt::Display for WorkflowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One audited choice submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceRecord {
    /// The opaque choice identifier the caller selected
    pub choice: String,

    /// Free-form additional data submitted with the choice
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub additional_data: HashMap<String, String>,

    /// When the choice was processed
    pub timestamp: DateTime<Utc>,
}

/// Aggregate: one workflow session.
///
/// Created by `start_workflow`, mutated only by `process_choice`, destroyed
/// by `complete_workflow`. No expiry; a session lives until explicitly
/// completed or the process ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowSession {
    /// Unique identifier
    pub id: WorkflowId,

    /// Scenario this session runs through
    pub scenario: ScenarioType,

    /// Owning user identifier
    pub user_id: String,

    /// Current step index; starts at 0, never exceeds `total_steps - 1`
    pub current_step: usize,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Ordered choice history; one entry per successful choice submission
    pub choices: Vec<ChoiceRecord>,
}

impl WorkflowSession {
    /// Create a new session at step 0 with an empty history.
    pub fn new(user_id: &str, scenario: ScenarioType) -> Self {
        Self {
            id: WorkflowId::generate(user_id, scenario),
            scenario,
            user_id: user_id.to_string(),
            current_step: 0,
            created_at: Utc::now(),
            choices: Vec::new(),
        }
    }

    /// Record a choice and advance by exactly one step.
    ///
    /// The choice identifier is opaque: it is appended to the audit history
    /// and never branched on. The step index clamps at `total_steps - 1`; a
    /// submission at the final step still succeeds and still grows the
    /// history.
    pub fn record_choice(
        &mut self,
        choice_id: &str,
        additional_data: HashMap<String, String>,
        total_steps: usize,
    ) {
        self.choices.push(ChoiceRecord {
            choice: choice_id.to_string(),
            additional_data,
            timestamp: Utc::now(),
        });

        if self.current_step + 1 < total_steps {
            self.current_step += 1;
        }
    }

    /// Fraction of the scenario completed, in `[0.0, 1.0)`.
    pub fn progress(&self, total_steps: usize) -> f64 {
        if total_steps == 0 {
            return 0.0;
        }
        self.current_step as f64 / total_steps as f64
    }

    /// Time since the session was created.
    pub fn elapsed(&self) -> Duration {
        Utc::now() - self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_creation() {
        let session = WorkflowSession::new("alice", ScenarioType::Retail);

        assert_eq!(session.scenario, ScenarioType::Retail);
        assert_eq!(session.user_id, "alice");
        assert_eq!(session.current_step, 0);
        assert!(session.choices.is_empty());
        assert!(session.created_at <= Utc::now());

        // Identifier carries the user, the scenario, and a disambiguator
        assert!(session.id.0.starts_with("wf_alice_retail_"));
    }

    #[test]
    fn test_workflow_ids_do_not_collide() {
        let a = WorkflowId::generate("alice", ScenarioType::Retail);
        let b = WorkflowId::generate("alice", ScenarioType::Retail);

        assert_ne!(a, b);
    }

    #[test]
    fn test_record_choice_advances_by_one() {
        let mut session = WorkflowSession::new("bob", ScenarioType::Retail);
        let total_steps = 4;

        session.record_choice("explore_customers", HashMap::new(), total_steps);
        assert_eq!(session.current_step, 1);
        assert_eq!(session.choices.len(), 1);
        assert_eq!(session.choices[0].choice, "explore_customers");

        session.record_choice("run_query", HashMap::new(), total_steps);
        assert_eq!(session.current_step, 2);
        assert_eq!(session.choices.len(), 2);
    }

    #[test]
    fn test_record_choice_clamps_at_final_step() {
        let mut session = WorkflowSession::new("bob", ScenarioType::Generic);
        let total_steps = 3;

        for i in 0..5 {
            session.record_choice(&format!("choice_{}", i), HashMap::new(), total_steps);
        }

        // Index pinned at the last step, history keeps growing
        assert_eq!(session.current_step, total_steps - 1);
        assert_eq!(session.choices.len(), 5);
    }

    #[test]
    fn test_progress_stays_below_one() {
        let mut session = WorkflowSession::new("carol", ScenarioType::Retail);
        let total_steps = 4;

        assert_eq!(session.progress(total_steps), 0.0);

        let mut last = 0.0;
        for _ in 0..3 {
            session.record_choice("run_query", HashMap::new(), total_steps);
            let progress = session.progress(total_steps);
            assert!(progress > last);
            last = progress;
        }

        assert!(session.progress(total_steps) < 1.0);

        // Clamped submissions no longer move progress
        session.record_choice("run_query", HashMap::new(), total_steps);
        assert_eq!(session.progress(total_steps), last);
    }

    #[test]
    fn test_choice_record_keeps_additional_data() {
        let mut session = WorkflowSession::new("dave", ScenarioType::Retail);
        let mut data = HashMap::new();
        data.insert("customQuery".to_string(), "SELECT 1".to_string());

        session.record_choice("modify_query", data, 4);

        assert_eq!(
            session.choices[0].additional_data.get("customQuery"),
            Some(&"SELECT 1".to_string())
        );
    }

    #[test]
    fn test_session_serialization_round_trip() {
        let mut session = WorkflowSession::new("erin", ScenarioType::Finance);
        session.record_choice("explore_accounts", HashMap::new(), 4);

        let serialized = serde_json::to_string(&session).unwrap();
        let deserialized: WorkflowSession = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, session);
    }
}
