//! Scenario vocabulary: the closed scenario enumeration and the value
//! objects that make up a step definition.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed enumeration of guided-analysis scenarios.
///
/// Unknown scenario strings convert to [`ScenarioType::Generic`] at the
/// boundary via [`ScenarioType::parse_or_generic`]; the strict [`FromStr`]
/// impl is for callers that validate before reaching the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioType {
    /// E-commerce analysis: customers, products, orders
    Retail,

    /// Banking analysis: accounts, transactions, loans
    Finance,

    /// Supply chain analysis: shipments, routes, deliveries
    Logistics,

    /// General database exploration, also the fallback scenario
    Generic,
}

impl ScenarioType {
    /// All scenario types, in the order they are advertised to callers.
    pub const ALL: [ScenarioType; 4] = [
        ScenarioType::Retail,
        ScenarioType::Finance,
        ScenarioType::Logistics,
        ScenarioType::Generic,
    ];

    /// Lowercase name used on the wire and in workflow identifiers.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioType::Retail => "retail",
            ScenarioType::Finance => "finance",
            ScenarioType::Logistics => "logistics",
            ScenarioType::Generic => "generic",
        }
    }

    /// Permissive parse: case-insensitive, trim-tolerant, and any
    /// unrecognized or empty value degrades to `Generic` rather than failing.
    pub fn parse_or_generic(value: &str) -> Self {
        value.parse().unwrap_or(ScenarioType::Generic)
    }
}

impl FromStr for ScenarioType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retail" => Ok(ScenarioType::Retail),
            "finance" => Ok(ScenarioType::Finance),
            "logistics" => Ok(ScenarioType::Logistics),
            "generic" => Ok(ScenarioType::Generic),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ScenarioType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable option within a step.
///
/// The id is an opaque label: the engine records it for audit but never
/// branches on it. By convention exactly one option per step is marked
/// recommended; the engine does not enforce this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// Choice identifier, unique within its step
    pub id: String,

    /// Human label shown to the caller
    pub label: String,

    /// Short explanation of what the choice does
    pub description: String,

    /// Whether this is the suggested option for newcomers
    pub recommended: bool,
}

impl ChoiceOption {
    /// Create a choice option.
    pub fn new(id: &str, label: &str, description: &str, recommended: bool) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            recommended,
        }
    }
}

/// Guidance bundle attached to every step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepGuidance {
    /// Contextual tip for the current step
    pub tip: String,

    /// What the caller will see after acting on the step
    pub what_to_expect: String,

    /// Where the workflow goes from here
    pub next_steps: String,
}

impl StepGuidance {
    /// Create a guidance bundle.
    pub fn new(tip: &str, what_to_expect: &str, next_steps: &str) -> Self {
        Self {
            tip: tip.to_string(),
            what_to_expect: what_to_expect.to_string(),
            next_steps: next_steps.to_string(),
        }
    }
}

/// One stage of a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDefinition {
    /// Step type tag, e.g. "welcome" or "query_customers"
    pub step_type: String,

    /// Step title
    pub title: String,

    /// Free-text description of the step
    pub description: String,

    /// Suggested SQL for query steps. Opaque to the engine; never validated
    /// or executed here.
    pub suggested_query: Option<String>,

    /// Ordered choice options for this step
    pub choices: Vec<ChoiceOption>,

    /// Guidance bundle
    pub guidance: StepGuidance,
}

/// A named, fixed sequence of steps representing one guided-analysis
/// narrative. Immutable; loaded once at process start and shared by all
/// sessions of the scenario type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioDefinition {
    /// The scenario this definition belongs to
    pub scenario: ScenarioType,

    /// Display title for the scenario
    pub title: String,

    /// Ordered step sequence; step 0 is always the welcome step
    pub steps: Vec<StepDefinition>,
}

impl ScenarioDefinition {
    /// Number of steps in this scenario.
    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_type_parse_strict() {
        assert_eq!("retail".parse(), Ok(ScenarioType::Retail));
        assert_eq!(" Finance ".parse(), Ok(ScenarioType::Finance));
        assert_eq!("LOGISTICS".parse(), Ok(ScenarioType::Logistics));
        assert_eq!("generic".parse(), Ok(ScenarioType::Generic));
        assert_eq!("warehouse".parse::<ScenarioType>(), Err(()));
        assert_eq!("".parse::<ScenarioType>(), Err(()));
    }

    #[test]
    fn test_scenario_type_parse_or_generic() {
        assert_eq!(
            ScenarioType::parse_or_generic("retail"),
            ScenarioType::Retail
        );
        assert_eq!(
            ScenarioType::parse_or_generic("no-such-scenario"),
            ScenarioType::Generic
        );
        assert_eq!(ScenarioType::parse_or_generic(""), ScenarioType::Generic);
    }

    #[test]
    fn test_scenario_type_display() {
        for scenario in ScenarioType::ALL {
            // Display and as_str agree, and round-trip through FromStr
            assert_eq!(scenario.to_string(), scenario.as_str());
            assert_eq!(scenario.as_str().parse(), Ok(scenario));
        }
    }

    #[test]
    fn test_scenario_type_serde() {
        let serialized = serde_json::to_string(&ScenarioType::Retail).unwrap();
        assert_eq!(serialized, "\"retail\"");

        let deserialized: ScenarioType = serde_json::from_str("\"logistics\"").unwrap();
        assert_eq!(deserialized, ScenarioType::Logistics);
    }

    #[test]
    fn test_choice_option_serialization() {
        let choice = ChoiceOption::new(
            "explore_customers",
            "Start with Customer Analysis",
            "Understand who our customers are",
            true,
        );

        let serialized = serde_json::to_value(&choice).unwrap();
        assert_eq!(serialized["id"], "explore_customers");
        assert_eq!(serialized["recommended"], true);
    }

    #[test]
    fn test_step_guidance_wire_names() {
        let guidance = StepGuidance::new("tip", "expect", "next");
        let serialized = serde_json::to_value(&guidance).unwrap();

        assert_eq!(serialized["tip"], "tip");
        assert_eq!(serialized["whatToExpect"], "expect");
        assert_eq!(serialized["nextSteps"], "next");
    }
}
