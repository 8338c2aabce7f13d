//! The scenario catalog: immutable, process-wide table of scenario
//! definitions.
//!
//! The catalog is pure data. It is built once at process start, shared via
//! `Arc`, and never mutated afterwards. Lookups are total: an unmapped
//! scenario degrades to the generic definition, the catalog never reports an
//! error.

use super::scenario::{
    ChoiceOption, ScenarioDefinition, ScenarioType, StepDefinition, StepGuidance,
};

/// Immutable table of all scenario definitions.
#[derive(Debug, Clone)]
pub struct ScenarioCatalog {
    retail: ScenarioDefinition,
    finance: ScenarioDefinition,
    logistics: ScenarioDefinition,
    generic: ScenarioDefinition,
}

impl ScenarioCatalog {
    /// Build the catalog with the built-in scenario definitions.
    pub fn new() -> Self {
        Self {
            retail: retail_scenario(),
            finance: finance_scenario(),
            logistics: logistics_scenario(),
            generic: generic_scenario(),
        }
    }

    /// Look up the definition for a scenario type. Total; every scenario in
    /// the closed enumeration has a definition.
    pub fn definition(&self, scenario: ScenarioType) -> &ScenarioDefinition {
        match scenario {
            ScenarioType::Retail => &self.retail,
            ScenarioType::Finance => &self.finance,
            ScenarioType::Logistics => &self.logistics,
            ScenarioType::Generic => &self.generic,
        }
    }

    /// Get a step definition by index, `None` past the end of the scenario.
    pub fn step(&self, scenario: ScenarioType, index: usize) -> Option<&StepDefinition> {
        self.definition(scenario).steps.get(index)
    }

    /// Number of steps in a scenario. Queryable without a session; used for
    /// progress math and status reporting.
    pub fn total_steps(&self, scenario: ScenarioType) -> usize {
        self.definition(scenario).total_steps()
    }
}

impl Default for ScenarioCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn step(
    step_type: &str,
    title: &str,
    description: &str,
    suggested_query: Option<&str>,
    choices: Vec<ChoiceOption>,
    guidance: StepGuidance,
) -> StepDefinition {
    StepDefinition {
        step_type: step_type.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        suggested_query: suggested_query.map(str::to_string),
        choices,
        guidance,
    }
}

fn retail_scenario() -> ScenarioDefinition {
    ScenarioDefinition {
        scenario: ScenarioType::Retail,
        title: "E-commerce Analysis".to_string(),
        steps: vec![
            step(
                "welcome",
                "Welcome to E-commerce Analysis",
                "Let's explore TechnoMart's sales data to understand customer behavior and business performance.",
                None,
                vec![
                    ChoiceOption::new(
                        "explore_customers",
                        "Start with Customer Analysis",
                        "Understand who our customers are",
                        true,
                    ),
                    ChoiceOption::new(
                        "explore_products",
                        "Start with Product Performance",
                        "See which products sell best",
                        false,
                    ),
                    ChoiceOption::new(
                        "explore_orders",
                        "Start with Order Patterns",
                        "Analyze purchasing trends",
                        false,
                    ),
                ],
                StepGuidance::new(
                    "Choose where to begin your analysis. Customer analysis is recommended for newcomers.",
                    "We'll examine data and build insights together.",
                    "After this choice, we'll run your first SQL query.",
                ),
            ),
            step(
                "query_customers",
                "Customer Data Exploration",
                "Let's start by looking at our customer base to understand who shops with TechnoMart.",
                Some(
                    "SELECT customer_id, first_name, last_name, email, customer_tier, total_spent \
                     FROM customers ORDER BY total_spent DESC LIMIT 10",
                ),
                vec![
                    ChoiceOption::new(
                        "run_query",
                        "Run the Customer Query",
                        "Execute the suggested customer query",
                        true,
                    ),
                    ChoiceOption::new(
                        "modify_query",
                        "Modify the Query First",
                        "I want to change what we select",
                        false,
                    ),
                    ChoiceOption::new(
                        "skip_step",
                        "Skip to Next Step",
                        "I'm familiar with the data",
                        false,
                    ),
                ],
                StepGuidance::new(
                    "This query shows our top customers by spending. Notice the customer tiers!",
                    "You'll see customer names, emails, their tier status, and spending amounts.",
                    "Next we'll analyze what insights we can draw from this data.",
                ),
            ),
            step(
                "insight_capture",
                "Capture Your First Insight",
                "Based on the customer data you just saw, what stands out to you?",
                None,
                vec![
                    ChoiceOption::new(
                        "insight_tiers",
                        "Customer Tiers Matter",
                        "I notice different customer tiers with varying spending",
                        true,
                    ),
                    ChoiceOption::new(
                        "insight_spending",
                        "Wide Spending Range",
                        "There's a big difference between top and average customers",
                        false,
                    ),
                    ChoiceOption::new(
                        "insight_emails",
                        "Email Patterns",
                        "I see patterns in customer email addresses",
                        false,
                    ),
                    ChoiceOption::new(
                        "custom_insight",
                        "Write My Own Insight",
                        "I have a different observation",
                        false,
                    ),
                ],
                StepGuidance::new(
                    "Look for patterns, surprises, or business implications in the data you just saw.",
                    "We'll use the append_insight tool to capture your observation.",
                    "Your insight will be saved and included in the final analysis report.",
                ),
            ),
            step(
                "next_analysis",
                "What Should We Explore Next?",
                "Great insight! Now let's dig deeper into the TechnoMart data.",
                None,
                vec![
                    ChoiceOption::new(
                        "analyze_products",
                        "Product Performance",
                        "See which products are selling best",
                        true,
                    ),
                    ChoiceOption::new(
                        "analyze_orders",
                        "Order Patterns",
                        "Understand when and how customers buy",
                        false,
                    ),
                    ChoiceOption::new(
                        "analyze_inventory",
                        "Inventory Levels",
                        "Check stock levels and turnover",
                        false,
                    ),
                    ChoiceOption::new(
                        "create_report",
                        "Generate Analysis Report",
                        "Summarize findings so far",
                        false,
                    ),
                ],
                StepGuidance::new(
                    "Each area will reveal different aspects of the business performance.",
                    "We'll continue with guided queries and insight capture.",
                    "The analysis builds a comprehensive view of business operations.",
                ),
            ),
        ],
    }
}

fn finance_scenario() -> ScenarioDefinition {
    ScenarioDefinition {
        scenario: ScenarioType::Finance,
        title: "Banking Analysis".to_string(),
        steps: vec![
            step(
                "welcome",
                "Welcome to Banking Analysis",
                "Let's explore FinanceFirst bank's customer data to understand financial patterns and risk profiles.",
                None,
                vec![
                    ChoiceOption::new(
                        "explore_accounts",
                        "Start with Account Analysis",
                        "Understand account types and balances",
                        true,
                    ),
                    ChoiceOption::new(
                        "explore_transactions",
                        "Start with Transaction Patterns",
                        "Analyze spending and deposit patterns",
                        false,
                    ),
                    ChoiceOption::new(
                        "explore_loans",
                        "Start with Loan Portfolio",
                        "Review loan performance and risk",
                        false,
                    ),
                ],
                StepGuidance::new(
                    "Banking analysis requires careful attention to financial patterns and regulatory compliance.",
                    "We'll examine financial data while respecting privacy and security.",
                    "Each step builds understanding of customer financial behavior.",
                ),
            ),
            step(
                "query_accounts",
                "Account Portfolio Overview",
                "Let's examine the bank's account portfolio to understand customer relationships.",
                Some(
                    "SELECT account_type, COUNT(*) as account_count, AVG(balance) as avg_balance, \
                     SUM(balance) as total_balance FROM accounts GROUP BY account_type \
                     ORDER BY total_balance DESC",
                ),
                vec![
                    ChoiceOption::new(
                        "run_query",
                        "Run the Account Query",
                        "Execute the suggested portfolio query",
                        true,
                    ),
                    ChoiceOption::new(
                        "modify_query",
                        "Customize the Query",
                        "I want to modify the analysis",
                        false,
                    ),
                    ChoiceOption::new(
                        "skip_step",
                        "Skip to Transactions",
                        "Move to transaction analysis",
                        false,
                    ),
                ],
                StepGuidance::new(
                    "This shows account types, counts, and average balances across the portfolio.",
                    "You'll see how different account types contribute to the bank's deposits.",
                    "Next we'll explore what these numbers mean for customer segmentation.",
                ),
            ),
            step(
                "insight_capture",
                "Capture Your Banking Insight",
                "Based on the account portfolio you just saw, what stands out to you?",
                None,
                vec![
                    ChoiceOption::new(
                        "insight_concentration",
                        "Deposit Concentration",
                        "A few account types hold most of the deposits",
                        true,
                    ),
                    ChoiceOption::new(
                        "insight_balances",
                        "Balance Spread",
                        "Average balances vary widely between account types",
                        false,
                    ),
                    ChoiceOption::new(
                        "custom_insight",
                        "Write My Own Insight",
                        "I have a different observation",
                        false,
                    ),
                ],
                StepGuidance::new(
                    "Look for concentration risk and segmentation opportunities in the portfolio.",
                    "We'll use the append_insight tool to capture your observation.",
                    "Your insight will be saved and included in the final analysis report.",
                ),
            ),
            step(
                "next_analysis",
                "Where Should the Analysis Go Next?",
                "Good observation! Now let's dig deeper into FinanceFirst's data.",
                None,
                vec![
                    ChoiceOption::new(
                        "analyze_transactions",
                        "Transaction Patterns",
                        "Understand deposit and spending behavior",
                        true,
                    ),
                    ChoiceOption::new(
                        "analyze_loans",
                        "Loan Performance",
                        "Review loan balances and delinquency",
                        false,
                    ),
                    ChoiceOption::new(
                        "create_report",
                        "Generate Analysis Report",
                        "Summarize findings so far",
                        false,
                    ),
                ],
                StepGuidance::new(
                    "Each area reveals a different dimension of customer financial behavior.",
                    "We'll continue with guided queries and insight capture.",
                    "The analysis builds a comprehensive view of the bank's book of business.",
                ),
            ),
        ],
    }
}

fn logistics_scenario() -> ScenarioDefinition {
    ScenarioDefinition {
        scenario: ScenarioType::Logistics,
        title: "Supply Chain Analysis".to_string(),
        steps: vec![
            step(
                "welcome",
                "Welcome to Supply Chain Analysis",
                "Let's explore GlobalShip's logistics data to understand delivery performance and operational efficiency.",
                None,
                vec![
                    ChoiceOption::new(
                        "explore_shipments",
                        "Start with Shipment Analysis",
                        "Understand delivery patterns and status",
                        true,
                    ),
                    ChoiceOption::new(
                        "explore_routes",
                        "Start with Route Efficiency",
                        "Analyze route performance and costs",
                        false,
                    ),
                    ChoiceOption::new(
                        "explore_warehouses",
                        "Start with Warehouse Operations",
                        "Review capacity and utilization",
                        false,
                    ),
                ],
                StepGuidance::new(
                    "Logistics analysis focuses on efficiency, timing, and operational performance.",
                    "We'll examine supply chain data to identify optimization opportunities.",
                    "Each analysis area reveals different aspects of operational effectiveness.",
                ),
            ),
            step(
                "query_shipments",
                "Shipment Status Overview",
                "Let's look at recent shipments to understand delivery performance across the network.",
                Some(
                    "SELECT status, COUNT(*) as shipment_count, AVG(transit_days) as avg_transit_days \
                     FROM shipments GROUP BY status ORDER BY shipment_count DESC",
                ),
                vec![
                    ChoiceOption::new(
                        "run_query",
                        "Run the Shipment Query",
                        "Execute the suggested shipment query",
                        true,
                    ),
                    ChoiceOption::new(
                        "modify_query",
                        "Modify the Query First",
                        "I want to change what we select",
                        false,
                    ),
                    ChoiceOption::new(
                        "skip_step",
                        "Skip to Route Analysis",
                        "Move straight to route efficiency",
                        false,
                    ),
                ],
                StepGuidance::new(
                    "This breaks shipments down by status with average transit times.",
                    "You'll see how many shipments are delivered, in transit, or delayed.",
                    "Next we'll capture what these delivery numbers tell us.",
                ),
            ),
            step(
                "insight_capture",
                "Capture Your Logistics Insight",
                "Based on the shipment data you just saw, what stands out to you?",
                None,
                vec![
                    ChoiceOption::new(
                        "insight_delays",
                        "Delays Cluster Somewhere",
                        "Delayed shipments seem concentrated in one status or lane",
                        true,
                    ),
                    ChoiceOption::new(
                        "insight_transit",
                        "Transit Time Spread",
                        "Average transit times vary a lot by status",
                        false,
                    ),
                    ChoiceOption::new(
                        "custom_insight",
                        "Write My Own Insight",
                        "I have a different observation",
                        false,
                    ),
                ],
                StepGuidance::new(
                    "Look for bottlenecks and timing outliers in the shipment breakdown.",
                    "We'll use the append_insight tool to capture your observation.",
                    "Your insight will be saved and included in the final analysis report.",
                ),
            ),
            step(
                "next_analysis",
                "What Should We Optimize Next?",
                "Good catch! Now let's dig deeper into GlobalShip's operations.",
                None,
                vec![
                    ChoiceOption::new(
                        "analyze_routes",
                        "Route Efficiency",
                        "Compare cost and timing across routes",
                        true,
                    ),
                    ChoiceOption::new(
                        "analyze_warehouses",
                        "Warehouse Utilization",
                        "Check capacity and throughput",
                        false,
                    ),
                    ChoiceOption::new(
                        "create_report",
                        "Generate Analysis Report",
                        "Summarize findings so far",
                        false,
                    ),
                ],
                StepGuidance::new(
                    "Each area reveals a different lever for operational improvement.",
                    "We'll continue with guided queries and insight capture.",
                    "The analysis builds a comprehensive view of network performance.",
                ),
            ),
        ],
    }
}

fn generic_scenario() -> ScenarioDefinition {
    ScenarioDefinition {
        scenario: ScenarioType::Generic,
        title: "Database Analysis".to_string(),
        steps: vec![
            step(
                "welcome",
                "Welcome to Database Analysis",
                "Let's explore your database to understand the data structure and business insights.",
                None,
                vec![
                    ChoiceOption::new(
                        "explore_tables",
                        "Explore Database Tables",
                        "See what tables and data are available",
                        true,
                    ),
                    ChoiceOption::new(
                        "run_queries",
                        "Start with Queries",
                        "Begin running SQL queries immediately",
                        false,
                    ),
                    ChoiceOption::new(
                        "guided_analysis",
                        "Guided Analysis",
                        "Let me guide you through the process",
                        false,
                    ),
                ],
                StepGuidance::new(
                    "Start by understanding your data structure before diving into analysis.",
                    "We'll build understanding progressively through guided exploration.",
                    "Each step will build on previous discoveries.",
                ),
            ),
            step(
                "query_tables",
                "Database Exploration",
                "Let's run a query to explore your data.",
                Some("SELECT * FROM information_schema.tables LIMIT 10"),
                vec![
                    ChoiceOption::new(
                        "run_query",
                        "Run Suggested Query",
                        "Execute the recommended query",
                        true,
                    ),
                    ChoiceOption::new(
                        "modify_query",
                        "Modify Query",
                        "Change the query first",
                        false,
                    ),
                    ChoiceOption::new(
                        "skip_step",
                        "Skip This Step",
                        "Move to next step",
                        false,
                    ),
                ],
                StepGuidance::new(
                    "This will show you available tables in your database.",
                    "You'll see table names and basic structure information.",
                    "Next we'll dive deeper into specific tables.",
                ),
            ),
            step(
                "insight_capture",
                "Capture What You Found",
                "Based on the tables you just saw, what stands out to you?",
                None,
                vec![
                    ChoiceOption::new(
                        "insight_structure",
                        "Structure Tells a Story",
                        "The table layout suggests how the business operates",
                        true,
                    ),
                    ChoiceOption::new(
                        "insight_size",
                        "Some Tables Dominate",
                        "A few tables look much larger than the rest",
                        false,
                    ),
                    ChoiceOption::new(
                        "custom_insight",
                        "Write My Own Insight",
                        "I have a different observation",
                        false,
                    ),
                ],
                StepGuidance::new(
                    "Look for naming patterns and relationships between the tables.",
                    "We'll use the append_insight tool to capture your observation.",
                    "Your insight will be saved and included in the final analysis report.",
                ),
            ),
        ],
    }
}
