//! MCP tool and resource definitions for the workflow engine.
//!
//! These are static JSON documents the transport layer advertises during
//! capability negotiation.

use serde_json::{json, Value};

/// Tool definition for `start_workflow`.
pub fn start_workflow_tool() -> Value {
    json!({
        "name": "start_workflow",
        "description": "INTERACTIVE WORKFLOW: Starts a guided database analysis workflow with multiple choice progressions. \
                        Perfect for non-technical users who want structured guidance through database exploration. \
                        Provides step-by-step analysis with contextual choices, suggested queries, and insight capture.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "scenario": {
                    "type": "string",
                    "description": "Type of analysis workflow to start. Available workflows: \
                                    • 'retail' - E-commerce analysis with customers, products, and orders \
                                    • 'finance' - Banking analysis with accounts, transactions, and loans \
                                    • 'logistics' - Supply chain analysis with shipments, routes, and deliveries \
                                    • 'generic' - General database exploration workflow",
                    "enum": ["retail", "finance", "logistics", "generic"]
                },
                "userId": {
                    "type": "string",
                    "description": "User identifier for workflow tracking (default: 'user')",
                    "default": "user"
                }
            },
            "required": ["scenario"]
        },
        "metadata": {
            "category": "workflow",
            "interactive": true,
            "guidance": "structured",
            "userFriendly": true
        }
    })
}

/// Tool definition for `workflow_choice`.
pub fn workflow_choice_tool() -> Value {
    json!({
        "name": "workflow_choice",
        "description": "WORKFLOW PROGRESSION: Processes user choice in an active workflow and advances to the next step. \
                        Use this tool to respond to multiple choice questions and continue guided analysis. \
                        Each choice shapes the analysis path and provides contextual next steps.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "workflowId": {
                    "type": "string",
                    "description": "ID of the active workflow (returned by start_workflow)"
                },
                "choiceId": {
                    "type": "string",
                    "description": "ID of the selected choice option from the current step"
                },
                "additionalData": {
                    "type": "object",
                    "description": "Optional additional data for the choice (e.g., custom query text)"
                }
            },
            "required": ["workflowId", "choiceId"]
        }
    })
}

/// Tool definition for `complete_workflow`.
pub fn complete_workflow_tool() -> Value {
    json!({
        "name": "complete_workflow",
        "description": "WORKFLOW COMPLETION: Finishes an active workflow, returns a summary of the analysis session, \
                        and frees its tracking state. Use when the guided analysis is done.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "workflowId": {
                    "type": "string",
                    "description": "ID of the active workflow (returned by start_workflow)"
                }
            },
            "required": ["workflowId"]
        }
    })
}

/// Resource definition for the active-workflow status document.
pub fn workflow_status_resource() -> Value {
    json!({
        "uri": "workflow://status",
        "name": "Active Workflow Status",
        "description": "Status and progress of all active interactive workflows",
        "mimeType": "application/json",
        "metadata": {
            "type": "workflow-status",
            "interactive": true
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_workflow_tool_schema() {
        let tool = start_workflow_tool();

        assert_eq!(tool["name"], "start_workflow");
        assert_eq!(tool["inputSchema"]["required"][0], "scenario");

        let scenarios = tool["inputSchema"]["properties"]["scenario"]["enum"]
            .as_array()
            .unwrap();
        assert_eq!(scenarios.len(), 4);
        assert!(scenarios.contains(&json!("retail")));
        assert!(scenarios.contains(&json!("generic")));
    }

    #[test]
    fn test_workflow_choice_tool_schema() {
        let tool = workflow_choice_tool();

        assert_eq!(tool["name"], "workflow_choice");
        let required = tool["inputSchema"]["required"].as_array().unwrap();
        assert_eq!(required.len(), 2);
        assert!(required.contains(&json!("workflowId")));
        assert!(required.contains(&json!("choiceId")));
    }

    #[test]
    fn test_status_resource_uri() {
        let resource = workflow_status_resource();

        assert_eq!(resource["uri"], "workflow://status");
        assert_eq!(resource["mimeType"], "application/json");
    }
}
