//! In-process test double for the MCP tool server the desktop app talks
//! to. Preserves the external tool contract (four tools, single text
//! block per result, textual errors); the protocol transport itself is
//! supplied elsewhere and stays out of scope here.

mod tools;

pub use tools::{call_tool, list_tools};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::tool_definition::{FunctionDefinition, ToolDefinition};

/// A tool definition in provider-agnostic form: `{name, description,
/// input_schema}`, the shape tool-protocol servers advertise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// A single text block returned from a tool call. Tool failures are
/// reported as text too, never as protocol-level faults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextContent {
    pub text: String,
}

impl TextContent {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl From<ToolSpec> for ToolDefinition {
    fn from(spec: ToolSpec) -> Self {
        ToolDefinition {
            tool_type: "function".to_string(),
            function: FunctionDefinition {
                name: spec.name,
                description: spec.description,
                parameters: spec.input_schema,
            },
        }
    }
}

#[cfg(test)]
mod spec_tests {
    use super::*;

    #[test]
    fn tool_spec_bridges_to_function_definition() {
        let spec = list_tools().remove(1);
        let definition = ToolDefinition::from(spec);
        assert_eq!(definition.tool_type, "function");
        assert_eq!(definition.function.name, "calculate");
        assert_eq!(
            definition.function.parameters["properties"]["operation"]["enum"],
            serde_json::json!(["add", "subtract", "multiply", "divide"])
        );
    }
}
