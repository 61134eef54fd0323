use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub tool_type: String, // Will only accept "function" value
    pub function: FunctionDefinition,
}

/// A definition of a function that can be called. `parameters` is a
/// JSON-Schema object passed through verbatim, unvalidated.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}
