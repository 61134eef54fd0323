use serde::{Deserialize, Serialize};

use super::tool_calls::ChatMessageToolCall;

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// A single message in the conversation. An assistant message carries
/// free-text content, tool calls, or both; a tool message carries the
/// `tool_call_id` it responds to plus its result text.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ChatCompletionMessage {
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ChatMessageToolCall>>,
}

impl ChatCompletionMessage {
    pub fn assistant(
        content: Option<String>,
        tool_calls: Option<Vec<ChatMessageToolCall>>,
    ) -> Self {
        Self {
            role: Role::Assistant,
            content,
            tool_call_id: None,
            tool_calls,
        }
    }
}
