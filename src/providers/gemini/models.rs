use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::config::constants::{DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_TEMPERATURE, UNKNOWN_TOOL_NAME};
use crate::models::chat::{
    ChatCompletion, ChatCompletionChoice, ChatCompletionRequest, FinishReason,
};
use crate::models::content::{ChatCompletionMessage, Role};
use crate::models::tool_calls::{ChatMessageToolCall, FunctionArguments, FunctionCall};
use crate::models::tool_choice::{SimpleToolChoice, ToolChoice};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerateRequest {
    pub contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<GeminiTool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_config: Option<GeminiToolConfig>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct GeminiContent {
    pub role: String,
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

impl GeminiContent {
    fn user(parts: Vec<GeminiPart>) -> Self {
        Self {
            role: "user".to_string(),
            parts,
        }
    }

    fn model(parts: Vec<GeminiPart>) -> Self {
        Self {
            role: "model".to_string(),
            parts,
        }
    }
}

/// One content part. A part is text-only, function-call-only, or
/// function-response-only; the fields are kept flat because the response
/// scanner accumulates text and function calls independently.
#[derive(Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_call: Option<GeminiFunctionCall>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_response: Option<GeminiFunctionResponse>,
}

impl GeminiPart {
    fn text(text: String) -> Self {
        Self {
            text: Some(text),
            ..Default::default()
        }
    }

    fn function_call(call: GeminiFunctionCall) -> Self {
        Self {
            function_call: Some(call),
            ..Default::default()
        }
    }

    fn function_response(response: GeminiFunctionResponse) -> Self {
        Self {
            function_response: Some(response),
            ..Default::default()
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct GeminiFunctionCall {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct GeminiFunctionResponse {
    pub name: String,
    pub response: Value,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeminiTool {
    pub function_declarations: Vec<GeminiFunctionDeclaration>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct GeminiFunctionDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeminiToolConfig {
    pub function_calling_config: FunctionCallingConfig,
}

impl GeminiToolConfig {
    fn auto() -> Self {
        Self {
            function_calling_config: FunctionCallingConfig {
                mode: FunctionCallingMode::Auto,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct FunctionCallingConfig {
    pub mode: FunctionCallingMode,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FunctionCallingMode {
    Auto,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct GeminiGenerateResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct GeminiCandidate {
    pub content: Option<GeminiContent>,
}

impl GeminiGenerateRequest {
    /// Translate an OpenAI-shaped request into Gemini's content format.
    /// Message order is preserved exactly; the only failure mode is a
    /// tool-call argument string that does not decode as JSON.
    pub fn from_openai(request: &ChatCompletionRequest) -> Result<Self, serde_json::Error> {
        let mut contents = Vec::new();

        for message in &request.messages {
            match message.role {
                // Gemini has no system role in this content format;
                // instruction intent is kept inline on a user turn.
                Role::System => contents.push(GeminiContent::user(vec![GeminiPart::text(
                    format!(
                        "[System Instructions]: {}",
                        message.content.clone().unwrap_or_default()
                    ),
                )])),
                Role::User => contents.push(GeminiContent::user(vec![GeminiPart::text(
                    message.content.clone().unwrap_or_default(),
                )])),
                Role::Assistant => match &message.tool_calls {
                    Some(calls) if !calls.is_empty() => {
                        let mut parts = Vec::new();
                        if let Some(text) = message.content.as_deref().filter(|t| !t.is_empty()) {
                            parts.push(GeminiPart::text(text.to_string()));
                        }
                        for call in calls {
                            parts.push(GeminiPart::function_call(GeminiFunctionCall {
                                name: call.function.name.clone(),
                                args: Some(call.function.arguments.to_structured()?),
                            }));
                        }
                        contents.push(GeminiContent::model(parts));
                    }
                    _ => contents.push(GeminiContent::model(vec![GeminiPart::text(
                        message.content.clone().unwrap_or_default(),
                    )])),
                },
                // The declared function name is taken from tool_call_id.
                // That conflates the call id with the function name, but it
                // is the established conversation contract; callers send
                // the function name there.
                Role::Tool => {
                    let name = message
                        .tool_call_id
                        .clone()
                        .unwrap_or_else(|| UNKNOWN_TOOL_NAME.to_string());
                    contents.push(GeminiContent::user(vec![GeminiPart::function_response(
                        GeminiFunctionResponse {
                            name,
                            response: json!({ "result": &message.content }),
                        },
                    )]));
                }
            }
        }

        let function_declarations: Vec<GeminiFunctionDeclaration> = request
            .tools
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter(|tool| tool.tool_type == "function")
            .map(|tool| GeminiFunctionDeclaration {
                name: tool.function.name.clone(),
                description: tool.function.description.clone(),
                parameters: tool.function.parameters.clone(),
            })
            .collect();

        let (tools, tool_config) = if function_declarations.is_empty() {
            (None, None)
        } else {
            // tool_choice absent or "auto" turns on automatic function
            // calling; other values have no Gemini translation and leave
            // the mode to the API default.
            let tool_config = match &request.tool_choice {
                None | Some(ToolChoice::Simple(SimpleToolChoice::Auto)) => {
                    Some(GeminiToolConfig::auto())
                }
                Some(_) => None,
            };
            (
                Some(vec![GeminiTool {
                    function_declarations,
                }]),
                tool_config,
            )
        };

        Ok(Self {
            contents,
            generation_config: Some(GenerationConfig {
                temperature: request.temperature.unwrap_or(DEFAULT_TEMPERATURE),
                max_output_tokens: request.max_tokens.unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS),
            }),
            tools,
            tool_config,
        })
    }
}

impl GeminiGenerateResponse {
    /// Translate the first candidate back into the OpenAI response shape,
    /// assigning fresh synthetic identifiers and deriving the finish
    /// reason from the presence of function calls.
    pub fn to_openai(self, model: String) -> ChatCompletion {
        let mut content = None;
        let mut tool_calls = None;
        let mut finish_reason = FinishReason::Stop;

        let parts = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts)
            .unwrap_or_default();

        let mut text_parts = Vec::new();
        let mut function_calls = Vec::new();
        for part in parts {
            if let Some(text) = part.text.filter(|t| !t.is_empty()) {
                text_parts.push(text);
            }
            if let Some(call) = part.function_call {
                function_calls.push(call);
            }
        }

        if !text_parts.is_empty() {
            content = Some(text_parts.join(" "));
        }

        if !function_calls.is_empty() {
            tool_calls = Some(
                function_calls
                    .into_iter()
                    .map(|call| ChatMessageToolCall {
                        id: tool_call_id(),
                        r#type: "function".to_string(),
                        function: FunctionCall {
                            name: call.name,
                            arguments: FunctionArguments::Raw(
                                call.args
                                    .map(|args| args.to_string())
                                    .unwrap_or_else(|| "{}".to_string()),
                            ),
                        },
                    })
                    .collect(),
            );
            finish_reason = FinishReason::ToolCalls;
        }

        ChatCompletion {
            id: completion_id(),
            object: "chat.completion".to_string(),
            created: chrono::Utc::now().timestamp(),
            model,
            choices: vec![ChatCompletionChoice {
                index: 0,
                message: ChatCompletionMessage::assistant(content, tool_calls),
                finish_reason,
            }],
        }
    }
}

fn completion_id() -> String {
    format!(
        "chatcmpl-{}",
        &uuid::Uuid::new_v4().simple().to_string()[..12]
    )
}

fn tool_call_id() -> String {
    format!("call_{}", &uuid::Uuid::new_v4().simple().to_string()[..8])
}
