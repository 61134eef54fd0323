use std::env;

/// Stable Gemini model with function-calling support.
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Deterministic responses are the contract, not a tunable.
pub const DEFAULT_TEMPERATURE: f32 = 0.0;

pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 8192;

/// Fallback function name for tool messages that carry no `tool_call_id`.
pub const UNKNOWN_TOOL_NAME: &str = "unknown_tool";

pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub fn default_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000)
}
