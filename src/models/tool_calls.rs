use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tool-call arguments as they appear on the wire. The OpenAI contract
/// says this is a JSON-encoded string, but some callers send the decoded
/// object instead; both shapes are accepted and resolved once, at the
/// translation boundary.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum FunctionArguments {
    Raw(String),
    Structured(Value),
}

impl FunctionArguments {
    /// Resolve to a structured JSON value. `Raw` is parsed; parse errors
    /// propagate so the caller can surface the decoder message.
    pub fn to_structured(&self) -> Result<Value, serde_json::Error> {
        match self {
            FunctionArguments::Raw(text) => serde_json::from_str(text),
            FunctionArguments::Structured(value) => Ok(value.clone()),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: FunctionArguments,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ChatMessageToolCall {
    pub id: String,
    #[serde(rename = "type")]
    pub r#type: String, // Using `function` as the only valid value
    pub function: FunctionCall,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn raw_arguments_decode_to_object() {
        let args = FunctionArguments::Raw(r#"{"a": 2, "b": 3}"#.to_string());
        assert_eq!(args.to_structured().unwrap(), json!({"a": 2, "b": 3}));
    }

    #[test]
    fn structured_arguments_pass_through() {
        let args = FunctionArguments::Structured(json!({"a": 2}));
        assert_eq!(args.to_structured().unwrap(), json!({"a": 2}));
    }

    #[test]
    fn malformed_raw_arguments_error() {
        let args = FunctionArguments::Raw("not json".to_string());
        assert!(args.to_structured().is_err());
    }

    #[test]
    fn string_deserializes_as_raw() {
        let args: FunctionArguments = serde_json::from_value(json!("{\"x\": 1}")).unwrap();
        assert_eq!(args, FunctionArguments::Raw("{\"x\": 1}".to_string()));
    }

    #[test]
    fn object_deserializes_as_structured() {
        let args: FunctionArguments = serde_json::from_value(json!({"x": 1})).unwrap();
        assert_eq!(args, FunctionArguments::Structured(json!({"x": 1})));
    }
}
