use chrono::Local;
use rand::Rng;
use serde_json::{Value, json};

use super::{TextContent, ToolSpec};

/// The four tools the test server advertises.
pub fn list_tools() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: "get_current_time".to_string(),
            description: "Get the current date and time".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "timezone": {
                        "type": "string",
                        "description": "Timezone (optional, defaults to local)"
                    }
                },
                "required": []
            }),
        },
        ToolSpec {
            name: "calculate".to_string(),
            description: "Perform basic arithmetic calculations".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "operation": {
                        "type": "string",
                        "description": "The operation to perform: add, subtract, multiply, divide",
                        "enum": ["add", "subtract", "multiply", "divide"]
                    },
                    "a": { "type": "number", "description": "First number" },
                    "b": { "type": "number", "description": "Second number" }
                },
                "required": ["operation", "a", "b"]
            }),
        },
        ToolSpec {
            name: "echo".to_string(),
            description: "Echo back the provided message".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "message": {
                        "type": "string",
                        "description": "The message to echo back"
                    }
                },
                "required": ["message"]
            }),
        },
        ToolSpec {
            name: "generate_random".to_string(),
            description: "Generate a random number within a range".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "min": { "type": "number", "description": "Minimum value (default: 0)" },
                    "max": { "type": "number", "description": "Maximum value (default: 100)" }
                },
                "required": []
            }),
        },
    ]
}

/// Execute a tool by name. Always returns a single text block; unknown
/// tools and bad arguments produce a textual error rather than a fault.
pub fn call_tool(name: &str, arguments: &Value) -> Vec<TextContent> {
    match name {
        "get_current_time" => get_current_time(arguments),
        "calculate" => calculate(arguments),
        "echo" => echo(arguments),
        "generate_random" => generate_random(arguments),
        _ => vec![TextContent::new(format!("Error: Unknown tool '{}'", name))],
    }
}

fn get_current_time(arguments: &Value) -> Vec<TextContent> {
    let timezone = arguments
        .get("timezone")
        .and_then(Value::as_str)
        .unwrap_or("local");
    let current_time = Local::now().format("%Y-%m-%d %H:%M:%S");
    vec![TextContent::new(format!(
        "Current time ({}): {}",
        timezone, current_time
    ))]
}

fn calculate(arguments: &Value) -> Vec<TextContent> {
    let operation = match arguments.get("operation").and_then(Value::as_str) {
        Some(operation) => operation,
        None => return vec![TextContent::new("Error: Missing argument 'operation'")],
    };
    let a = match arguments.get("a").and_then(Value::as_f64) {
        Some(a) => a,
        None => return vec![TextContent::new("Error: Missing argument 'a'")],
    };
    let b = match arguments.get("b").and_then(Value::as_f64) {
        Some(b) => b,
        None => return vec![TextContent::new("Error: Missing argument 'b'")],
    };

    let result = match operation {
        "add" => a + b,
        "subtract" => a - b,
        "multiply" => a * b,
        "divide" => {
            if b == 0.0 {
                return vec![TextContent::new("Error: Division by zero")];
            }
            a / b
        }
        other => {
            return vec![TextContent::new(format!(
                "Error: Unknown operation '{}'",
                other
            ))];
        }
    };

    // {:?} keeps the trailing .0 on whole floats, e.g. "2.0 add 3.0 = 5.0".
    vec![TextContent::new(format!(
        "Result: {:?} {} {:?} = {:?}",
        a, operation, b, result
    ))]
}

fn echo(arguments: &Value) -> Vec<TextContent> {
    match arguments.get("message").and_then(Value::as_str) {
        Some(message) => vec![TextContent::new(format!("Echo: {}", message))],
        None => vec![TextContent::new("Error: Missing argument 'message'")],
    }
}

fn generate_random(arguments: &Value) -> Vec<TextContent> {
    let min = arguments.get("min").and_then(Value::as_f64).unwrap_or(0.0);
    let max = arguments.get("max").and_then(Value::as_f64).unwrap_or(100.0);
    if min > max {
        return vec![TextContent::new("Error: min must not exceed max")];
    }
    let random_num: f64 = rand::thread_rng().gen_range(min..=max);
    vec![TextContent::new(format!(
        "Random number between {} and {}: {:.2}",
        min, max, random_num
    ))]
}
