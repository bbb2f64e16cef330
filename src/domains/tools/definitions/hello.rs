//! Hello world tool definition.
//!
//! A tool that responds with a simple greeting.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::tools::{ToolDefinition, ToolError};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the hello world tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct HelloWorldParams {
    /// Name to greet. Defaults to "World".
    #[serde(default)]
    pub name: Option<String>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Hello world tool - greets a name.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelloWorldTool;

impl HelloWorldTool {
    const FALLBACK_NAME: &'static str = "World";

    /// Build the greeting for the given parameters.
    pub fn greet(params: &HelloWorldParams) -> String {
        let name = params
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(Self::FALLBACK_NAME);
        format!("Hello, {}!", name)
    }
}

#[async_trait]
impl ToolDefinition for HelloWorldTool {
    const NAME: &'static str = "HELLO_WORLD";
    const DESCRIPTION: &'static str = "Responds with a simple greeting.";
    type Params = HelloWorldParams;

    #[instrument(skip_all, fields(name = ?params.name))]
    async fn execute(&self, params: HelloWorldParams) -> Result<String, ToolError> {
        info!("Hello world tool called");
        Ok(Self::greet(&params))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ToolDescriptor;
    use serde_json::json;

    #[test]
    fn test_greet_default() {
        assert_eq!(
            HelloWorldTool::greet(&HelloWorldParams::default()),
            "Hello, World!"
        );
    }

    #[test]
    fn test_greet_empty_name_falls_back() {
        let params = HelloWorldParams {
            name: Some(String::new()),
        };
        assert_eq!(HelloWorldTool::greet(&params), "Hello, World!");
    }

    #[test]
    fn test_execute_with_name() {
        let params = HelloWorldParams {
            name: Some("Ada".to_string()),
        };
        let result = tokio_test::block_on(HelloWorldTool.execute(params)).unwrap();
        assert_eq!(result, "Hello, Ada!");
    }

    #[tokio::test]
    async fn test_explicit_null_name() {
        let descriptor = ToolDescriptor::new(HelloWorldTool);
        let args = json!({ "name": null }).as_object().cloned().unwrap();
        assert_eq!(descriptor.call(args).await.unwrap(), "Hello, World!");
    }

    #[test]
    fn test_schema_marks_name_optional() {
        let tool = ToolDescriptor::new(HelloWorldTool).to_tool();
        assert!(tool.input_schema["properties"].get("name").is_some());

        let required = tool
            .input_schema
            .get("required")
            .and_then(|r| r.as_array())
            .map(|r| r.iter().any(|v| v == "name"))
            .unwrap_or(false);
        assert!(!required);
    }
}
