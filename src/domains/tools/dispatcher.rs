//! Invocation dispatcher.
//!
//! Turns one [`InvocationRequest`] into one [`InvocationResponse`]: look the
//! tool up, validate the arguments against its schema, run it. Failures of
//! any kind, including a panicking handler, come back as an error response
//! so the server keeps serving.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, Content, JsonObject};
use tracing::{info, instrument, warn};

use super::error::ToolError;
use super::registry::ToolRegistry;

/// One inbound tool call.
#[derive(Debug, Clone)]
pub struct InvocationRequest {
    /// The name of the tool to execute.
    pub tool_name: String,

    /// Raw argument payload; a missing payload is treated as `{}`.
    pub arguments: Option<serde_json::Value>,
}

impl InvocationRequest {
    /// Create a request.
    pub fn new(tool_name: impl Into<String>, arguments: Option<serde_json::Value>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments,
        }
    }

    /// Create a request from MCP `tools/call` params.
    pub fn from_mcp(tool_name: impl Into<String>, arguments: Option<JsonObject>) -> Self {
        Self::new(tool_name, arguments.map(serde_json::Value::Object))
    }
}

/// Outcome of one tool call.
#[derive(Debug)]
pub enum InvocationResponse {
    /// The tool ran and produced this result.
    Success(String),

    /// The call was rejected or the tool failed.
    Error(ToolError),
}

impl InvocationResponse {
    /// The result text, if the call succeeded.
    pub fn result(&self) -> Option<&str> {
        match self {
            Self::Success(text) => Some(text),
            Self::Error(_) => None,
        }
    }

    /// The error, if the call failed.
    pub fn error(&self) -> Option<&ToolError> {
        match self {
            Self::Success(_) => None,
            Self::Error(err) => Some(err),
        }
    }

    /// Convert into the MCP `tools/call` reply.
    ///
    /// Lookup and validation failures become JSON-RPC errors; a failing
    /// tool becomes a result flagged `is_error` so the client sees the
    /// message.
    pub fn into_call_result(self) -> Result<CallToolResult, McpError> {
        match self {
            Self::Success(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
            Self::Error(err @ (ToolError::NotFound(_) | ToolError::InvalidArguments(_))) => {
                Err(McpError::invalid_params(err.to_string(), None))
            }
            Self::Error(err) => Ok(CallToolResult::error(vec![Content::text(err.to_string())])),
        }
    }
}

impl From<Result<String, ToolError>> for InvocationResponse {
    fn from(result: Result<String, ToolError>) -> Self {
        match result {
            Ok(text) => Self::Success(text),
            Err(err) => Self::Error(err),
        }
    }
}

/// Dispatches invocations against a shared, read-only registry.
#[derive(Debug, Clone)]
pub struct ToolDispatcher {
    registry: Arc<ToolRegistry>,
}

impl ToolDispatcher {
    /// Create a dispatcher over the given registry.
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this dispatcher serves.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Handle one invocation. Never panics, never retries.
    #[instrument(skip_all, fields(tool = %request.tool_name))]
    pub async fn dispatch(&self, request: InvocationRequest) -> InvocationResponse {
        let response: InvocationResponse = self.try_dispatch(request).await.into();

        match &response {
            InvocationResponse::Success(_) => info!("Tool call succeeded"),
            InvocationResponse::Error(err) => warn!("Tool call failed: {}", err),
        }

        response
    }

    async fn try_dispatch(&self, request: InvocationRequest) -> Result<String, ToolError> {
        let descriptor = self.registry.lookup(&request.tool_name)?;
        let arguments = match request.arguments {
            None | Some(serde_json::Value::Null) => JsonObject::new(),
            Some(serde_json::Value::Object(map)) => map,
            Some(other) => {
                return Err(ToolError::invalid_arguments(format!(
                    "arguments must be a JSON object, got {}",
                    other
                )));
            }
        };

        descriptor.validate(&arguments)?;

        AssertUnwindSafe(descriptor.call(arguments))
            .catch_unwind()
            .await
            .unwrap_or_else(|payload| {
                Err(ToolError::execution_failed(format!(
                    "tool panicked: {}",
                    panic_message(payload.as_ref())
                )))
            })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg
    } else {
        "unknown panic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::HelloWorldTool;
    use crate::domains::tools::descriptor::ToolDefinition;
    use async_trait::async_trait;
    use rmcp::model::{ErrorCode, RawContent};
    use schemars::JsonSchema;
    use serde::Deserialize;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Deserialize, JsonSchema)]
    struct FlakyParams {
        /// "fail", "panic" or anything else to succeed.
        mode: String,
    }

    /// Counts how often `execute` is entered.
    struct FlakyTool {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ToolDefinition for FlakyTool {
        const NAME: &'static str = "FLAKY";
        const DESCRIPTION: &'static str = "Fails on request.";
        type Params = FlakyParams;

        async fn execute(&self, params: FlakyParams) -> Result<String, ToolError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match params.mode.as_str() {
                "fail" => Err(ToolError::execution_failed("internal failure")),
                "panic" => panic!("handler blew up"),
                other => Ok(format!("ok: {}", other)),
            }
        }
    }

    fn dispatcher_with_counter() -> (ToolDispatcher, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = ToolRegistry::new()
            .with_tool(HelloWorldTool)
            .unwrap()
            .with_tool(FlakyTool {
                calls: calls.clone(),
            })
            .unwrap();
        (ToolDispatcher::new(Arc::new(registry)), calls)
    }

    fn request(name: &str, args: serde_json::Value) -> InvocationRequest {
        InvocationRequest::new(name, Some(args))
    }

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[tokio::test]
    async fn test_hello_without_name() {
        let (dispatcher, _) = dispatcher_with_counter();
        let response = dispatcher
            .dispatch(InvocationRequest::new("HELLO_WORLD", None))
            .await;
        assert_eq!(response.result(), Some("Hello, World!"));
    }

    #[tokio::test]
    async fn test_hello_with_name() {
        let (dispatcher, _) = dispatcher_with_counter();
        let response = dispatcher
            .dispatch(request("HELLO_WORLD", json!({ "name": "Ada" })))
            .await;
        assert_eq!(response.result(), Some("Hello, Ada!"));
    }

    #[tokio::test]
    async fn test_hello_with_wrong_type() {
        let (dispatcher, _) = dispatcher_with_counter();
        let response = dispatcher
            .dispatch(request("HELLO_WORLD", json!({ "name": 123 })))
            .await;
        assert!(matches!(
            response.error(),
            Some(ToolError::InvalidArguments(_))
        ));

        let err = response.into_call_result().unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("Invalid arguments"));
    }

    #[tokio::test]
    async fn test_validation_failure_skips_execute() {
        let (dispatcher, calls) = dispatcher_with_counter();
        let response = dispatcher
            .dispatch(request("FLAKY", json!({ "mode": 7 })))
            .await;
        assert!(matches!(
            response.error(),
            Some(ToolError::InvalidArguments(_))
        ));

        let response = dispatcher.dispatch(request("FLAKY", json!({}))).await;
        assert!(matches!(
            response.error(),
            Some(ToolError::InvalidArguments(_))
        ));

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_non_object_arguments_rejected() {
        let (dispatcher, calls) = dispatcher_with_counter();
        let response = dispatcher
            .dispatch(request("FLAKY", json!(["fail"])))
            .await;
        assert!(matches!(
            response.error(),
            Some(ToolError::InvalidArguments(msg)) if msg.contains("JSON object")
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let (dispatcher, _) = dispatcher_with_counter();
        let response = dispatcher.dispatch(request("NOPE", json!({}))).await;
        assert!(matches!(response.error(), Some(ToolError::NotFound(n)) if n == "NOPE"));

        let err = response.into_call_result().unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_execution_error_then_keeps_serving() {
        let (dispatcher, calls) = dispatcher_with_counter();

        let response = dispatcher
            .dispatch(request("FLAKY", json!({ "mode": "fail" })))
            .await;
        assert!(matches!(
            response.error(),
            Some(ToolError::ExecutionFailed(msg)) if msg.contains("internal failure")
        ));

        let result = response.into_call_result().unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("internal failure"));

        let response = dispatcher
            .dispatch(request("FLAKY", json!({ "mode": "again" })))
            .await;
        assert_eq!(response.result(), Some("ok: again"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_panicking_tool_is_contained() {
        let (dispatcher, _) = dispatcher_with_counter();

        let response = dispatcher
            .dispatch(request("FLAKY", json!({ "mode": "panic" })))
            .await;
        assert!(matches!(
            response.error(),
            Some(ToolError::ExecutionFailed(msg)) if msg.contains("handler blew up")
        ));

        let response = dispatcher
            .dispatch(request("HELLO_WORLD", json!({ "name": "Grace" })))
            .await;
        assert_eq!(response.result(), Some("Hello, Grace!"));
    }

    #[tokio::test]
    async fn test_success_converts_to_text_result() {
        let (dispatcher, _) = dispatcher_with_counter();
        let result = dispatcher
            .dispatch(request("HELLO_WORLD", json!({ "name": "Ada" })))
            .await
            .into_call_result()
            .unwrap();
        assert_ne!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Hello, Ada!");
    }
}
