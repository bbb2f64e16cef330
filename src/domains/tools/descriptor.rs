//! Tool descriptors.
//!
//! A tool is declared by implementing [`ToolDefinition`] on a type: a name,
//! a description, a typed parameter struct and an async `execute`. The
//! registry stores tools as type-erased [`ToolDescriptor`]s, which validate
//! raw JSON arguments against the parameter type before calling `execute`.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::handler::server::tool::schema_for_type;
use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use super::error::ToolError;

/// A single callable capability exposed by a server.
#[async_trait]
pub trait ToolDefinition: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Typed parameters; the JSON schema is derived from this type.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Run the tool against already-validated parameters.
    async fn execute(&self, params: Self::Params) -> Result<String, ToolError>;

    /// Semantic checks serde can't express (e.g. non-blank strings).
    fn validate(_params: &Self::Params) -> Result<(), ToolError> {
        Ok(())
    }
}

type Handler = dyn Fn(JsonObject) -> BoxFuture<'static, Result<String, ToolError>> + Send + Sync;
type Validator = dyn Fn(&JsonObject) -> Result<(), ToolError> + Send + Sync;

/// Type-erased tool: metadata plus a validating handler.
#[derive(Clone)]
pub struct ToolDescriptor {
    name: &'static str,
    description: &'static str,
    input_schema: Arc<JsonObject>,
    validator: Arc<Validator>,
    handler: Arc<Handler>,
}

impl ToolDescriptor {
    /// Build a descriptor from a tool definition.
    pub fn new<T: ToolDefinition>(tool: T) -> Self {
        let tool = Arc::new(tool);

        Self {
            name: T::NAME,
            description: T::DESCRIPTION,
            input_schema: schema_for_type::<T::Params>().into(),
            validator: Arc::new(|args: &JsonObject| parse_params::<T>(args.clone()).map(|_| ())),
            handler: Arc::new(move |args: JsonObject| {
                let tool = tool.clone();
                async move {
                    let params = parse_params::<T>(args)?;
                    tool.execute(params).await
                }
                .boxed()
            }),
        }
    }

    /// Tool name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Tool description.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Check raw arguments against the parameter schema without executing.
    pub fn validate(&self, arguments: &JsonObject) -> Result<(), ToolError> {
        (self.validator)(arguments)
    }

    /// Validate the arguments, then execute the tool.
    ///
    /// The handler is never entered when validation fails.
    pub fn call(&self, arguments: JsonObject) -> BoxFuture<'static, Result<String, ToolError>> {
        (self.handler)(arguments)
    }

    /// Create a Tool model for this descriptor (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: self.input_schema.clone(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

impl fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

fn parse_params<T: ToolDefinition>(args: JsonObject) -> Result<T::Params, ToolError> {
    let params: T::Params = serde_json::from_value(serde_json::Value::Object(args))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
    T::validate(&params)?;
    Ok(params)
}
