//! Weather tool definition.
//!
//! Looks up current conditions for a city from a wttr.in-compatible JSON
//! endpoint (`<base_url>/<city>?format=j1`).

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::domains::tools::{ToolDefinition, ToolError};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the weather tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetWeatherParams {
    /// City to get the weather for.
    pub city: String,
}

// ============================================================================
// wttr.in response (only the fields we read)
// ============================================================================

/// Top-level `format=j1` payload.
#[derive(Debug, Deserialize)]
pub(crate) struct WttrResponse {
    #[serde(default)]
    pub(crate) current_condition: Vec<CurrentCondition>,
    #[serde(default)]
    pub(crate) nearest_area: Vec<NearestArea>,
}

/// Observed conditions; wttr.in sends every value as a string.
#[derive(Debug, Deserialize)]
pub(crate) struct CurrentCondition {
    #[serde(rename = "temp_C")]
    pub(crate) temp_c: String,
    #[serde(rename = "FeelsLikeC")]
    pub(crate) feels_like_c: String,
    pub(crate) humidity: String,
    #[serde(rename = "weatherDesc", default)]
    pub(crate) weather_desc: Vec<TextValue>,
    #[serde(rename = "windspeedKmph")]
    pub(crate) windspeed_kmph: String,
    #[serde(rename = "winddir16Point")]
    pub(crate) winddir_16_point: String,
}

/// Location the service resolved the query to.
#[derive(Debug, Deserialize)]
pub(crate) struct NearestArea {
    #[serde(rename = "areaName", default)]
    pub(crate) area_name: Vec<TextValue>,
    #[serde(default)]
    pub(crate) country: Vec<TextValue>,
}

/// `{ "value": ... }` wrapper used throughout the payload.
#[derive(Debug, Deserialize)]
pub(crate) struct TextValue {
    pub(crate) value: String,
}

fn first_value(values: &[TextValue]) -> Option<&str> {
    values
        .first()
        .map(|v| v.value.trim())
        .filter(|v| !v.is_empty())
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Weather tool - current conditions for a city.
#[derive(Debug, Clone)]
pub struct GetWeatherTool {
    client: reqwest::Client,
    base_url: String,
}

impl GetWeatherTool {
    /// Create the tool against the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// URL queried for a city.
    pub fn request_url(&self, city: &str) -> String {
        format!(
            "{}/{}?format=j1",
            self.base_url,
            urlencoding::encode(city.trim())
        )
    }

    async fn fetch(&self, city: &str) -> Result<WttrResponse, ToolError> {
        let url = self.request_url(city);
        debug!("Fetching weather from {}", url);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", concat!("tool_host_mcp/", env!("CARGO_PKG_VERSION")))
            .send()
            .await
            .map_err(|e| ToolError::execution_failed(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ToolError::execution_failed(format!(
                "Weather API returned status: {}",
                response.status()
            )));
        }

        response
            .json::<WttrResponse>()
            .await
            .map_err(|e| ToolError::execution_failed(format!("Failed to parse weather data: {}", e)))
    }

    /// Render a weather payload as the tool's text result.
    pub(crate) fn summarize(city: &str, data: &WttrResponse) -> Result<String, ToolError> {
        let current = data
            .current_condition
            .first()
            .ok_or_else(|| ToolError::execution_failed("No current conditions"))?;

        let area = data
            .nearest_area
            .first()
            .and_then(|a| {
                first_value(&a.area_name).map(|name| match first_value(&a.country) {
                    Some(country) => format!("{}, {}", name, country),
                    None => name.to_string(),
                })
            })
            .unwrap_or_else(|| city.trim().to_string());

        let desc = first_value(&current.weather_desc).unwrap_or("Unknown");

        Ok(format!(
            "Weather in {}: {}, {}°C (feels like {}°C), humidity {}%, wind {} km/h {}",
            area,
            desc,
            current.temp_c,
            current.feels_like_c,
            current.humidity,
            current.windspeed_kmph,
            current.winddir_16_point
        ))
    }
}

#[async_trait]
impl ToolDefinition for GetWeatherTool {
    const NAME: &'static str = "GET_WEATHER";
    const DESCRIPTION: &'static str = "Gets the current weather for a city.";
    type Params = GetWeatherParams;

    #[instrument(skip_all, fields(city = %params.city))]
    async fn execute(&self, params: GetWeatherParams) -> Result<String, ToolError> {
        info!("Weather tool called");
        let data = self.fetch(&params.city).await?;
        Self::summarize(&params.city, &data)
    }

    fn validate(params: &GetWeatherParams) -> Result<(), ToolError> {
        if params.city.trim().is_empty() {
            return Err(ToolError::invalid_arguments("city must not be empty"));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
