//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file.

pub mod hello;
pub mod weather;

pub use hello::{HelloWorldParams, HelloWorldTool};
pub use weather::{GetWeatherParams, GetWeatherTool};
