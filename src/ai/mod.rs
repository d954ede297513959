//! All model-facing functionality

pub mod client;
pub mod prompt_builder;

// Re-export main types for convenience
pub use client::{BedrockModelClient, InvokeOptions, ModelClient};
pub use prompt_builder::{ModelRequest, ModelResponse, build_user_content};
