//! Bedrock runtime client module
//!
//! Encapsulates the single `InvokeModel` call used to produce summaries.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::types::Trace;
use tracing::{debug, info};

use super::prompt_builder::{ModelRequest, ModelResponse};
use crate::core::config::AppConfig;
use crate::errors::SummaryError;

/// Guardrail version pinned for every invocation.
pub const GUARDRAIL_VERSION: &str = "1";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Per-call parameters that sit beside the request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokeOptions {
    pub model_id: String,
    pub guardrail_id: String,
    pub guardrail_version: String,
    pub trace: bool,
}

impl InvokeOptions {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            model_id: config.model_id.clone(),
            guardrail_id: config.guardrail_id.clone(),
            guardrail_version: GUARDRAIL_VERSION.to_string(),
            trace: true,
        }
    }
}

/// Synchronous request/response access to a hosted model.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn invoke(
        &self,
        request: &ModelRequest,
        options: &InvokeOptions,
    ) -> Result<ModelResponse, SummaryError>;
}

/// `ModelClient` backed by the Bedrock runtime API.
#[derive(Clone)]
pub struct BedrockModelClient {
    client: Client,
}

impl BedrockModelClient {
    #[must_use]
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }

    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ModelClient for BedrockModelClient {
    async fn invoke(
        &self,
        request: &ModelRequest,
        options: &InvokeOptions,
    ) -> Result<ModelResponse, SummaryError> {
        info!(model_id = %options.model_id, "Invoking model");

        let output = self
            .client
            .invoke_model()
            .model_id(&options.model_id)
            .content_type(JSON_CONTENT_TYPE)
            .accept(JSON_CONTENT_TYPE)
            .guardrail_identifier(&options.guardrail_id)
            .guardrail_version(&options.guardrail_version)
            .trace(if options.trace {
                Trace::Enabled
            } else {
                Trace::Disabled
            })
            .body(Blob::new(request.to_bytes()?))
            .send()
            .await
            .map_err(|e| SummaryError::ModelError(format_sdk_error(&e)))?;

        let body = output.body().as_ref();
        debug!(bytes = body.len(), "Received model response");

        ModelResponse::from_slice(body)
    }
}

/// Render an SDK error with its service message when there is one; the
/// top-level `Display` of `SdkError` is only "service error".
fn format_sdk_error<E, R>(error: &aws_sdk_bedrockruntime::error::SdkError<E, R>) -> String
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    aws_sdk_bedrockruntime::error::DisplayErrorContext(error).to_string()
}
