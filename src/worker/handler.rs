#![allow(clippy::missing_errors_doc)]
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::{deliver, summarize};
use crate::ai::ModelClient;
use crate::clients::ObjectStore;
use crate::core::config::AppConfig;
use crate::core::models::{InvocationEvent, SummaryOutcome};
use crate::errors::SummaryError;
use crate::utils::TranscriptLocation;

/// The summarization step: configuration plus the two service clients,
/// built once per cold start and shared by every invocation.
pub struct SummaryWorker<S, M> {
    config: AppConfig,
    store: S,
    model: M,
}

impl<S, M> SummaryWorker<S, M>
where
    S: ObjectStore,
    M: ModelClient,
{
    pub fn new(config: AppConfig, store: S, model: M) -> Self {
        Self {
            config,
            store,
            model,
        }
    }

    /// Fetch, summarize, store. Stops at the first failing step, so nothing
    /// is written unless the model produced a summary.
    pub async fn process(&self, event: &InvocationEvent) -> Result<SummaryOutcome, SummaryError> {
        let transcript_uri = event.transcript_file_uri();
        info!(transcript_uri, "Transcript URI");

        let location = TranscriptLocation::parse(transcript_uri)?;
        let transcript = summarize::fetch_transcript(&self.store, &location).await?;
        let summary = summarize::generate_summary(&self.model, &self.config, &transcript).await?;
        let key = deliver::store_summary(
            &self.store,
            &location.bucket,
            event.source_file_name(),
            &summary,
        )
        .await?;

        Ok(SummaryOutcome::Succeeded {
            bucket_name: location.bucket,
            summary_key_name: key,
        })
    }

    /// Run one invocation from a raw event payload. Never fails: every error
    /// becomes a `FAILED` outcome carrying its message.
    pub async fn handle(&self, payload: Value) -> SummaryOutcome {
        let result = match serde_json::from_value::<InvocationEvent>(payload) {
            Ok(event) => self.process(&event).await,
            Err(e) => Err(SummaryError::EventError(e.to_string())),
        };

        match result {
            Ok(outcome) => {
                info!("Summary generated successfully");
                outcome
            }
            Err(e) => {
                error!("Failed to generate summary: {}", e);
                SummaryOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }
}

/// Lambda handler for the summarization step.
///
/// The result is always `Ok`; failures are reported through the outcome's
/// `status` so the state machine can route them.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler<S, M>(
    worker: &SummaryWorker<S, M>,
    event: LambdaEvent<Value>,
) -> Result<SummaryOutcome, Error>
where
    S: ObjectStore,
    M: ModelClient,
{
    Ok(worker.handle(event.payload).await)
}

pub use self::function_handler as handler;
