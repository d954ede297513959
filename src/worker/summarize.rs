#![allow(clippy::missing_errors_doc)]
use tracing::info;
#[cfg(feature = "debug-logs")]
use tracing::debug;

use crate::ai::{InvokeOptions, ModelClient, ModelRequest};
use crate::clients::ObjectStore;
use crate::core::config::AppConfig;
use crate::core::models::TranscriptDocument;
use crate::errors::SummaryError;
use crate::utils::TranscriptLocation;

/// Download the Transcribe output at `location` and return the first transcript.
pub async fn fetch_transcript<S: ObjectStore + ?Sized>(
    store: &S,
    location: &TranscriptLocation,
) -> Result<String, SummaryError> {
    let body = store.get_object(&location.bucket, &location.key).await?;
    let transcript = extract_transcript(&body)?;
    info!(
        bucket = %location.bucket,
        key = %location.key,
        chars = transcript.chars().count(),
        "Loaded transcript"
    );
    Ok(transcript)
}

/// Pull `results.transcripts[0].transcript` out of a Transcribe document.
pub fn extract_transcript(body: &[u8]) -> Result<String, SummaryError> {
    let document: TranscriptDocument = serde_json::from_slice(body)
        .map_err(|e| SummaryError::TranscriptError(e.to_string()))?;

    document
        .results
        .transcripts
        .into_iter()
        .next()
        .map(|entry| entry.transcript)
        .ok_or_else(|| SummaryError::TranscriptError("results.transcripts is empty".to_string()))
}

/// Ask the configured model to summarize `transcript`.
pub async fn generate_summary<M: ModelClient + ?Sized>(
    model: &M,
    config: &AppConfig,
    transcript: &str,
) -> Result<String, SummaryError> {
    let request = ModelRequest::for_transcript(&config.summary_instructions, transcript);

    #[cfg(feature = "debug-logs")]
    debug!("Using model prompt:\n{:?}", request.messages);

    let response = model
        .invoke(&request, &InvokeOptions::from_config(config))
        .await?;

    if let Some(reason) = response.stop_reason.as_deref() {
        info!(stop_reason = reason, "Model finished");
    }

    let summary = response.summary_text()?.to_string();

    #[cfg(feature = "debug-logs")]
    debug!("Model summary:\n{}", summary);

    Ok(summary)
}
