use thiserror::Error;

/// Typed failure causes inside one summarization run.
///
/// The workflow only ever sees the `Display` text of these (in the `Error`
/// field of a failed outcome), so each message names the step that failed.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Failed to parse invocation event: {0}")]
    EventError(String),

    #[error("Invalid transcript URI: {0}")]
    InvalidTranscriptUri(String),

    #[error("Failed to access S3: {0}")]
    StorageError(String),

    #[error("Malformed transcript document: {0}")]
    TranscriptError(String),

    #[error("Failed to invoke Bedrock model: {0}")]
    ModelError(String),

    #[error("Failed to process JSON: {0}")]
    JsonError(String),
}

impl From<serde_json::Error> for SummaryError {
    fn from(error: serde_json::Error) -> Self {
        SummaryError::JsonError(error.to_string())
    }
}
