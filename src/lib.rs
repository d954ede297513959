/// Recordings Summary - the summarization step of a recording transcription workflow.
///
/// This crate implements a single Lambda function invoked by a Step Functions
/// state machine once an Amazon Transcribe job has completed:
/// 1. The transcript JSON is read from S3 at the location reported by the job
/// 2. The transcript text is sent to a Bedrock model (behind a guardrail) with
///    the configured summary instructions
/// 3. The model's answer is written back to the same bucket as plain text
///
/// Every failure is reported in the returned status record rather than as a
/// Lambda error, so the state machine can branch on `status`.
///
/// # Example
///
/// ```no_run
/// use recordings_summary::clients::S3ObjectStore;
/// use recordings_summary::ai::BedrockModelClient;
/// use recordings_summary::core::config::AppConfig;
/// use recordings_summary::worker::SummaryWorker;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     recordings_summary::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let aws = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
///     let worker = SummaryWorker::new(
///         config,
///         S3ObjectStore::new(&aws),
///         BedrockModelClient::new(&aws),
///     );
///
///     let outcome = worker
///         .handle(serde_json::json!({
///             "TranscriptionJob": { "TranscriptionJob": { "Transcript": {
///                 "TranscriptFileUri": "https://s3.us-east-1.amazonaws.com/my-bucket/transcriptions/call123.json"
///             }}},
///             "Source": { "Payload": { "SourceFileName": "call123" } }
///         }))
///         .await;
///     println!("{}", serde_json::to_string(&outcome)?);
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod clients;
pub mod core;
pub mod errors;
pub mod utils;
pub mod worker;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at cold start,
/// before the runtime loop begins.
///
/// Calling it again is harmless: a second global subscriber is ignored.
///
/// # Example
///
/// ```
/// recordings_summary::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    // Err only means a subscriber is already installed.
    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
