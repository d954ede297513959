// This is the Lambda bootstrap entry point for the summarization step

use anyhow::{Context, anyhow};
use aws_config::BehaviorVersion;
use lambda_runtime::{run, service_fn};
use recordings_summary::ai::BedrockModelClient;
use recordings_summary::clients::S3ObjectStore;
use recordings_summary::core::config::AppConfig;
use recordings_summary::worker::{SummaryWorker, handler};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    recordings_summary::setup_logging();

    // Configuration and clients are shared by every invocation of this instance
    let config = AppConfig::from_env()
        .map_err(|e| {
            error!("Config error: {}", e);
            anyhow!(e)
        })
        .context("Failed to load configuration")?;
    info!(
        model_id = %config.model_id,
        guardrail_id = %config.guardrail_id,
        "Loaded configuration"
    );

    let shared_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let worker = SummaryWorker::new(
        config,
        S3ObjectStore::new(&shared_config),
        BedrockModelClient::new(&shared_config),
    );

    run(service_fn(|event| handler(&worker, event)))
        .await
        .map_err(|e| anyhow!(e))
        .context("Lambda runtime exited")
}
