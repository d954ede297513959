#![allow(clippy::missing_errors_doc)]
use tracing::info;

use crate::clients::ObjectStore;
use crate::errors::SummaryError;
use crate::utils::summary_key;

pub const SUMMARY_CONTENT_TYPE: &str = "text/plain";

/// Write `summary` next to the transcript and return the key it was stored under.
pub async fn store_summary<S: ObjectStore + ?Sized>(
    store: &S,
    bucket: &str,
    source_file_name: &str,
    summary: &str,
) -> Result<String, SummaryError> {
    let key = summary_key(source_file_name);

    store
        .put_object(
            bucket,
            &key,
            summary.as_bytes().to_vec(),
            SUMMARY_CONTENT_TYPE,
        )
        .await?;

    info!(bucket, key = %key, "Stored summary");
    Ok(key)
}
