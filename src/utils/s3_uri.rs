use percent_encoding::percent_decode_str;
use url::Url;

use crate::errors::SummaryError;

/// Prefix under which transcripts and summaries live in the asset bucket.
pub const TRANSCRIPTIONS_PREFIX: &str = "transcriptions";

/// Bucket and key of an object addressed by a path-style S3 URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLocation {
    pub bucket: String,
    pub key: String,
}

impl TranscriptLocation {
    /// Parse a Transcribe `TranscriptFileUri`.
    ///
    /// Transcribe reports output written to a caller-owned bucket as a
    /// path-style URL, e.g.
    /// `https://s3.us-east-1.amazonaws.com/my-bucket/transcriptions/abc.json`.
    /// The first path segment is the bucket; the key is the last two segments
    /// (output prefix and file name).
    ///
    /// # Errors
    ///
    /// Returns `InvalidTranscriptUri` when the value is not an absolute
    /// http(s) URL with a bucket and a two-segment key.
    pub fn parse(uri: &str) -> Result<Self, SummaryError> {
        let url = Url::parse(uri.trim())
            .map_err(|e| SummaryError::InvalidTranscriptUri(format!("{uri}: {e}")))?;

        if !matches!(url.scheme(), "https" | "http") {
            return Err(SummaryError::InvalidTranscriptUri(format!(
                "{uri}: unsupported scheme '{}'",
                url.scheme()
            )));
        }

        let segments: Vec<String> = match url.path_segments() {
            Some(segs) => segs
                .map(decode_segment)
                .collect::<Result<_, _>>()
                .map_err(|e| SummaryError::InvalidTranscriptUri(format!("{uri}: {e}")))?,
            None => Vec::new(),
        };

        if segments.len() < 3 {
            return Err(SummaryError::InvalidTranscriptUri(format!(
                "{uri}: expected /<bucket>/<prefix>/<file> path"
            )));
        }

        let bucket = &segments[0];
        let prefix = &segments[segments.len() - 2];
        let file = &segments[segments.len() - 1];

        if bucket.is_empty() || prefix.is_empty() || file.is_empty() {
            return Err(SummaryError::InvalidTranscriptUri(format!(
                "{uri}: empty bucket or key segment"
            )));
        }

        Ok(Self {
            bucket: bucket.clone(),
            key: format!("{prefix}/{file}"),
        })
    }
}

fn decode_segment(segment: &str) -> Result<String, std::str::Utf8Error> {
    percent_decode_str(segment)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
}

/// Key the summary for `source_file_name` is written to.
#[must_use]
pub fn summary_key(source_file_name: &str) -> String {
    format!("{TRANSCRIPTIONS_PREFIX}/{source_file_name}-summary.txt")
}
