use serde::{Deserialize, Serialize};

/// Input delivered by the state machine for one run.
///
/// Only the fields this step reads are modelled; everything else the
/// workflow carries along (job status, source bucket, ...) is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvocationEvent {
    pub transcription_job: TranscriptionJobEnvelope,
    pub source: SourceEnvelope,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TranscriptionJobEnvelope {
    pub transcription_job: TranscriptionJob,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TranscriptionJob {
    pub transcript: Transcript,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Transcript {
    pub transcript_file_uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SourceEnvelope {
    pub payload: SourcePayload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SourcePayload {
    pub source_file_name: String,
}

impl InvocationEvent {
    pub fn transcript_file_uri(&self) -> &str {
        &self.transcription_job.transcription_job.transcript.transcript_file_uri
    }

    pub fn source_file_name(&self) -> &str {
        &self.source.payload.source_file_name
    }
}

/// Transcribe output document, reduced to the part we summarize.
#[derive(Debug, Deserialize)]
pub struct TranscriptDocument {
    pub results: TranscriptResults,
}

#[derive(Debug, Deserialize)]
pub struct TranscriptResults {
    pub transcripts: Vec<TranscriptEntry>,
}

#[derive(Debug, Deserialize)]
pub struct TranscriptEntry {
    pub transcript: String,
}

/// Status record returned to the state machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum SummaryOutcome {
    #[serde(rename = "SUCCEEDED")]
    Succeeded {
        bucket_name: String,
        summary_key_name: String,
    },
    #[serde(rename = "FAILED")]
    Failed {
        #[serde(rename = "Error")]
        error: String,
    },
}
