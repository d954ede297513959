use serde::{Deserialize, Serialize};

use crate::errors::SummaryError;

/// Messages API version expected by Anthropic models on Bedrock.
pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Upper bound on generated tokens for one summary.
pub const MAX_OUTPUT_TOKENS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Request body sent to `InvokeModel`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRequest {
    pub anthropic_version: String,
    pub max_tokens: u32,
    pub system: String,
    pub messages: Vec<ChatMessage>,
}

impl ModelRequest {
    /// Single user turn, empty system prompt.
    #[must_use]
    pub fn for_transcript(instructions: &str, transcript: &str) -> Self {
        Self {
            anthropic_version: ANTHROPIC_VERSION.to_string(),
            max_tokens: MAX_OUTPUT_TOKENS,
            system: String::new(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: build_user_content(instructions, transcript),
            }],
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SummaryError> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// Instructions directly followed by the transcript as a JSON string literal.
///
/// The quotes delimit the transcript from the instructions, so no separator
/// is inserted between the two.
#[must_use]
pub fn build_user_content(instructions: &str, transcript: &str) -> String {
    let quoted = serde_json::Value::String(transcript.to_string()).to_string();
    format!("{instructions}{quoted}")
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    #[serde(default)]
    pub text: Option<String>,
}

/// Response body of `InvokeModel`; only the content blocks are read.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub stop_reason: Option<String>,
}

impl ModelResponse {
    pub fn from_slice(body: &[u8]) -> Result<Self, SummaryError> {
        serde_json::from_slice(body)
            .map_err(|e| SummaryError::ModelError(format!("Unparseable model response: {e}")))
    }

    /// Text of the first content block.
    pub fn summary_text(&self) -> Result<&str, SummaryError> {
        self.content
            .first()
            .and_then(|block| block.text.as_deref())
            .ok_or_else(|| {
                SummaryError::ModelError("Model response has no content[0].text".to_string())
            })
    }
}
