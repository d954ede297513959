use std::env;

/// Model used when `BEDROCK_MODEL_ID` is not set.
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-sonnet-20240229-v1:0";

/// Instructions used when `SUMMARY_INSTRUCTIONS` is not set.
pub const DEFAULT_SUMMARY_INSTRUCTIONS: &str = "Mask all the sensitive details and PII.";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub model_id: String,
    pub guardrail_id: String,
    pub summary_instructions: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup. Empty values are
    /// treated the same as missing ones; only the guardrail id is mandatory.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let model_id = get("BEDROCK_MODEL_ID").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string());
        if model_id.chars().any(char::is_whitespace) {
            return Err(format!("BEDROCK_MODEL_ID: invalid model id '{}'", model_id));
        }

        // Summaries must never be produced without the redaction guardrail.
        let guardrail_id = get("BEDROCK_GUARDRAIL_ID")
            .ok_or_else(|| "BEDROCK_GUARDRAIL_ID: environment variable not set".to_string())?;

        Ok(Self {
            model_id,
            guardrail_id,
            summary_instructions: get("SUMMARY_INSTRUCTIONS")
                .unwrap_or_else(|| DEFAULT_SUMMARY_INSTRUCTIONS.to_string()),
        })
    }
}
