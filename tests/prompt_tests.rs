use recordings_summary::ai::prompt_builder::{
    ANTHROPIC_VERSION, MAX_OUTPUT_TOKENS, ModelRequest, ModelResponse, build_user_content,
};
use serde_json::json;

#[test]
fn test_user_content_appends_quoted_transcript_without_separator() {
    let content = build_user_content("Mask all the sensitive details and PII.", "hello world");
    assert_eq!(content, "Mask all the sensitive details and PII.\"hello world\"");
}

#[test]
fn test_user_content_escapes_transcript() {
    let content = build_user_content("Summarize:", "she said \"hi\"\nthen left");
    assert_eq!(content, r#"Summarize:"she said \"hi\"\nthen left""#);
}

#[test]
fn test_model_request_envelope() {
    let request = ModelRequest::for_transcript("Summarize:", "hello world");
    let body = serde_json::to_value(&request).unwrap();

    assert_eq!(
        body,
        json!({
            "anthropic_version": ANTHROPIC_VERSION,
            "max_tokens": MAX_OUTPUT_TOKENS,
            "system": "",
            "messages": [
                { "role": "user", "content": "Summarize:\"hello world\"" }
            ]
        })
    );
    assert_eq!(request.max_tokens, 1000);
}

#[test]
fn test_model_response_summary_text() {
    let body = br#"{
        "id": "msg_01",
        "type": "message",
        "role": "assistant",
        "content": [
            { "type": "text", "text": "Key points: ..." },
            { "type": "text", "text": "ignored" }
        ],
        "stop_reason": "end_turn"
    }"#;

    let response = ModelResponse::from_slice(body).unwrap();
    assert_eq!(response.summary_text().unwrap(), "Key points: ...");
    assert_eq!(response.stop_reason.as_deref(), Some("end_turn"));
}

#[test]
fn test_model_response_without_content_is_an_error() {
    let response = ModelResponse::from_slice(br#"{"content": []}"#).unwrap();
    let err = response.summary_text().unwrap_err();
    assert!(err.to_string().contains("content[0].text"));

    assert!(ModelResponse::from_slice(b"not json").is_err());
}
