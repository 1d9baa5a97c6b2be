//! Turning a response body into assistant turn content.
//!
//! The service has no published response schema, so the reply text is
//! found by shape: a bare string, then `answer`, then `response`, and
//! finally a pretty-printed dump so no successful reply is dropped.

use serde_json::Value;

use crate::AskError;

const ANSWER_FIELD: &str = "answer";
const RESPONSE_FIELD: &str = "response";
const CONVERSATION_ID_FIELD: &str = "conversation_id";

/// Extract the text to show for a successful response body.
pub fn reply_text(body: &Value) -> String {
    if let Some(text) = usable_text(body) {
        return text.to_string();
    }

    for field in [ANSWER_FIELD, RESPONSE_FIELD] {
        if let Some(text) = body.get(field).and_then(usable_text) {
            return text.to_string();
        }
    }

    serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string())
}

/// The continuity token carried by a response body, if any.
pub fn continuity_token(body: &Value) -> Option<&str> {
    body.get(CONVERSATION_ID_FIELD)
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
}

/// Assistant turn content recording a failed request.
pub fn failure_text(err: &AskError) -> String {
    format!("Error: {err}. Please try again.")
}

fn usable_text(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}
