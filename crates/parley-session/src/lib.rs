//! Conversation session core for Parley.
//!
//! Provides:
//! - `ConversationStore`, the append-only turn history plus the
//!   continuity token issued by the remote service
//! - `SessionController`, the single-flight submit state machine
//! - `AskClient`, the transport seam, with a reqwest implementation
//! - Reply extraction and sanitizing markup rendering

pub mod client;
pub mod controller;
pub mod markup;
pub mod reply;
pub mod store;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use client::{ClientConfig, HttpAskClient};
pub use controller::{IgnoreReason, SessionController, SessionState, SubmitOutcome};
pub use parley_common::Role;
pub use store::{ConversationStore, Snapshot, Turn};

/// Outbound request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    /// Present only once the service has issued a continuity token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

impl AskRequest {
    pub fn new(question: impl Into<String>, conversation_id: Option<&str>) -> Self {
        Self {
            question: question.into(),
            conversation_id: conversation_id.map(String::from),
        }
    }
}

/// Transport to the remote question-answering service.
///
/// Implementations return the decoded response body. A body that is not
/// JSON comes back as a JSON string holding the raw text.
#[async_trait]
pub trait AskClient: Send + Sync {
    async fn ask(&self, request: &AskRequest) -> Result<serde_json::Value, AskError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AskError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request timed out")]
    Timeout,
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Client configuration error: {0}")]
    Config(String),
}
