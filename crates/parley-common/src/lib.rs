pub mod errors;
pub mod events;
pub mod id;

pub use errors::{ConfigError, ParleyError};
pub use events::{ConversationEvent, EventBus};
pub use id::{new_request_id, SessionId};

/// Role of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

pub type Result<T> = std::result::Result<T, ParleyError>;
