//! Conversation session controller.
//!
//! A `SessionController` owns one `ConversationStore` and is the only
//! component that talks to the remote service. At most one request is in
//! flight per controller; the "awaiting reply" flag gates re-entry.

mod manager;
mod submit;
mod types;


pub use manager::SessionController;
pub use types::{IgnoreReason, SessionState, SubmitOutcome};
