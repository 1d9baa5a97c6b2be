//! SessionController struct and read-side accessors.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use parley_common::{ConversationEvent, EventBus};
use tokio::sync::broadcast;

use crate::store::{ConversationStore, Snapshot};
use crate::AskClient;

use super::types::SessionState;

/// Drives one conversation session against a remote service.
pub struct SessionController {
    /// Transport used for every outbound request.
    pub(super) client: Arc<dyn AskClient>,
    /// Conversation history. Never locked across an await.
    pub(super) store: Mutex<ConversationStore>,
    /// Change notifications, shared with the store.
    pub(super) events: Arc<EventBus>,
    /// True while a request is in flight.
    pub(super) awaiting: AtomicBool,
    /// Upper bound for one request, on top of the transport's own timeout.
    pub(super) reply_timeout: Option<Duration>,
}

impl SessionController {
    pub fn new(client: Arc<dyn AskClient>) -> Self {
        Self::with_store(client, ConversationStore::new())
    }

    pub fn with_store(client: Arc<dyn AskClient>, store: ConversationStore) -> Self {
        let events = store.events();
        Self {
            client,
            store: Mutex::new(store),
            events,
            awaiting: AtomicBool::new(false),
            reply_timeout: None,
        }
    }

    pub fn with_reply_timeout(mut self, timeout: Duration) -> Self {
        self.reply_timeout = Some(timeout);
        self
    }

    /// Whether a request is currently in flight.
    pub fn awaiting_reply(&self) -> bool {
        self.awaiting.load(Ordering::Acquire)
    }

    pub fn state(&self) -> SessionState {
        if self.awaiting_reply() {
            SessionState::Sending
        } else {
            SessionState::Idle
        }
    }

    /// Read-only copy of the turns so far.
    pub fn snapshot(&self) -> Snapshot {
        self.lock_store().snapshot()
    }

    pub fn continuity_token(&self) -> Option<String> {
        self.lock_store().continuity_token().map(String::from)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ConversationEvent> {
        self.events.subscribe()
    }

    pub(super) fn lock_store(&self) -> MutexGuard<'_, ConversationStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
