//! Append-only conversation history.
//!
//! The store is a plain data container. It performs no I/O; every mutation
//! is announced on its `EventBus` so presentation layers can re-render
//! without polling.

use std::sync::Arc;

use parley_common::{ConversationEvent, EventBus, Role, SessionId};
use serde::Serialize;
use tracing::debug;

/// One message in the conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    role: Role,
    content: String,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Turns of one session in append order, plus the continuity token.
pub struct ConversationStore {
    session_id: SessionId,
    /// Shared with outstanding snapshots; copied on the next append.
    turns: Arc<Vec<Turn>>,
    continuity_token: Option<String>,
    events: Arc<EventBus>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self {
            session_id: SessionId::new(),
            turns: Arc::new(Vec::new()),
            continuity_token: None,
            events: Arc::new(EventBus::default()),
        }
    }

    pub fn append_turn(&mut self, role: Role, content: impl Into<String>) {
        let turns = Arc::make_mut(&mut self.turns);
        turns.push(Turn::new(role, content));
        let index = turns.len() - 1;
        debug!(session = %self.session_id, index, role = role.as_str(), "turn appended");
        self.events
            .publish(ConversationEvent::TurnAppended { index, role });
    }

    /// Replace the continuity token. Absent or empty tokens are ignored.
    pub fn set_continuity_token(&mut self, token: Option<&str>) {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return;
        };
        if self.continuity_token.as_deref() == Some(token) {
            return;
        }
        debug!(session = %self.session_id, "continuity token updated");
        self.continuity_token = Some(token.to_string());
        self.events.publish(ConversationEvent::ContinuityTokenChanged);
    }

    /// Read-only view of the history as of now.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            turns: Arc::clone(&self.turns),
        }
    }

    pub fn continuity_token(&self) -> Option<&str> {
        self.continuity_token.as_deref()
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<ConversationEvent> {
        self.events.subscribe()
    }

    pub(crate) fn events(&self) -> Arc<EventBus> {
        Arc::clone(&self.events)
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable view of the turns at the time it was taken.
///
/// Can be iterated any number of times; later appends to the store are
/// never visible through it.
#[derive(Debug, Clone)]
pub struct Snapshot {
    turns: Arc<Vec<Turn>>,
}

impl Snapshot {
    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.turns.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Turn> {
        self.turns.get(index)
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Turn;
    type IntoIter = std::slice::Iter<'a, Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = ConversationStore::new();
        assert!(store.is_empty());
        assert!(store.continuity_token().is_none());
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn append_keeps_order_and_tolerates_repeated_roles() {
        let mut store = ConversationStore::new();
        store.append_turn(Role::User, "A");
        store.append_turn(Role::Assistant, "Error: boom. Please try again.");
        store.append_turn(Role::Assistant, "late reply");

        let snap = store.snapshot();
        let roles: Vec<Role> = snap.iter().map(Turn::role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant, Role::Assistant]);
        assert_eq!(snap.get(2).unwrap().content(), "late reply");
    }

    #[test]
    fn snapshot_is_isolated_from_later_appends() {
        let mut store = ConversationStore::new();
        store.append_turn(Role::User, "first");
        let before = store.snapshot();

        store.append_turn(Role::Assistant, "second");

        assert_eq!(before.len(), 1);
        assert_eq!(store.snapshot().len(), 2);
        assert_eq!(before.last().unwrap().content(), "first");
    }

    #[test]
    fn snapshot_is_restartable() {
        let mut store = ConversationStore::new();
        store.append_turn(Role::User, "q");
        store.append_turn(Role::Assistant, "a");
        let snap = store.snapshot();

        let first: Vec<&str> = snap.iter().map(Turn::content).collect();
        let second: Vec<&str> = (&snap).into_iter().map(Turn::content).collect();
        assert_eq!(first, vec!["q", "a"]);
        assert_eq!(first, second);
    }

    #[test]
    fn continuity_token_skips_absent_and_empty() {
        let mut store = ConversationStore::new();
        store.set_continuity_token(None);
        store.set_continuity_token(Some(""));
        assert!(store.continuity_token().is_none());

        store.set_continuity_token(Some("abc"));
        store.set_continuity_token(None);
        store.set_continuity_token(Some(""));
        assert_eq!(store.continuity_token(), Some("abc"));

        store.set_continuity_token(Some("def"));
        assert_eq!(store.continuity_token(), Some("def"));
    }

    #[tokio::test]
    async fn mutations_emit_change_events() {
        let mut store = ConversationStore::new();
        let mut rx = store.subscribe();

        store.append_turn(Role::User, "hello");
        store.set_continuity_token(Some("abc"));
        store.set_continuity_token(Some("abc"));
        store.append_turn(Role::Assistant, "hi");

        assert_eq!(
            rx.recv().await.unwrap(),
            ConversationEvent::TurnAppended {
                index: 0,
                role: Role::User
            }
        );
        assert_eq!(
            rx.recv().await.unwrap(),
            ConversationEvent::ContinuityTokenChanged
        );
        assert_eq!(
            rx.recv().await.unwrap(),
            ConversationEvent::TurnAppended {
                index: 1,
                role: Role::Assistant
            }
        );
        assert!(rx.try_recv().is_err());
    }
}
