use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::Role;

/// Change notifications emitted by a conversation after each mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ConversationEvent {
    TurnAppended { index: usize, role: Role },
    ContinuityTokenChanged,
    AwaitingReplyChanged(bool),
}

pub struct EventBus {
    sender: broadcast::Sender<ConversationEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ConversationEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of subscribers that received the event.
    pub fn publish(&self, event: ConversationEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(ConversationEvent::ContinuityTokenChanged);

        let event = rx.recv().await.unwrap();
        assert_eq!(event, ConversationEvent::ContinuityTokenChanged);
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(ConversationEvent::AwaitingReplyChanged(true));

        let e1 = rx1.recv().await.unwrap();
        let e2 = rx2.recv().await.unwrap();
        assert_eq!(e1, ConversationEvent::AwaitingReplyChanged(true));
        assert_eq!(e2, ConversationEvent::AwaitingReplyChanged(true));
    }

    #[tokio::test]
    async fn events_arrive_in_publish_order() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(ConversationEvent::TurnAppended {
            index: 0,
            role: Role::User,
        });
        bus.publish(ConversationEvent::TurnAppended {
            index: 1,
            role: Role::Assistant,
        });

        let e1 = rx.recv().await.unwrap();
        assert!(matches!(e1, ConversationEvent::TurnAppended { index: 0, role: Role::User }));
        let e2 = rx.recv().await.unwrap();
        assert!(matches!(
            e2,
            ConversationEvent::TurnAppended { index: 1, role: Role::Assistant }
        ));
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        assert_eq!(bus.publish(ConversationEvent::ContinuityTokenChanged), 0);
    }

    #[test]
    fn publish_returns_subscriber_count() {
        let bus = EventBus::new(16);
        let _rx1 = bus.subscribe();
        let _rx2 = bus.subscribe();

        assert_eq!(bus.publish(ConversationEvent::ContinuityTokenChanged), 2);
    }

    #[test]
    fn event_serializes_tagged() {
        let json = serde_json::to_string(&ConversationEvent::TurnAppended {
            index: 3,
            role: Role::Assistant,
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"type":"TurnAppended","data":{"index":3,"role":"assistant"}}"#
        );
    }
}
