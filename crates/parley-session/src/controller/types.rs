//! Submit outcomes and the awaiting-reply guard.

use std::sync::atomic::{AtomicBool, Ordering};

use parley_common::{ConversationEvent, EventBus};

/// Observable state of a controller between and during submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Sending,
}

/// Why a submit was dropped without touching the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    EmptyInput,
    AwaitingReply,
}

/// How a `submit` call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No turn appended, no request issued.
    Ignored(IgnoreReason),
    /// The reply was appended as an assistant turn.
    Succeeded,
    /// An error description was appended as an assistant turn.
    Failed,
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, SubmitOutcome::Ignored(_))
    }
}

/// Holds the awaiting-reply flag for the lifetime of one submit.
///
/// Clears the flag on drop, so every exit path releases it, including a
/// cancelled submit future.
pub(crate) struct ReplyGuard<'a> {
    flag: &'a AtomicBool,
    events: &'a EventBus,
}

impl<'a> ReplyGuard<'a> {
    /// Claim the flag. Returns `None` if a request is already in flight.
    pub(crate) fn acquire(flag: &'a AtomicBool, events: &'a EventBus) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| Self { flag, events })
    }

    pub(crate) fn announce(&self) {
        self.events
            .publish(ConversationEvent::AwaitingReplyChanged(true));
    }
}

impl Drop for ReplyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
        self.events
            .publish(ConversationEvent::AwaitingReplyChanged(false));
    }
}
