//! The submit state machine: Idle -> Sending -> {Succeeded, Failed} -> Idle.

use parley_common::{new_request_id, Role};
use tracing::{debug, warn};

use crate::{reply, AskError, AskRequest};

use super::manager::SessionController;
use super::types::{IgnoreReason, ReplyGuard, SubmitOutcome};

impl SessionController {
    /// Send one user turn and record the reply.
    ///
    /// Appends exactly one user turn and one assistant turn for accepted
    /// input. Empty input, or input arriving while a reply is awaited, is
    /// ignored without touching the conversation. Failures are recorded as
    /// an assistant turn, never returned.
    pub async fn submit(&self, raw_text: &str) -> SubmitOutcome {
        let question = raw_text.trim();
        if question.is_empty() {
            debug!("ignoring empty input");
            return SubmitOutcome::Ignored(IgnoreReason::EmptyInput);
        }

        let Some(guard) = ReplyGuard::acquire(&self.awaiting, &self.events) else {
            debug!("ignoring input while a reply is pending");
            return SubmitOutcome::Ignored(IgnoreReason::AwaitingReply);
        };

        let (request, session) = {
            let mut store = self.lock_store();
            store.append_turn(Role::User, question);
            let request = AskRequest::new(question, store.continuity_token());
            (request, store.session_id().clone())
        };
        guard.announce();

        let request_id = new_request_id();
        debug!(
            %session,
            request_id = %request_id,
            continued = request.conversation_id.is_some(),
            "sending question"
        );

        let result = self.send(&request).await;

        let outcome = {
            let mut store = self.lock_store();
            match result {
                Ok(body) => {
                    store.set_continuity_token(reply::continuity_token(&body));
                    store.append_turn(Role::Assistant, reply::reply_text(&body));
                    debug!(%session, request_id = %request_id, "reply recorded");
                    SubmitOutcome::Succeeded
                }
                Err(e) => {
                    warn!(%session, request_id = %request_id, "request failed: {e}");
                    store.append_turn(Role::Assistant, reply::failure_text(&e));
                    SubmitOutcome::Failed
                }
            }
        };

        drop(guard);
        outcome
    }

    async fn send(&self, request: &AskRequest) -> Result<serde_json::Value, AskError> {
        match self.reply_timeout {
            Some(limit) => tokio::time::timeout(limit, self.client.ask(request))
                .await
                .unwrap_or(Err(AskError::Timeout)),
            None => self.client.ask(request).await,
        }
    }
}
