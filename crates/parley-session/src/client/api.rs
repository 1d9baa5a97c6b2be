//! AskClient trait implementation for HttpAskClient.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::{AskClient, AskError, AskRequest};

use super::http::{classify, decode_body, HttpAskClient};

/// Longest slice of an error body kept in `AskError::Http`.
const ERROR_BODY_LIMIT: usize = 200;

#[async_trait]
impl AskClient for HttpAskClient {
    async fn ask(&self, request: &AskRequest) -> Result<Value, AskError> {
        debug!(
            url = %self.endpoint,
            continued = request.conversation_id.is_some(),
            "ask request"
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(ERROR_BODY_LIMIT).collect::<String>();
            return Err(AskError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        let text = response.text().await.map_err(classify)?;
        debug!(status = status.as_u16(), bytes = text.len(), "ask response");
        Ok(decode_body(&text))
    }
}
