use serde::{Deserialize, Serialize};

/// Default question-answering endpoint.
pub const DEFAULT_ENDPOINT_URL: &str =
    "https://bharatai-appengine-caaxhrhbghb2brf3.centralindia-01.azurewebsites.net/ask";

/// Remote question-answering service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Full URL the questions are POSTed to.
    pub url: String,
    /// Tenant qualifier appended as the `customer_id` query parameter.
    pub customer_id: Option<String>,
    /// TCP connect timeout in seconds (valid range: 1-60).
    pub connect_timeout_secs: u32,
    /// Upper bound for one whole request in seconds (valid range: 1-600).
    pub request_timeout_secs: u32,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT_URL.into(),
            customer_id: Some("test_customer_2".into()),
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
        }
    }
}
