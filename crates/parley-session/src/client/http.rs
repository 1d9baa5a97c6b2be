//! Client struct, endpoint URL building, and body decoding.

use serde_json::Value;

use crate::AskError;

use super::config::ClientConfig;

/// Reqwest-backed `AskClient`.
pub struct HttpAskClient {
    pub(crate) endpoint: reqwest::Url,
    pub(crate) http: reqwest::Client,
}

impl HttpAskClient {
    pub fn new(config: ClientConfig) -> Result<Self, AskError> {
        let endpoint = endpoint_url(&config)?;
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AskError::Config(e.to_string()))?;

        Ok(Self { endpoint, http })
    }
}

/// The configured URL with `customer_id` appended to its query.
pub(crate) fn endpoint_url(config: &ClientConfig) -> Result<reqwest::Url, AskError> {
    let mut url = reqwest::Url::parse(&config.url)
        .map_err(|e| AskError::Config(format!("invalid endpoint URL {:?}: {e}", config.url)))?;
    if let Some(ref customer_id) = config.customer_id {
        url.query_pairs_mut().append_pair("customer_id", customer_id);
    }
    Ok(url)
}

/// Decode a response body: JSON when it parses, the raw text otherwise.
pub(crate) fn decode_body(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

pub(crate) fn classify(err: reqwest::Error) -> AskError {
    if err.is_timeout() {
        AskError::Timeout
    } else if err.is_decode() {
        AskError::Parse(err.to_string())
    } else {
        AskError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn endpoint_appends_customer_id() {
        let config = ClientConfig::new("https://qa.example.com/ask").with_customer_id("test_customer_2");
        let url = endpoint_url(&config).unwrap();
        assert_eq!(
            url.as_str(),
            "https://qa.example.com/ask?customer_id=test_customer_2"
        );
    }

    #[test]
    fn endpoint_without_customer_id_is_unchanged() {
        let config = ClientConfig::new("http://127.0.0.1:8080/ask?lang=en");
        let url = endpoint_url(&config).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/ask?lang=en");
    }

    #[test]
    fn invalid_endpoint_is_config_error() {
        let err = HttpAskClient::new(ClientConfig::new("not a url")).err().unwrap();
        assert!(matches!(err, AskError::Config(_)));
    }

    #[test]
    fn decode_json_body() {
        assert_eq!(decode_body(r#"{"answer":"x"}"#), json!({ "answer": "x" }));
        assert_eq!(decode_body(r#""quoted""#), json!("quoted"));
    }

    #[test]
    fn decode_plain_text_body() {
        assert_eq!(decode_body("just words"), json!("just words"));
        assert_eq!(decode_body(""), json!(""));
    }
}
