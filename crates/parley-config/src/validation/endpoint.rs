//! Validation for the `[endpoint]` section.

use regex::Regex;

use crate::schema::ParleyConfig;

use super::helpers::validate_range;

const URL_PATTERN: &str = r"^https?://[^\s/?#]+[^\s]*$";
const CUSTOMER_ID_PATTERN: &str = r"^[A-Za-z0-9_\-]+$";

pub(crate) fn validate_endpoint(errors: &mut Vec<String>, config: &ParleyConfig) {
    let endpoint = &config.endpoint;

    if endpoint.url.trim().is_empty() {
        errors.push("endpoint.url is empty".into());
    } else if !matches_pattern(URL_PATTERN, &endpoint.url) {
        errors.push(format!(
            "endpoint.url = {:?} is not an http(s) URL",
            endpoint.url
        ));
    }

    if let Some(ref customer_id) = endpoint.customer_id {
        if !matches_pattern(CUSTOMER_ID_PATTERN, customer_id) {
            errors.push(format!(
                "endpoint.customer_id = {customer_id:?} must be letters, digits, '_' or '-'"
            ));
        }
    }

    validate_range(
        errors,
        "endpoint.connect_timeout_secs",
        endpoint.connect_timeout_secs,
        1,
        60,
    );
    validate_range(
        errors,
        "endpoint.request_timeout_secs",
        endpoint.request_timeout_secs,
        1,
        600,
    );
}

fn matches_pattern(pattern: &str, value: &str) -> bool {
    Regex::new(pattern)
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}
