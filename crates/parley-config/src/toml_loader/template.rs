//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Parley Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[endpoint]
# url = "https://bharatai-appengine-caaxhrhbghb2brf3.centralindia-01.azurewebsites.net/ask"
# customer_id = "test_customer_2"
# connect_timeout_secs = 10     # 1-60
# request_timeout_secs = 120    # 1-600

[assistant]
# name = "BharatAI"
# greeting = "What can I help with?"
# starter_prompts = [         # at most 8
#   "Help me draft a response to a difficult client email",
#   "Create a launch plan for our new feature",
# ]

[logging]
# level = "INFO"                # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
