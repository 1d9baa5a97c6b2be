//! Presentation text for the assistant.

use serde::{Deserialize, Serialize};

/// Maximum number of starter prompts shown on an empty transcript.
pub const MAX_STARTER_PROMPTS: usize = 8;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Display name used as the assistant's label.
    pub name: String,
    /// Shown once before the first turn of every session.
    pub greeting: String,
    /// Suggested questions the user can pick instead of typing.
    pub starter_prompts: Vec<String>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: "BharatAI".into(),
            greeting: "What can I help with?".into(),
            starter_prompts: vec![
                "Help me draft a response to a difficult client email".into(),
                "Create a launch plan for our new feature".into(),
                "Analyze this quarterly report data".into(),
                "Write a blog post about AI trends".into(),
            ],
        }
    }
}
