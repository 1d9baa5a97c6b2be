//! Validation for the `[assistant]` section.

use crate::schema::{ParleyConfig, MAX_STARTER_PROMPTS};

pub(crate) fn validate_assistant(errors: &mut Vec<String>, config: &ParleyConfig) {
    let assistant = &config.assistant;

    if assistant.name.trim().is_empty() {
        errors.push("assistant.name is empty".into());
    }

    if assistant.starter_prompts.len() > MAX_STARTER_PROMPTS {
        errors.push(format!(
            "assistant.starter_prompts has {} entries, at most {MAX_STARTER_PROMPTS} allowed",
            assistant.starter_prompts.len()
        ));
    }

    for (i, prompt) in assistant.starter_prompts.iter().enumerate() {
        if prompt.trim().is_empty() {
            errors.push(format!("assistant.starter_prompts[{i}] is blank"));
        }
    }
}
