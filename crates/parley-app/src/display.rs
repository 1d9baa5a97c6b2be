//! Terminal formatting of turns and the empty-transcript view.

use parley_config::schema::AssistantConfig;
use parley_session::markup::render_plain;
use parley_session::{Role, Turn};

/// Format one turn for the terminal. User turns are shown verbatim.
pub fn format_turn(turn: &Turn, assistant_name: &str) -> String {
    match turn.role() {
        Role::User => format!("you: {}", turn.content()),
        Role::Assistant => {
            let text = render_plain(turn.content());
            if text.contains('\n') {
                format!("{assistant_name}:\n{text}")
            } else {
                format!("{assistant_name}: {text}")
            }
        }
    }
}

/// Greeting and numbered starter prompts shown before the first turn.
pub fn format_welcome(assistant: &AssistantConfig) -> String {
    let mut out = format!("{}\n{}", assistant.name, assistant.greeting);
    if !assistant.starter_prompts.is_empty() {
        out.push_str("\n\n");
        out.push_str(&format_prompts(&assistant.starter_prompts));
    }
    out
}

pub fn format_prompts(prompts: &[String]) -> String {
    prompts
        .iter()
        .enumerate()
        .map(|(i, p)| format!("  [{}] {p}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
