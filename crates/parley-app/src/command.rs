//! Parsing of interactive input lines.

use std::path::PathBuf;

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Plain text to send to the assistant.
    Ask(String),
    /// Submit the n-th starter prompt (1-based).
    UsePrompt(usize),
    ListPrompts,
    NewSession,
    Export(Option<PathBuf>),
    Help,
    Quit,
    /// A `/word` that is not a known command.
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Command::Ask(line.to_string());
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        match name {
            "quit" | "exit" | "q" => Command::Quit,
            "new" => Command::NewSession,
            "prompts" => Command::ListPrompts,
            "help" | "?" => Command::Help,
            "export" if arg.is_empty() => Command::Export(None),
            "export" => Command::Export(Some(PathBuf::from(arg))),
            "use" => match arg.parse::<usize>() {
                Ok(n) if n > 0 => Command::UsePrompt(n),
                _ => Command::Unknown(trimmed.to_string()),
            },
            _ => Command::Unknown(trimmed.to_string()),
        }
    }
}

pub const HELP: &str = "\
Commands:
  /prompts        list starter prompts
  /use <n>        ask starter prompt n
  /new            start a new conversation
  /export [path]  save the conversation as HTML
  /help           show this help
  /quit           exit";
