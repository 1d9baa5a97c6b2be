//! Interactive terminal session and one-shot mode.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use parley_config::ParleyConfig;
use parley_session::{AskClient, IgnoreReason, SessionController, SubmitOutcome};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::command::{Command, HELP};
use crate::display::{format_prompts, format_turn, format_welcome};
use crate::export::{default_export_path, export_transcript};
use crate::wiring::new_controller;

/// How often the typing indicator ticks while a reply is awaited.
const INDICATOR_INTERVAL: Duration = Duration::from_millis(400);

/// Terminal front end. Reads the controller only through its public API.
pub struct ChatApp {
    config: ParleyConfig,
    client: Arc<dyn AskClient>,
    controller: SessionController,
    /// Number of turns already written to stdout.
    shown: usize,
}

impl ChatApp {
    pub fn new(config: ParleyConfig, client: Arc<dyn AskClient>) -> Self {
        let controller = new_controller(Arc::clone(&client), &config.endpoint);
        Self {
            config,
            client,
            controller,
            shown: 0,
        }
    }

    /// Ask one question and print the reply.
    pub async fn ask_once(&mut self, question: &str) -> SubmitOutcome {
        let outcome = self.send(question).await;
        self.print_new_turns();
        outcome
    }

    /// Read lines from stdin until EOF or `/quit`.
    pub async fn run(&mut self) -> parley_common::Result<()> {
        println!("{}", format_welcome(&self.config.assistant));
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            match Command::parse(&line) {
                Command::Quit => break,
                Command::Ask(text) => {
                    self.send(&text).await;
                    self.print_new_turns();
                }
                Command::UsePrompt(n) => match self.config.assistant.starter_prompts.get(n - 1) {
                    Some(prompt) => {
                        let prompt = prompt.clone();
                        println!("you: {prompt}");
                        self.send(&prompt).await;
                        self.print_new_turns();
                    }
                    None => println!("no starter prompt {n}"),
                },
                Command::ListPrompts => {
                    println!("{}", format_prompts(&self.config.assistant.starter_prompts))
                }
                Command::NewSession => self.new_session(),
                Command::Export(path) => self.export(path),
                Command::Help => println!("{HELP}"),
                Command::Unknown(word) => println!("unknown command {word}, try /help"),
            }
        }

        info!(turns = self.controller.snapshot().len(), "session ended");
        Ok(())
    }

    async fn send(&self, text: &str) -> SubmitOutcome {
        let submit = self.controller.submit(text);
        tokio::pin!(submit);

        let mut ticker = tokio::time::interval(INDICATOR_INTERVAL);
        ticker.tick().await;
        let mut ticking = false;

        let outcome = loop {
            tokio::select! {
                outcome = &mut submit => break outcome,
                _ = ticker.tick() => {
                    if self.controller.awaiting_reply() {
                        eprint!(".");
                        ticking = true;
                    }
                }
            }
        };
        if ticking {
            eprintln!();
        }

        if let SubmitOutcome::Ignored(reason) = outcome {
            debug!(?reason, "input not sent");
            if reason == IgnoreReason::AwaitingReply {
                println!("still waiting for the previous reply");
            }
        }
        outcome
    }

    /// Print assistant turns appended since the last call.
    fn print_new_turns(&mut self) {
        let snapshot = self.controller.snapshot();
        let name = &self.config.assistant.name;
        for turn in snapshot.iter().skip(self.shown) {
            if turn.role() == parley_session::Role::Assistant {
                println!("{}\n", format_turn(turn, name));
            }
        }
        self.shown = snapshot.len();
    }

    fn new_session(&mut self) {
        self.controller = new_controller(Arc::clone(&self.client), &self.config.endpoint);
        self.shown = 0;
        info!("started a new session");
        println!("{}", format_welcome(&self.config.assistant));
    }

    fn export(&self, path: Option<PathBuf>) {
        let path = path.unwrap_or_else(default_export_path);
        match export_transcript(&self.controller.snapshot(), &self.config.assistant.name, &path) {
            Ok(path) => println!("saved {}", path.display()),
            Err(e) => println!("{e}"),
        }
    }
}
