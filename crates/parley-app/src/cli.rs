use std::path::PathBuf;

use clap::Parser;

/// Parley, a terminal client for a conversational question-answering service.
#[derive(Parser, Debug)]
#[command(name = "parley", version, about)]
pub struct Args {
    /// Ask a single question, print the reply, and exit.
    pub question: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Endpoint URL override.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Customer id override.
    #[arg(long)]
    pub customer_id: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
