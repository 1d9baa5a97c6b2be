mod chat;
mod cli;
mod command;
mod display;
mod export;
mod wiring;

use std::process::ExitCode;

use parley_session::SubmitOutcome;
use tracing_subscriber::EnvFilter;

fn init_logging(directive: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "parley=info".parse().expect("static directive")),
            ),
        )
        .init();
}

/// Bare levels like `debug` are scoped to our crates.
fn log_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("parley={level}")
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    // Config first so its logging level can seed the subscriber.
    let loaded = parley_config::load_config_from(args.config.as_deref());
    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => log_directive(level),
        (None, Ok(config)) => config.logging.level.directive().to_string(),
        (None, Err(_)) => "parley=info".to_string(),
    };
    init_logging(&directive);

    tracing::info!("Parley v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match wiring::resolve_config(loaded, &args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("parley: {e}");
            return ExitCode::from(2);
        }
    };
    tracing::info!(endpoint = %config.endpoint.url, "Config loaded");

    if args.print_config {
        println!("{}", parley_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    let client = match wiring::build_client(&config.endpoint) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("parley: {e}");
            return ExitCode::from(2);
        }
    };

    let mut app = chat::ChatApp::new(config, client);

    if let Some(ref question) = args.question {
        return match app.ask_once(question).await {
            SubmitOutcome::Succeeded => ExitCode::SUCCESS,
            SubmitOutcome::Failed => ExitCode::FAILURE,
            SubmitOutcome::Ignored(_) => {
                eprintln!("parley: question is empty");
                ExitCode::from(2)
            }
        };
    }

    if let Err(e) = app.run().await {
        tracing::error!("Session error: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_level_is_scoped() {
        assert_eq!(log_directive("debug"), "parley=debug");
    }

    #[test]
    fn full_directive_is_kept() {
        assert_eq!(log_directive("parley_session=trace"), "parley_session=trace");
    }
}
