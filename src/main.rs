//! DocDash CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use docdash::cli::{
    app::{load_merged_config, run_command, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use docdash::domain::config::AppConfig;
use docdash::infrastructure::XdgConfigStore;

/// Environment variable holding the log filter
const LOG_ENV: &str = "DOCDASH_LOG";

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let presenter = Presenter::new();

    if let Commands::Config { action } = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args (clap already folded in the env vars)
    let cli_config = AppConfig {
        base_url: cli.base_url.map(|url| url.trim_end_matches('/').to_string()),
        csrf_token: cli.csrf_token,
        session_cookie: cli.session_cookie,
        session_file: cli.session_file,
        timeout_secs: None,
    };

    let config = load_merged_config(cli_config).await;
    run_command(cli.command, config).await
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
