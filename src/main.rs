use anyhow::{anyhow, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use video_list_client::binding::{self, BindingCommand, BindingResponse, HELP_TEXT};
use video_list_client::{
    Config, ConfirmOutcome, FetchOutcome, HttpVideoBackend, LogNotifier, PaginatedListController,
    StaticTokenStore, VideoBackend,
};

#[derive(Parser)]
#[command(name = "video-list")]
#[command(version, about = "Browse the paginated video list of the streaming API")]
struct Cli {
    /// Configuration file (defaults to ./video-list.toml or ./config/video-list.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL of the streaming API
    #[arg(long)]
    base_url: Option<String>,

    /// Session token sent as x-access-token
    #[arg(long)]
    token: Option<String>,

    /// Initial page size
    #[arg(short, long)]
    limit: Option<u32>,

    /// Initial page number
    #[arg(short, long)]
    page: Option<u32>,

    /// Print the first page and exit
    #[arg(long)]
    once: bool,

    /// Enable debug logging (takes precedence over RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

const DEFAULT_LOG_LEVEL: &str = "info";

/// Filter directives for the subscriber: `--verbose`, then `RUST_LOG`,
/// then `VIDEO_LIST_LOG_LEVEL`, then `info`.
fn log_directives(verbose: bool, rust_log: Option<String>, log_level: Option<String>) -> String {
    let crate_filter = |level: &str| format!("video_list_client={level},video_list={level},warn");

    if verbose {
        return crate_filter("debug");
    }
    if let Some(directives) = rust_log.filter(|d| !d.trim().is_empty()) {
        return directives;
    }
    let level = log_level
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    crate_filter(&level)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let directives = log_directives(
        cli.verbose,
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        std::env::var("VIDEO_LIST_LOG_LEVEL").ok(),
    );
    let (filter, filter_error) = match EnvFilter::try_new(&directives) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(log_directives(false, None, None)), Some(e)),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
    if let Some(e) = filter_error {
        warn!("Ignoring invalid log filter '{}': {}", directives, e);
    }

    let mut config = match &cli.config {
        Some(path) => {
            let mut config = Config::load_from(path)?;
            config.apply_env()?;
            config
        }
        None => Config::load()?,
    };

    if let Some(base_url) = cli.base_url {
        config.backend.base_url = base_url;
    }
    if let Some(token) = cli.token {
        config.session.access_token = Some(token);
    }
    if let Some(limit) = cli.limit {
        config.pagination.default_limit = limit;
    }
    if let Some(page) = cli.page {
        config.pagination.default_page = page;
    }

    config.validate()?;
    debug!("{}", config.summary());

    let tokens = Arc::new(StaticTokenStore::new(config.session.access_token.clone()));
    let backend = HttpVideoBackend::new(&config.backend, tokens)?;
    info!("🚀 Video list client connected to {}", backend.base_url());

    let initial = config.pagination.initial_selection()?;
    let mut controller = PaginatedListController::new(backend, LogNotifier, initial);

    let outcome = controller.load_initial().await;
    print_view(&controller);

    if cli.once {
        return match outcome {
            FetchOutcome::Rendered { .. } => Ok(()),
            FetchOutcome::Failed(reason) => Err(anyhow!("Failed to load video list: {}", reason)),
        };
    }

    println!("{}", HELP_TEXT);
    run_interactive(&mut controller).await
}

/// Read commands from stdin until `quit` or end of input.
async fn run_interactive<B: VideoBackend>(
    controller: &mut PaginatedListController<B, LogNotifier>,
) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<BindingCommand>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match binding::dispatch(controller, command).await {
            Ok(BindingResponse::Staged(selection)) => println!("Staged {}", selection),
            // The notifier already reported "no changes".
            Ok(BindingResponse::Confirmed(ConfirmOutcome::Unchanged)) => {}
            Ok(BindingResponse::Confirmed(ConfirmOutcome::Failed(reason))) => {
                warn!("Fetch failed: {}", reason);
                print_view(controller);
            }
            Ok(BindingResponse::Confirmed(ConfirmOutcome::Committed(_))) | Ok(BindingResponse::Show) => {
                print_view(controller)
            }
            Ok(BindingResponse::Help) => println!("{}", HELP_TEXT),
            Ok(BindingResponse::Quit) => break,
            Err(e) => println!("{}", e),
        }
    }

    info!("👋 Bye");
    Ok(())
}

fn print_view<B: VideoBackend>(controller: &PaginatedListController<B, LogNotifier>) {
    println!("{}", controller.view());
    if controller.has_pending_changes() {
        println!("(staged: {}, type 'go' to load)", controller.pending());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_wins_over_rust_log() {
        let directives = log_directives(true, Some("warn".to_string()), Some("error".to_string()));
        assert_eq!(directives, "video_list_client=debug,video_list=debug,warn");
    }

    #[test]
    fn test_rust_log_wins_over_log_level() {
        let directives = log_directives(false, Some("reqwest=trace".to_string()), Some("error".to_string()));
        assert_eq!(directives, "reqwest=trace");
    }

    #[test]
    fn test_log_level_fallbacks() {
        assert_eq!(
            log_directives(false, None, Some("warn".to_string())),
            "video_list_client=warn,video_list=warn,warn"
        );
        assert_eq!(
            log_directives(false, Some("  ".to_string()), None),
            "video_list_client=info,video_list=info,warn"
        );
    }
}
