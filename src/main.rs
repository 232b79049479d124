mod app;
mod cli;
mod clipboard;
mod config;
mod shorten;
mod ui;
mod utils;

use std::sync::Arc;
use std::sync::mpsc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use app::{AppState, SubmitDispatcher};
use cli::{Cli, Commands};
use config::Config;
use shorten::{GENERIC_ERROR_MESSAGE, ShortenService, bitly::BitlyClient};
use ui::theme::Theme;

fn main() -> Result<()> {
    // Silent unless RUST_LOG is set; the TUI owns the screen, so logs go
    // to stderr only when asked for.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let runtime = tokio::runtime::Runtime::new()?;
    let client = BitlyClient::new(config.api_url.clone(), config.access_token.clone());

    match cli.command {
        Some(Commands::Shorten { url, copy }) => {
            handle_shorten(&runtime, &client, &url, copy)?;
        }
        None => {
            // No command - launch TUI
            let theme = Theme::from_config(&config);
            let state = AppState::new(theme, config.status_message_secs);

            let (submit_tx, submit_rx) = mpsc::channel();
            let dispatcher =
                SubmitDispatcher::new(Arc::new(client), runtime.handle().clone(), submit_tx);

            ui::run_tui(state, dispatcher, submit_rx)?;
        }
    }

    Ok(())
}

fn handle_shorten(
    runtime: &tokio::runtime::Runtime,
    client: &BitlyClient,
    url: &str,
    copy: bool,
) -> Result<()> {
    match runtime.block_on(client.shorten(url)) {
        Ok(short) => {
            println!("{}", short.link);
            if copy {
                clipboard::copy_to_clipboard(&short.link)?;
                println!("✓ Copied to clipboard!");
            }
            Ok(())
        }
        Err(e) => {
            tracing::warn!(error = %e, "one-shot shorten failed");
            eprintln!("{GENERIC_ERROR_MESSAGE}");
            std::process::exit(1);
        }
    }
}
