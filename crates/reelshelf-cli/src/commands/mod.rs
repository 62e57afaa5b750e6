pub mod browse;
pub mod clear;
pub mod config;
pub mod list;
pub mod lookup;

use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use media_browse_config::Config;
use media_browse_gateway::{GatewayError, TmdbClient};
use std::future::Future;
use std::io::IsTerminal;
use std::time::Duration;
use tracing::warn;

/// Build the catalog client, refusing to proceed without an API key.
pub fn catalog_client(config: &Config) -> Result<TmdbClient> {
    if !config.has_api_key() {
        return Err(color_eyre::eyre::eyre!(
            "No API key configured. Run 'reelshelf config set' or set the API_KEY environment variable"
        ));
    }
    Ok(TmdbClient::new(
        config.tmdb.api_key.clone(),
        config.tmdb.base_url.clone(),
    ))
}

/// Whether we can ask the user questions (retry prompts, confirmations).
pub fn is_interactive(output: &Output) -> bool {
    output.format() == OutputFormat::Human
        && !output.is_quiet()
        && std::io::stdin().is_terminal()
}

/// Load one page batch, with a manual retry that re-issues the whole
/// batch. Any single failed request fails the page; there is no
/// partial rendering. A `NotFound` gets its own state instead of the
/// generic failure-and-retry path.
///
/// Each attempt takes a fresh token so only the newest attempt's
/// result is accepted. Attempts here are awaited one at a time, so no
/// token actually goes stale at this call site; the check keeps the
/// accept path uniform for callers that overlap attempts, which is
/// what the coordinator's own tests exercise.
pub async fn load_page<T, F, Fut>(output: &Output, name: &str, load: F) -> Result<Option<T>>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, GatewayError>>,
{
    let coordinator = media_browse_core::FetchCoordinator::new();
    loop {
        let token = coordinator.begin();
        let spinner = start_spinner(output, name);
        let result = load().await;
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        match result {
            Ok(page) => {
                if let Some(page) = coordinator.accept(&token, page) {
                    return Ok(Some(page));
                }
            }
            Err(e) if e.is_not_found() => {
                output.error("Content not found");
                return Ok(None);
            }
            Err(e) => {
                warn!("Failed to load {}: {}", name, e);
                output.error("Failed to load content. Please try again.");
                let retry = is_interactive(output)
                    && Confirm::new()
                        .with_prompt("Retry?")
                        .default(true)
                        .interact()
                        .unwrap_or(false);
                if !retry {
                    return Ok(None);
                }
            }
        }
    }
}

fn start_spinner(output: &Output, name: &str) -> Option<ProgressBar> {
    if output.format() != OutputFormat::Human || output.is_quiet() {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(format!("Loading {}...", name));
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}
