use crate::commands::is_interactive;
use crate::output::{Output, OutputFormat};
use crate::ConfigCommands;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use media_browse_config::{Config, PathManager};
use media_browse_gateway::DEFAULT_BASE_URL;
use serde_json::json;

pub fn run_config(cmd: ConfigCommands, paths: &PathManager, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show { full } => show(paths, full, output),
        ConfigCommands::Set { api_key, base_url } => set(paths, api_key, base_url, output),
    }
}

fn show(paths: &PathManager, full: bool, output: &Output) -> Result<()> {
    let config = Config::load_with_env(&paths.config_file()).map_err(|e| eyre!("{}", e))?;

    let api_key = if full {
        config.tmdb.api_key.clone()
    } else {
        config.masked_api_key()
    };
    let base_url = config
        .tmdb
        .base_url
        .clone()
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    match output.format() {
        OutputFormat::Human => {
            output.println(format!("Config file: {}", paths.config_file().display()));
            output.println(format!("API key:     {}", api_key));
            output.println(format!("Base URL:    {}", base_url));
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "config_file": paths.config_file(),
                "api_key": api_key,
                "base_url": base_url,
            }));
        }
    }
    Ok(())
}

fn set(
    paths: &PathManager,
    api_key: Option<String>,
    base_url: Option<String>,
    output: &Output,
) -> Result<()> {
    // Edit the file only; environment overrides stay where they are.
    let mut config = Config::load(&paths.config_file()).map_err(|e| eyre!("{}", e))?;

    let api_key = match api_key {
        Some(key) => Some(key),
        None if base_url.is_none() && is_interactive(output) => {
            Some(rpassword::prompt_password("Catalog API key: ")?)
        }
        None => None,
    };

    if api_key.is_none() && base_url.is_none() {
        output.warn("Nothing to set. Use --api-key and/or --base-url");
        return Ok(());
    }

    config.apply_overrides(api_key, base_url);

    paths.ensure_directories().map_err(|e| eyre!("{}", e))?;
    config
        .save(&paths.config_file())
        .map_err(|e| eyre!("{}", e))?;
    output.success(format!(
        "Configuration saved to {}",
        paths.config_file().display()
    ));
    Ok(())
}
