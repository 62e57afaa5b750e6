use crate::commands::is_interactive;
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use dialoguer::Confirm;
use media_browse_config::PathManager;
use std::fs;

pub fn run_clear(watchlist: bool, yes: bool, paths: &PathManager, output: &Output) -> Result<()> {
    if !watchlist {
        output.warn("No clear option specified. Use --watchlist");
        output.println("\nExample: reelshelf clear --watchlist");
        return Ok(());
    }

    let watchlist_file = paths.watchlist_file();
    if !watchlist_file.exists() {
        output.info("No watchlist found to clear");
        return Ok(());
    }

    if !yes {
        if !is_interactive(output) {
            return Err(eyre!("Refusing to clear without confirmation; pass --yes"));
        }
        let confirmed = Confirm::new()
            .with_prompt("Clear your entire watchlist?")
            .default(false)
            .interact()?;
        if !confirmed {
            output.info("Aborted");
            return Ok(());
        }
    }

    fs::remove_file(&watchlist_file).map_err(|e| {
        eyre!(
            "Failed to remove watchlist at {}: {}",
            watchlist_file.display(),
            e
        )
    })?;
    output.success(format!("Cleared watchlist: {}", watchlist_file.display()));
    Ok(())
}
