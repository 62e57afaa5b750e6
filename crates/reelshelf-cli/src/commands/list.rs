use crate::commands::{catalog_client, load_page};
use crate::output::{media_table, Output, OutputFormat};
use crate::ListCommands;
use color_eyre::Result;
use media_browse_config::Config;
use media_browse_core::WatchlistStore;
use media_browse_models::MediaKind;
use serde_json::json;

pub async fn run_list(
    cmd: ListCommands,
    config: &Config,
    store: &mut WatchlistStore,
    output: &Output,
) -> Result<()> {
    match cmd {
        ListCommands::Show => show(store, output),
        ListCommands::Add { kind, id } => add(config, store, kind, id, output).await,
        ListCommands::Remove { id } => remove(store, id, output),
    }
}

fn show(store: &WatchlistStore, output: &Output) -> Result<()> {
    match output.format() {
        OutputFormat::Human => {
            if store.is_empty() {
                output.info("Your list is empty. Add titles with 'reelshelf list add <kind> <id>'");
            } else {
                output.println(format!("{}", media_table(store.items())));
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({ "watchlist": store.items() }));
        }
    }
    Ok(())
}

async fn add(
    config: &Config,
    store: &mut WatchlistStore,
    kind: MediaKind,
    id: u64,
    output: &Output,
) -> Result<()> {
    if store.contains(id) {
        output.info(format!("Item {} is already in your list", id));
        return Ok(());
    }

    let catalog = catalog_client(config)?;
    let details = load_page(output, "details", || catalog.details(kind, id)).await?;
    let Some(details) = details else {
        // Failure state already rendered (not found or generic).
        return Ok(());
    };

    let record = details.into_record(kind);
    let title = record.display_title().to_string();
    store.add(record);
    output.success(format!("{} has been added to your list", title));
    Ok(())
}

fn remove(store: &mut WatchlistStore, id: u64, output: &Output) -> Result<()> {
    let title = store
        .items()
        .iter()
        .find(|item| item.id == id)
        .map(|item| item.display_title().to_string());

    match title {
        Some(title) => {
            store.remove(id);
            output.success(format!("{} has been removed from your list", title));
        }
        None => {
            output.info(format!("Item {} is not in your list", id));
        }
    }
    Ok(())
}
