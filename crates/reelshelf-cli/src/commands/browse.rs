use crate::commands::{catalog_client, load_page};
use crate::output::Output;
use color_eyre::Result;
use media_browse_config::Config;
use media_browse_core::{HomePage, MoviesPage, RecentPage, TvPage};
use media_browse_models::MediaRecord;

pub async fn run_home(config: &Config, output: &Output) -> Result<()> {
    let catalog = catalog_client(config)?;
    if let Some(page) = load_page(output, "home", || HomePage::load(&catalog)).await? {
        render_rows(output, page.rows());
    }
    Ok(())
}

pub async fn run_movies(config: &Config, output: &Output) -> Result<()> {
    let catalog = catalog_client(config)?;
    if let Some(page) = load_page(output, "movies", || MoviesPage::load(&catalog)).await? {
        render_rows(output, page.rows());
    }
    Ok(())
}

pub async fn run_tv(config: &Config, output: &Output) -> Result<()> {
    let catalog = catalog_client(config)?;
    if let Some(page) = load_page(output, "tv shows", || TvPage::load(&catalog)).await? {
        render_rows(output, page.rows());
    }
    Ok(())
}

pub async fn run_recent(config: &Config, output: &Output) -> Result<()> {
    let catalog = catalog_client(config)?;
    if let Some(page) = load_page(output, "recently added", || RecentPage::load(&catalog)).await? {
        render_rows(output, page.rows());
    }
    Ok(())
}

fn render_rows(output: &Output, rows: Vec<(&'static str, &[MediaRecord])>) {
    for (heading, records) in rows {
        output.media_row(heading, records);
    }
}
