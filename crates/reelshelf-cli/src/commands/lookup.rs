use crate::commands::{catalog_client, load_page};
use crate::output::{Output, OutputFormat};
use chrono::NaiveDate;
use color_eyre::Result;
use comfy_table::{presets::UTF8_BORDERS_ONLY, Table};
use media_browse_config::Config;
use media_browse_core::TitlePage;
use media_browse_gateway::{DiscoverParams, TimeWindow, TrendingKind};
use media_browse_models::MediaKind;
use owo_colors::OwoColorize;
use serde_json::json;

pub async fn run_details(
    config: &Config,
    kind: MediaKind,
    id: u64,
    output: &Output,
) -> Result<()> {
    let catalog = catalog_client(config)?;
    let page = load_page(output, "details", || TitlePage::load(&catalog, kind, id)).await?;
    if let Some(page) = page {
        render_title(output, &page);
    }
    Ok(())
}

pub async fn run_search(config: &Config, query: &str, output: &Output) -> Result<()> {
    let catalog = catalog_client(config)?;
    let results = load_page(output, "search results", || catalog.search_multi(query)).await?;
    if let Some(results) = results {
        if results.is_empty() {
            output.info(format!("No results for '{}'", query));
        } else {
            output.media_row(&format!("Results for '{}'", query), &results);
        }
    }
    Ok(())
}

pub async fn run_discover(
    config: &Config,
    kind: MediaKind,
    genre: Option<u64>,
    sort_by: Option<String>,
    after: Option<NaiveDate>,
    before: Option<NaiveDate>,
    output: &Output,
) -> Result<()> {
    let catalog = catalog_client(config)?;

    let mut params = DiscoverParams::new();
    params.with_genres = genre;
    params.sort_by = sort_by;
    params.released_after = after;
    params.released_before = before;

    let results = load_page(output, "discover results", || {
        catalog.discover(kind, &params)
    })
    .await?;
    if let Some(results) = results {
        output.media_row(&format!("Discover ({})", kind), &results);
    }
    Ok(())
}

pub async fn run_trending(
    config: &Config,
    kind: TrendingKind,
    window: TimeWindow,
    output: &Output,
) -> Result<()> {
    let catalog = catalog_client(config)?;
    let results = load_page(output, "trending", || catalog.trending(kind, window)).await?;
    if let Some(results) = results {
        let heading = format!("Trending {} ({})", kind.as_str(), window.as_str());
        output.media_row(&heading, &results);
    }
    Ok(())
}

pub async fn run_genres(config: &Config, kind: MediaKind, output: &Output) -> Result<()> {
    let catalog = catalog_client(config)?;
    let genres = match kind {
        MediaKind::Movie => load_page(output, "genres", || catalog.movie_genres()).await?,
        MediaKind::Tv => load_page(output, "genres", || catalog.tv_genres()).await?,
    };

    let Some(genres) = genres else {
        return Ok(());
    };

    match output.format() {
        OutputFormat::Human => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            table.set_header(["Id", "Name"]);
            for genre in &genres {
                table.add_row([genre.id.to_string(), genre.name.clone()]);
            }
            output.println(format!("{}", table));
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({ "genres": genres }));
        }
    }
    Ok(())
}

fn render_title(output: &Output, page: &TitlePage) {
    match output.format() {
        OutputFormat::Human => {
            let details = &page.details;
            let mut heading = details.display_title().to_string();
            if let Some(year) = details.year() {
                heading.push_str(&format!(" ({})", year));
            }
            output.println(format!("{}", heading.bold()));

            if let Some(rating) = details.vote_average {
                output.println(format!("Rating: {:.1}/10", rating));
            }
            if let Some(runtime) = details.runtime {
                output.println(format!("Runtime: {}h {}m", runtime / 60, runtime % 60));
            }
            if let Some(seasons) = details.number_of_seasons {
                let episodes = details.number_of_episodes.unwrap_or(0);
                output.println(format!("Seasons: {} ({} episodes)", seasons, episodes));
            }
            if !details.genres.is_empty() {
                let names: Vec<&str> = details.genres.iter().map(|g| g.name.as_str()).collect();
                output.println(format!("Genres: {}", names.join(", ")));
            }
            if let Some(tagline) = details.tagline.as_deref().filter(|t| !t.is_empty()) {
                output.println(format!("{}", tagline.italic()));
            }
            if let Some(overview) = details.overview.as_deref() {
                output.println(format!("\n{}", overview));
            }
            if let Some(director) = page.credits.director() {
                output.println(format!("\nDirector: {}", director.name));
            }

            let cast = page.credits.top_cast(10);
            if !cast.is_empty() {
                let mut table = Table::new();
                table.load_preset(UTF8_BORDERS_ONLY);
                table.set_header(["Actor", "Role"]);
                for member in cast {
                    table.add_row([
                        member.name.clone(),
                        member.character.clone().unwrap_or_default(),
                    ]);
                }
                output.println(format!("\nCast\n{}", table));
            }

            if !details.production_companies.is_empty() {
                let names: Vec<&str> = details
                    .production_companies
                    .iter()
                    .take(3)
                    .map(|c| c.name.as_str())
                    .collect();
                output.println(format!("\nProduction: {}", names.join(", ")));
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "kind": page.kind,
                "details": page.details,
                "credits": page.credits,
            }));
        }
    }
}
