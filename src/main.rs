use clap::Parser;
use jobboard::catalog::Catalog;
use jobboard::config::{Config, Layout, OutputFormat};
use jobboard::render::{BoardRenderer, CardRenderer, HomepageCard, ListingCard};
use jobboard::sources::{JobSource, JsonFileSource, SeedSource};
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn render_html<R: CardRenderer>(cards: R, catalog: &Catalog) -> anyhow::Result<String> {
    Ok(BoardRenderer::new(cards).render(catalog, chrono::Utc::now())?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jobboard=info")),
        )
        .init();

    let config = Config::parse();
    let settings = config.settings();

    let source: Box<dyn JobSource> = match &config.seed_file {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(SeedSource::with_latency(config.latency())),
    };
    let mut catalog = Catalog::load(source.as_ref(), &settings).await?;

    let criteria = config.criteria();
    if !criteria.is_empty() {
        if config.has_search() {
            tracing::warn!("Both filters and search terms given; filters replace the search");
        }
        catalog.apply_filters(&criteria);
    } else if config.has_search() {
        catalog.search(&config.keyword, &config.location);
    }

    if config.page != 1 && catalog.go_to_page(config.page).is_empty() {
        tracing::warn!(
            "Page {} is out of range ({} pages), showing page {}",
            config.page,
            catalog.total_pages(),
            catalog.current_page()
        );
    }

    let output = match config.format {
        OutputFormat::Json => serde_json::to_string_pretty(&json!({
            "page": catalog.page_info(),
            "jobs": catalog.get_page(None),
        }))?,
        OutputFormat::Html => match config.layout {
            Layout::Listing => render_html(ListingCard, &catalog)?,
            Layout::Homepage => render_html(HomepageCard, &catalog)?,
        },
    };
    println!("{output}");

    Ok(())
}
