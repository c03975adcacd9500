use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wax_listing::catalog::load_snapshot;
use wax_listing::config::{resolve_cli_path, AppConfig, CliConfig, FileConfig};
use wax_listing::listing::{
    ConcreteItem, DraftField, ListingSession, ListingStatus, MemoryListingSink, Quality,
    SelectionResolver,
};

fn parse_status(s: &str) -> Result<ListingStatus> {
    Ok(ListingStatus::parse(s)?)
}

fn parse_quality(s: &str) -> Result<Quality> {
    Ok(Quality::parse(s)?)
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the JSON catalog snapshot ({"artists": [...]}).
    #[clap(value_parser = resolve_cli_path)]
    pub snapshot: Option<PathBuf>,

    /// Path to a TOML config file. Values there override the command line.
    #[clap(long, value_parser = resolve_cli_path)]
    pub config: Option<PathBuf>,

    /// Only load and check the snapshot, then exit.
    #[clap(long)]
    pub check_only: bool,

    /// Id of the user creating the listing.
    #[clap(long)]
    pub seller_id: Option<u64>,

    /// Status new listings start with.
    #[clap(long, default_value = "available", value_parser = parse_status)]
    pub default_status: ListingStatus,

    /// Price new listings start with.
    #[clap(long, default_value_t = 0.0)]
    pub default_price: f64,

    #[clap(long)]
    pub artist: Option<u64>,

    #[clap(long)]
    pub album: Option<u64>,

    /// Release to select. Without --album the artist and album are inferred.
    #[clap(long)]
    pub release: Option<u64>,

    /// JSON file with a fully described item, skipping the cascading selection.
    #[clap(long, value_parser = resolve_cli_path)]
    pub item: Option<PathBuf>,

    #[clap(long)]
    pub price: Option<f64>,

    #[clap(long, value_parser = parse_quality)]
    pub quality: Option<Quality>,

    #[clap(long)]
    pub description: Option<String>,

    /// Submit the resulting draft to an in-memory sink and print the listing.
    #[clap(long)]
    pub submit: bool,
}

fn init_logging(log_level: Option<&str>) -> Result<()> {
    let filter = match log_level {
        Some(level) => EnvFilter::try_new(level)
            .with_context(|| format!("Invalid log level: {}", level))?,
        None => EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .with_env_var("LOG_LEVEL")
            .from_env_lossy(),
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };
    let log_level = file_config.as_ref().and_then(|c| c.log_level.clone());
    init_logging(log_level.as_deref())?;

    let cli_config = CliConfig {
        snapshot_path: cli_args.snapshot.clone(),
        seller_id: cli_args.seller_id,
        default_status: cli_args.default_status,
        default_price: cli_args.default_price,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    let snapshot = Arc::new(load_snapshot(&config.snapshot_path)?);
    if cli_args.check_only {
        return Ok(());
    }

    let mut resolver = SelectionResolver::with_snapshot(snapshot, config.draft_defaults);

    if let Some(path) = &cli_args.item {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read item file: {:?}", path))?;
        let item: ConcreteItem = serde_json::from_str(&text)
            .with_context(|| format!("Invalid item file: {:?}", path))?;
        info!("Binding draft to {} ({})", item.title(), item.subtitle());
        resolver.bind_to_concrete_item(item);
    } else {
        if cli_args.artist.is_some() {
            resolver.select_artist(cli_args.artist)?;
        }
        if cli_args.album.is_some() {
            resolver.select_album(cli_args.album)?;
        }
        if cli_args.release.is_some() {
            resolver.select_release(cli_args.release)?;
        }
    }

    if let Some(price) = cli_args.price {
        resolver.update_draft_field(DraftField::Price(price));
    }
    if let Some(quality) = cli_args.quality {
        resolver.update_draft_field(DraftField::Quality(Some(quality)));
    }
    if let Some(description) = cli_args.description {
        resolver.update_draft_field(DraftField::Description(description));
    }

    println!("{}", serde_json::to_string_pretty(&resolver.view())?);

    if cli_args.submit {
        let sink = Arc::new(MemoryListingSink::new());
        let mut session = ListingSession::new(resolver, sink);
        let listing = session.submit().await?;
        println!("{}", serde_json::to_string_pretty(&listing)?);
    }

    Ok(())
}
