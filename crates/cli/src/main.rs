// ABOUTME: CLI for browsing the upstream catalog through the playfeed client.
// ABOUTME: Fetches the catalog or one title's details and prints JSON or a short text listing.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use playfeed_client::options::{DEFAULT_BASE_URL, DEFAULT_CATALOG_PATH, DEFAULT_DETAILS_PATH_PREFIX};
use playfeed_client::{Client, Details, Fallback, FetchError, Summary};
use playfeed_normalize::{format_duration, normalize_path};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Exit status used when the user interrupts a request.
const EXIT_CANCELED: u8 = 130;

/// Fetch the media catalog or a title's details and print them.
#[derive(Parser, Debug)]
#[command(name = "playfeed")]
#[command(about = "Fetch and normalize the media catalog", long_about = None)]
struct Cli {
    #[command(flatten)]
    endpoint: EndpointArgs,

    /// Output compact JSON instead of pretty.
    #[arg(long, global = true, default_value_t = false, conflicts_with = "text")]
    compact: bool,

    /// Print a human-readable listing instead of JSON.
    #[arg(long, global = true, default_value_t = false)]
    text: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct EndpointArgs {
    /// Origin of the content API.
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Catalog feed path.
    #[arg(long, global = true, default_value = DEFAULT_CATALOG_PATH)]
    catalog_path: String,

    /// Prefix for detail lookups.
    #[arg(long, global = true, default_value = DEFAULT_DETAILS_PATH_PREFIX)]
    details_prefix: String,

    /// Request timeout in seconds.
    #[arg(long, global = true, default_value_t = 30)]
    timeout_secs: u64,

    /// Extra request header as KEY:VALUE. May be repeated.
    #[arg(long = "header", global = true, value_parser = parse_header)]
    headers: Vec<(String, String)>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every title in the catalog feed.
    Catalog,
    /// Show the details of one title.
    Details {
        /// Title path or url, as listed in the catalog.
        path: String,

        /// Title to report if the detail document does not name one.
        #[arg(long)]
        title: Option<String>,
    },
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected KEY:VALUE, got {raw:?}"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty header name in {raw:?}"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_client(args: &EndpointArgs) -> Result<Client> {
    let mut builder = Client::builder()
        .base_url(&args.base_url)
        .catalog_path(&args.catalog_path)
        .details_path_prefix(&args.details_prefix)
        .timeout(Duration::from_secs(args.timeout_secs));
    for (key, value) in &args.headers {
        builder = builder.header(key, value);
    }
    builder.build().context("invalid client configuration")
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    match run(&cli, &cancel).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if is_canceled(&err) => {
            debug!("interrupted before the request completed");
            ExitCode::from(EXIT_CANCELED)
        }
        Err(err) => {
            eprintln!("playfeed: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn is_canceled(err: &anyhow::Error) -> bool {
    err.downcast_ref::<FetchError>()
        .is_some_and(FetchError::is_canceled)
}

async fn run(cli: &Cli, cancel: &CancellationToken) -> Result<()> {
    let client = build_client(&cli.endpoint)?;

    match &cli.command {
        Command::Catalog => {
            let catalog = client.fetch_catalog(cancel).await?;
            if cli.text {
                print_catalog(&catalog);
                Ok(())
            } else {
                print_json(&catalog, cli.compact)
            }
        }
        Command::Details { path, title } => {
            let seed = title.as_ref().map(|title| Summary {
                id: normalize_path(path),
                title: title.clone(),
                url: normalize_path(path),
                image_url: None,
            });
            let details = client
                .fetch_details(path, cancel, Fallback::from(seed.as_ref()))
                .await?;
            if cli.text {
                print_details(&details);
                Ok(())
            } else {
                print_json(&details, cli.compact)
            }
        }
    }
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{rendered}");
    Ok(())
}

fn print_catalog(catalog: &[Summary]) {
    for summary in catalog {
        println!("{}\t{}", summary.url, summary.title);
    }
}

fn print_details(details: &Details) {
    println!("{}", details.title());
    println!("path: {}", details.url());
    if let Some(image) = details.image_url() {
        println!("image: {image}");
    }
    match (details.duration_seconds, details.raw_duration.as_deref()) {
        (Some(seconds), _) => println!("duration: {}", format_duration(seconds)),
        (None, Some(raw)) => println!("duration: {raw}"),
        (None, None) => {}
    }
    if let Some(description) = &details.description {
        println!();
        println!("{description}");
    }
}
