#[deny(clippy::all)]
use clap::Parser;
use config::{Args, DownloaderKind};
use dotenv::dotenv;
use resolver::Resolver;
use scraper::Scraper;
use spreadsheet::SpreadsheetReporter;
use storage::Persister;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use yt_dlp::{DirectDownloader, VideoDownloader, YtDlpDownloader};

mod browser;
mod config;
mod error;
mod filter;
mod model;
mod resolver;
mod scraper;
mod spreadsheet;
mod storage;
#[cfg(test)]
mod test_utils;
mod utils;
mod yt_dlp;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenv().ok(); // This line loads the environment variables from the ".env" file.
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let client = reqwest::Client::new();

    let downloader: Option<Box<dyn VideoDownloader>> = match args.downloader {
        DownloaderKind::YtDlp => Some(Box::new(YtDlpDownloader {
            executable: args.yt_dlp_path.clone(),
        })),
        DownloaderKind::Direct => Some(Box::new(DirectDownloader::new(
            client.clone(),
            args.retry_count,
        ))),
        DownloaderKind::None => None,
    };

    let driver = browser::selenium(&args.chrome_driver_endpoint, args.headless).await?;
    let mut scraper = Scraper::new(
        driver,
        Resolver::new(client.clone(), args.proxy_endpoint.clone(), args.retry_count),
        args.spreadsheet_endpoint
            .as_ref()
            .map(|endpoint| SpreadsheetReporter::new(client.clone(), endpoint.clone())),
        Persister::new(args.output_dir.clone(), downloader),
        args.conditions(),
        args.scroll_settings(),
    );

    let mut result = Ok(());
    for url in &args.urls {
        match scraper.run(&args.job_title, url).await {
            Ok(summary) => info!(url = %url, saved = summary.saved, "Listing page done"),
            Err(e) => {
                error!(url = %url, error = %e, "Job aborted");
                result = Err(e);
                break;
            }
        }
    }

    _ = scraper.session().clone().quit().await;
    Ok(result?)
}
