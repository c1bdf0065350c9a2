use crate::browser::scroll::ScrollSettings;
use crate::model::Conditions;
use crate::resolver::{DEFAULT_PROXY_ENDPOINT, DEFAULT_RETRY_COUNT};
use crate::storage::DEFAULT_OUTPUT_DIR;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DownloaderKind {
    /// Let yt-dlp fetch the video page
    YtDlp,
    /// Fetch the resolved non-watermarked url directly
    Direct,
    /// Only write metadata
    None,
}

/// Scrape short videos from creator, search or hashtag pages
#[derive(Debug, Parser)]
#[command(name = "tiktok-scraper", version)]
pub struct Args {
    /// Label for this run, used to group the output folders
    #[arg(long, env = "JOB_TITLE")]
    pub job_title: String,

    /// Listing pages to scrape, one after another
    #[arg(required = true)]
    pub urls: Vec<String>,

    /// Only keep videos with at least this many views (no videos are kept when unset)
    #[arg(long, env = "MIN_VIEW_COUNT")]
    pub min_view_count: Option<u64>,

    #[arg(long, env = "CHROME_DRIVER_ENDPOINT", default_value = "http://localhost:9515")]
    pub chrome_driver_endpoint: String,

    /// Run chrome without a window
    #[arg(long, env = "HEADLESS")]
    pub headless: bool,

    #[arg(long, env = "DOWNLOAD_PROXY_ENDPOINT", default_value = DEFAULT_PROXY_ENDPOINT)]
    pub proxy_endpoint: String,

    /// Spreadsheet script receiving every record, reporting is off when unset
    #[arg(long, env = "SPREADSHEET_ENDPOINT")]
    pub spreadsheet_endpoint: Option<String>,

    /// Extra attempts after a failed proxy or media request
    #[arg(long, env = "RETRY_COUNT", default_value_t = DEFAULT_RETRY_COUNT)]
    pub retry_count: usize,

    #[arg(long, env = "OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = DownloaderKind::YtDlp)]
    pub downloader: DownloaderKind,

    #[arg(long, env = "YT_DLP_PATH")]
    pub yt_dlp_path: Option<PathBuf>,

    /// Give up scrolling a listing page after this many scrolls
    #[arg(long, env = "SCROLL_MAX_ROUNDS")]
    pub scroll_max_rounds: Option<usize>,
}

impl Args {
    pub fn conditions(&self) -> Conditions {
        Conditions {
            min_view_count: self.min_view_count,
        }
    }

    pub fn scroll_settings(&self) -> ScrollSettings {
        ScrollSettings {
            max_rounds: self.scroll_max_rounds,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_tool() {
        let args = Args::try_parse_from(["tiktok-scraper", "--job-title", "food", "https://www.tiktok.com/tag/food"])
            .unwrap();

        assert_eq!(args.retry_count, 10);
        assert_eq!(args.output_dir, PathBuf::from("videos"));
        assert_eq!(args.downloader, DownloaderKind::YtDlp);
        assert_eq!(args.proxy_endpoint, DEFAULT_PROXY_ENDPOINT);
        assert_eq!(args.scroll_settings().max_rounds, None);
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "tiktok-scraper",
            "--job-title",
            "food",
            "--min-view-count",
            "5000",
            "--downloader",
            "direct",
            "--scroll-max-rounds",
            "40",
            "https://a",
            "https://b",
        ])
        .unwrap();

        assert_eq!(args.conditions().min_view_count, Some(5000));
        assert_eq!(args.downloader, DownloaderKind::Direct);
        assert_eq!(args.scroll_settings().max_rounds, Some(40));
        assert_eq!(args.urls, vec!["https://a", "https://b"]);
    }
}
