use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while scraping, resolving, saving or reporting a video.
#[derive(Debug, Error)]
pub enum Error {
    #[error("browser session error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("yt-dlp error: {0}")]
    YoutubeDl(#[from] youtube_dl::Error),

    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),

    #[error("failed after {attempts} attempts, last status code: {status}")]
    RetriesExhausted { attempts: usize, status: u16 },

    #[error("invalid view count: {0:?}")]
    InvalidViewCount(String),

    #[error("no downloadable video url available")]
    NoDownloadableUrl,

    #[error("no .mp4 file found in {0}")]
    MissingVideo(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
