use crate::error::Result;
use crate::model::VideoMetadata;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

mod handler;
mod utils;

pub use handler::YtDlpDownloader;
pub use utils::DirectDownloader;

/// File name every saved video ends up with
pub const VIDEO_FILE_NAME: &str = "video.mp4";

/// Fetches the media of a video into a given folder.
#[async_trait]
pub trait VideoDownloader: Send + Sync {
    /// Download into `dest` and return the path of the file written there.
    async fn download(&self, record: &VideoMetadata, dest: &Path) -> Result<PathBuf>;
}
