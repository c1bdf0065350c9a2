use super::{utils::find_mp4, VideoDownloader, VIDEO_FILE_NAME};
use crate::error::{Error, Result};
use crate::model::VideoMetadata;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, error};
use youtube_dl::YoutubeDl;

/// Downloads through the yt-dlp executable.
#[derive(Debug, Clone, Default)]
pub struct YtDlpDownloader {
    /// Path of the yt-dlp binary, looked up on PATH when unset
    pub executable: Option<PathBuf>,
}

#[async_trait]
impl VideoDownloader for YtDlpDownloader {
    async fn download(&self, record: &VideoMetadata, dest: &Path) -> Result<PathBuf> {
        let mut command = YoutubeDl::new(record.video_url.clone());
        command
            .format("mp4")
            .output_template("video.%(ext)s")
            .socket_timeout("15");
        if let Some(executable) = &self.executable {
            command.youtube_dl_path(executable);
        }

        if let Err(error) = command.download_to_async(dest).await {
            error!(url = %record.video_url, error = %error, "yt-dlp failed to download video");
            return Err(error.into());
        }

        let expected = dest.join(VIDEO_FILE_NAME);
        if expected.is_file() {
            return Ok(expected);
        }

        // yt-dlp may fall back to a different name if mp4 is not offered as is
        match find_mp4(dest)? {
            Some(path) => {
                debug!(path = ?path, "Found downloaded video");
                Ok(path)
            }
            None => Err(Error::MissingVideo(dest.to_path_buf())),
        }
    }
}
