use super::{VideoDownloader, VIDEO_FILE_NAME};
use crate::error::{Error, Result};
use crate::model::VideoMetadata;
use crate::resolver::send_with_retries;
use async_trait::async_trait;
use reqwest::Client;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use tracing::debug;

/// First `.mp4` file directly inside `dir`, by name.
pub fn find_mp4(dir: &Path) -> Result<Option<PathBuf>> {
    let mut videos = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "mp4") {
            videos.push(path);
        }
    }
    videos.sort();
    Ok(videos.into_iter().next())
}

/// Fetches the resolved non-watermarked url straight over HTTP.
#[derive(Debug, Clone)]
pub struct DirectDownloader {
    client: Client,
    retry_count: usize,
}

impl DirectDownloader {
    pub fn new(client: Client, retry_count: usize) -> Self {
        Self {
            client,
            retry_count,
        }
    }
}

#[async_trait]
impl VideoDownloader for DirectDownloader {
    async fn download(&self, record: &VideoMetadata, dest: &Path) -> Result<PathBuf> {
        let url = record.downloadable_video_url.as_str();
        if url.is_empty() {
            return Err(Error::NoDownloadableUrl);
        }

        debug!(url = %url, "Downloading video");
        let response = send_with_retries(self.retry_count, || self.client.get(url)).await?;
        let video_bytes = response.bytes().await?;

        let mut video_file = NamedTempFile::new_in(dest)?;
        video_file.write_all(&video_bytes)?;
        video_file.as_file().sync_all()?;

        let video_path = dest.join(VIDEO_FILE_NAME);
        video_file
            .persist(&video_path)
            .map_err(|error| Error::Io(error.error))?;

        Ok(video_path)
    }
}
