use crate::error::Result;
use crate::model::VideoMetadata;
use crate::utils::{creator_name, sanitize};
use crate::yt_dlp::{VideoDownloader, VIDEO_FILE_NAME};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

pub const DEFAULT_OUTPUT_DIR: &str = "videos";
const METADATA_FILE_NAME: &str = "metadata.txt";

/// What happened to the video file of a saved record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoFile {
    Downloaded(PathBuf),
    /// No downloader configured
    Skipped,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved { folder: PathBuf, video: VideoFile },
    /// The folder was already there, nothing was written
    AlreadyExists(PathBuf),
}

/// Writes each record to `<root>/<job>/<creator>-<title>/`.
pub struct Persister {
    root: PathBuf,
    downloader: Option<Box<dyn VideoDownloader>>,
}

impl Persister {
    pub fn new(root: impl Into<PathBuf>, downloader: Option<Box<dyn VideoDownloader>>) -> Self {
        Self {
            root: root.into(),
            downloader,
        }
    }

    pub fn folder_for(&self, record: &VideoMetadata) -> PathBuf {
        let folder_name = format!(
            "{}-{}",
            creator_name(&record.creator_url),
            sanitize(&record.video_title)
        );
        self.root.join(sanitize(&record.job_title)).join(folder_name)
    }

    pub async fn save_video(&self, record: &VideoMetadata) -> Result<SaveOutcome> {
        let folder = self.folder_for(record);
        if folder.exists() {
            debug!(folder = ?folder, "Already saved, skipping");
            return Ok(SaveOutcome::AlreadyExists(folder));
        }

        fs::create_dir_all(&folder)?;
        fs::write(folder.join(METADATA_FILE_NAME), record.to_string().as_bytes())?;

        let video = match &self.downloader {
            Some(downloader) => self.fetch_video(downloader.as_ref(), record, &folder).await,
            None => VideoFile::Skipped,
        };

        info!(folder = ?folder, video = ?video, "Saved video");
        Ok(SaveOutcome::Saved { folder, video })
    }

    async fn fetch_video(
        &self,
        downloader: &dyn VideoDownloader,
        record: &VideoMetadata,
        folder: &Path,
    ) -> VideoFile {
        let downloaded = match downloader.download(record, folder).await {
            Ok(path) => path,
            Err(error) => {
                error!(url = %record.video_url, error = %error, "Failed to download video");
                return VideoFile::Failed(error.to_string());
            }
        };

        let video_path = folder.join(VIDEO_FILE_NAME);
        if downloaded != video_path {
            if let Err(error) = fs::rename(&downloaded, &video_path) {
                error!(from = ?downloaded, error = %error, "Failed to move downloaded video");
                return VideoFile::Failed(error.to_string());
            }
        }

        VideoFile::Downloaded(video_path)
    }
}
