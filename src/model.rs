use serde::Serialize;
use std::fmt;

/// Everything collected about a single scraped video
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoMetadata {
    /// Label of the scraping run that found this video
    pub job_title: String,
    /// Public URL of the video
    pub video_url: String,
    /// Caption shown for the video
    pub video_title: String,
    /// Public URL of the creator's profile
    pub creator_url: String,
    /// Link, email and phone (in that order) found on the creator page
    pub creator_contact_info: Vec<String>,
    /// Direct media URL without watermark, empty if it could not be resolved
    pub downloadable_video_url: String,
}

impl VideoMetadata {
    pub fn contact_info_joined(&self) -> String {
        self.creator_contact_info.join(", ")
    }
}

impl fmt::Display for VideoMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "job_title: {}", self.job_title)?;
        writeln!(f, "video_url: {}", self.video_url)?;
        writeln!(f, "video_title: {}", self.video_title)?;
        writeln!(f, "creator_url: {}", self.creator_url)?;
        writeln!(f, "creator_contact_info: {}", self.contact_info_joined())?;
        writeln!(f, "downloadable_video_url: {}", self.downloadable_video_url)
    }
}

/// A video tile discovered on a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoEntry {
    pub video_url: String,
    pub video_title: String,
    /// View count as displayed, e.g. "1.2M" or "532"
    pub view_count: String,
}

/// Filters applied to every discovered video
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conditions {
    pub min_view_count: Option<u64>,
}
