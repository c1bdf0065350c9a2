use crate::error::{Error, Result};
use crate::model::VideoMetadata;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::debug;

/// One spreadsheet row, sent as form fields
#[derive(Debug, Serialize)]
struct SpreadsheetRow<'a> {
    job_title: &'a str,
    video_url: &'a str,
    video_title: &'a str,
    creator_url: &'a str,
    creator_contact_info: String,
    downloadable_video_url: &'a str,
}

impl<'a> From<&'a VideoMetadata> for SpreadsheetRow<'a> {
    fn from(record: &'a VideoMetadata) -> Self {
        Self {
            job_title: &record.job_title,
            video_url: &record.video_url,
            video_title: &record.video_title,
            creator_url: &record.creator_url,
            creator_contact_info: record.contact_info_joined(),
            downloadable_video_url: &record.downloadable_video_url,
        }
    }
}

/// Mirrors scraped records to a remote spreadsheet script.
#[derive(Debug, Clone)]
pub struct SpreadsheetReporter {
    client: Client,
    endpoint: String,
}

impl SpreadsheetReporter {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub async fn add_to_spreadsheet(&self, record: &VideoMetadata) -> Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .form(&SpreadsheetRow::from(record))
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(Error::UnexpectedStatus(response.status().as_u16()));
        }

        debug!(url = %record.video_url, "Added to spreadsheet");
        Ok(())
    }
}
