use crate::browser::{
    contact::get_contact_info,
    scroll::{scroll_to_bottom, ScrollSettings},
    Session,
};
use crate::error::Result;
use crate::filter::check_conditions;
use crate::model::{Conditions, VideoEntry, VideoMetadata};
use crate::resolver::Resolver;
use crate::spreadsheet::SpreadsheetReporter;
use crate::storage::{Persister, SaveOutcome};
use crate::utils::creator_url_from_video_url;
use std::collections::HashMap;
use tracing::{debug, error, info, warn};

/// Counters for a single listing page run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobSummary {
    pub discovered: usize,
    pub filtered: usize,
    pub saved: usize,
    pub skipped_existing: usize,
    pub reported: usize,
    pub failed: usize,
}

pub struct Scraper<S: Session> {
    session: S,
    resolver: Resolver,
    reporter: Option<SpreadsheetReporter>,
    persister: Persister,
    conditions: Conditions,
    scroll: ScrollSettings,
    contacts: HashMap<String, Vec<String>>,
}

impl<S: Session> Scraper<S> {
    pub fn new(
        session: S,
        resolver: Resolver,
        reporter: Option<SpreadsheetReporter>,
        persister: Persister,
        conditions: Conditions,
        scroll: ScrollSettings,
    ) -> Self {
        Self {
            session,
            resolver,
            reporter,
            persister,
            conditions,
            scroll,
            contacts: HashMap::new(),
        }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// Scrape every qualifying video of one listing page (creator, search or hashtag).
    ///
    /// Enrichment, saving and reporting failures are logged and the run goes on;
    /// browser faults and unreadable view counts abort it.
    pub async fn run(&mut self, job_title: &str, listing_url: &str) -> Result<JobSummary> {
        info!(job = %job_title, url = %listing_url, "Starting job");

        self.session.goto(listing_url).await?;
        let rounds = scroll_to_bottom(&self.session, &self.scroll).await?;
        let entries = self.session.video_entries().await?;
        info!(rounds, videos = entries.len(), "Listing page fully loaded");

        let mut summary = JobSummary {
            discovered: entries.len(),
            ..Default::default()
        };

        for entry in entries {
            if !check_conditions(&entry.view_count, &self.conditions)? {
                debug!(url = %entry.video_url, views = %entry.view_count, "Filtered out");
                summary.filtered += 1;
                continue;
            }

            let record = self.build_record(job_title, entry).await;
            self.process(&record, &mut summary).await;
        }

        info!(job = %job_title, summary = ?summary, "Job finished");
        Ok(summary)
    }

    async fn build_record(&mut self, job_title: &str, entry: VideoEntry) -> VideoMetadata {
        let creator_url = creator_url_from_video_url(&entry.video_url).unwrap_or_default();
        let creator_contact_info = self.contact_info(&creator_url).await;
        let downloadable_video_url = self.resolver.get_downloadable_url(&entry.video_url).await;

        VideoMetadata {
            job_title: job_title.to_string(),
            video_url: entry.video_url,
            video_title: entry.video_title,
            creator_url,
            creator_contact_info,
            downloadable_video_url,
        }
    }

    async fn contact_info(&mut self, creator_url: &str) -> Vec<String> {
        if creator_url.is_empty() {
            return Vec::new();
        }
        if let Some(cached) = self.contacts.get(creator_url) {
            return cached.clone();
        }

        let contact_info = match get_contact_info(&self.session, creator_url).await {
            Ok(contact_info) => contact_info,
            Err(error) => {
                warn!(creator_url = %creator_url, error = %error, "Error getting contact info");
                Vec::new()
            }
        };

        self.contacts
            .insert(creator_url.to_string(), contact_info.clone());
        contact_info
    }

    async fn process(&self, record: &VideoMetadata, summary: &mut JobSummary) {
        match self.persister.save_video(record).await {
            Ok(SaveOutcome::Saved { .. }) => summary.saved += 1,
            Ok(SaveOutcome::AlreadyExists(_)) => summary.skipped_existing += 1,
            Err(error) => {
                error!(url = %record.video_url, error = %error, "Error saving files");
                summary.failed += 1;
            }
        }

        if let Some(reporter) = &self.reporter {
            match reporter.add_to_spreadsheet(record).await {
                Ok(()) => summary.reported += 1,
                Err(error) => {
                    error!(url = %record.video_url, error = %error, "Error adding to spreadsheet")
                }
            }
        }
    }
}
