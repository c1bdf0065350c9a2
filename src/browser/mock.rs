use super::{model::CreatorHeader, Session};
use crate::error::{Error, Result};
use crate::model::VideoEntry;
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::io;
use std::sync::Mutex;

fn session_fault(what: &str) -> Error {
    Error::Io(io::Error::new(io::ErrorKind::Other, what.to_string()))
}

/// In-memory browser session for tests
#[derive(Default)]
pub struct MockSession {
    heights: Mutex<VecDeque<i64>>,
    height_reads: Mutex<usize>,
    scrolls: Mutex<usize>,
    visited: Mutex<Vec<String>>,
    headers: HashMap<String, CreatorHeader>,
    entries: Vec<VideoEntry>,
}

impl MockSession {
    pub fn with_heights(heights: impl IntoIterator<Item = i64>) -> Self {
        Self {
            heights: Mutex::new(heights.into_iter().collect()),
            ..Default::default()
        }
    }

    pub fn with_header(mut self, creator_url: &str, header: CreatorHeader) -> Self {
        self.headers.insert(creator_url.to_string(), header);
        self
    }

    pub fn with_entries(mut self, entries: Vec<VideoEntry>) -> Self {
        self.entries = entries;
        self
    }

    pub fn height_reads(&self) -> usize {
        *self.height_reads.lock().unwrap()
    }

    pub fn scrolls(&self) -> usize {
        *self.scrolls.lock().unwrap()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }

    fn current_url(&self) -> Option<String> {
        self.visited.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Session for MockSession {
    async fn goto(&self, url: &str) -> Result<()> {
        self.visited.lock().unwrap().push(url.to_string());
        Ok(())
    }

    async fn scroll_height(&self) -> Result<i64> {
        *self.height_reads.lock().unwrap() += 1;
        self.heights
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| session_fault("no more heights"))
    }

    async fn scroll_to_end(&self) -> Result<()> {
        *self.scrolls.lock().unwrap() += 1;
        Ok(())
    }

    async fn creator_header(&self) -> Result<CreatorHeader> {
        self.current_url()
            .and_then(|url| self.headers.get(&url).cloned())
            .ok_or_else(|| session_fault("header not found"))
    }

    async fn video_entries(&self) -> Result<Vec<VideoEntry>> {
        Ok(self.entries.clone())
    }
}
