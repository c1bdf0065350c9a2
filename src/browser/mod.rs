use crate::error::Result;
use crate::model::VideoEntry;
use async_trait::async_trait;
use thirtyfour::{ChromiumLikeCapabilities, DesiredCapabilities, WebDriver};
use tracing::info;

pub mod contact;
mod handler;
#[cfg(test)]
pub mod mock;
pub mod model;
pub mod scroll;

use model::CreatorHeader;

/// The subset of browser automation the scraper relies on.
#[async_trait]
pub trait Session: Send + Sync {
    async fn goto(&self, url: &str) -> Result<()>;

    /// Current `document.body.scrollHeight`
    async fn scroll_height(&self) -> Result<i64>;

    /// Scroll the window to the current bottom of the document
    async fn scroll_to_end(&self) -> Result<()>;

    /// Bio text and first outbound link of the creator page currently open
    async fn creator_header(&self) -> Result<CreatorHeader>;

    /// Video tiles rendered on the listing page currently open
    async fn video_entries(&self) -> Result<Vec<VideoEntry>>;
}

pub async fn selenium(endpoint: &str, headless: bool) -> Result<WebDriver> {
    let mut caps = DesiredCapabilities::chrome();
    if headless {
        caps.set_headless()?;
    }

    let web_driver = WebDriver::new(endpoint, caps).await?;
    info!(endpoint = %endpoint, headless, "Browser session created");

    Ok(web_driver)
}
