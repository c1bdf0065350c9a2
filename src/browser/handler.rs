use super::{model::CreatorHeader, Session};
use crate::error::Result;
use crate::model::VideoEntry;
use async_trait::async_trait;
use thirtyfour::prelude::*;
use tracing::debug;

const HEADER_CONTAINER: &str = "//div[contains(@class, 'CreatorPageHeaderTextContainer')]";
const HEADER_BIO: &str = ".//h2[@data-e2e='user-bio']";
const HEADER_LINKS: &str = "./div/a";
const VIDEO_ITEMS: &str = "//div[@data-e2e='user-post-item' or @data-e2e='search_top-item' or @data-e2e='challenge-item']";

#[async_trait]
impl Session for WebDriver {
    async fn goto(&self, url: &str) -> Result<()> {
        (**self).goto(url).await?;
        Ok(())
    }

    async fn scroll_height(&self) -> Result<i64> {
        let ret = self
            .execute("return document.body.scrollHeight", Vec::new())
            .await?;
        Ok(ret.convert::<i64>()?)
    }

    async fn scroll_to_end(&self) -> Result<()> {
        self.execute("window.scrollTo(0, document.body.scrollHeight);", Vec::new())
            .await?;
        Ok(())
    }

    async fn creator_header(&self) -> Result<CreatorHeader> {
        let container = self.find(By::XPath(HEADER_CONTAINER)).await?;
        let bio = container.find(By::XPath(HEADER_BIO)).await?.text().await?;

        let links = container.find_all(By::XPath(HEADER_LINKS)).await?;
        let link = match links.first() {
            Some(link) => link.attr("href").await?,
            None => None,
        };

        Ok(CreatorHeader { bio, link })
    }

    async fn video_entries(&self) -> Result<Vec<VideoEntry>> {
        let items = self.find_all(By::XPath(VIDEO_ITEMS)).await?;
        debug!(count = items.len(), "Found video items");

        let mut entries = Vec::with_capacity(items.len());
        for item in items {
            let video_url = match item.find_all(By::XPath(".//a[@href]")).await?.first() {
                Some(anchor) => anchor.attr("href").await?.unwrap_or_default(),
                None => continue,
            };

            let video_title = match item.find_all(By::XPath(".//img[@alt]")).await?.first() {
                Some(img) => img.attr("alt").await?.unwrap_or_default(),
                None => String::new(),
            };

            let view_count = match item
                .find_all(By::XPath(".//strong[@data-e2e='video-views']"))
                .await?
                .first()
            {
                Some(views) => views.text().await?,
                None => String::new(),
            };

            entries.push(VideoEntry {
                video_url,
                video_title,
                view_count,
            });
        }

        Ok(entries)
    }
}
