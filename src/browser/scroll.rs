use super::Session;
use crate::error::Result;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct ScrollSettings {
    /// Wait after each scroll before reading the height again
    pub settle: Duration,
    /// Extra wait before trusting an unchanged height
    pub grace: Duration,
    /// Stop after this many scrolls even if the page keeps growing
    pub max_rounds: Option<usize>,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            settle: Duration::from_secs(2),
            grace: Duration::from_secs(5),
            max_rounds: None,
        }
    }
}

/// Keep scrolling until the document height stays the same across both the
/// settle and the grace wait. Returns the number of scrolls performed.
pub async fn scroll_to_bottom<S: Session + ?Sized>(
    session: &S,
    settings: &ScrollSettings,
) -> Result<usize> {
    let mut last_height = session.scroll_height().await?;
    let mut rounds = 0;

    loop {
        if settings.max_rounds.is_some_and(|max| rounds >= max) {
            warn!(rounds, height = last_height, "Page kept growing, giving up on scrolling");
            return Ok(rounds);
        }

        session.scroll_to_end().await?;
        rounds += 1;
        sleep(settings.settle).await;

        let new_height = session.scroll_height().await?;
        if new_height != last_height {
            debug!(rounds, height = new_height, "Page grew");
            last_height = new_height;
            continue;
        }

        sleep(settings.grace).await;
        let latest_height = session.scroll_height().await?;
        if latest_height == new_height {
            debug!(rounds, height = latest_height, "Reached the bottom");
            return Ok(rounds);
        }
        last_height = latest_height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::mock::MockSession;

    fn instant(max_rounds: Option<usize>) -> ScrollSettings {
        ScrollSettings {
            settle: Duration::ZERO,
            grace: Duration::ZERO,
            max_rounds,
        }
    }

    #[tokio::test]
    async fn stops_once_height_is_stable_after_grace() {
        let session = MockSession::with_heights([100, 200, 200, 200]);

        let rounds = scroll_to_bottom(&session, &instant(None)).await.unwrap();

        assert_eq!(rounds, 2);
        assert_eq!(session.height_reads(), 4);
        assert_eq!(session.scrolls(), 2);
    }

    #[tokio::test]
    async fn late_growth_during_grace_keeps_scrolling() {
        // 300 shows up only after the grace wait
        let session = MockSession::with_heights([100, 100, 300, 300, 300]);

        let rounds = scroll_to_bottom(&session, &instant(None)).await.unwrap();

        assert_eq!(rounds, 2);
        assert_eq!(session.height_reads(), 5);
    }

    #[tokio::test]
    async fn max_rounds_bounds_an_ever_growing_page() {
        let session = MockSession::with_heights(1..=100);

        let rounds = scroll_to_bottom(&session, &instant(Some(3))).await.unwrap();

        assert_eq!(rounds, 3);
        assert_eq!(session.scrolls(), 3);
    }

    #[tokio::test]
    async fn session_faults_propagate() {
        let session = MockSession::with_heights([100]);

        assert!(scroll_to_bottom(&session, &instant(None)).await.is_err());
    }
}
