use crate::error::{Error, Result};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use tracing::{error, info, warn};

pub const DEFAULT_PROXY_ENDPOINT: &str = "https://tiktok-dl.akalankanime11.workers.dev/";
pub const DEFAULT_RETRY_COUNT: usize = 10;

#[derive(Debug, Deserialize)]
struct ProxyResponse {
    non_watermarked_url: String,
}

/// Send the request built by `make`, retrying up to `retry_count` more times
/// while the status is not 200. Transport errors are returned right away.
pub(crate) async fn send_with_retries<F>(retry_count: usize, mut make: F) -> Result<Response>
where
    F: FnMut() -> RequestBuilder,
{
    let attempts = retry_count + 1;
    let mut status = StatusCode::OK;

    for attempt in 0..attempts {
        if attempt > 0 {
            info!("Retry #{}", attempt);
        }

        let response = make().send().await?;
        if response.status() == StatusCode::OK {
            return Ok(response);
        }

        status = response.status();
        warn!(status = %status, attempt = attempt + 1, "Request was not successful");
    }

    Err(Error::RetriesExhausted {
        attempts,
        status: status.as_u16(),
    })
}

/// Turns public video page urls into direct, non-watermarked media urls
/// through the download proxy.
#[derive(Debug, Clone)]
pub struct Resolver {
    client: Client,
    endpoint: String,
    retry_count: usize,
}

impl Resolver {
    pub fn new(client: Client, endpoint: impl Into<String>, retry_count: usize) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            retry_count,
        }
    }

    pub async fn resolve(&self, video_url: &str) -> Result<String> {
        let response = send_with_retries(self.retry_count, || {
            self.client.get(&self.endpoint).query(&[("url", video_url)])
        })
        .await?;

        let body: ProxyResponse = response.json().await?;
        Ok(body.non_watermarked_url)
    }

    /// Like [`Resolver::resolve`], but any failure is logged and becomes an empty string.
    pub async fn get_downloadable_url(&self, video_url: &str) -> String {
        match self.resolve(video_url).await {
            Ok(url) => url,
            Err(error) => {
                error!(url = %video_url, error = %error, "Failed to resolve downloadable url");
                String::new()
            }
        }
    }
}
