//! Probe client
//!
//! Issues the probe request to the target site and fetches status images
//! from the image source, filling the cache on a miss.

use std::time::Duration;

use bytes::Bytes;
use tracing::{debug, info, instrument};
use url::Url;

use crate::cache::ImageCache;
use crate::config::Config;
use crate::error::Result;
use crate::probe::normalize_target;

/// Outbound side of the relay.
#[derive(Debug, Clone)]
pub struct StatusProbe {
    http_client: reqwest::Client,
    /// Image source base, without trailing slash
    image_base: String,
}

impl StatusProbe {
    /// Creates a probe fetching images from `image_base`.
    pub fn new(http_client: reqwest::Client, image_base: impl Into<String>) -> Self {
        let image_base = image_base.into().trim_end_matches('/').to_string();
        Self {
            http_client,
            image_base,
        }
    }

    /// Builds the HTTP client and probe from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self::new(builder.build()?, config.image_source_url.clone()))
    }

    /// URL of the image for `code`.
    pub fn image_url(&self, code: u16) -> String {
        format!("{}/images/{}.jpg", self.image_base, code)
    }

    /// GETs `url` and returns the response status code; the body is discarded.
    #[instrument(skip(self, url), fields(url = %url))]
    pub async fn probe_status(&self, url: &Url) -> Result<u16> {
        let response = self.http_client.get(url.clone()).send().await?;
        let code = response.status().as_u16();

        debug!(code, "probe answered");
        Ok(code)
    }

    /// Downloads the image for `code`. A non-success reply is an error.
    #[instrument(skip(self))]
    pub async fn fetch_image(&self, code: u16) -> Result<Bytes> {
        let response = self
            .http_client
            .get(self.image_url(code))
            .send()
            .await?
            .error_for_status()?;

        Ok(response.bytes().await?)
    }

    /// Probes `raw_url` and returns the image for the status it answered with.
    ///
    /// On a miss the image is fetched and stored. Concurrent misses for the
    /// same code each fetch and store; the last write wins.
    pub async fn resolve(&self, cache: &ImageCache, raw_url: &str) -> Result<(u16, Bytes)> {
        let target = normalize_target(raw_url)?;
        let code = self.probe_status(&target).await?;

        if let Some(image) = cache.lookup(code).await {
            return Ok((code, image));
        }

        let image = self.fetch_image(code).await?;
        info!(code, bytes = image.len(), "caching status image");
        cache.put(code, image.clone()).await;

        Ok((code, image))
    }
}
