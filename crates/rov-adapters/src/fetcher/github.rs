//! Remote template download from GitHub's tarball endpoint.

use std::io::Cursor;
use std::path::Path;

use async_trait::async_trait;
use flate2::read::GzDecoder;
use tracing::{debug, info};

use rov_core::{
    application::{ApplicationError, ports::TemplateFetcher},
    domain::TemplateLocation,
    error::{Context, RovError, RovResult},
};

use super::archive::unpack_stripped;

const USER_AGENT: &str = concat!("create-rust-on-vercel/", env!("CARGO_PKG_VERSION"));

/// Downloads `owner/repo` at a git reference as a gzip tarball and unpacks
/// it without the archive's top-level folder.
#[derive(Debug, Clone)]
pub struct GithubTarballFetcher {
    location: TemplateLocation,
    client: reqwest::Client,
}

impl GithubTarballFetcher {
    pub fn new(location: TemplateLocation) -> RovResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { location, client })
    }

    fn failed(&self, reason: impl Into<String>) -> RovError {
        ApplicationError::FetchFailed {
            source_desc: self.describe(),
            reason: reason.into(),
        }
        .into()
    }

    async fn download(&self) -> RovResult<Vec<u8>> {
        let url = self.location.tarball_url();
        debug!(%url, "downloading template");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.failed(format!("Failed to download from {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.failed(format!("Download failed with status: {status}")));
        }

        let data = response
            .bytes()
            .await
            .map_err(|e| self.failed(format!("Failed to read response bytes: {e}")))?;

        Ok(data.to_vec())
    }
}

#[async_trait]
impl TemplateFetcher for GithubTarballFetcher {
    fn describe(&self) -> String {
        format!("github:{}", self.location)
    }

    async fn fetch(&self, destination: &Path) -> RovResult<()> {
        let data = self.download().await?;
        debug!(bytes = data.len(), "template archive downloaded");

        let dest = destination.to_path_buf();
        let files = tokio::task::spawn_blocking(move || {
            unpack_stripped(GzDecoder::new(Cursor::new(data)), &dest)
        })
        .await
        .context("Extraction task failed")?
        .map_err(|e| self.failed(e.to_string()))?;

        info!(files, destination = %destination.display(), "template unpacked");
        Ok(())
    }
}
