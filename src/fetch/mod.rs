mod drive;

use std::io::Read;

use log::debug;

use crate::error::FetchError;

pub use drive::{drive_download_url, drive_file_id, resolve_remote};

/// Downloads the raw bytes behind a URL.
///
/// This is the only way the loader reaches the network, so tests can swap in
/// an in-memory implementation.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        (**self).fetch(url)
    }
}

/// Blocking HTTP fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().redirects(8).build(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.agent.get(url).call().map_err(|e| match e {
            ureq::Error::Status(code, _) => FetchError::Status(code),
            ureq::Error::Transport(t) => FetchError::Transport(t.to_string()),
        })?;

        // Drive serves an HTML page instead of the file on quota or
        // confirmation interstitials.
        let content_type = response.content_type().to_string();
        if content_type == "text/html" {
            return Err(FetchError::UnexpectedContent(content_type));
        }

        let mut body = Vec::new();
        response.into_reader().read_to_end(&mut body)?;
        debug!("fetched {} bytes from {url}", body.len());
        Ok(body)
    }
}
