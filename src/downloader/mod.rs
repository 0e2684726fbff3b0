mod fetcher;

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

use crate::config::FetchConfig;

pub use fetcher::UReqFetcher;

#[cfg(test)]
pub(crate) use fetcher::MockFetcher;

#[derive(Debug)]
pub enum Response {
    Ok(Vec<u8>),
    Status(u16),
    TimedOut,
    NetworkError(String),
    InvalidBody(String),
}

impl Response {
    pub fn ok(body: Vec<u8>) -> Self {
        Self::Ok(body)
    }

    pub fn status(code: u16) -> Self {
        Self::Status(code)
    }

    pub fn timed_out() -> Self {
        Self::TimedOut
    }

    pub fn network_error(detail: impl Into<String>) -> Self {
        Self::NetworkError(detail.into())
    }

    pub fn invalid_body(detail: impl Into<String>) -> Self {
        Self::InvalidBody(detail.into())
    }
}

/// Transport seam: performs one GET and hands back the whole body.
pub trait FileDownloader {
    fn fetch(&self, url: &str) -> Response;
}

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("timed out")]
    Timeout,

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("invalid body: {0}")]
    InvalidBody(String),

    #[error("filesystem error: {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub struct Downloader<T: FileDownloader> {
    fetcher: T,
}

impl<T> Downloader<T>
where
    T: FileDownloader,
{
    pub fn with_fetcher(fetcher: T) -> Self {
        Downloader { fetcher }
    }

    /// Fetches `url` and writes the body to `destination`, replacing any previous
    /// content. Returns the number of bytes written.
    pub fn fetch(&self, url: &str, destination: &Path) -> Result<u64, DownloadError> {
        let url = Url::parse(url).map_err(|e| DownloadError::InvalidUrl(e.to_string()))?;

        tracing::debug!(url = %url, "requesting");

        let body = match self.fetcher.fetch(url.as_str()) {
            Response::Ok(body) if body.is_empty() => {
                return Err(DownloadError::InvalidBody("empty response body".to_string()))
            }
            Response::Ok(body) => body,
            Response::Status(code) => return Err(DownloadError::Status(code)),
            Response::TimedOut => return Err(DownloadError::Timeout),
            Response::NetworkError(detail) => return Err(DownloadError::Network(detail)),
            Response::InvalidBody(detail) => return Err(DownloadError::InvalidBody(detail)),
        };

        tracing::debug!(bytes = body.len(), path = %destination.display(), "writing");

        Self::write_file(destination, &body).map_err(|source| DownloadError::Filesystem {
            path: destination.to_path_buf(),
            source,
        })?;

        Ok(body.len() as u64)
    }

    fn write_file(path: &Path, body: &[u8]) -> io::Result<()> {
        // `File::create` truncates; the handle is closed when it leaves scope.
        let mut file = File::create(path)?;
        file.write_all(body)?;
        file.flush()
    }
}

/// Creates `dir` and any missing parents.
pub fn ensure_output_dir(dir: &Path) -> Result<(), DownloadError> {
    fs::create_dir_all(dir).map_err(|source| DownloadError::Filesystem {
        path: dir.to_path_buf(),
        source,
    })
}

impl Downloader<UReqFetcher> {
    pub fn new(config: &FetchConfig) -> Self {
        let fetcher = UReqFetcher::new(&config.user_agent, config.timeout);
        Downloader::with_fetcher(fetcher)
    }
}
