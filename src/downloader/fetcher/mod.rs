//! Transports behind [`FileDownloader`](super::FileDownloader).

mod ureq_fetcher;

use super::{FileDownloader, Response};

pub use ureq_fetcher::UReqFetcher;


#[cfg(test)]
pub(crate) use mock_fetcher::MockFetcher;
