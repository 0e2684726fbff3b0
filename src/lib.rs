pub mod batch;
pub mod config;
pub mod downloader;
pub mod logging;

pub use batch::{run_batch, FetchResult};
pub use config::{AssetRequest, FetchConfig};
pub use downloader::{
    ensure_output_dir, DownloadError, Downloader, FileDownloader, Response, UReqFetcher,
};
