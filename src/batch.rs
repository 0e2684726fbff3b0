//! Sequential batch over the configured assets with per-item failure isolation.

use std::fmt;
use std::io::{self, Write};

use itertools::Itertools;

use crate::config::FetchConfig;
use crate::downloader::{ensure_output_dir, DownloadError, Downloader, FileDownloader};

#[derive(Debug)]
pub struct FetchResult {
    pub name: String,
    pub outcome: Result<u64, DownloadError>,
}

impl FetchResult {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

impl fmt::Display for FetchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(bytes) => write!(f, "ok {} {}", self.name, bytes),
            Err(e) => write!(f, "fail {} {}", self.name, e),
        }
    }
}

/// Fetches every asset in definition order and writes one outcome line per asset to `out`.
///
/// A failed asset never stops the ones after it. Only a failure to write to `out`
/// itself is returned as an error.
pub fn run_batch<T, W>(
    config: &FetchConfig,
    downloader: &Downloader<T>,
    mut out: W,
) -> io::Result<Vec<FetchResult>>
where
    T: FileDownloader,
    W: Write,
{
    if let Err(e) = ensure_output_dir(&config.output_dir) {
        tracing::warn!("could not create output directory: {e}");
    }

    for name in config.assets.iter().map(|a| &a.name).duplicates() {
        tracing::warn!(%name, "destination listed more than once, last entry wins");
    }

    let mut results = Vec::with_capacity(config.assets.len());

    for asset in &config.assets {
        let destination = config.output_dir.join(&asset.name);

        let result = FetchResult {
            name: asset.name.clone(),
            outcome: downloader.fetch(&asset.url, &destination),
        };

        if let Err(e) = &result.outcome {
            tracing::debug!(name = %asset.name, url = %asset.url, "fetch failed: {e}");
        }

        writeln!(out, "{result}")?;
        results.push(result);
    }

    Ok(results)
}
