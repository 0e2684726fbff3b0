use std::io;

use logo_fetch::{logging, run_batch, Downloader, FetchConfig};

fn main() {
    logging::init_logging();

    let config = FetchConfig::default();

    let downloader = Downloader::new(&config);

    // Per-asset failures are already reported on stdout; the process still exits 0.
    match run_batch(&config, &downloader, io::stdout().lock()) {
        Ok(results) => {
            let failed = results.iter().filter(|r| !r.is_ok()).count();
            tracing::debug!(total = results.len(), failed, "batch finished");
        }
        Err(e) => tracing::warn!("could not write outcome lines: {e}"),
    }
}
