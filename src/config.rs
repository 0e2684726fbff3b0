use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_OUTPUT_DIR: &str = "public/images";

/// Some origins (Wikimedia among them) reject requests without a browser-like agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(40);

const LOGOS: &[(&str, &str)] = &[
    (
        "logo-maserati.svg",
        "https://commons.wikimedia.org/wiki/Special:FilePath/Maserati_logo_2.svg",
    ),
    (
        "logo-porsche.svg",
        "https://commons.wikimedia.org/wiki/Special:FilePath/Porsche_Wordmark_Logo_Black.svg",
    ),
    (
        "logo-cadillac.svg",
        "https://commons.wikimedia.org/wiki/Special:FilePath/Cadillac_Wordmark.svg",
    ),
    (
        "logo-bmw.svg",
        "https://commons.wikimedia.org/wiki/Special:FilePath/BMW.svg",
    ),
    (
        "logo-alfa-romeo.svg",
        "https://commons.wikimedia.org/wiki/Special:FilePath/Alfa_logo.svg",
    ),
    (
        "logo-mercedes.svg",
        "https://commons.wikimedia.org/wiki/Special:FilePath/Mercedes-Benz_logo_2.svg",
    ),
];

/// A remote file and the name it is saved under inside the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRequest {
    pub name: String,
    pub url: String,
}

impl AssetRequest {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub output_dir: PathBuf,
    pub user_agent: String,
    pub timeout: Duration,
    pub assets: Vec<AssetRequest>,
}

impl FetchConfig {
    pub fn new(output_dir: impl Into<PathBuf>, assets: Vec<AssetRequest>) -> Self {
        Self {
            output_dir: output_dir.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            assets,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        let assets = LOGOS
            .iter()
            .map(|(name, url)| AssetRequest::new(*name, *url))
            .collect();

        Self::new(DEFAULT_OUTPUT_DIR, assets)
    }
}
