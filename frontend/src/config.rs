use log::warn;
use once_cell::sync::Lazy;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Connection details for the hosted signups table.
#[derive(Clone, Debug, PartialEq)]
pub struct StoreConfig {
    pub url: Url,
    pub anon_key: String,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("SUPABASE_URL is not set")]
    MissingUrl,
    #[error("SUPABASE_ANON_KEY is not set")]
    MissingKey,
    #[error("SUPABASE_URL is not a valid http(s) url: {0}")]
    InvalidUrl(String),
}

impl StoreConfig {
    pub fn from_parts(url: Option<&str>, anon_key: Option<&str>) -> Result<Self, ConfigError> {
        let raw = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::MissingUrl)?;
        let anon_key = anon_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingKey)?;

        let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(e.to_string()))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidUrl(format!("unsupported scheme {}", url.scheme())));
        }

        Ok(Self {
            url,
            anon_key: anon_key.to_string(),
        })
    }

    /// REST endpoint of a table, e.g. `https://x.supabase.co/rest/v1/signups`.
    pub fn table_url(&self, table: &str) -> Url {
        let mut url = self.url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["rest", "v1", table]);
        }
        url
    }
}

static STORE_CONFIG: Lazy<Result<StoreConfig, ConfigError>> = Lazy::new(|| {
    StoreConfig::from_parts(option_env!("SUPABASE_URL"), option_env!("SUPABASE_ANON_KEY"))
});

/// Resolved once per page load. A missing store only breaks submission, never rendering.
pub fn store_config() -> Result<StoreConfig, ConfigError> {
    (*STORE_CONFIG).clone()
}

pub fn reset_delay_override() -> Option<Duration> {
    parse_reset_delay(option_env!("LANDING_RESET_DELAY_MS"))
}

fn parse_reset_delay(raw: Option<&str>) -> Option<Duration> {
    let raw = raw?;
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Some(Duration::from_millis(ms)),
        _ => {
            warn!("Ignoring invalid LANDING_RESET_DELAY_MS value: {}", raw);
            None
        }
    }
}
