//! APOD endpoint configuration.
//!
//! The browser has no process environment, so the client bakes values in at
//! compile time through [`ApodConfig::from_build_env`]. Parsing itself goes
//! through [`ApodConfig::from_lookup`] so it can be exercised with any key
//! source.

use std::time::Duration;

use crate::date::CalendarDate;

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_BASE_URL: &str = "https://api.nasa.gov/planetary/apod";
pub const DEFAULT_API_KEY: &str = "DEMO_KEY";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApodConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl Default for ApodConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: DEFAULT_API_KEY.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApodConfig {
    /// Build config from a key lookup.
    ///
    /// Optional:
    /// - `APOD_BASE_URL`: default NASA endpoint, trailing `/` trimmed
    /// - `APOD_API_KEY`: default `DEMO_KEY`
    /// - `APOD_TIMEOUT_SECS`: default 10; unparsable or zero values fall back
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = non_empty(lookup("APOD_BASE_URL"))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let api_key = non_empty(lookup("APOD_API_KEY")).unwrap_or_else(|| DEFAULT_API_KEY.to_owned());
        let timeout_secs = parse_timeout_secs(lookup("APOD_TIMEOUT_SECS").as_deref());

        Self { base_url, api_key, timeout: Duration::from_secs(timeout_secs) }
    }

    /// Build config from values captured by `option_env!` at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                "APOD_BASE_URL" => option_env!("APOD_BASE_URL"),
                "APOD_API_KEY" => option_env!("APOD_API_KEY"),
                "APOD_TIMEOUT_SECS" => option_env!("APOD_TIMEOUT_SECS"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Request URL for one day's entry.
    #[must_use]
    pub fn request_url(&self, date: CalendarDate) -> String {
        format!(
            "{}?api_key={}&date={}",
            self.base_url,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(&date.to_string())
        )
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_timeout_secs(raw: Option<&str>) -> u64 {
    let Some(raw) = raw else {
        return DEFAULT_TIMEOUT_SECS;
    };
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => secs,
        _ => {
            tracing::warn!(value = raw, default = DEFAULT_TIMEOUT_SECS, "invalid APOD_TIMEOUT_SECS, using default");
            DEFAULT_TIMEOUT_SECS
        }
    }
}
