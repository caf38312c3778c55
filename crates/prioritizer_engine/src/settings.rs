use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("invalid backend url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("backend url must use http or https, got {0:?}")]
    UnsupportedScheme(String),
}

/// Where the analyzer lives and how long to wait for it.
///
/// Timeouts left as `None` fall back to the transport defaults.
#[derive(Debug, Clone)]
pub struct AnalyzerSettings {
    pub base_url: Url,
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

impl AnalyzerSettings {
    pub fn new(base_url: &str) -> Result<Self, SettingsError> {
        let parsed = Url::parse(base_url.trim()).map_err(|source| SettingsError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(SettingsError::UnsupportedScheme(other.to_string())),
        }
        Ok(Self {
            base_url: parsed,
            connect_timeout: None,
            request_timeout: None,
        })
    }

    /// `{base_url}/{segments...}`, keeping any path prefix on the base url.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_to_bare_host() {
        let settings = AnalyzerSettings::default();
        assert_eq!(
            settings.endpoint(&["api", "analyze"]).as_str(),
            "http://localhost:8000/api/analyze"
        );
    }

    #[test]
    fn endpoint_keeps_path_prefix_and_ignores_trailing_slash() {
        let settings = AnalyzerSettings::new("https://example.com/prioritizer/").unwrap();
        assert_eq!(
            settings.endpoint(&["health"]).as_str(),
            "https://example.com/prioritizer/health"
        );
    }

    #[test]
    fn rejects_non_http_schemes() {
        assert_eq!(
            AnalyzerSettings::new("ftp://example.com").unwrap_err(),
            SettingsError::UnsupportedScheme("ftp".into())
        );
        assert!(matches!(
            AnalyzerSettings::new("not a url"),
            Err(SettingsError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn timeouts_default_to_transport() {
        let settings = AnalyzerSettings::new("http://127.0.0.1:9000").unwrap();
        assert_eq!(settings.connect_timeout, None);
        assert_eq!(settings.request_timeout, None);
    }
}
