use reqwest::Url;
use std::env;
use tracing::warn;

/// Token left in place when the deploy step never substituted a real base URL.
pub const PLACEHOLDER: &str = "__COUNTER_API_BASE__";

pub const COUNTER_API_BASE_VAR: &str = "COUNTER_API_BASE";

const COUNTER_PATH: &str = "/counter";

/// Where the view counter lives, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CounterConfig {
    #[default]
    Unconfigured,
    Endpoint(Url),
}

impl CounterConfig {
    /// Anything that is not a parseable http(s) URL is `Unconfigured`.
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() || raw == PLACEHOLDER || !raw.starts_with("http") {
            return Self::Unconfigured;
        }

        match Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Endpoint(url),
            Ok(url) => {
                warn!("unsupported counter api scheme: {}", url.scheme());
                Self::Unconfigured
            }
            Err(err) => {
                warn!("invalid counter api base {raw:?}: {err}");
                Self::Unconfigured
            }
        }
    }

    pub fn from_env() -> Self {
        match env::var(COUNTER_API_BASE_VAR) {
            Ok(value) => Self::from_raw(&value),
            Err(_) => Self::Unconfigured,
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Endpoint(_))
    }

    /// The increment endpoint: the base with trailing slashes removed, plus `/counter`.
    pub fn endpoint(&self) -> Option<Url> {
        let Self::Endpoint(base) = self else {
            return None;
        };
        let trimmed = base.as_str().trim_end_matches('/');
        Url::parse(&format!("{trimmed}{COUNTER_PATH}")).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_and_empty_are_unconfigured() {
        assert_eq!(CounterConfig::from_raw(PLACEHOLDER), CounterConfig::Unconfigured);
        assert_eq!(CounterConfig::from_raw(""), CounterConfig::Unconfigured);
        assert_eq!(CounterConfig::from_raw("   "), CounterConfig::Unconfigured);
        assert_eq!(CounterConfig::from_raw("api.example.com"), CounterConfig::Unconfigured);
        assert_eq!(
            CounterConfig::from_raw("  https://api.example.com"),
            CounterConfig::Unconfigured
        );
    }

    #[test]
    fn non_http_scheme_is_unconfigured() {
        assert_eq!(CounterConfig::from_raw("httpx://api.example.com"), CounterConfig::Unconfigured);
        assert_eq!(CounterConfig::from_raw("http://"), CounterConfig::Unconfigured);
    }

    #[test]
    fn endpoint_strips_trailing_slashes() {
        let config = CounterConfig::from_raw("https://api.example.com/");
        assert!(config.is_configured());
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "https://api.example.com/counter"
        );

        let config = CounterConfig::from_raw("https://api.example.com/prod//");
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "https://api.example.com/prod/counter"
        );
    }

    #[test]
    fn endpoint_without_trailing_slash() {
        let config = CounterConfig::from_raw("http://127.0.0.1:9000/stage");
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "http://127.0.0.1:9000/stage/counter"
        );
    }

    #[test]
    fn unconfigured_has_no_endpoint() {
        assert!(CounterConfig::Unconfigured.endpoint().is_none());
        assert!(!CounterConfig::default().is_configured());
    }
}
