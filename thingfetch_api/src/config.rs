//! Transport configuration.

use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for [`crate::HttpTransport`].
///
/// The request timeout is the only deadline applied to a fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }
}

impl TransportConfig {
    /// Reads `THINGFETCH_BASE_URL`, `THINGFETCH_TIMEOUT_SECS` and
    /// `THINGFETCH_USER_AGENT`. Missing or unparsable values use the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            base_url: lookup("THINGFETCH_BASE_URL")
                .filter(|val| !val.trim().is_empty())
                .unwrap_or(defaults.base_url),
            timeout: Duration::from_secs(parse_positive_u64(
                lookup("THINGFETCH_TIMEOUT_SECS"),
                DEFAULT_TIMEOUT_SECS,
            )),
            user_agent: lookup("THINGFETCH_USER_AGENT")
                .filter(|val| !val.trim().is_empty())
                .unwrap_or(defaults.user_agent),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }
}

fn default_user_agent() -> String {
    format!("thingfetch/{}", env!("CARGO_PKG_VERSION"))
}

/// Zero is treated like an unparsable value.
fn parse_positive_u64(val: Option<String>, default: u64) -> u64 {
    val.and_then(|val| val.trim().parse::<u64>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(default)
}
