use crate::base::error::StreamError;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// The user-agent template: a pure function from a UPnP protocol version
/// pair to the header value sent when a request message carries no
/// `User-Agent` of its own.
///
/// Produces strings of the form `<platform> UPnP/<major>.<minor> <product>`,
/// e.g. `linux UPnP/1.1 upnpnet/0.1.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgent {
    platform: String,
    product: Option<String>,
}

impl UserAgent {
    pub fn new(platform: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            product: None,
        }
    }

    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.product = Some(product.into());
        self
    }

    /// Render the header value for a protocol version. Deterministic, no
    /// side effects.
    pub fn value(&self, major: u8, minor: u8) -> String {
        match &self.product {
            Some(product) => format!("{} UPnP/{}.{} {}", self.platform, major, minor, product),
            None => format!("{} UPnP/{}.{}", self.platform, major, minor),
        }
    }
}

impl Default for UserAgent {
    fn default() -> Self {
        Self {
            platform: std::env::consts::OS.to_owned(),
            product: Some(format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            )),
        }
    }
}

/// Immutable stream client settings: request timeout, retry count, and the
/// user-agent template. Constructed once, shared read-only across every send
/// the client issues.
#[derive(Debug, Clone)]
pub struct StreamClientConfig {
    timeout: Duration,
    retry_count: u32,
    user_agent: UserAgent,
}

impl StreamClientConfig {
    pub fn builder() -> StreamClientConfigBuilder {
        StreamClientConfigBuilder::default()
    }

    /// Deadline for one complete exchange. The engine's own timeouts are
    /// derived from this plus a safety margin, so this one always fires
    /// first.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Advertised retry budget. Reserved for a future retry policy; sends
    /// currently make exactly one attempt.
    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    pub fn user_agent(&self) -> &UserAgent {
        &self.user_agent
    }
}

impl Default for StreamClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            retry_count: 0,
            user_agent: UserAgent::default(),
        }
    }
}

/// Builder for [`StreamClientConfig`]. Validation happens in [`build`];
/// invalid values fail construction rather than surfacing mid-send.
///
/// [`build`]: StreamClientConfigBuilder::build
#[derive(Debug, Default)]
pub struct StreamClientConfigBuilder {
    timeout: Option<Duration>,
    retry_count: Option<u32>,
    user_agent: Option<UserAgent>,
}

impl StreamClientConfigBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn retry_count(mut self, retry_count: u32) -> Self {
        self.retry_count = Some(retry_count);
        self
    }

    pub fn user_agent(mut self, user_agent: UserAgent) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    pub fn build(self) -> Result<StreamClientConfig, StreamError> {
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(StreamError::InvalidConfig(
                "timeout must be greater than zero".into(),
            ));
        }
        Ok(StreamClientConfig {
            timeout,
            retry_count: self.retry_count.unwrap_or(0),
            user_agent: self.user_agent.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_value_embeds_protocol_version() {
        let agent = UserAgent::new("TestClient/1.0");
        assert_eq!(agent.value(1, 1), "TestClient/1.0 UPnP/1.1");
        assert_eq!(agent.value(2, 0), "TestClient/1.0 UPnP/2.0");
    }

    #[test]
    fn test_user_agent_value_with_product() {
        let agent = UserAgent::new("linux/6.1").with_product("acme-renderer/2.4");
        assert_eq!(agent.value(1, 0), "linux/6.1 UPnP/1.0 acme-renderer/2.4");
    }

    #[test]
    fn test_user_agent_value_is_pure() {
        let agent = UserAgent::new("TestClient/1.0");
        assert_eq!(agent.value(1, 1), agent.value(1, 1));
    }

    #[test]
    fn test_default_user_agent_names_this_crate() {
        let agent = UserAgent::default();
        let value = agent.value(1, 0);
        assert!(value.contains("UPnP/1.0"));
        assert!(value.contains("upnpnet/"));
    }

    #[test]
    fn test_defaults() {
        let config = StreamClientConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert_eq!(config.retry_count(), 0);
    }

    #[test]
    fn test_builder_overrides() {
        let config = StreamClientConfig::builder()
            .timeout(Duration::from_secs(30))
            .retry_count(3)
            .user_agent(UserAgent::new("TestClient/1.0"))
            .build()
            .unwrap();

        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.retry_count(), 3);
        assert_eq!(config.user_agent().value(1, 1), "TestClient/1.0 UPnP/1.1");
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = StreamClientConfig::builder()
            .timeout(Duration::ZERO)
            .build();
        assert!(matches!(result, Err(StreamError::InvalidConfig(_))));
    }
}
