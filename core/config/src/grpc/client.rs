// Copyright Catalog Contributors
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use duration_str::deserialize_duration;
use http::Uri;
use serde::{Deserialize, Serialize};
use tonic::transport::{Channel, Endpoint};

use super::errors::ConfigError;

/// Connection settings for a catalog client: endpoint, origin override and
/// the connect/request timeouts.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    /// The target endpoint, e.g. `http://127.0.0.1:46357`.
    pub endpoint: String,

    /// Overrides the `:authority` header.
    #[serde(default)]
    pub origin: Option<String>,

    /// Timeout for establishing the TCP connection.
    #[serde(
        default = "default_connect_timeout",
        deserialize_with = "deserialize_duration"
    )]
    pub connect_timeout: Duration,

    /// Per-request timeout.
    #[serde(
        default = "default_request_timeout",
        deserialize_with = "deserialize_duration"
    )]
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            origin: None,
            connect_timeout: default_connect_timeout(),
            request_timeout: default_request_timeout(),
        }
    }
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(5)
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(10)
}

impl std::fmt::Display for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ClientConfig {{ endpoint: {}, origin: {:?}, connect_timeout: {:?}, request_timeout: {:?} }}",
            self.endpoint, self.origin, self.connect_timeout, self.request_timeout
        )
    }
}

impl ClientConfig {
    pub fn with_endpoint(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            ..Default::default()
        }
    }

    pub fn with_origin(self, origin: &str) -> Self {
        Self {
            origin: Some(origin.to_string()),
            ..self
        }
    }

    pub fn with_connect_timeout(self, connect_timeout: Duration) -> Self {
        Self {
            connect_timeout,
            ..self
        }
    }

    pub fn with_request_timeout(self, request_timeout: Duration) -> Self {
        Self {
            request_timeout,
            ..self
        }
    }

    fn to_endpoint(&self) -> Result<Endpoint, ConfigError> {
        if self.endpoint.is_empty() {
            return Err(ConfigError::MissingEndpoint);
        }

        let mut endpoint = Endpoint::from_shared(self.endpoint.clone())?
            .connect_timeout(self.connect_timeout)
            .timeout(self.request_timeout);

        if let Some(origin) = &self.origin {
            endpoint = endpoint.origin(origin.parse::<Uri>()?);
        }

        Ok(endpoint)
    }

    /// Establish the channel, waiting for the connection to come up.
    pub async fn to_channel(&self) -> Result<Channel, ConfigError> {
        Ok(self.to_endpoint()?.connect().await?)
    }

    /// Build the channel without connecting; the connection is attempted on
    /// the first RPC instead.
    pub fn to_channel_lazy(&self) -> Result<Channel, ConfigError> {
        Ok(self.to_endpoint()?.connect_lazy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_client_config() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, String::new());
        assert_eq!(config.origin, None);
        assert_eq!(config.connect_timeout, default_connect_timeout());
        assert_eq!(config.request_timeout, default_request_timeout());
    }

    #[test]
    fn test_missing_endpoint() {
        let config = ClientConfig::default();
        let ret = config.to_channel_lazy();
        assert!(ret.is_err_and(|e| matches!(e, ConfigError::MissingEndpoint)));
    }

    #[tokio::test]
    async fn test_lazy_channel_does_not_connect() {
        // nothing listens here, but a lazy channel must still build
        let config = ClientConfig::with_endpoint("http://127.0.0.1:1")
            .with_connect_timeout(Duration::from_millis(10));
        assert!(config.to_channel_lazy().is_ok());
    }

    #[test]
    fn test_invalid_endpoint_uri() {
        let config = ClientConfig::with_endpoint("not a uri");
        let ret = config.to_channel_lazy();
        assert!(ret.is_err_and(|e| matches!(e, ConfigError::Transport(_))));
    }

    #[test]
    fn test_client_config_from_yaml() {
        let yaml = r#"
endpoint: http://127.0.0.1:46357
connect_timeout: 1s
request_timeout: 30s
"#;
        let config: ClientConfig = serde_yaml::from_str(yaml).expect("deserialize");
        assert_eq!(config.endpoint, "http://127.0.0.1:46357");
        assert_eq!(config.connect_timeout, Duration::from_secs(1));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }
}
