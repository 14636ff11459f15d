// Copyright Catalog Contributors
// SPDX-License-Identifier: Apache-2.0
//
// ConfigLoader loads the configuration file once and exposes lazy, cached
// accessors for the tracing, server, and worker sections. The server section
// is validated only when requested, so callers that only need tracing can
// proceed even if the server block is absent.

use std::collections::HashSet;

use lazy_static::lazy_static;
use serde_yaml::{Value, from_str};
use thiserror::Error;
use tracing::{debug, warn};

use catalog_config::grpc::server::ServerConfig;
use catalog_worker::WorkerConfig;

use crate::telemetry::TracingConfiguration;

#[derive(Error, Debug)]
pub enum ConfigError {
    // File / I/O
    #[error("not found: {0}")]
    NotFound(String),

    // Parsing / structural validity
    #[error("invalid configuration - impossible to parse yaml")]
    InvalidYaml,
    #[error("invalid configuration - key {0} not valid")]
    InvalidKey(String),

    // YAML decoding (typed propagation)
    #[error("yaml parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("invalid configuration - missing server section")]
    MissingServer,
}

lazy_static! {
    static ref CONFIG_KEYS: HashSet<&'static str> = {
        let mut s = HashSet::new();
        s.insert("tracing");
        s.insert("server");
        s.insert("worker");
        s
    };
}

pub struct ConfigLoader {
    root: Value,
    tracing: Option<TracingConfiguration>,
}

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let root_keys = self
            .root
            .as_mapping()
            .map(|m| {
                m.keys()
                    .filter_map(|k| k.as_str())
                    .map(|s| s.to_string())
                    .collect::<Vec<String>>()
            })
            .unwrap_or_default();

        f.debug_struct("ConfigLoader")
            .field("root_keys", &root_keys)
            .field("tracing_loaded", &self.tracing.is_some())
            .finish()
    }
}

impl ConfigLoader {
    pub fn new(file_path: &str) -> Result<Self, ConfigError> {
        let config_str =
            std::fs::read_to_string(file_path).map_err(|e| ConfigError::NotFound(e.to_string()))?;
        let root: Value = from_str(&config_str).map_err(|_| ConfigError::InvalidYaml)?;

        let mapping = root.as_mapping().ok_or(ConfigError::InvalidYaml)?;
        for key in mapping.keys() {
            let k = key.as_str().ok_or(ConfigError::InvalidYaml)?;
            if !CONFIG_KEYS.contains(k) {
                return Err(ConfigError::InvalidKey(k.to_string()));
            }
        }

        Ok(Self {
            root,
            tracing: None,
        })
    }

    pub fn tracing(&mut self) -> &TracingConfiguration {
        if self.tracing.is_none() {
            let cfg = self
                .root
                .get("tracing")
                .cloned()
                .map(|v| {
                    serde_yaml::from_value(v).unwrap_or_else(|e| {
                        warn!(error = ?e, "invalid tracing config, falling back to default");
                        TracingConfiguration::default()
                    })
                })
                .unwrap_or_default();
            debug!(?cfg, "tracing configuration loaded");
            self.tracing = Some(cfg);
        }
        self.tracing.as_ref().unwrap()
    }

    pub fn server(&self) -> Result<ServerConfig, ConfigError> {
        let value = self.root.get("server").ok_or(ConfigError::MissingServer)?;
        let cfg: ServerConfig = serde_yaml::from_value(value.clone())?;
        debug!(%cfg, "server configuration loaded");
        Ok(cfg)
    }

    pub fn worker(&self) -> Result<Option<WorkerConfig>, ConfigError> {
        match self.root.get("worker") {
            Some(value) => {
                let cfg: WorkerConfig = serde_yaml::from_value(value.clone())?;
                debug!(?cfg, "worker configuration loaded");
                Ok(Some(cfg))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tracing_test::traced_test;

    fn testdata_path() -> String {
        concat!(env!("CARGO_MANIFEST_DIR"), "/testdata").to_string()
    }

    #[test]
    #[traced_test]
    fn test_full_config() {
        let path = format!("{}/config.yaml", testdata_path());
        let mut loader = ConfigLoader::new(&path).expect("loader init should succeed");

        assert_eq!(loader.tracing().log_level(), "debug");

        let server = loader.server().expect("server section should load");
        assert_eq!(server.endpoint, "0.0.0.0:9090");
        assert_eq!(server.max_concurrent_streams, Some(50));

        let worker = loader
            .worker()
            .expect("worker section should load")
            .expect("worker section should be present");
        assert!(worker.enabled);
        assert_eq!(worker.interval, Duration::from_secs(10));
        assert_eq!(worker.client.endpoint, "http://127.0.0.1:9090");
    }

    #[test]
    #[traced_test]
    fn test_missing_server_affects_only_server_loader() {
        let path = format!("{}/config-no-server.yaml", testdata_path());
        let mut loader = ConfigLoader::new(&path).expect("loader init should succeed");
        let _ = loader.tracing();
        let server = loader.server();
        assert!(
            matches!(server, Err(ConfigError::MissingServer)),
            "server loader should error when the server section is missing"
        );
        assert!(loader.worker().expect("worker should load").is_none());
    }

    #[test]
    #[traced_test]
    fn test_unknown_key_rejected() {
        let path = format!("{}/config-unknown-key.yaml", testdata_path());
        let res = ConfigLoader::new(&path);
        assert!(
            matches!(res, Err(ConfigError::InvalidKey(ref k)) if k == "sever"),
            "unknown top-level key should be rejected"
        );
    }

    #[test]
    #[traced_test]
    fn test_missing_file() {
        let path = format!("{}/does-not-exist.yaml", testdata_path());
        let res = ConfigLoader::new(&path);
        assert!(matches!(res, Err(ConfigError::NotFound(_))));
    }

    #[test]
    #[traced_test]
    fn test_defaulted_tracing() {
        let path = format!("{}/config-no-server.yaml", testdata_path());
        let mut loader = ConfigLoader::new(&path).expect("loader init should succeed");
        assert_eq!(loader.tracing().log_level(), "info");
    }
}
