// Copyright Catalog Contributors
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "catalogd", about = "Product catalog gRPC server")]
pub struct Args {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE", env = "CATALOGD_CONFIG")]
    config: Option<String>,

    /// Print version information and exit
    #[arg(long, default_value_t = false)]
    version: bool,
}

impl Args {
    pub fn config(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn version(&self) -> bool {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_flag() {
        let args = Args::parse_from(["catalogd", "--config", "/etc/catalogd/config.yaml"]);
        assert_eq!(args.config(), Some("/etc/catalogd/config.yaml"));
        assert!(!args.version());
    }

    #[test]
    fn test_parse_version_flag() {
        let args = Args::parse_from(["catalogd", "--version"]);
        assert!(args.version());
        assert_eq!(args.config(), None);
    }
}
