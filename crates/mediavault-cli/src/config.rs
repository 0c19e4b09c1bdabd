//! CLI configuration
//!
//! Holds the asset store URL and the optional extension-rules override.
//! Everything is explicit: commands receive a `Config`, nothing reads
//! ambient globals at call time.

use crate::error::Result;
use mediavault_client::ClientConfig;
use mediavault_core::ExtensionRules;
use std::path::PathBuf;

/// Resolved CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Asset store URL
    pub server_url: String,

    /// Optional TOML file overriding the category→extension table
    pub rules_file: Option<PathBuf>,
}

impl Config {
    pub fn new(server_url: String, rules_file: Option<PathBuf>) -> Self {
        Self {
            server_url,
            rules_file,
        }
    }

    /// Client configuration for this CLI invocation
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.server_url.clone())
    }

    /// Load the extension rule table.
    ///
    /// Reads the override file when one is configured, otherwise returns
    /// the built-in defaults. Categories missing from an override file are
    /// unrestricted, so overrides should list every category they care
    /// about.
    pub fn load_rules(&self) -> Result<ExtensionRules> {
        match &self.rules_file {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                let rules = toml::from_str(&raw)?;
                tracing::debug!(path = %path.display(), "Loaded extension rules override");
                Ok(rules)
            }
            None => Ok(ExtensionRules::default()),
        }
    }
}
