//! Configuration for the Roster server.

use crate::CoreError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "ROSTER_CONFIG";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// GraphQL schema document checked at startup
    #[serde(default = "default_schema_path")]
    pub schema_path: PathBuf,

    /// HTML page served at `/`
    #[serde(default = "default_explorer_page")]
    pub explorer_page: PathBuf,

    /// Route of the GraphQL endpoint
    #[serde(default = "default_graphql_path")]
    pub graphql_path: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Start with the example records
    #[serde(default = "default_seed")]
    pub seed: bool,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_schema_path() -> PathBuf {
    PathBuf::from("schema.graphql")
}

fn default_explorer_page() -> PathBuf {
    PathBuf::from("lib/graphiql.html")
}

fn default_graphql_path() -> String {
    "/graphql".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_seed() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            schema_path: default_schema_path(),
            explorer_page: default_explorer_page(),
            graphql_path: default_graphql_path(),
            log_level: default_log_level(),
            seed: default_seed(),
        }
    }
}

impl ServerConfig {
    /// Find a config file: `$ROSTER_CONFIG`, then `./roster.yaml`, then
    /// `roster/config.yaml` under the user config directory
    pub fn discover() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }

        let local = PathBuf::from("roster.yaml");
        if local.exists() {
            return Some(local);
        }

        dirs::config_dir()
            .map(|dir| dir.join("roster").join("config.yaml"))
            .filter(|path| path.exists())
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML, filling missing fields with defaults
    pub fn from_yaml(content: &str) -> Result<Self, CoreError> {
        Ok(serde_yaml::from_str(content)?)
    }
}
