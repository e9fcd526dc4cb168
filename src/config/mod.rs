//! Configuration loading and management
//!
//! Configuration comes from an optional YAML file, then environment variable
//! overrides:
//!
//! | Variable         | Overrides             |
//! |------------------|-----------------------|
//! | `BIZTIME_ENV`    | `environment`         |
//! | `BIZTIME_HOST`   | `server.host`         |
//! | `BIZTIME_PORT`   | `server.port`         |
//! | `DATABASE_URL`   | `database.url`        |

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Environment variable naming the YAML config file
pub const CONFIG_PATH_VAR: &str = "BIZTIME_CONFIG";

/// Deployment environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl Environment {
    /// Whether failed requests are logged with their full error detail
    pub fn emits_diagnostics(self) -> bool {
        !matches!(self, Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(anyhow!("Unknown environment: {}", other)),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Production => "production",
        };
        f.write_str(name)
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database settings
///
/// Without a `url` the server runs on the in-memory store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 5,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse config file '{}'", path))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load from `BIZTIME_CONFIG` (if set) and apply process environment overrides
    pub fn load() -> Result<Self> {
        let config = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };
        let vars: HashMap<String, String> = std::env::vars().collect();
        config.with_overrides(&vars)
    }

    /// Apply overrides from a variable map
    pub fn with_overrides(mut self, vars: &HashMap<String, String>) -> Result<Self> {
        if let Some(env) = vars.get("BIZTIME_ENV") {
            self.environment = env.parse()?;
        }
        if let Some(host) = vars.get("BIZTIME_HOST") {
            self.server.host = host.clone();
        }
        if let Some(port) = vars.get("BIZTIME_PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("Invalid BIZTIME_PORT '{}'", port))?;
        }
        if let Some(url) = vars.get("DATABASE_URL") {
            self.database.url = Some(url.clone());
        }
        Ok(self)
    }
}
