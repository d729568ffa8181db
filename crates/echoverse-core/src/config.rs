//! Configuration types for the EchoVerse server

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::Result;

/// Base name of the optional configuration file (`echoverse.toml`)
pub const CONFIG_FILE: &str = "echoverse";

/// Prefix for environment overrides, e.g. `ECHOVERSE_PORT=9000`
pub const ENV_PREFIX: &str = "ECHOVERSE";

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Simulated latency of the speech backend, in milliseconds
    #[serde(default = "default_synthesis_delay_ms")]
    pub synthesis_delay_ms: u64,

    #[serde(default = "default_cors_enabled")]
    pub cors_enabled: bool,

    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Largest accepted `.txt` upload
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Sessions untouched for this long are dropped. Zero keeps them forever.
    #[serde(default = "default_session_idle_secs")]
    pub session_idle_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            synthesis_delay_ms: default_synthesis_delay_ms(),
            cors_enabled: default_cors_enabled(),
            cors_origins: default_cors_origins(),
            max_upload_bytes: default_max_upload_bytes(),
            session_idle_secs: default_session_idle_secs(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from `echoverse.toml` (if present) and `ECHOVERSE_*`
    /// environment variables, falling back to defaults for anything unset.
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    pub fn load_from(file: &str) -> Result<Self> {
        Self::load_with_env(file, None)
    }

    /// Like [`ServerConfig::load_from`], reading overrides from `env` instead
    /// of the process environment when given.
    pub fn load_with_env(file: &str, env: Option<config::Map<String, String>>) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(file).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .source(env)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors_origins"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn synthesis_delay(&self) -> Duration {
        Duration::from_millis(self.synthesis_delay_ms)
    }

    pub fn session_idle_timeout(&self) -> Option<Duration> {
        (self.session_idle_secs > 0).then(|| Duration::from_secs(self.session_idle_secs))
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_synthesis_delay_ms() -> u64 {
    1000
}

fn default_cors_enabled() -> bool {
    true
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_max_upload_bytes() -> usize {
    1024 * 1024
}

fn default_session_idle_secs() -> u64 {
    30 * 60
}
