use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub referral: ReferralConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: Option<u16>,
    pub unix_socket: Option<PathBuf>,
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// The one shared login secret every directory account uses
    #[serde(default = "default_shared_secret")]
    pub shared_secret: String,
    /// Where the session snapshot is persisted
    #[serde(default = "default_session_file")]
    pub session_file: PathBuf,
    /// Simulated payment-verification delay before an agent upgrade lands
    #[serde(default = "default_upgrade_delay_ms")]
    pub upgrade_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReferralConfig {
    /// Agent commission as a fraction of the down payment
    #[serde(default = "default_commission_rate")]
    pub commission_rate: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[allow(dead_code)]
    pub path: Option<PathBuf>,
    #[serde(default = "default_console")]
    pub console: bool,
}

// Default value functions
fn default_num_threads() -> usize {
    num_cpus::get()
}

fn default_max_connections() -> usize {
    10000
}

fn default_shared_secret() -> String {
    "123456".to_string()
}

fn default_session_file() -> PathBuf {
    PathBuf::from("session.json")
}

fn default_upgrade_delay_ms() -> u64 {
    1000
}

fn default_commission_rate() -> f64 {
    0.05
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_console() -> bool {
    false
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            shared_secret: default_shared_secret(),
            session_file: default_session_file(),
            upgrade_delay_ms: default_upgrade_delay_ms(),
        }
    }
}

impl Default for ReferralConfig {
    fn default() -> Self {
        Self {
            commission_rate: default_commission_rate(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate server config
        if self.server.port.is_none() && self.server.unix_socket.is_none() {
            bail!("Either port or unix_socket must be specified in server config");
        }

        if let Some(port) = self.server.port {
            if port == 0 {
                bail!("Server port must be greater than 0");
            }
        }

        if self.server.num_threads == 0 {
            bail!("num_threads must be greater than 0");
        }

        if self.server.max_connections == 0 {
            bail!("max_connections must be greater than 0");
        }

        // Validate auth config
        if self.auth.shared_secret.is_empty() {
            bail!("shared_secret must not be empty");
        }

        if self.auth.session_file.as_os_str().is_empty() {
            bail!("session_file must not be empty");
        }

        // Validate referral config
        if !(0.0..=1.0).contains(&self.referral.commission_rate) {
            bail!(
                "commission_rate must be between 0 and 1, got {}",
                self.referral.commission_rate
            );
        }

        // Validate logging config
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        Ok(())
    }
}
