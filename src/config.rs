use crate::host::{ClientParseError, ClientPool};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use strum_macros::{Display, EnumString};

const DEFAULT_HOST_URL: &str = "http://localhost:33000";
const DEFAULT_RECORDINGS_DIR: &str = "QuiltRecordings";
const DEFAULT_MISSION_COUNT: u64 = 30_000;

/// Fixed waits of the harness loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarnessTiming {
    /// Pause before retrying a failed launch.
    pub launch_retry: Duration,
    /// Poll interval while waiting for the mission to start.
    pub start_poll: Duration,
    /// Poll interval while waiting for the next observation.
    pub observation_poll: Duration,
    /// Pause after a mission so the host client is ready for the next one.
    pub between_missions: Duration,
}

impl Default for HarnessTiming {
    fn default() -> Self {
        Self {
            launch_retry: Duration::from_secs(1),
            start_poll: Duration::from_millis(100),
            observation_poll: Duration::from_millis(50),
            between_missions: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub host_url: String,
    pub clients: ClientPool,
    pub recordings_dir: PathBuf,
    pub first_iteration: u64,
    pub mission_count: u64,
    pub validate: bool,
    pub timing: HarnessTiming,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            host_url: DEFAULT_HOST_URL.to_string(),
            clients: ClientPool::default(),
            recordings_dir: PathBuf::from(DEFAULT_RECORDINGS_DIR),
            first_iteration: 0,
            mission_count: DEFAULT_MISSION_COUNT,
            validate: true,
            timing: HarnessTiming::default(),
        }
    }
}

#[derive(Debug, Display, PartialEq, Eq)]
pub enum ConfigError {
    InvalidNumber { var: &'static str, value: String },
    InvalidFlag { var: &'static str, value: String },
    InvalidClients(ClientParseError),
}

impl std::error::Error for ConfigError {}

impl From<ClientParseError> for ConfigError {
    fn from(value: ClientParseError) -> Self { ConfigError::InvalidClients(value) }
}

impl HarnessConfig {
    /// Reads the configuration from the `QUILT_*` environment variables,
    /// falling back to the defaults for unset ones.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(url) = lookup("QUILT_HOST_URL") {
            config.host_url = url;
        }
        if let Some(clients) = lookup("QUILT_CLIENTS") {
            config.clients = clients.parse()?;
        }
        if let Some(dir) = lookup("QUILT_RECORDINGS_DIR") {
            config.recordings_dir = PathBuf::from(dir);
        }
        if let Some(value) = lookup("QUILT_FIRST_ITERATION") {
            config.first_iteration = parse_number("QUILT_FIRST_ITERATION", value)?;
        }
        if let Some(value) = lookup("QUILT_MISSION_COUNT") {
            config.mission_count = parse_number("QUILT_MISSION_COUNT", value)?;
        }
        if let Some(value) = lookup("QUILT_VALIDATE") {
            config.validate = parse_flag("QUILT_VALIDATE", value)?;
        }
        Ok(config)
    }

    /// Iterations this run covers.
    pub fn iterations(&self) -> std::ops::Range<u64> {
        self.first_iteration..self.first_iteration.saturating_add(self.mission_count)
    }
}

fn parse_number(var: &'static str, value: String) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber { var, value })
}

/// Spellings accepted for boolean environment flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
enum Toggle {
    #[strum(serialize = "1", serialize = "true", serialize = "yes", serialize = "on")]
    On,
    #[strum(serialize = "0", serialize = "false", serialize = "no", serialize = "off")]
    Off,
}

fn parse_flag(var: &'static str, value: String) -> Result<bool, ConfigError> {
    let toggle: Toggle =
        value.trim().parse().map_err(|_: strum::ParseError| ConfigError::InvalidFlag { var, value })?;
    Ok(toggle == Toggle::On)
}
