//! The boundary to the simulation host.
//!
//! The harness only ever talks to an [`AgentHost`]; the production
//! implementation is [`HttpAgentHost`], tests script their own.

mod client_pool;
mod experiment;
mod http_host;
mod world_state;

pub use client_pool::{ClientInfo, ClientParseError, ClientPool};
pub use experiment::ExperimentId;
pub use http_host::HttpAgentHost;
pub use world_state::{TimestampedString, WorldState};

use crate::http_handler::http_handler_common::HTTPError;
use crate::mission::{MazeMission, MissionRecordSpec};
use async_trait::async_trait;
use strum_macros::Display;

/// Agent-side handle on the simulation host.
///
/// Every call may fail transiently; it is up to the caller whether a failure
/// is retried, ignored or fatal.
#[async_trait]
pub trait AgentHost: Send + Sync {
    /// Asks the host to run `mission` on one of the clients in `pool`.
    async fn start_mission(
        &self,
        mission: &MazeMission,
        pool: &ClientPool,
        recording: &MissionRecordSpec,
        role: u32,
        experiment_id: &ExperimentId,
    ) -> Result<(), HostError>;

    /// Fetches the current world state, consuming pending observations.
    async fn world_state(&self) -> Result<WorldState, HostError>;

    /// Sends one textual command to the agent of the running mission.
    async fn send_command(&self, command: &str) -> Result<(), HostError>;
}

#[derive(Debug, Display)]
pub enum HostError {
    /// The host refused or failed to start the mission.
    Launch(String),
    /// The host did not accept a command.
    Command(String),
    /// The host could not be reached or answered with garbage.
    Transport(HTTPError),
}

impl HostError {
    /// Human readable reason, as reported by the host where available.
    pub fn reason(&self) -> String {
        match self {
            HostError::Launch(msg) | HostError::Command(msg) => msg.clone(),
            HostError::Transport(err) => match err.detail() {
                Some(detail) if !detail.is_empty() => format!("{err}: {detail}"),
                _ => err.to_string(),
            },
        }
    }
}

impl std::error::Error for HostError {}

impl From<HTTPError> for HostError {
    fn from(value: HTTPError) -> Self { HostError::Transport(value) }
}
