use super::{AgentHost, ClientPool, ExperimentId, HostError, WorldState};
use crate::event;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_handler_common::HTTPError;
use crate::http_handler::http_request::{
    command_put::SendCommandRequest,
    mission_put::StartMissionRequest,
    request_common::{JSONBodyHTTPRequestType, NoBodyHTTPRequestType},
    world_state_get::WorldStateRequest,
};
use crate::mission::{MazeMission, MissionRecordSpec};
use async_trait::async_trait;
use std::sync::Arc;

/// [`AgentHost`] backed by the host bridge's REST API.
#[derive(Debug, Clone)]
pub struct HttpAgentHost {
    client: Arc<HTTPClient>,
}

impl HttpAgentHost {
    /// Connects to the bridge listening at `base_url`.
    ///
    /// # Errors
    /// Fails if the underlying HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        Ok(Self { client: Arc::new(HTTPClient::new(base_url)?) })
    }

    pub fn url(&self) -> &str { self.client.url() }
}

/// Launch and command failures reported by the bridge carry the host's own
/// message; everything else stays a transport error.
fn refine(err: HTTPError, wrap: fn(String) -> HostError) -> HostError {
    match err.detail() {
        Some(detail) if !detail.is_empty() => wrap(detail.to_string()),
        _ => HostError::Transport(err),
    }
}

#[async_trait]
impl AgentHost for HttpAgentHost {
    async fn start_mission(
        &self,
        mission: &MazeMission,
        pool: &ClientPool,
        recording: &MissionRecordSpec,
        role: u32,
        experiment_id: &ExperimentId,
    ) -> Result<(), HostError> {
        let req = StartMissionRequest {
            mission_xml: mission.xml(),
            validate: mission.validate(),
            client_pool: pool,
            recording,
            role,
            experiment_id: experiment_id.as_str(),
        };
        let resp = req.send_request(&self.client).await.map_err(|e| refine(e, HostError::Launch))?;
        event!(
            "Mission {} accepted for experiment {} on {}",
            mission.iteration(),
            resp.experiment_id(),
            resp.client().unwrap_or("an unknown client")
        );
        Ok(())
    }

    async fn world_state(&self) -> Result<WorldState, HostError> {
        Ok(WorldStateRequest {}.send_request(&self.client).await?.into())
    }

    async fn send_command(&self, command: &str) -> Result<(), HostError> {
        let resp = SendCommandRequest { command }
            .send_request(&self.client)
            .await
            .map_err(|e| refine(e, HostError::Command))?;
        event!("Host queued '{}'", resp.command());
        Ok(())
    }
}
