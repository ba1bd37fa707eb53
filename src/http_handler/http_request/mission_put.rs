use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use super::start_mission::StartMissionResponse;
use crate::host::ClientPool;
use crate::mission::MissionRecordSpec;

/// Request type for the /mission endpoint.
#[derive(serde::Serialize, Debug)]
pub(crate) struct StartMissionRequest<'a> {
    /// The full mission document.
    pub(crate) mission_xml: String,
    /// Whether the host checks the document against its schema first.
    pub(crate) validate: bool,
    /// Clients the mission may be scheduled on.
    pub(crate) client_pool: &'a ClientPool,
    /// What to record and where.
    pub(crate) recording: &'a MissionRecordSpec,
    /// Agent role within the mission, 0 for single-agent missions.
    pub(crate) role: u32,
    /// Shared by all agents of one experiment.
    pub(crate) experiment_id: &'a str,
}

impl JSONBodyHTTPRequestType for StartMissionRequest<'_> {
    type Body = Self;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for StartMissionRequest<'_> {
    type Response = StartMissionResponse;
    fn endpoint(&self) -> &'static str { "/mission" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Put }
}
