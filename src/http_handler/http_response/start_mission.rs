use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /mission endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct StartMissionResponse {
    /// Experiment the mission was registered under.
    #[serde(default)]
    experiment_id: String,
    /// Client the host scheduled the mission on, as `ip:port`.
    #[serde(default)]
    client: Option<String>,
}

impl SerdeJSONBodyHTTPResponseType for StartMissionResponse {}

impl StartMissionResponse {
    pub(crate) fn experiment_id(&self) -> &str { &self.experiment_id }
    pub(crate) fn client(&self) -> Option<&str> { self.client.as_deref() }
}
