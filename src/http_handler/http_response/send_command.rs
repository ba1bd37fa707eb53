use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /command endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct SendCommandResponse {
    /// The command as the host queued it.
    #[serde(default)]
    command: String,
}

impl SerdeJSONBodyHTTPResponseType for SendCommandResponse {}

impl SendCommandResponse {
    pub(crate) fn command(&self) -> &str { &self.command }
}
