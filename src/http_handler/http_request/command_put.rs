use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use super::send_command::SendCommandResponse;

/// Request type for the /command endpoint.
#[derive(serde::Serialize, Debug)]
pub(crate) struct SendCommandRequest<'a> {
    /// Command text, e.g. `move 0.5`.
    pub(crate) command: &'a str,
}

impl JSONBodyHTTPRequestType for SendCommandRequest<'_> {
    type Body = Self;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for SendCommandRequest<'_> {
    type Response = SendCommandResponse;
    fn endpoint(&self) -> &'static str { "/command" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Put }
}
