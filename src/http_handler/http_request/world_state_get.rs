use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use super::world_state::WorldStateResponse;

/// Request type for the /world_state endpoint.
#[derive(Debug)]
pub(crate) struct WorldStateRequest {}

impl NoBodyHTTPRequestType for WorldStateRequest {}

impl HTTPRequestType for WorldStateRequest {
    type Response = WorldStateResponse;
    fn endpoint(&self) -> &'static str { "/world_state" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
