use crate::host::{TimestampedString, WorldState};
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /world_state endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct WorldStateResponse {
    is_mission_running: bool,
    number_of_observations_since_last_state: usize,
    #[serde(default)]
    number_of_rewards_since_last_state: usize,
    #[serde(default)]
    number_of_video_frames_since_last_state: usize,
    #[serde(default)]
    observations: Vec<TimestampedString>,
    #[serde(default)]
    errors: Vec<TimestampedString>,
}

impl SerdeJSONBodyHTTPResponseType for WorldStateResponse {}

impl From<WorldStateResponse> for WorldState {
    fn from(value: WorldStateResponse) -> Self {
        WorldState {
            is_mission_running: value.is_mission_running,
            number_of_observations_since_last_state: value.number_of_observations_since_last_state,
            number_of_rewards_since_last_state: value.number_of_rewards_since_last_state,
            number_of_video_frames_since_last_state: value.number_of_video_frames_since_last_state,
            observations: value.observations,
            errors: value.errors,
        }
    }
}
