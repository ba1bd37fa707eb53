use super::http_response::{send_command, start_mission, world_state};

pub(crate) mod command_put;
pub(crate) mod mission_put;
pub(crate) mod request_common;
pub(crate) mod world_state_get;
