pub(crate) mod response_common;
pub(crate) mod send_command;
pub(crate) mod start_mission;
pub(crate) mod world_state;
