mod command;
mod observation;
mod proportional;

pub use command::AgentCommand;
pub use observation::{Observation, ObservationError};
pub use proportional::ProportionalController;
