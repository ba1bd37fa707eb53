//! The mission loop: launch one maze after another, steer the agent through
//! it until the host ends the mission, repeat.

mod runner;
mod summary;
#[cfg(test)]
mod tests;

pub use runner::StressRunner;
pub use summary::{MissionReport, RunSummary};

use strum_macros::Display;

#[derive(Debug, Display)]
pub enum HarnessError {
    /// The recordings directory could not be created.
    RecordingsDir(std::io::Error),
}

impl std::error::Error for HarnessError {}

impl From<std::io::Error> for HarnessError {
    fn from(value: std::io::Error) -> Self { HarnessError::RecordingsDir(value) }
}
