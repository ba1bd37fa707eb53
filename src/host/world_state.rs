use chrono::{DateTime, Utc};

/// A piece of text the host produced at a given time, e.g. an observation.
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TimestampedString {
    timestamp: DateTime<Utc>,
    text: String,
}

impl TimestampedString {
    pub fn new(timestamp: DateTime<Utc>, text: impl Into<String>) -> Self {
        Self { timestamp, text: text.into() }
    }
    pub fn timestamp(&self) -> DateTime<Utc> { self.timestamp }
    pub fn text(&self) -> &str { &self.text }
}

/// Snapshot of the running mission as seen by the agent.
///
/// Counters refer to what arrived since the previous snapshot; fetching a
/// new state consumes the pending observations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldState {
    pub(crate) is_mission_running: bool,
    pub(crate) number_of_observations_since_last_state: usize,
    pub(crate) number_of_rewards_since_last_state: usize,
    pub(crate) number_of_video_frames_since_last_state: usize,
    pub(crate) observations: Vec<TimestampedString>,
    pub(crate) errors: Vec<TimestampedString>,
}

impl WorldState {
    /// A running mission with the given pending observations.
    pub fn running(observations: Vec<TimestampedString>) -> Self {
        Self {
            is_mission_running: true,
            number_of_observations_since_last_state: observations.len(),
            observations,
            ..Self::default()
        }
    }

    /// A mission that has ended.
    pub fn stopped() -> Self { Self::default() }

    /// The state to assume when a poll fails: the running flag stays as it
    /// was, nothing new has arrived.
    pub(crate) fn carried_over(&self) -> Self {
        Self { is_mission_running: self.is_mission_running, ..Self::default() }
    }

    pub fn is_mission_running(&self) -> bool { self.is_mission_running }
    pub fn number_of_observations_since_last_state(&self) -> usize {
        self.number_of_observations_since_last_state
    }
    pub fn number_of_rewards_since_last_state(&self) -> usize { self.number_of_rewards_since_last_state }
    pub fn number_of_video_frames_since_last_state(&self) -> usize {
        self.number_of_video_frames_since_last_state
    }
    pub fn observations(&self) -> &[TimestampedString] { &self.observations }
    pub fn errors(&self) -> &[TimestampedString] { &self.errors }

    /// Whether the poll loop should keep waiting for observations.
    pub fn awaits_observation(&self) -> bool {
        self.is_mission_running && self.number_of_observations_since_last_state < 1
    }
}
