use std::fmt::{Display, Formatter};

/// What happened during a single mission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MissionReport {
    pub iteration: u64,
    /// Failed launch attempts before the host accepted the mission.
    pub launch_retries: u64,
    pub observations: u64,
    pub malformed_observations: u64,
    pub commands_sent: u64,
    pub commands_failed: u64,
    pub poll_failures: u64,
    /// Rewards the host reported while the mission ran.
    pub rewards: u64,
    /// Video frames the host reported while the mission ran.
    pub video_frames: u64,
}

/// Totals over a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub missions: u64,
    pub launch_retries: u64,
    pub observations: u64,
    pub malformed_observations: u64,
    pub commands_sent: u64,
    pub commands_failed: u64,
    pub poll_failures: u64,
    pub rewards: u64,
    pub video_frames: u64,
}

impl RunSummary {
    pub fn record(&mut self, report: &MissionReport) {
        self.missions += 1;
        self.launch_retries += report.launch_retries;
        self.observations += report.observations;
        self.malformed_observations += report.malformed_observations;
        self.commands_sent += report.commands_sent;
        self.commands_failed += report.commands_failed;
        self.poll_failures += report.poll_failures;
        self.rewards += report.rewards;
        self.video_frames += report.video_frames;
    }
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} missions, {} launch retries, {} observations ({} malformed), {} commands sent, {} failed, {} failed polls, {} rewards, {} video frames",
            self.missions,
            self.launch_retries,
            self.observations,
            self.malformed_observations,
            self.commands_sent,
            self.commands_failed,
            self.poll_failures,
            self.rewards,
            self.video_frames
        )
    }
}
