use super::{HarnessError, MissionReport, RunSummary};
use crate::config::HarnessConfig;
use crate::control::{Observation, ProportionalController};
use crate::host::{AgentHost, ExperimentId, WorldState};
use crate::mission::{MazeMission, MissionRecordSpec, ensure_recordings_dir};
use crate::{error, event, info, log, progress, warn};
use tokio::time::sleep;

/// Drives the quilt: one short maze mission per iteration, back to back.
pub struct StressRunner<H: AgentHost> {
    host: H,
    config: HarnessConfig,
    experiment_id: ExperimentId,
    controller: ProportionalController,
}

impl<H: AgentHost> StressRunner<H> {
    /// A runner with a fresh random experiment id.
    pub fn new(host: H, config: HarnessConfig) -> Self {
        Self::with_experiment(host, config, ExperimentId::random())
    }

    pub fn with_experiment(host: H, config: HarnessConfig, experiment_id: ExperimentId) -> Self {
        Self { host, config, experiment_id, controller: ProportionalController }
    }

    pub fn host(&self) -> &H { &self.host }
    pub fn experiment_id(&self) -> &ExperimentId { &self.experiment_id }

    /// Runs every configured mission in order.
    ///
    /// # Errors
    /// Only failing to create the recordings directory aborts the run; host
    /// failures are retried or skipped inside the mission loop.
    pub async fn run(&self) -> Result<RunSummary, HarnessError> {
        ensure_recordings_dir(&self.config.recordings_dir)?;
        info!(
            "Experiment {} against {} client(s): {}",
            self.experiment_id,
            self.config.clients.len(),
            self.config.clients
        );

        let mut summary = RunSummary::default();
        for iteration in self.config.iterations() {
            let report = self.run_mission(iteration).await;
            summary.record(&report);
        }
        Ok(summary)
    }

    /// Launches, steers and waits out a single mission.
    pub async fn run_mission(&self, iteration: u64) -> MissionReport {
        let mission = MazeMission::for_iteration(iteration).with_validation(self.config.validate);
        info!("Mission {iteration} --- starting at {}", mission.origin());

        let mut report = MissionReport { iteration, ..MissionReport::default() };
        report.launch_retries = self.launch(&mission).await;

        let mut state = self.wait_for_start(&mut report).await;
        while state.is_mission_running() {
            state = self.poll(&state, &mut report).await;
            while state.awaits_observation() {
                sleep(self.config.timing.observation_poll).await;
                state = self.poll(&state, &mut report).await;
            }
            if state.is_mission_running() {
                self.react(&state, &mut report).await;
            }
        }

        info!("Mission has stopped.");
        log!("{} video frames, {} rewards", report.video_frames, report.rewards);
        sleep(self.config.timing.between_missions).await;
        report
    }

    /// Keeps asking the host to start `mission` until it agrees, returning the
    /// number of failed attempts.
    async fn launch(&self, mission: &MazeMission) -> u64 {
        let mut retries = 0;
        loop {
            // the host consumes the record spec, every attempt needs its own
            let recording = MissionRecordSpec::for_iteration(&self.config.recordings_dir, mission.iteration());
            match self
                .host
                .start_mission(mission, &self.config.clients, &recording, 0, &self.experiment_id)
                .await
            {
                Ok(()) => return retries,
                Err(err) => {
                    error!("Error starting mission: {}", err.reason());
                    log!("Waiting and retrying");
                    retries += 1;
                    sleep(self.config.timing.launch_retry).await;
                }
            }
        }
    }

    async fn wait_for_start(&self, report: &mut MissionReport) -> WorldState {
        progress!("Waiting for the mission to start ");
        let mut state = self.poll(&WorldState::default(), report).await;
        while !state.is_mission_running() {
            progress!(".");
            sleep(self.config.timing.start_poll).await;
            state = self.poll(&state, report).await;
        }
        progress!("\n");
        state
    }

    async fn poll(&self, last: &WorldState, report: &mut MissionReport) -> WorldState {
        match self.host.world_state().await {
            Ok(state) => {
                report.rewards += state.number_of_rewards_since_last_state() as u64;
                report.video_frames += state.number_of_video_frames_since_last_state() as u64;
                for err in state.errors() {
                    warn!("Host error at {}: {}", err.timestamp().format("%H:%M:%S%.3f"), err.text());
                }
                state
            }
            Err(err) => {
                report.poll_failures += 1;
                warn!("Failed to fetch world state: {}", err.reason());
                last.carried_over()
            }
        }
    }

    /// Turns the oldest pending observation into commands and sends them.
    async fn react(&self, state: &WorldState, report: &mut MissionReport) {
        let Some(first) = state.observations().first() else {
            return;
        };
        report.observations += 1;
        let observation = match Observation::from_json(first.text()) {
            Ok(ob) => ob,
            Err(err) => {
                report.malformed_observations += 1;
                warn!("Skipping malformed observation {:?}: {err:?}", first.text());
                return;
            }
        };
        event!("yawDelta {}", observation.yaw_delta());

        for command in self.controller.react(&observation) {
            if let Err(err) = self.host.send_command(&command.to_string()).await {
                // rest of this step is dropped, the next observation brings fresh commands
                report.commands_failed += 1;
                error!("Failed to send command: {}", err.reason());
                break;
            }
            report.commands_sent += 1;
        }
    }
}
