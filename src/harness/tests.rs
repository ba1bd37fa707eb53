use super::{HarnessError, RunSummary, StressRunner};
use crate::config::{HarnessConfig, HarnessTiming};
use crate::host::{AgentHost, ClientPool, ExperimentId, HostError, TimestampedString, WorldState};
use crate::mission::{MazeMission, MissionRecordSpec};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone, PartialEq)]
struct Launch {
    iteration: u64,
    origin: (i64, i64, i64),
    destination: PathBuf,
    experiment_id: String,
    validate: bool,
}

/// Host double replaying a fixed script of world states.
#[derive(Default)]
struct ScriptedHost {
    launch_failures: AtomicUsize,
    states: Mutex<VecDeque<Option<WorldState>>>,
    failing_commands: Mutex<VecDeque<bool>>,
    launches: Mutex<Vec<Launch>>,
    commands: Mutex<Vec<String>>,
}

impl ScriptedHost {
    fn with_states(states: impl IntoIterator<Item = Option<WorldState>>) -> Self {
        let host = Self::default();
        host.states.lock().unwrap().extend(states);
        host
    }

    fn failing_launches(self, count: usize) -> Self {
        self.launch_failures.store(count, Ordering::SeqCst);
        self
    }

    fn failing_commands(self, pattern: &[bool]) -> Self {
        self.failing_commands.lock().unwrap().extend(pattern.iter().copied());
        self
    }

    fn launches(&self) -> Vec<Launch> { self.launches.lock().unwrap().clone() }
    fn commands(&self) -> Vec<String> { self.commands.lock().unwrap().clone() }
}

#[async_trait]
impl AgentHost for ScriptedHost {
    async fn start_mission(
        &self,
        mission: &MazeMission,
        _pool: &ClientPool,
        recording: &MissionRecordSpec,
        role: u32,
        experiment_id: &ExperimentId,
    ) -> Result<(), HostError> {
        assert_eq!(role, 0);
        assert!(recording.records_commands());
        self.launches.lock().unwrap().push(Launch {
            iteration: mission.iteration(),
            origin: (mission.origin().x(), mission.origin().y(), mission.origin().z()),
            destination: recording.destination().to_path_buf(),
            experiment_id: experiment_id.to_string(),
            validate: mission.validate(),
        });
        let pending = self.launch_failures.load(Ordering::SeqCst);
        if pending > 0 {
            self.launch_failures.store(pending - 1, Ordering::SeqCst);
            return Err(HostError::Launch("Failed to find an available client for this mission".into()));
        }
        Ok(())
    }

    async fn world_state(&self) -> Result<WorldState, HostError> {
        match self.states.lock().unwrap().pop_front() {
            Some(Some(state)) => Ok(state),
            Some(None) => Err(HostError::Command("bridge unavailable".into())),
            None => Ok(WorldState::stopped()),
        }
    }

    async fn send_command(&self, command: &str) -> Result<(), HostError> {
        let fail = self.failing_commands.lock().unwrap().pop_front().unwrap_or(false);
        if fail {
            return Err(HostError::Command(format!("rejected {command}")));
        }
        self.commands.lock().unwrap().push(command.to_string());
        Ok(())
    }
}

fn observed(texts: &[&str]) -> Option<WorldState> {
    Some(WorldState::running(texts.iter().map(|t| TimestampedString::new(Utc::now(), *t)).collect()))
}

fn idle() -> Option<WorldState> { Some(WorldState::running(vec![])) }

fn not_started() -> Option<WorldState> { Some(WorldState::default()) }

fn stopped() -> Option<WorldState> { Some(WorldState::stopped()) }

fn scratch_config(name: &str, first_iteration: u64, mission_count: u64) -> HarnessConfig {
    HarnessConfig {
        recordings_dir: std::env::temp_dir().join(format!("quilt-harness-{name}-{}", rand::random::<u64>())),
        first_iteration,
        mission_count,
        timing: HarnessTiming::default(),
        ..HarnessConfig::default()
    }
}

fn runner(host: ScriptedHost, config: HarnessConfig) -> StressRunner<ScriptedHost> {
    StressRunner::with_experiment(host, config, ExperimentId::from("test-experiment"))
}

#[tokio::test(start_paused = true)]
async fn steers_with_the_first_pending_observation() {
    let host = ScriptedHost::with_states([
        idle(),
        idle(),
        observed(&[r#"{"yawDelta": 0.5}"#, r#"{"yawDelta": -1.0}"#]),
        observed(&[r#"{"yawDelta": -0.25}"#]),
        stopped(),
    ]);
    let config = scratch_config("steer", 0, 1);
    let dir = config.recordings_dir.clone();
    let runner = runner(host, config);

    let summary = runner.run().await.unwrap();

    assert_eq!(runner.host().commands(), vec!["move 0.5", "turn 0.5", "move 0.75", "turn -0.25"]);
    assert_eq!(
        summary,
        RunSummary { missions: 1, observations: 2, commands_sent: 4, ..RunSummary::default() }
    );
    assert!(dir.is_dir());
    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test(start_paused = true)]
async fn missing_yaw_delta_drives_straight() {
    let host = ScriptedHost::with_states([idle(), observed(&[r#"{"XPos": 3.5}"#]), stopped()]);
    let config = scratch_config("straight", 0, 1);
    let dir = config.recordings_dir.clone();
    let runner = runner(host, config);

    runner.run().await.unwrap();

    assert_eq!(runner.host().commands(), vec!["move 1", "turn 0"]);
    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test(start_paused = true)]
async fn launch_is_retried_until_the_host_accepts() {
    let host = ScriptedHost::with_states([idle(), stopped()]).failing_launches(3);
    let config = scratch_config("retry", 7, 1);
    let dir = config.recordings_dir.clone();
    let runner = runner(host, config);

    let started = Instant::now();
    let summary = runner.run().await.unwrap();

    assert_eq!(summary.launch_retries, 3);
    assert!(started.elapsed() >= Duration::from_secs(3));
    let launches = runner.host().launches();
    assert_eq!(launches.len(), 4);
    for launch in &launches {
        assert_eq!(launch.iteration, 7);
        assert_eq!(launch.destination, dir.join("Quilt_7.tgz"));
        assert_eq!(launch.experiment_id, "test-experiment");
    }
    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test(start_paused = true)]
async fn waits_until_the_mission_is_running() {
    let host = ScriptedHost::with_states([not_started(), not_started(), not_started(), idle(), stopped()]);
    let config = scratch_config("wait", 0, 1);
    let dir = config.recordings_dir.clone();
    let runner = runner(host, config);

    let started = Instant::now();
    let summary = runner.run().await.unwrap();

    // three polls on a mission that has not started yet, 100ms apart, plus the pause after the mission
    assert!(started.elapsed() >= Duration::from_millis(300 + 500));
    assert_eq!(summary.missions, 1);
    assert!(runner.host().commands().is_empty());
    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test(start_paused = true)]
async fn failed_command_does_not_end_the_mission() {
    let host = ScriptedHost::with_states([
        idle(),
        observed(&[r#"{"yawDelta": 0.5}"#]),
        observed(&[r#"{"yawDelta": 0.0}"#]),
        stopped(),
    ])
    .failing_commands(&[true]);
    let config = scratch_config("cmdfail", 0, 1);
    let dir = config.recordings_dir.clone();
    let runner = runner(host, config);

    let summary = runner.run().await.unwrap();

    // the failed move takes its turn with it; the next step goes through
    assert_eq!(runner.host().commands(), vec!["move 1", "turn 0"]);
    assert_eq!(summary.commands_failed, 1);
    assert_eq!(summary.commands_sent, 2);
    assert_eq!(summary.observations, 2);
    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test(start_paused = true)]
async fn malformed_observation_is_skipped() {
    let host = ScriptedHost::with_states([
        idle(),
        observed(&["not json"]),
        observed(&[r#"{"yawDelta": 0.5}"#]),
        stopped(),
    ]);
    let config = scratch_config("malformed", 0, 1);
    let dir = config.recordings_dir.clone();
    let runner = runner(host, config);

    let summary = runner.run().await.unwrap();

    assert_eq!(runner.host().commands(), vec!["move 0.5", "turn 0.5"]);
    assert_eq!(summary.malformed_observations, 1);
    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test(start_paused = true)]
async fn failed_poll_keeps_the_mission_alive() {
    let host = ScriptedHost::with_states([idle(), None, None, observed(&[r#"{"yawDelta": -0.5}"#]), stopped()]);
    let config = scratch_config("poll", 0, 1);
    let dir = config.recordings_dir.clone();
    let runner = runner(host, config);

    let summary = runner.run().await.unwrap();

    assert_eq!(summary.poll_failures, 2);
    assert_eq!(runner.host().commands(), vec!["move 0.5", "turn -0.5"]);
    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test(start_paused = true)]
async fn consecutive_missions_walk_the_quilt() {
    let host = ScriptedHost::with_states([idle(), stopped(), idle(), stopped(), idle(), stopped()]);
    let mut config = scratch_config("quilt", 63, 3);
    config.validate = false;
    let dir = config.recordings_dir.clone();
    let runner = runner(host, config);

    let summary = runner.run().await.unwrap();

    assert_eq!(summary.missions, 3);
    let launches = runner.host().launches();
    let origins: Vec<_> = launches.iter().map(|l| (l.iteration, l.origin)).collect();
    assert_eq!(origins, vec![(63, (1008, 200, 0)), (64, (0, 200, 16)), (65, (16, 200, 16))]);
    assert!(launches.iter().all(|l| !l.validate));
    assert_eq!(launches[2].destination, dir.join("Quilt_65.tgz"));
    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test(start_paused = true)]
async fn unusable_recordings_dir_aborts_before_launch() {
    let blocker = std::env::temp_dir().join(format!("quilt-harness-blocker-{}", rand::random::<u64>()));
    std::fs::write(&blocker, b"file in the way").unwrap();
    let config = HarnessConfig { recordings_dir: blocker.join("recordings"), ..scratch_config("blocked", 0, 1) };
    let runner = runner(ScriptedHost::default(), config);

    let result = runner.run().await;

    assert!(matches!(result, Err(HarnessError::RecordingsDir(_))));
    assert!(runner.host().launches().is_empty());
    std::fs::remove_file(blocker).unwrap();
}

#[test]
fn fresh_runners_get_distinct_experiments() {
    let a = StressRunner::new(ScriptedHost::default(), HarnessConfig::default());
    let b = StressRunner::new(ScriptedHost::default(), HarnessConfig::default());
    assert_ne!(a.experiment_id(), b.experiment_id());
}

#[test]
fn mission_documents_are_launched_as_rendered() {
    let mission = MazeMission::for_iteration(65);
    assert!(mission.xml().contains(r#"xOrigin="16" yOrigin="200" zOrigin="16""#));
}

#[tokio::test(start_paused = true)]
async fn rewards_and_frames_are_tallied() {
    let with_counts = |frames, rewards| {
        let mut state = WorldState::running(vec![]);
        state.number_of_video_frames_since_last_state = frames;
        state.number_of_rewards_since_last_state = rewards;
        Some(state)
    };
    let mut last = WorldState::stopped();
    last.number_of_video_frames_since_last_state = 2;
    let host = ScriptedHost::with_states([with_counts(3, 0), with_counts(4, 1), Some(last)]);
    let config = scratch_config("tally", 0, 1);
    let dir = config.recordings_dir.clone();
    let runner = runner(host, config);

    let summary = runner.run().await.unwrap();

    assert_eq!(summary.video_frames, 9);
    assert_eq!(summary.rewards, 1);
    std::fs::remove_dir_all(dir).unwrap();
}
