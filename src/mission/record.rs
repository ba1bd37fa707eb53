use std::io;
use std::path::{Path, PathBuf};

/// Frame rate of the per-mission MP4 recording.
pub const MP4_FRAMES_PER_SECOND: u32 = 24;
/// Bit rate of the per-mission MP4 recording.
pub const MP4_BIT_RATE: u64 = 400_000;

/// Video settings of a recording.
#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mp4Recording {
    pub(crate) frames_per_second: u32,
    pub(crate) bit_rate: u64,
}

/// Describes what the host should record for one mission and where to put it.
///
/// The host does not reuse recording specs, so a fresh one is built for every
/// launch attempt.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MissionRecordSpec {
    destination: PathBuf,
    record_commands: bool,
    mp4: Option<Mp4Recording>,
}

impl MissionRecordSpec {
    /// A spec that writes to `destination` and records nothing yet.
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self { destination: destination.into(), record_commands: false, mp4: None }
    }

    /// The recording of quilt iteration `iteration`: commands plus video, stored
    /// as `Quilt_<iteration>.tgz` inside `recordings_dir`.
    pub fn for_iteration(recordings_dir: &Path, iteration: u64) -> Self {
        let mut spec = Self::new(recordings_dir.join(format!("Quilt_{iteration}.tgz")));
        spec.record_commands();
        spec.record_mp4(MP4_FRAMES_PER_SECOND, MP4_BIT_RATE);
        spec
    }

    pub fn record_commands(&mut self) { self.record_commands = true; }

    pub fn record_mp4(&mut self, frames_per_second: u32, bit_rate: u64) {
        self.mp4 = Some(Mp4Recording { frames_per_second, bit_rate });
    }

    pub fn destination(&self) -> &Path { &self.destination }
    pub fn records_commands(&self) -> bool { self.record_commands }
    pub fn mp4(&self) -> Option<Mp4Recording> { self.mp4 }
}

/// Creates the directory the host writes recordings into.
///
/// The host will not create missing folders itself. A directory that already
/// exists is fine; any other failure is returned to the caller.
pub fn ensure_recordings_dir(path: &Path) -> io::Result<()> {
    match std::fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(err) => Err(err),
    }
}
