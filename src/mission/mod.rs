//! Mission material handed to the host: where each maze goes, the mission
//! document itself and what gets recorded.

pub mod origin;
pub mod record;
pub mod template;

pub use origin::MazeOrigin;
pub use record::{MissionRecordSpec, ensure_recordings_dir};
pub use template::MazeMission;
