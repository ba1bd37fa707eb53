use strum_macros::Display;

/// The part of a host observation the controller cares about.
///
/// Observations arrive as JSON objects; fields other than `yawDelta` are
/// ignored and a missing `yawDelta` reads as zero.
#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Observation {
    #[serde(rename = "yawDelta", default)]
    yaw_delta: f64,
}

impl Observation {
    pub fn new(yaw_delta: f64) -> Self { Self { yaw_delta } }

    pub fn from_json(text: &str) -> Result<Self, ObservationError> {
        match serde_json::from_str::<serde_json::Value>(text)? {
            object @ serde_json::Value::Object(_) => Ok(serde_json::from_value(object)?),
            _ => Err(ObservationError::NotAnObject),
        }
    }

    /// Signed yaw correction towards the optimal maze path.
    pub fn yaw_delta(&self) -> f64 { self.yaw_delta }
}

#[derive(Debug, Display)]
pub enum ObservationError {
    Malformed(serde_json::Error),
    NotAnObject,
}

impl std::error::Error for ObservationError {}

impl From<serde_json::Error> for ObservationError {
    fn from(value: serde_json::Error) -> Self { ObservationError::Malformed(value) }
}
