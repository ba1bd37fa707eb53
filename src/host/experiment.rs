use std::fmt::{Display, Formatter};

/// Identifies one run of the harness towards the host.
///
/// All agents of a multi-agent mission have to pass the same id so none of
/// them joins the wrong experiment. A fresh random (version 4) UUID is drawn
/// per process.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExperimentId(String);

impl ExperimentId {
    pub fn random() -> Self { Self::from_bits(rand::random::<u128>()) }

    /// Formats `bits` as a version 4, variant 1 UUID.
    fn from_bits(bits: u128) -> Self {
        let uuid_bits = (bits & !(0xF << 76) & !(0x3 << 62)) | (0x4 << 76) | (0x2 << 62);
        let hex = format!("{uuid_bits:032x}");
        Self(format!("{}-{}-{}-{}-{}", &hex[..8], &hex[8..12], &hex[12..16], &hex[16..20], &hex[20..]))
    }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for ExperimentId {
    fn from(value: &str) -> Self { Self(value.to_string()) }
}

impl Display for ExperimentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { f.write_str(&self.0) }
}
