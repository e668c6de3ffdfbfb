//! Hardware model: identifiers, device classes, and the update contract.
//!
//! A [`Hardware`] instance owns a fixed set of [`Sensor`]s registered at
//! construction time. An external polling driver calls [`Hardware::update`] on a
//! cadence; readers inspect [`Hardware::sensors`] at any time in between.


use std::fmt;

use serde::Serialize;

use crate::sensor::Sensor;

/// Stable hierarchical key distinguishing one hardware or sensor instance from
/// another of the same type.
///
/// Parts are joined with `/` and rendered with a leading slash, e.g. `/ram` or
/// `/ram/load/0`. Identifiers are used for lookup and correlation only, never for
/// ownership.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Build an identifier from a single base part.
    pub fn new(part: &str) -> Self {
        Identifier(format!("/{}", part.trim_matches('/').to_ascii_lowercase()))
    }

    /// Derive a child identifier by appending one more part.
    pub fn child(&self, part: impl fmt::Display) -> Self {
        Identifier(format!("{}/{}", self.0, part.to_string().to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Class of a monitored device. Only [`HardwareType::Ram`] has a device in this
/// crate; the set mirrors the classes a full collector discovers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
pub enum HardwareType {
    Ram,
    Cpu,
    Gpu,
    Storage,
}

impl fmt::Display for HardwareType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ram => write!(f, "RAM"),
            Self::Cpu => write!(f, "CPU"),
            Self::Gpu => write!(f, "GPU"),
            Self::Storage => write!(f, "Storage"),
        }
    }
}

/// Capability set every monitored device exposes.
///
/// The sensor set a device exposes is fixed at construction time and never grows
/// or shrinks afterwards.
pub trait Hardware: Send + Sync {
    /// Display name of the device.
    fn name(&self) -> &str;

    /// Stable identifier, unique per hardware instance within a process run.
    fn identifier(&self) -> &Identifier;

    /// Class of this device.
    fn hardware_type(&self) -> HardwareType;

    /// Read-only view of the owned sensors, in registration order.
    fn sensors(&self) -> &[Sensor];

    /// Refresh every sensor from one fresh snapshot.
    ///
    /// Must never propagate a failed snapshot read to the caller: on acquisition
    /// failure the implementation performs no sensor mutation and returns
    /// normally, leaving all sensors at their prior values (or unset, if no
    /// update ever succeeded). Retry happens implicitly on the next poll.
    fn update(&self);
}
