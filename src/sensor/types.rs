use std::fmt;

use serde::Serialize;

/// Kind of measurement a sensor reports, which fixes its unit.
///
/// The set is extensible; a full collector adds kinds like temperatures and clock
/// rates for the other hardware classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
pub enum SensorType {
    /// Utilization percentage, expected range 0-100.
    Load,
    /// Size in gigabytes.
    Data,
    /// Size in megabytes.
    SmallData,
}

impl SensorType {
    /// Unit suffix for display purposes.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Load => "%",
            Self::Data => "GB",
            Self::SmallData => "MB",
        }
    }

    /// Lowercase tag used when deriving sensor identifiers.
    pub(crate) fn tag(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Data => "data",
            Self::SmallData => "smalldata",
        }
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load => write!(f, "Load"),
            Self::Data => write!(f, "Data"),
            Self::SmallData => write!(f, "SmallData"),
        }
    }
}
