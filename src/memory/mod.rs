//! Memory telemetry: the RAM device and its snapshot boundary.
//!
//! [`MemoryDevice`] exposes physical memory as a logical hardware device with
//! five fixed sensors: system load %, process load %, process used memory (MB),
//! system used memory (GB) and system available memory (GB). Each update pulls
//! one snapshot from a [`MemorySnapshotProvider`] and publishes all five derived
//! readings together.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use sensor_metrics::prelude::*;
//!
//! struct FixedProvider;
//!
//! impl MemorySnapshotProvider for FixedProvider {
//!     fn query_system_memory(&self) -> Result<SystemMemory> {
//!         Ok(SystemMemory { total_bytes: 8 << 30, available_bytes: 2 << 30 })
//!     }
//!
//!     fn query_process_memory(&self) -> Result<ProcessMemory> {
//!         Ok(ProcessMemory { working_set_bytes: 512 << 20 })
//!     }
//! }
//!
//! let device = MemoryDevice::new("RAM", Box::new(FixedProvider), Arc::new(NullSettings));
//! device.update();
//! for sensor in device.sensors() {
//!     println!("{}: {:?} {}", sensor.name(), sensor.value(), sensor.sensor_type().unit());
//! }
//! ```

mod provider;

pub use provider::{MemorySnapshotProvider, ProcessMemory, SystemMemory};

#[cfg(target_os = "linux")]
mod platform;

#[cfg(target_os = "linux")]
pub use platform::ProcMemoryProvider;

#[cfg(test)]
pub(crate) use provider::MockMemorySnapshotProvider;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::debug;

use crate::hardware::{Hardware, HardwareType, Identifier};
use crate::sensor::{Sensor, SensorType, ValueBank};
use crate::settings::Settings;

const BYTES_PER_MIB: u64 = 1024 * 1024;
const BYTES_PER_GIB: f64 = (1024u64 * 1024 * 1024) as f64;

// Registration order of the five fixed sensor roles.
const SYSTEM_LOAD: usize = 0;
const PROCESS_LOAD: usize = 1;
const PROCESS_USED: usize = 2;
const SYSTEM_USED: usize = 3;
const SYSTEM_AVAILABLE: usize = 4;

/// Physical memory as a logical hardware device.
pub struct MemoryDevice {
    name: String,
    identifier: Identifier,
    provider: Box<dyn MemorySnapshotProvider>,
    settings: Arc<dyn Settings>,
    bank: Arc<ValueBank>,
    sensors: Vec<Sensor>,
}

impl MemoryDevice {
    /// Build the RAM device with its fixed sensor set.
    ///
    /// Sensor registration and activation happen exactly once here; the set
    /// never grows or shrinks afterwards.
    pub fn new(
        name: impl Into<String>,
        provider: Box<dyn MemorySnapshotProvider>,
        settings: Arc<dyn Settings>,
    ) -> Self {
        let identifier = Identifier::new("ram");
        let bank = Arc::new(ValueBank::new());

        let sensors = vec![
            Sensor::new("Memory", 0, SensorType::Load, &identifier, &bank),
            Sensor::new("App used memory", 0, SensorType::Load, &identifier, &bank),
            Sensor::new("App used memory", 0, SensorType::SmallData, &identifier, &bank),
            Sensor::new("Used Memory", 0, SensorType::Data, &identifier, &bank),
            Sensor::new("Available Memory", 1, SensorType::Data, &identifier, &bank),
        ];
        for sensor in &sensors {
            sensor.activate();
        }

        Self { name: name.into(), identifier, provider, settings, bank, sensors }
    }

    /// Configuration collaborator handed in at construction. The device only
    /// holds it; interpreting its contents is a concern of other layers.
    pub fn settings(&self) -> &Arc<dyn Settings> {
        &self.settings
    }
}

impl Hardware for MemoryDevice {
    fn name(&self) -> &str {
        &self.name
    }

    fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    fn hardware_type(&self) -> HardwareType {
        HardwareType::Ram
    }

    fn sensors(&self) -> &[Sensor] {
        &self.sensors
    }

    /// Pull one snapshot and publish all five readings in one critical section.
    ///
    /// Either query failing makes this a no-op: previous readings stay visible
    /// and the next poll retries. Loads are unclamped and a zero total is not
    /// guarded against, so such a snapshot publishes the raw IEEE-754 division
    /// results.
    fn update(&self) {
        let system = match self.provider.query_system_memory() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                debug!(device = %self.identifier, error = %err, "system memory query failed, keeping previous readings");
                return;
            }
        };
        let process = match self.provider.query_process_memory() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                debug!(device = %self.identifier, error = %err, "process memory query failed, keeping previous readings");
                return;
            }
        };

        let total = system.total_bytes as f64;
        let available = system.available_bytes as f64;
        let working_set = process.working_set_bytes as f64;

        let system_load = 100.0 - (100.0 * available) / total;
        let process_load = (100.0 * working_set) / total;
        // Truncating division: the MB reading drops the fractional mebibyte.
        let process_used_mb = (process.working_set_bytes / BYTES_PER_MIB) as f64;
        let system_used_gb = (total - available) / BYTES_PER_GIB;
        let system_available_gb = available / BYTES_PER_GIB;

        self.bank.publish(&[
            (&self.sensors[SYSTEM_LOAD], system_load),
            (&self.sensors[PROCESS_LOAD], process_load),
            (&self.sensors[PROCESS_USED], process_used_mb),
            (&self.sensors[SYSTEM_USED], system_used_gb),
            (&self.sensors[SYSTEM_AVAILABLE], system_available_gb),
        ]);
    }
}
