#![doc(html_root_url = "https://docs.rs/sensor-metrics/0.1.0")]
//! Sensor Metrics - polling-based hardware telemetry
//!
//! This crate models monitored hardware as logical devices that own a fixed set
//! of named, typed sensors. An external polling driver calls
//! [`Hardware::update`](hardware::Hardware::update) on a cadence; each device
//! pulls one snapshot from its platform boundary and publishes the derived
//! readings, and readers observe the latest values at any time in between. A
//! failed snapshot read never surfaces to the caller and never disturbs the
//! previously published readings.
//!
//! # Features
//!
//! - **Sensor model**: named, typed measurement slots with stable hierarchical
//!   identifiers and atomic multi-sensor publishes
//! - **Hardware contract**: fixed sensor sets and the absorb-all-failures update
//!   protocol
//! - **Memory device**: system and process memory telemetry behind an opaque
//!   snapshot provider, with a `/proc`-backed provider on Linux
//! - **Collector**: interval-driven polling loop and per-device reading streams
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
//! let device = Arc::new(MemoryDevice::new(
//!     "RAM",
//!     Box::new(FixedProvider),
//!     Arc::new(NullSettings),
//! ));
//!
//! let mut collector = Collector::new();
//! collector.register(device.clone());
//! collector.poll_once();
//!
//! for reading in readings(device.as_ref()) {
//!     println!(
//!         "{} {}: {:?} {}",
//!         reading.hardware,
//!         reading.sensor,
//!         reading.value,
//!         reading.sensor_type.unit()
//!     );
//! }
//! ```
//!
//! # Error Handling
//!
//! Snapshot providers return [`Result`]; the devices absorb those failures
//! inside `update()` by design (telemetry collection must not halt the polling
//! loop or crash the monitored process because one read failed transiently).
//! Provider implementations surface [`Error::Io`], [`Error::InvalidData`] or
//! [`Error::SnapshotUnavailable`] to describe what went wrong.

pub mod collector;
pub mod error;
pub mod hardware;
pub mod memory;
pub mod sensor;
pub mod settings;

pub use error::{Error, Result};

/// Re-export common types for convenience
pub mod prelude {
    pub use crate::collector::{readings, Collector, ReadingsStream, SensorReading};
    pub use crate::error::{Error, Result};
    pub use crate::hardware::{Hardware, HardwareType, Identifier};
    #[cfg(target_os = "linux")]
    pub use crate::memory::ProcMemoryProvider;
    pub use crate::memory::{MemoryDevice, MemorySnapshotProvider, ProcessMemory, SystemMemory};
    pub use crate::sensor::{Sensor, SensorType, ValueBank};
    pub use crate::settings::{NullSettings, Settings};
}
