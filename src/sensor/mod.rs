//! Sensors: named, typed, continuously refreshed measurement slots.
//!
//! Every sensor belongs to exactly one hardware device and is created during that
//! device's construction. The device is the only writer; readers observe the
//! latest published value through [`Sensor::value`] at any time between updates.

mod types;

pub use types::SensorType;

#[cfg(test)]
mod tests;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::hardware::Identifier;

/// Shared value storage for every sensor of one device.
///
/// All slots sit behind a single lock so a device can publish a full set of new
/// readings in one critical section and readers never observe a torn update.
#[derive(Debug, Default)]
pub struct ValueBank {
    slots: RwLock<Vec<Option<f64>>>,
}

impl ValueBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve one slot, initially unset.
    fn register(&self) -> usize {
        let mut slots = self.slots.write();
        slots.push(None);
        slots.len() - 1
    }

    fn read(&self, slot: usize) -> Option<f64> {
        self.slots.read()[slot]
    }

    fn write(&self, slot: usize, value: f64) {
        self.slots.write()[slot] = Some(value);
    }

    /// Write a batch of readings under one write lock.
    ///
    /// Every sensor in the batch must have been registered in this bank.
    pub fn publish(&self, values: &[(&Sensor, f64)]) {
        let mut slots = self.slots.write();
        for (sensor, value) in values {
            slots[sensor.slot] = Some(*value);
        }
    }
}

/// A named, typed measurement slot owned by exactly one hardware device.
#[derive(Debug)]
pub struct Sensor {
    name: String,
    index: u32,
    sensor_type: SensorType,
    identifier: Identifier,
    active: AtomicBool,
    bank: Arc<ValueBank>,
    slot: usize,
}

impl Sensor {
    /// Create and register a sensor in the device's value bank.
    ///
    /// The value starts unset and stays unset until the first successful update.
    /// The index disambiguates same-named sensors within one device.
    pub fn new(
        name: impl Into<String>,
        index: u32,
        sensor_type: SensorType,
        hardware: &Identifier,
        bank: &Arc<ValueBank>,
    ) -> Self {
        let slot = bank.register();
        let identifier = hardware.child(sensor_type.tag()).child(index);
        Self {
            name: name.into(),
            index,
            sensor_type,
            identifier,
            active: AtomicBool::new(false),
            bank: Arc::clone(bank),
            slot,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn sensor_type(&self) -> SensorType {
        self.sensor_type
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// Mark the sensor as live and reportable. Called once by the owning device
    /// at registration time.
    pub fn activate(&self) {
        self.active.store(true, Ordering::Release);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Last successfully computed reading, or `None` if no update has ever
    /// succeeded. A failed update never clears a previous reading.
    pub fn value(&self) -> Option<f64> {
        self.bank.read(self.slot)
    }

    /// Overwrite the current reading. No range validation; the owning device is
    /// responsible for unit correctness.
    pub fn set_value(&self, value: f64) {
        self.bank.write(self.slot, value);
    }
}
