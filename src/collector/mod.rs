//! Polling driver: fans [`Hardware::update`] out to registered devices on a
//! fixed cadence, and turns live sensors into detached, serializable readings.


use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::Stream;
use serde::Serialize;
use tracing::{debug, trace};

use crate::hardware::{Hardware, Identifier};
use crate::sensor::SensorType;

/// Point-in-time view of one sensor, detached from the live device.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorReading {
    pub hardware: Identifier,
    pub sensor: String,
    pub index: u32,
    pub sensor_type: SensorType,
    pub value: Option<f64>,
}

/// Capture the current readings of every active sensor on a device.
pub fn readings(hardware: &dyn Hardware) -> Vec<SensorReading> {
    hardware
        .sensors()
        .iter()
        .filter(|sensor| sensor.is_active())
        .map(|sensor| SensorReading {
            hardware: hardware.identifier().clone(),
            sensor: sensor.name().to_string(),
            index: sensor.index(),
            sensor_type: sensor.sensor_type(),
            value: sensor.value(),
        })
        .collect()
}

/// Drives updates for a set of hardware devices.
///
/// The collector never inspects update outcomes: [`Hardware::update`] absorbs
/// snapshot failures by contract, so one failing device cannot stall the loop or
/// starve the other devices.
#[derive(Default)]
pub struct Collector {
    devices: Vec<Arc<dyn Hardware>>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a device. Registration order is poll order.
    pub fn register(&mut self, device: Arc<dyn Hardware>) {
        debug!(device = %device.identifier(), "registering hardware");
        self.devices.push(device);
    }

    /// Registered devices, in poll order.
    pub fn hardware(&self) -> &[Arc<dyn Hardware>] {
        &self.devices
    }

    /// Synchronously update every device once, in registration order.
    pub fn poll_once(&self) {
        for device in &self.devices {
            trace!(device = %device.identifier(), "updating");
            device.update();
        }
    }

    /// Poll all devices on a fixed cadence until the future is dropped.
    ///
    /// Shutdown is the caller's affair: drop the future or race it against a
    /// shutdown signal.
    pub async fn run(&self, interval: Duration) {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            self.poll_once();
        }
    }
}

/// Stream of reading snapshots for a single device, one update per tick.
pub struct ReadingsStream {
    device: Arc<dyn Hardware>,
    interval: tokio::time::Interval,
}

impl ReadingsStream {
    /// Create a stream that updates `device` and yields its readings on every
    /// `interval` tick. The first tick completes immediately.
    pub fn new(device: Arc<dyn Hardware>, interval: Duration) -> Self {
        Self { device, interval: tokio::time::interval(interval) }
    }
}

impl Stream for ReadingsStream {
    type Item = Vec<SensorReading>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        match this.interval.poll_tick(cx) {
            Poll::Ready(_) => {
                this.device.update();
                Poll::Ready(Some(readings(this.device.as_ref())))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
