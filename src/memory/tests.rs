use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::*;
use crate::error::Error;
use crate::settings::NullSettings;

const GIB: u64 = 1024 * 1024 * 1024;
const MIB: u64 = 1024 * 1024;

fn device_with(provider: MockMemorySnapshotProvider) -> MemoryDevice {
    MemoryDevice::new("RAM", Box::new(provider), Arc::new(NullSettings))
}

fn healthy_provider(total: u64, available: u64, working_set: u64) -> MockMemorySnapshotProvider {
    let mut provider = MockMemorySnapshotProvider::new();
    provider
        .expect_query_system_memory()
        .returning(move || Ok(SystemMemory { total_bytes: total, available_bytes: available }));
    provider
        .expect_query_process_memory()
        .returning(move || Ok(ProcessMemory { working_set_bytes: working_set }));
    provider
}

fn values(device: &MemoryDevice) -> Vec<Option<f64>> {
    device.sensors().iter().map(|s| s.value()).collect()
}

#[test]
fn sensors_are_unset_before_the_first_update() {
    let device = device_with(MockMemorySnapshotProvider::new());
    assert_eq!(values(&device), vec![None; 5]);
}

#[test]
fn registers_exactly_five_sensors_in_fixed_roles() {
    let device = device_with(healthy_provider(8 * GIB, 2 * GIB, 512 * MIB));
    let roles: Vec<_> = device
        .sensors()
        .iter()
        .map(|s| (s.name(), s.index(), s.sensor_type()))
        .collect();
    assert_eq!(
        roles,
        vec![
            ("Memory", 0, SensorType::Load),
            ("App used memory", 0, SensorType::Load),
            ("App used memory", 0, SensorType::SmallData),
            ("Used Memory", 0, SensorType::Data),
            ("Available Memory", 1, SensorType::Data),
        ]
    );
    assert!(device.sensors().iter().all(|s| s.is_active()));

    device.update();
    device.update();
    assert_eq!(device.sensors().len(), 5);
}

#[test]
fn device_identity_is_stable() {
    let device = device_with(MockMemorySnapshotProvider::new());
    assert_eq!(device.identifier().as_str(), "/ram");
    assert_eq!(device.hardware_type(), HardwareType::Ram);
    assert_eq!(device.name(), "RAM");
    // The settings collaborator is held, not interpreted.
    assert!(!device.settings().contains("sensor.name"));
}

#[test]
fn converts_one_snapshot_into_sensor_units() {
    let device = device_with(healthy_provider(8 * GIB, 2 * GIB, 512 * MIB));
    device.update();

    assert_eq!(
        values(&device),
        vec![Some(75.0), Some(6.25), Some(512.0), Some(6.0), Some(2.0)]
    );
}

#[test]
fn system_load_complements_the_available_share() {
    for (total, available) in [(8 * GIB, 2 * GIB), (16 * GIB, 7 * GIB + 123), (3 * GIB + 5, GIB)] {
        let device = device_with(healthy_provider(total, available, MIB));
        device.update();

        let load = device.sensors()[SYSTEM_LOAD].value().unwrap();
        let available_share = (100.0 * available as f64) / total as f64;
        assert!((load + available_share - 100.0).abs() < 1e-9);
    }
}

#[test]
fn truncates_process_used_megabytes_toward_zero() {
    let device = device_with(healthy_provider(8 * GIB, 2 * GIB, 512 * MIB + 700 * 1024));
    device.update();
    assert_eq!(device.sensors()[PROCESS_USED].value(), Some(512.0));
}

#[test]
fn failed_system_query_mutates_nothing() {
    let mut provider = MockMemorySnapshotProvider::new();
    provider
        .expect_query_system_memory()
        .returning(|| Err(Error::snapshot_unavailable("meminfo gone")));
    provider.expect_query_process_memory().times(0);

    let device = device_with(provider);
    device.update();
    assert_eq!(values(&device), vec![None; 5]);
}

#[test]
fn failed_process_query_alone_still_mutates_nothing() {
    let mut provider = MockMemorySnapshotProvider::new();
    provider
        .expect_query_system_memory()
        .returning(|| Ok(SystemMemory { total_bytes: 8 * GIB, available_bytes: 2 * GIB }));
    provider
        .expect_query_process_memory()
        .returning(|| Err(Error::snapshot_unavailable("statm gone")));

    let device = device_with(provider);
    device.update();
    assert_eq!(values(&device), vec![None; 5]);
}

#[test]
fn failure_after_success_keeps_the_previous_readings() {
    let healthy = Arc::new(AtomicBool::new(true));

    let mut provider = MockMemorySnapshotProvider::new();
    let flag = Arc::clone(&healthy);
    provider.expect_query_system_memory().returning(move || {
        if flag.load(Ordering::SeqCst) {
            Ok(SystemMemory { total_bytes: 8 * GIB, available_bytes: 2 * GIB })
        } else {
            Err(Error::snapshot_unavailable("transient"))
        }
    });
    provider
        .expect_query_process_memory()
        .returning(|| Ok(ProcessMemory { working_set_bytes: 512 * MIB }));

    let device = device_with(provider);
    device.update();
    let before = values(&device);
    assert!(before.iter().all(Option::is_some));

    healthy.store(false, Ordering::SeqCst);
    device.update();
    assert_eq!(values(&device), before);
}

#[test]
fn identical_snapshots_yield_identical_readings() {
    let device = device_with(healthy_provider(8 * GIB, 2 * GIB, 512 * MIB));
    device.update();
    let first = values(&device);
    device.update();
    assert_eq!(values(&device), first);
}

#[test]
fn zero_total_publishes_the_unguarded_division_results() {
    let device = device_with(healthy_provider(0, 0, MIB));
    device.update();

    assert!(device.sensors()[SYSTEM_LOAD].value().unwrap().is_nan());
    assert!(device.sensors()[PROCESS_LOAD].value().unwrap().is_infinite());
}
