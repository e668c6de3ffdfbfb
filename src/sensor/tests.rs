use std::sync::Arc;

use super::*;
use crate::hardware::Identifier;

fn bank() -> Arc<ValueBank> {
    Arc::new(ValueBank::new())
}

#[test]
fn new_sensor_is_unset_and_inactive() {
    let sensor = Sensor::new("Memory", 0, SensorType::Load, &Identifier::new("ram"), &bank());
    assert_eq!(sensor.value(), None);
    assert!(!sensor.is_active());
}

#[test]
fn activate_marks_the_sensor_live() {
    let sensor = Sensor::new("Memory", 0, SensorType::Load, &Identifier::new("ram"), &bank());
    sensor.activate();
    assert!(sensor.is_active());
}

#[test]
fn set_value_overwrites_the_previous_reading() {
    let sensor = Sensor::new("Used Memory", 0, SensorType::Data, &Identifier::new("ram"), &bank());
    sensor.set_value(6.0);
    assert_eq!(sensor.value(), Some(6.0));
    sensor.set_value(4.5);
    assert_eq!(sensor.value(), Some(4.5));
}

#[test]
fn derives_identifier_from_owner_kind_and_index() {
    let owner = Identifier::new("ram");
    let sensor = Sensor::new("Available Memory", 1, SensorType::Data, &owner, &bank());
    assert_eq!(sensor.identifier().as_str(), "/ram/data/1");
}

#[test]
fn publish_writes_every_slot_in_the_batch() {
    let bank = bank();
    let owner = Identifier::new("ram");
    let a = Sensor::new("A", 0, SensorType::Load, &owner, &bank);
    let b = Sensor::new("B", 0, SensorType::Data, &owner, &bank);
    bank.publish(&[(&a, 1.5), (&b, 2.5)]);
    assert_eq!(a.value(), Some(1.5));
    assert_eq!(b.value(), Some(2.5));
}

#[test]
fn unit_strings_follow_the_sensor_kind() {
    assert_eq!(SensorType::Load.unit(), "%");
    assert_eq!(SensorType::Data.unit(), "GB");
    assert_eq!(SensorType::SmallData.unit(), "MB");
}
