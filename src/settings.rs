use std::fmt::Debug;

/// Opaque configuration collaborator threaded through hardware construction.
///
/// Persistence of sensor configuration lives outside this crate. Devices hold the
/// collaborator as a capability token for layers that do implement persistence and
/// never interpret its contents themselves.
pub trait Settings: Send + Sync + Debug {
    /// Check whether a value is stored for the given key.
    fn contains(&self, key: &str) -> bool;

    /// Read the stored value for the given key, if any.
    fn value(&self, key: &str) -> Option<String>;

    /// Store a value under the given key.
    fn set_value(&self, key: &str, value: &str);

    /// Remove the value stored under the given key.
    fn remove(&self, key: &str);
}

/// Settings implementation that stores nothing.
#[derive(Debug, Default)]
pub struct NullSettings;

impl Settings for NullSettings {
    fn contains(&self, _key: &str) -> bool {
        false
    }

    fn value(&self, _key: &str) -> Option<String> {
        None
    }

    fn set_value(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}
