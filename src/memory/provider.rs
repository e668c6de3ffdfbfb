use serde::Serialize;

use crate::error::Result;

#[cfg(test)]
use mockall::automock;

/// One read of the system-wide physical memory counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SystemMemory {
    /// Total physical memory in bytes.
    pub total_bytes: u64,
    /// Physical memory currently available in bytes.
    pub available_bytes: u64,
}

/// One read of the calling process's memory counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessMemory {
    /// Resident working-set size in bytes.
    pub working_set_bytes: u64,
}

/// Source of memory snapshots.
///
/// Platform bindings live entirely behind this trait; the core never sees an OS
/// struct layout. The two queries are independent and each may fail on its own.
#[cfg_attr(test, automock)]
pub trait MemorySnapshotProvider: Send + Sync {
    /// Query system-wide physical memory counters.
    fn query_system_memory(&self) -> Result<SystemMemory>;

    /// Query the current process's memory counters.
    fn query_process_memory(&self) -> Result<ProcessMemory>;
}
