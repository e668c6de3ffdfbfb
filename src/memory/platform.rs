//! `/proc`-backed snapshot provider for Linux hosts.

use std::fs;

use once_cell::sync::Lazy;

use crate::error::{Error, Result};
use crate::memory::provider::{MemorySnapshotProvider, ProcessMemory, SystemMemory};

static PAGE_SIZE: Lazy<u64> = Lazy::new(|| {
    // Cannot fail for _SC_PAGESIZE on any supported kernel.
    unsafe { libc::sysconf(libc::_SC_PAGESIZE) as u64 }
});

/// Snapshot provider reading `/proc/meminfo` and `/proc/self/statm`.
#[derive(Debug, Default)]
pub struct ProcMemoryProvider;

impl ProcMemoryProvider {
    pub fn new() -> Self {
        Self
    }
}

fn meminfo_kib(contents: &str, field: &str) -> Result<u64> {
    for line in contents.lines() {
        if let Some(rest) = line.strip_prefix(field) {
            let value = rest
                .trim_start_matches(':')
                .split_whitespace()
                .next()
                .ok_or_else(|| Error::invalid_data(format!("empty {} entry in /proc/meminfo", field)))?;
            return value
                .parse::<u64>()
                .map_err(|e| Error::invalid_data(format!("bad {} value {:?}: {}", field, value, e)));
        }
    }
    Err(Error::invalid_data(format!("{} missing from /proc/meminfo", field)))
}

impl MemorySnapshotProvider for ProcMemoryProvider {
    fn query_system_memory(&self) -> Result<SystemMemory> {
        let contents = fs::read_to_string("/proc/meminfo")?;
        let total_bytes = meminfo_kib(&contents, "MemTotal")? * 1024;
        let available_bytes = meminfo_kib(&contents, "MemAvailable")? * 1024;
        Ok(SystemMemory { total_bytes, available_bytes })
    }

    fn query_process_memory(&self) -> Result<ProcessMemory> {
        let contents = fs::read_to_string("/proc/self/statm")?;
        let resident_pages = contents
            .split_whitespace()
            .nth(1)
            .ok_or_else(|| Error::invalid_data("truncated /proc/self/statm"))?
            .parse::<u64>()
            .map_err(|e| Error::invalid_data(format!("bad resident page count: {}", e)))?;
        Ok(ProcessMemory { working_set_bytes: resident_pages * *PAGE_SIZE })
    }
}
