// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Wall-clock and resident-memory measurement around a load

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use sysinfo::{Pid, System};

/// Simple wall-clock timer
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

/// Source of process memory readings.
///
/// Readings are process-wide and coarse; callers must tolerate a negative
/// delta between two readings.
pub trait MemoryProbe {
    /// Resident set size in MB, or 0.0 when it cannot be read
    fn resident_mb(&mut self) -> f64;
}

/// Reads the current process's resident memory through `sysinfo`
pub struct ProcessMemoryProbe {
    system: System,
    pid: Option<Pid>,
}

impl ProcessMemoryProbe {
    pub fn new() -> Self {
        Self {
            system: System::new(),
            pid: sysinfo::get_current_pid().ok(),
        }
    }
}

impl Default for ProcessMemoryProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryProbe for ProcessMemoryProbe {
    fn resident_mb(&mut self) -> f64 {
        let Some(pid) = self.pid else {
            return 0.0;
        };
        if !self.system.refresh_process(pid) {
            return 0.0;
        }
        self.system
            .process(pid)
            .map(|process| process.memory() as f64 / (1024.0 * 1024.0))
            .unwrap_or(0.0)
    }
}

/// Time and memory cost of one load
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadMeasurement {
    pub load_time_seconds: f64,
    pub memory_delta_mb: f64,
}

impl LoadMeasurement {
    /// Run `load` between two timer and memory readings
    pub fn measure<T>(probe: &mut dyn MemoryProbe, load: impl FnOnce() -> T) -> (T, Self) {
        let memory_before = probe.resident_mb();
        let timer = Timer::start();

        let output = load();

        let load_time_seconds = timer.elapsed_secs();
        let memory_after = probe.resident_mb();

        (
            output,
            Self {
                load_time_seconds,
                memory_delta_mb: memory_after - memory_before,
            },
        )
    }
}
