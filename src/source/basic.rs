// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Basic mode: file metadata only

use super::{AccessMode, ArtifactDescriptor, ArtifactView, FileProperties, MeshSource};
use crate::error::EvalResult;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Simulated parse time standing in for the skipped geometry parser
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadDelay {
    pub enabled: bool,
    pub secs_per_mb: f64,
    pub max_secs: f64,
}

impl LoadDelay {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// `min(max_secs, size_mb * secs_per_mb)`, zero when disabled
    pub fn duration_for(&self, size_mb: f64) -> Duration {
        if !self.enabled {
            return Duration::ZERO;
        }
        let secs = (size_mb * self.secs_per_mb).min(self.max_secs).max(0.0);
        Duration::from_secs_f64(secs)
    }
}

impl Default for LoadDelay {
    fn default() -> Self {
        Self {
            enabled: true,
            secs_per_mb: 0.1,
            max_secs: 2.0,
        }
    }
}

/// Reads existence, size and extension; never opens the geometry
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicMeshSource {
    delay: LoadDelay,
}

impl BasicMeshSource {
    pub fn new(delay: LoadDelay) -> Self {
        Self { delay }
    }
}

impl MeshSource for BasicMeshSource {
    fn mode(&self) -> AccessMode {
        AccessMode::Basic
    }

    fn acquire(&self, descriptor: &ArtifactDescriptor) -> EvalResult<ArtifactView> {
        let file = FileProperties::inspect(descriptor)?;

        let delay = self.delay.duration_for(file.size_mb);
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }

        Ok(ArtifactView::FileOnly(file))
    }
}
