// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Runtime performance estimate

use super::probe::LoadMeasurement;
use crate::source::{ArtifactView, TriangleCount};
use serde::{Deserialize, Serialize};

/// Frame rate of an empty scene
const BASE_FPS: f64 = 60.0;
/// Lowest frame rate the estimate reports
pub const FPS_FLOOR: f64 = 15.0;
/// Triangles that cost one frame per second
const TRIANGLES_PER_FPS: f64 = 2000.0;

const MIN_LOAD_TIME_SECS: f64 = 0.1;
const MIN_MEMORY_COST: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub load_time_seconds: f64,
    /// Process-wide delta; negative when memory was released during the load
    pub memory_delta_mb: f64,
    pub triangle_count: usize,
    pub triangle_count_estimated: bool,
    pub fps_estimate: f64,
    pub performance_score: f64,
}

impl PerformanceMetrics {
    pub fn evaluate(view: &ArtifactView, measurement: LoadMeasurement) -> Self {
        let Some(triangles) = view.triangle_count() else {
            return Self {
                load_time_seconds: measurement.load_time_seconds,
                memory_delta_mb: measurement.memory_delta_mb,
                triangle_count: 0,
                triangle_count_estimated: false,
                fps_estimate: 0.0,
                performance_score: 0.0,
            };
        };

        let fps = fps_estimate(triangles.value());
        Self {
            load_time_seconds: measurement.load_time_seconds,
            memory_delta_mb: measurement.memory_delta_mb,
            triangle_count: triangles.value(),
            triangle_count_estimated: matches!(triangles, TriangleCount::Estimated(_)),
            fps_estimate: fps,
            performance_score: performance_score(
                fps,
                measurement.load_time_seconds,
                measurement.memory_delta_mb,
            ),
        }
    }
}

/// `max(15, 60 - triangles / 2000)`
pub fn fps_estimate(triangle_count: usize) -> f64 {
    (BASE_FPS - triangle_count as f64 / TRIANGLES_PER_FPS).max(FPS_FLOOR)
}

/// `(fps / max(0.1, t)) / max(1, memory_delta * t)`
///
/// Both divisors are floored so the score stays finite and positive for
/// zero load time and zero or negative memory deltas.
pub fn performance_score(fps: f64, load_time_seconds: f64, memory_delta_mb: f64) -> f64 {
    let load_time = load_time_seconds.max(MIN_LOAD_TIME_SECS);
    let memory_cost = (memory_delta_mb * load_time_seconds).max(MIN_MEMORY_COST);
    (fps * (1.0 / load_time)) / memory_cost
}
