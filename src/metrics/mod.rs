// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Metric calculators
//!
//! Every calculator reads an [`ArtifactView`] and scores full-mode geometry,
//! basic-mode file metadata, or an unavailable artifact (always 0.0).

mod accuracy;
mod heritage;
mod interaction;
mod performance;
mod probe;
mod tables;

pub use accuracy::{
    format_heuristic, synthetic_fidelity_proxy, AccuracyKind, GeometricAccuracy,
    PROXY_NOISE_RATIO,
};
pub use heritage::HeritageSuitability;
pub use interaction::{InteractionCapabilities, InteractionQuality};
pub use performance::{fps_estimate, performance_score, PerformanceMetrics, FPS_FLOOR};
pub use probe::{LoadMeasurement, MemoryProbe, ProcessMemoryProbe, Timer};
pub use tables::{FormatTable, ACCURACY_BASE, DOCUMENTATION_SUPPORT};

use crate::source::ArtifactView;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// All four metrics for one artifact
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSet {
    pub geometric_accuracy: GeometricAccuracy,
    pub performance: PerformanceMetrics,
    pub interaction_quality: InteractionQuality,
    pub ch_suitability: HeritageSuitability,
}

impl MetricSet {
    pub fn compute<R: Rng + ?Sized>(
        view: &ArtifactView,
        measurement: LoadMeasurement,
        rng: &mut R,
    ) -> Self {
        Self {
            geometric_accuracy: GeometricAccuracy::evaluate(view, rng),
            performance: PerformanceMetrics::evaluate(view, measurement),
            interaction_quality: InteractionQuality::evaluate(view),
            ch_suitability: HeritageSuitability::evaluate(view),
        }
    }
}

/// Clamp into `[0, 1]`, mapping NaN to 0
pub(crate) fn unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
