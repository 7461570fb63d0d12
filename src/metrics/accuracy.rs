// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometric accuracy
//!
//! No ground-truth scan is available, so full mode scores a *synthetic
//! fidelity proxy*: every unique edge is perturbed with Gaussian noise and
//! the perturbation error is normalised. The result says nothing about how
//! faithful the mesh is to the physical artifact and is always labelled
//! [`AccuracyKind::SyntheticFidelityProxy`] in output.

use super::tables::ACCURACY_BASE;
use super::unit;
use crate::io::MeshFormat;
use crate::source::ArtifactView;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

/// Relative standard deviation of the edge-length perturbation
pub const PROXY_NOISE_RATIO: f64 = 0.01;

/// File size at which the basic-mode detail factor saturates
const DETAIL_SATURATION_MB: f64 = 10.0;

/// What the accuracy number actually measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccuracyKind {
    SyntheticFidelityProxy,
    FormatHeuristic,
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometricAccuracy {
    pub score: f64,
    pub kind: AccuracyKind,
}

impl GeometricAccuracy {
    pub fn evaluate<R: Rng + ?Sized>(view: &ArtifactView, rng: &mut R) -> Self {
        match view {
            ArtifactView::Geometry(data) => Self {
                score: synthetic_fidelity_proxy(&data.mesh.edge_lengths(), rng),
                kind: AccuracyKind::SyntheticFidelityProxy,
            },
            ArtifactView::FileOnly(file) => Self {
                score: format_heuristic(&file.format, file.size_mb),
                kind: AccuracyKind::FormatHeuristic,
            },
            ArtifactView::Unavailable { .. } => Self {
                score: 0.0,
                kind: AccuracyKind::Unavailable,
            },
        }
    }
}

/// `1 - sum|l - l'| / (n * max l)` where `l' = l + N(0, 0.01 l)`.
///
/// Returns 1.0 when there are no edges or every edge has zero length.
pub fn synthetic_fidelity_proxy<R: Rng + ?Sized>(edge_lengths: &[f64], rng: &mut R) -> f64 {
    let max_length = edge_lengths.iter().copied().fold(0.0_f64, f64::max);
    if max_length <= 0.0 || !max_length.is_finite() {
        return 1.0;
    }

    let total_error: f64 = edge_lengths
        .iter()
        .map(|&length| match Normal::new(0.0, PROXY_NOISE_RATIO * length.abs()) {
            Ok(noise) => noise.sample(rng).abs(),
            Err(_) => 0.0,
        })
        .sum();

    unit(1.0 - total_error / (edge_lengths.len() as f64 * max_length))
}

/// Basic-mode score: format base scaled by `0.8 + 0.2 * min(1, size_mb / 10)`
pub fn format_heuristic(format: &MeshFormat, size_mb: f64) -> f64 {
    let detail_factor = 0.8 + 0.2 * (size_mb.max(0.0) / DETAIL_SATURATION_MB).min(1.0);
    unit(ACCURACY_BASE.lookup(format) * detail_factor)
}
