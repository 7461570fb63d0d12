// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Published baseline scores for alternative 3D representation techniques
//!
//! These literals are reference data: changing any of them changes every
//! report produced afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepresentationTechnique {
    TriangleMesh,
    PointCloud,
    VoxelGrid,
    NurbsSurfaces,
    SubdivisionSurfaces,
    ImplicitSurfaces,
}

impl RepresentationTechnique {
    pub const ALL: [RepresentationTechnique; 6] = [
        Self::TriangleMesh,
        Self::PointCloud,
        Self::VoxelGrid,
        Self::NurbsSurfaces,
        Self::SubdivisionSurfaces,
        Self::ImplicitSurfaces,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TriangleMesh => "triangle_mesh",
            Self::PointCloud => "point_cloud",
            Self::VoxelGrid => "voxel_grid",
            Self::NurbsSurfaces => "nurbs_surfaces",
            Self::SubdivisionSurfaces => "subdivision_surfaces",
            Self::ImplicitSurfaces => "implicit_surfaces",
        }
    }
}

impl fmt::Display for RepresentationTechnique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four headline metrics of one technique
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineScores {
    pub geometric_accuracy: f64,
    pub performance_score: f64,
    pub interaction_quality: f64,
    pub ch_suitability: f64,
}

const fn scores(accuracy: f64, performance: f64, interaction: f64, ch: f64) -> BaselineScores {
    BaselineScores {
        geometric_accuracy: accuracy,
        performance_score: performance,
        interaction_quality: interaction,
        ch_suitability: ch,
    }
}

const BASELINES: [(RepresentationTechnique, BaselineScores); 6] = [
    (RepresentationTechnique::TriangleMesh, scores(0.94, 8.2, 0.89, 0.92)),
    (RepresentationTechnique::PointCloud, scores(0.76, 9.1, 0.54, 0.68)),
    (RepresentationTechnique::VoxelGrid, scores(0.62, 4.3, 0.67, 0.58)),
    (RepresentationTechnique::NurbsSurfaces, scores(0.91, 5.7, 0.43, 0.71)),
    (RepresentationTechnique::SubdivisionSurfaces, scores(0.85, 6.1, 0.65, 0.78)),
    (RepresentationTechnique::ImplicitSurfaces, scores(0.73, 7.8, 0.52, 0.61)),
];

/// Technique -> baseline scores snapshot
pub type ComparisonTable = BTreeMap<RepresentationTechnique, BaselineScores>;

/// Baseline scores for one technique
pub fn baseline(technique: RepresentationTechnique) -> BaselineScores {
    BASELINES
        .iter()
        .find(|(t, _)| *t == technique)
        .map(|(_, s)| *s)
        .unwrap_or(scores(0.0, 0.0, 0.0, 0.0))
}

/// Fresh copy of the full baseline table; independent of any artifact
pub fn comparison_table() -> ComparisonTable {
    BASELINES.iter().copied().collect()
}
