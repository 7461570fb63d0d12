// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Cultural-heritage suitability

use super::tables::DOCUMENTATION_SUPPORT;
use super::unit;
use crate::source::ArtifactView;
use serde::{Deserialize, Serialize};

const DETAIL_WEIGHT: f64 = 0.4;
const ANALYSIS_WEIGHT: f64 = 0.35;
const DOCUMENTATION_WEIGHT: f64 = 0.25;

const WATERTIGHT_BONUS: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HeritageSuitability {
    pub score: f64,
    pub detail_preservation: f64,
    pub analysis_capability: f64,
    pub documentation_support: f64,
}

impl HeritageSuitability {
    pub fn evaluate(view: &ArtifactView) -> Self {
        let (detail_preservation, analysis_capability, documentation_support) = match view {
            ArtifactView::Geometry(data) => {
                let props = &data.properties;
                let bonus = if props.is_watertight {
                    WATERTIGHT_BONUS
                } else {
                    0.0
                };
                (
                    (props.face_count as f64 / 10_000.0).min(1.0),
                    (props.vertex_count as f64 / 5000.0 + bonus).min(1.0),
                    DOCUMENTATION_SUPPORT.lookup(&data.format),
                )
            }
            ArtifactView::FileOnly(file) => (
                (file.size_mb.max(0.0) / 20.0).min(1.0),
                (file.estimated_triangles() as f64 / 5000.0).min(1.0),
                DOCUMENTATION_SUPPORT.lookup(&file.format),
            ),
            ArtifactView::Unavailable { .. } => return Self::default(),
        };

        Self {
            score: unit(
                DETAIL_WEIGHT * detail_preservation
                    + ANALYSIS_WEIGHT * analysis_capability
                    + DOCUMENTATION_WEIGHT * documentation_support,
            ),
            detail_preservation,
            analysis_capability,
            documentation_support,
        }
    }
}
