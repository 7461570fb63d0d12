// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Interaction quality over five viewer capabilities

use super::unit;
use crate::source::ArtifactView;
use serde::{Deserialize, Serialize};

const SELECTION_WEIGHT: f64 = 0.30;
const ROTATION_WEIGHT: f64 = 0.20;
const ZOOM_WEIGHT: f64 = 0.15;
const EXPLOSION_WEIGHT: f64 = 0.20;
const SURFACE_COLORING_WEIGHT: f64 = 0.15;

/// Per-capability scores, each in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InteractionCapabilities {
    pub selection: f64,
    pub rotation: f64,
    pub zoom: f64,
    pub explosion: f64,
    pub surface_coloring: f64,
}

impl InteractionCapabilities {
    pub fn for_triangle_count(triangles: usize) -> Self {
        let t = triangles as f64;
        Self {
            selection: (t / 1000.0).min(1.0),
            rotation: 1.0,
            zoom: 1.0,
            explosion: (t / 500.0).min(1.0),
            surface_coloring: (t / 100.0).min(1.0),
        }
    }

    pub fn weighted_score(&self) -> f64 {
        unit(
            SELECTION_WEIGHT * self.selection
                + ROTATION_WEIGHT * self.rotation
                + ZOOM_WEIGHT * self.zoom
                + EXPLOSION_WEIGHT * self.explosion
                + SURFACE_COLORING_WEIGHT * self.surface_coloring,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionQuality {
    pub score: f64,
    pub capabilities: InteractionCapabilities,
}

impl InteractionQuality {
    pub fn evaluate(view: &ArtifactView) -> Self {
        match view.triangle_count() {
            Some(triangles) => {
                let capabilities = InteractionCapabilities::for_triangle_count(triangles.value());
                Self {
                    score: capabilities.weighted_score(),
                    capabilities,
                }
            }
            None => Self {
                score: 0.0,
                capabilities: InteractionCapabilities::default(),
            },
        }
    }
}
