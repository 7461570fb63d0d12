// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! What a mesh source could make available about an artifact

use super::FileProperties;
use crate::geometry::{Mesh, MeshProperties};
use crate::io::MeshFormat;
use serde::{Deserialize, Serialize};

/// Parsed geometry, owned by a single evaluation
#[derive(Debug, Clone)]
pub struct MeshData {
    pub mesh: Mesh,
    pub properties: MeshProperties,
    pub format: MeshFormat,
}

/// Triangle count, exact from geometry or estimated from file size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TriangleCount {
    Exact(usize),
    Estimated(usize),
}

impl TriangleCount {
    pub fn value(self) -> usize {
        match self {
            Self::Exact(n) | Self::Estimated(n) => n,
        }
    }
}

/// Input to the metric calculators
#[derive(Debug, Clone)]
pub enum ArtifactView {
    /// Full mode: geometry was parsed
    Geometry(MeshData),
    /// Basic mode: only file metadata was read
    FileOnly(FileProperties),
    /// Nothing could be loaded; every calculator scores zero
    Unavailable { reason: String },
}

impl ArtifactView {
    pub fn triangle_count(&self) -> Option<TriangleCount> {
        match self {
            Self::Geometry(data) => Some(TriangleCount::Exact(data.properties.face_count)),
            Self::FileOnly(file) => Some(TriangleCount::Estimated(file.estimated_triangles())),
            Self::Unavailable { .. } => None,
        }
    }

    pub fn format(&self) -> Option<&MeshFormat> {
        match self {
            Self::Geometry(data) => Some(&data.format),
            Self::FileOnly(file) => Some(&file.format),
            Self::Unavailable { .. } => None,
        }
    }

    pub fn mesh_properties(&self) -> Option<&MeshProperties> {
        match self {
            Self::Geometry(data) => Some(&data.properties),
            _ => None,
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, Self::Unavailable { .. })
    }
}
