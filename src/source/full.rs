// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Full mode: parse geometry

use super::{AccessMode, ArtifactDescriptor, ArtifactView, MeshData, MeshSource};
use crate::error::EvalResult;
use crate::geometry::analyze;
use crate::io::load_mesh;
use tracing::debug;

/// Loads vertices and faces and derives area, volume and watertightness
#[derive(Debug, Clone, Copy, Default)]
pub struct FullMeshSource;

impl MeshSource for FullMeshSource {
    fn mode(&self) -> AccessMode {
        AccessMode::Full
    }

    fn acquire(&self, descriptor: &ArtifactDescriptor) -> EvalResult<ArtifactView> {
        let mesh = load_mesh(descriptor.path(), descriptor.declared_format())?;
        let properties = analyze(&mesh);

        debug!(
            path = %descriptor.path().display(),
            vertices = properties.vertex_count,
            faces = properties.face_count,
            watertight = properties.is_watertight,
            "mesh loaded"
        );

        Ok(ArtifactView::Geometry(MeshData {
            mesh,
            properties,
            format: descriptor.declared_format().clone(),
        }))
    }
}
