// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! glTF 2.0 importer (.gltf with external/embedded buffers, and .glb)

use crate::geometry::{Mesh, Triangle};
use anyhow::{Context, Result};
use gltf::mesh::Mode;
use nalgebra::Point3;
use std::path::Path;

/// Load all triangle primitives of all meshes into one mesh.
///
/// Node transforms are not applied; positions are taken in mesh space.
/// Primitives without an index accessor are read as plain triangle lists.
pub fn import(path: &Path) -> Result<Mesh> {
    let (document, buffers, _) =
        gltf::import(path).with_context(|| format!("Failed to load {}", path.display()))?;

    let mut mesh = Mesh::new();

    for gltf_mesh in document.meshes() {
        for primitive in gltf_mesh.primitives() {
            if primitive.mode() != Mode::Triangles {
                continue;
            }

            let reader =
                primitive.reader(|buffer| buffers.get(buffer.index()).map(|d| d.0.as_slice()));

            let Some(positions) = reader.read_positions() else {
                continue;
            };

            let offset = mesh.vertex_count();
            for [x, y, z] in positions {
                mesh.add_vertex(Point3::new(x as f64, y as f64, z as f64));
            }
            let added = mesh.vertex_count() - offset;

            let indices: Vec<usize> = match reader.read_indices() {
                Some(indices) => indices.into_u32().map(|i| i as usize + offset).collect(),
                None => (offset..offset + added).collect(),
            };

            for tri in indices.chunks_exact(3) {
                mesh.add_triangle(Triangle::new([tri[0], tri[1], tri[2]]));
            }
        }
    }

    Ok(mesh)
}
