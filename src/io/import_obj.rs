// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Wavefront OBJ importer

use crate::geometry::{Mesh, Triangle};
use anyhow::{Context, Result};
use nalgebra::Point3;
use std::path::Path;

/// Load every object group of an OBJ file into one mesh.
///
/// Faces are triangulated and indexed by position only, so vertices that
/// differ just in normal or texture coordinate stay shared. Material
/// libraries are not required.
pub fn import(path: &Path) -> Result<Mesh> {
    let options = tobj::LoadOptions {
        triangulate: true,
        single_index: false,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    };

    let (models, _materials) = tobj::load_obj(path, &options)
        .with_context(|| format!("Failed to parse OBJ file: {:?}", path))?;

    let vertex_total: usize = models.iter().map(|m| m.mesh.positions.len() / 3).sum();
    let triangle_total: usize = models.iter().map(|m| m.mesh.indices.len() / 3).sum();
    let mut mesh = Mesh::with_capacity(vertex_total, triangle_total);

    for model in &models {
        let offset = mesh.vertex_count();

        for p in model.mesh.positions.chunks_exact(3) {
            mesh.add_vertex(Point3::new(p[0] as f64, p[1] as f64, p[2] as f64));
        }

        for tri in model.mesh.indices.chunks_exact(3) {
            mesh.add_triangle(Triangle::new([
                tri[0] as usize + offset,
                tri[1] as usize + offset,
                tri[2] as usize + offset,
            ]));
        }
    }

    Ok(mesh)
}
