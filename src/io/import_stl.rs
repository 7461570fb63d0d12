// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! STL importer (ASCII and binary)

use crate::geometry::{Mesh, Triangle};
use anyhow::{Context, Result};
use nalgebra::Point3;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load an STL file into an indexed mesh.
///
/// `stl_io` merges coincident corners, so shared edges survive and the
/// watertight check is meaningful.
pub fn import(path: &Path) -> Result<Mesh> {
    let file = File::open(path).with_context(|| format!("Failed to open STL file: {:?}", path))?;
    let mut reader = BufReader::new(file);

    let stl = stl_io::read_stl(&mut reader).context("Failed to read STL file")?;

    let mut mesh = Mesh::with_capacity(stl.vertices.len(), stl.faces.len());

    for vertex in &stl.vertices {
        mesh.add_vertex(Point3::new(
            vertex[0] as f64,
            vertex[1] as f64,
            vertex[2] as f64,
        ));
    }

    for face in &stl.faces {
        mesh.add_triangle(Triangle::new(face.vertices));
    }

    Ok(mesh)
}
