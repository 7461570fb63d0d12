// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Derived mesh properties

use super::{BoundingBox, Mesh};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Properties derived from loaded mesh geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshProperties {
    /// Number of vertices
    pub vertex_count: usize,
    /// Number of triangles
    pub face_count: usize,
    /// Number of unique undirected edges
    pub edge_count: usize,
    /// Total surface area in square units
    pub surface_area: f64,
    /// Enclosed volume in cubic units (absolute signed-tetrahedron sum)
    pub volume: f64,
    /// Every edge shared by exactly two faces
    pub is_watertight: bool,
    pub bounding_box: BoundingBox,
    /// Mean vertex position [x, y, z]
    pub centroid: [f64; 3],
}

impl MeshProperties {
    pub fn empty() -> Self {
        Self {
            vertex_count: 0,
            face_count: 0,
            edge_count: 0,
            surface_area: 0.0,
            volume: 0.0,
            is_watertight: false,
            bounding_box: BoundingBox::empty(),
            centroid: [0.0; 3],
        }
    }
}

/// Analyze mesh geometry and compute its derived properties
pub fn analyze(mesh: &Mesh) -> MeshProperties {
    let vertex_count = mesh.vertex_count();
    let face_count = mesh.triangle_count();

    if vertex_count == 0 {
        return MeshProperties::empty();
    }

    let edge_usage = count_edge_usage(mesh);

    MeshProperties {
        vertex_count,
        face_count,
        edge_count: edge_usage.len(),
        surface_area: calculate_surface_area(mesh),
        volume: calculate_volume(mesh),
        is_watertight: !edge_usage.is_empty() && edge_usage.values().all(|&count| count == 2),
        bounding_box: mesh.bounding_box(),
        centroid: calculate_centroid(mesh),
    }
}

fn count_edge_usage(mesh: &Mesh) -> AHashMap<(usize, usize), usize> {
    let mut edge_count = AHashMap::with_capacity(mesh.triangle_count() * 3 / 2);

    for triangle in &mesh.triangles {
        for edge in triangle.edges() {
            *edge_count.entry(edge).or_insert(0usize) += 1;
        }
    }

    edge_count
}

/// Calculate mesh volume using signed volume of triangles
fn calculate_volume(mesh: &Mesh) -> f64 {
    let mut volume = 0.0;

    for triangle in &mesh.triangles {
        let v0 = &mesh.vertices[triangle.indices[0]];
        let v1 = &mesh.vertices[triangle.indices[1]];
        let v2 = &mesh.vertices[triangle.indices[2]];

        // Signed volume of tetrahedron formed by triangle and origin
        volume += v0.coords.dot(&v1.coords.cross(&v2.coords)) / 6.0;
    }

    volume.abs()
}

/// Calculate total surface area
fn calculate_surface_area(mesh: &Mesh) -> f64 {
    mesh.triangles
        .iter()
        .map(|triangle| {
            let v0 = &mesh.vertices[triangle.indices[0]];
            let v1 = &mesh.vertices[triangle.indices[1]];
            let v2 = &mesh.vertices[triangle.indices[2]];
            (v1 - v0).cross(&(v2 - v0)).norm() / 2.0
        })
        .sum()
}

fn calculate_centroid(mesh: &Mesh) -> [f64; 3] {
    let sum = mesh
        .vertices
        .iter()
        .fold(nalgebra::Vector3::zeros(), |acc, p| acc + p.coords);
    let centroid = sum / mesh.vertices.len() as f64;

    [centroid.x, centroid.y, centroid.z]
}
