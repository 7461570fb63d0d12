// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh representation and utilities

use super::BoundingBox;
use ahash::AHashSet;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Triangle defined by three vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangle {
    pub indices: [usize; 3],
}

impl Triangle {
    pub fn new(indices: [usize; 3]) -> Self {
        Self { indices }
    }

    /// The three undirected edges of this triangle, smaller index first
    pub fn edges(&self) -> [(usize, usize); 3] {
        let [a, b, c] = self.indices;
        [edge_key(a, b), edge_key(b, c), edge_key(c, a)]
    }
}

/// Normalize an edge so that `(a, b)` and `(b, a)` compare equal
#[inline]
pub fn edge_key(a: usize, b: usize) -> (usize, usize) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Indexed triangle mesh
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Point3<f64>>,
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Add a vertex and return its index
    pub fn add_vertex(&mut self, position: Point3<f64>) -> usize {
        let index = self.vertices.len();
        self.vertices.push(position);
        index
    }

    /// Add a triangle
    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.vertices)
    }

    /// Drop triangles that reference vertices outside the vertex list.
    ///
    /// Returns the number of triangles removed.
    pub fn retain_valid_triangles(&mut self) -> usize {
        let vertex_count = self.vertices.len();
        let before = self.triangles.len();
        self.triangles
            .retain(|t| t.indices.iter().all(|&i| i < vertex_count));
        before - self.triangles.len()
    }

    /// Unique undirected edges, in first-seen order
    pub fn unique_edges(&self) -> Vec<(usize, usize)> {
        let mut seen = AHashSet::with_capacity(self.triangles.len() * 3 / 2);
        let mut edges = Vec::with_capacity(self.triangles.len() * 3 / 2);

        for triangle in &self.triangles {
            for edge in triangle.edges() {
                if seen.insert(edge) {
                    edges.push(edge);
                }
            }
        }

        edges
    }

    /// Euclidean length of every unique edge
    pub fn edge_lengths(&self) -> Vec<f64> {
        self.unique_edges()
            .into_iter()
            .map(|(a, b)| (self.vertices[b] - self.vertices[a]).norm())
            .collect()
    }
}
