// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - mesh representation and derived properties

mod analytics;
mod bbox;
mod mesh;

pub use analytics::{analyze, MeshProperties};
pub use bbox::BoundingBox;
pub use mesh::{edge_key, Mesh, Triangle};
