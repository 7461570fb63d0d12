// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Format-keyed scoring constants

use crate::io::MeshFormat;

/// Immutable format -> score mapping with a default for unknown formats
#[derive(Debug, Clone, Copy)]
pub struct FormatTable {
    entries: &'static [(&'static str, f64)],
    default: f64,
}

impl FormatTable {
    pub const fn new(entries: &'static [(&'static str, f64)], default: f64) -> Self {
        Self { entries, default }
    }

    pub fn lookup(&self, format: &MeshFormat) -> f64 {
        self.entries
            .iter()
            .find(|(ext, _)| *ext == format.as_str())
            .map(|(_, score)| *score)
            .unwrap_or(self.default)
    }

    pub fn default_score(&self) -> f64 {
        self.default
    }
}

/// Basic-mode base score for geometric accuracy
pub const ACCURACY_BASE: FormatTable = FormatTable::new(
    &[
        ("obj", 0.95),
        ("ply", 0.90),
        ("stl", 0.85),
        ("glb", 0.88),
        ("gltf", 0.88),
    ],
    0.70,
);

/// How well a format carries documentation (materials, metadata, texture)
pub const DOCUMENTATION_SUPPORT: FormatTable = FormatTable::new(
    &[
        ("obj", 0.9),
        ("ply", 0.8),
        ("stl", 0.7),
        ("glb", 0.85),
        ("gltf", 0.85),
    ],
    0.5,
);
