// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh file format identification

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Closed set of mesh formats the engine knows how to score.
///
/// Anything else is carried as [`MeshFormat::Other`] with its lower-cased
/// extension so that format-keyed tables can fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MeshFormat {
    Obj,
    Ply,
    Stl,
    Glb,
    Gltf,
    Other(String),
}

impl MeshFormat {
    /// All formats with a geometry parser
    pub const SUPPORTED: [MeshFormat; 5] = [
        MeshFormat::Obj,
        MeshFormat::Ply,
        MeshFormat::Stl,
        MeshFormat::Glb,
        MeshFormat::Gltf,
    ];

    /// Parse an extension, with or without the leading dot, case-insensitively
    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.trim().trim_start_matches('.').to_ascii_lowercase();
        match ext.as_str() {
            "obj" => Self::Obj,
            "ply" => Self::Ply,
            "stl" => Self::Stl,
            "glb" => Self::Glb,
            "gltf" => Self::Gltf,
            _ => Self::Other(ext),
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or_else(|| Self::Other(String::new()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Obj => "obj",
            Self::Ply => "ply",
            Self::Stl => "stl",
            Self::Glb => "glb",
            Self::Gltf => "gltf",
            Self::Other(ext) => ext,
        }
    }

    /// Whether full-mode geometry loading is available for this format
    pub fn has_parser(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Whether files with this extension should be picked up as artifacts
    pub fn is_mesh_extension(ext: &str) -> bool {
        Self::from_extension(ext).has_parser()
    }
}

impl fmt::Display for MeshFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for MeshFormat {
    fn from(ext: String) -> Self {
        Self::from_extension(&ext)
    }
}

impl From<MeshFormat> for String {
    fn from(format: MeshFormat) -> Self {
        format.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(MeshFormat::from_extension("OBJ"), MeshFormat::Obj);
        assert_eq!(MeshFormat::from_extension(".ply"), MeshFormat::Ply);
        assert_eq!(MeshFormat::from_extension("glb"), MeshFormat::Glb);
        assert_eq!(
            MeshFormat::from_extension("FBX"),
            MeshFormat::Other("fbx".into())
        );
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            MeshFormat::from_path(Path::new("vase/amphora.STL")),
            MeshFormat::Stl
        );
        assert_eq!(
            MeshFormat::from_path(Path::new("README")),
            MeshFormat::Other(String::new())
        );
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&MeshFormat::Gltf).unwrap();
        assert_eq!(json, "\"gltf\"");
        let back: MeshFormat = serde_json::from_str("\"usdz\"").unwrap();
        assert_eq!(back, MeshFormat::Other("usdz".into()));
    }
}
