// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - format detection, mesh importers and content hashing

mod format;
mod import_gltf;
mod import_obj;
mod import_ply;
mod import_stl;

pub use format::MeshFormat;

use crate::error::{EvalError, EvalResult};
use crate::geometry::Mesh;
use anyhow::Context;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Parse a mesh file according to its declared format.
///
/// Formats without a parser fail with [`EvalError::UnsupportedFormat`];
/// parser errors are wrapped in [`EvalError::LoadFailure`].
pub fn load_mesh(path: &Path, format: &MeshFormat) -> EvalResult<Mesh> {
    let loaded = match format {
        MeshFormat::Obj => import_obj::import(path),
        MeshFormat::Ply => import_ply::import(path),
        MeshFormat::Stl => import_stl::import(path),
        MeshFormat::Glb | MeshFormat::Gltf => import_gltf::import(path),
        MeshFormat::Other(ext) => {
            return Err(EvalError::UnsupportedFormat {
                format: ext.clone(),
            })
        }
    };

    let mut mesh = loaded.map_err(|e| EvalError::load_failure(path, e))?;

    if let Some(index) = mesh
        .vertices
        .iter()
        .position(|v| !v.coords.iter().all(|c| c.is_finite()))
    {
        return Err(EvalError::load_failure(
            path,
            anyhow::anyhow!("vertex {} has a non-finite coordinate", index),
        ));
    }

    let dropped = mesh.retain_valid_triangles();
    if dropped > 0 {
        debug!(path = %path.display(), dropped, "dropped triangles with out-of-range indices");
    }

    Ok(mesh)
}

/// SHA-256 of the file content as lower-case hex
pub fn file_sha256(path: &Path) -> anyhow::Result<String> {
    let file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 64 * 1024];

    loop {
        let n = reader
            .read(&mut buf)
            .with_context(|| format!("Failed to read {:?}", path))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
