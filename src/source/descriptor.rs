// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Immutable description of one artifact to evaluate

use crate::error::{EvalError, EvalResult};
use crate::io::MeshFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Path, format and size of one artifact file.
///
/// The size is always read from the file system, never taken from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    path: PathBuf,
    declared_format: MeshFormat,
    size_bytes: u64,
}

impl ArtifactDescriptor {
    /// Resolve a descriptor for `path`.
    ///
    /// When no format is declared it is derived from the file extension.
    /// Fails with [`EvalError::FileNotFound`] if the path is not a readable
    /// regular file.
    pub fn open(path: impl AsRef<Path>, declared_format: Option<MeshFormat>) -> EvalResult<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path).map_err(|_| EvalError::FileNotFound {
            path: path.to_path_buf(),
        })?;

        if !metadata.is_file() {
            return Err(EvalError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            declared_format: declared_format.unwrap_or_else(|| MeshFormat::from_path(path)),
            size_bytes: metadata.len(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn declared_format(&self) -> &MeshFormat {
        &self.declared_format
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn size_mb(&self) -> f64 {
        bytes_to_mb(self.size_bytes)
    }
}

pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// File-level facts available without parsing geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileProperties {
    pub size_bytes: u64,
    pub size_mb: f64,
    pub format: MeshFormat,
    pub exists: bool,
}

impl FileProperties {
    /// Facts as captured when the descriptor was opened
    pub fn from_descriptor(descriptor: &ArtifactDescriptor) -> Self {
        Self {
            size_bytes: descriptor.size_bytes(),
            size_mb: descriptor.size_mb(),
            format: descriptor.declared_format().clone(),
            exists: true,
        }
    }

    /// Re-read existence and size of the descriptor's file
    pub fn inspect(descriptor: &ArtifactDescriptor) -> EvalResult<Self> {
        let metadata =
            std::fs::metadata(descriptor.path()).map_err(|_| EvalError::FileNotFound {
                path: descriptor.path().to_path_buf(),
            })?;

        Ok(Self {
            size_bytes: metadata.len(),
            size_mb: bytes_to_mb(metadata.len()),
            format: descriptor.declared_format().clone(),
            exists: true,
        })
    }

    /// Triangle count inferred from file size (1000 triangles per MB)
    pub fn estimated_triangles(&self) -> usize {
        (self.size_mb * 1000.0) as usize
    }
}
