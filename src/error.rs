// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error taxonomy for artifact access and evaluation

use std::path::PathBuf;
use thiserror::Error;

/// Conditions raised while accessing or evaluating a single artifact.
///
/// Measurement anomalies (negative memory deltas, zero-length meshes) are not
/// represented here: they are absorbed by clamping inside the calculators.
#[derive(Error, Debug)]
pub enum EvalError {
    /// Artifact path does not resolve to an existing file
    #[error("Model file not found on disk: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// Declared format has no geometry parser
    #[error("Unsupported mesh format: {format}")]
    UnsupportedFormat { format: String },

    /// Parser rejected the file contents
    #[error("Failed to load mesh {}: {source:#}", .path.display())]
    LoadFailure {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// Artifact store could not resolve or enumerate records
    #[error("Artifact store error: {0}")]
    Store(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl EvalError {
    pub fn load_failure(path: impl Into<PathBuf>, source: impl Into<anyhow::Error>) -> Self {
        Self::LoadFailure {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Whether full-mode evaluation may retry from file metadata only
    pub fn allows_basic_fallback(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedFormat { .. } | Self::LoadFailure { .. }
        )
    }
}

pub type EvalResult<T> = std::result::Result<T, EvalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_classification() {
        let missing = EvalError::FileNotFound {
            path: PathBuf::from("missing.obj"),
        };
        assert!(!missing.allows_basic_fallback());

        let unsupported = EvalError::UnsupportedFormat {
            format: "fbx".into(),
        };
        assert!(unsupported.allows_basic_fallback());

        let malformed = EvalError::load_failure("bad.ply", anyhow::anyhow!("truncated header"));
        assert!(malformed.allows_basic_fallback());
        assert!(malformed.to_string().contains("truncated header"));
    }
}
