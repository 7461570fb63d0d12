// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh access - full geometry parsing or file-metadata-only inspection
//!
//! Both modes implement [`MeshSource`] and produce an [`ArtifactView`], so a
//! single set of metric calculators serves either mode.

mod basic;
mod descriptor;
mod full;
mod view;

pub use basic::{BasicMeshSource, LoadDelay};
pub use descriptor::{bytes_to_mb, ArtifactDescriptor, FileProperties};
pub use full::FullMeshSource;
pub use view::{ArtifactView, MeshData, TriangleCount};

use crate::error::EvalResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How much of an artifact a source reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessMode {
    #[default]
    Full,
    Basic,
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("full"),
            Self::Basic => f.write_str("basic"),
        }
    }
}

impl std::str::FromStr for AccessMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "basic" => Ok(Self::Basic),
            other => Err(format!("unknown access mode '{}' (expected full or basic)", other)),
        }
    }
}

/// Capability to turn an artifact descriptor into something the metric
/// calculators can score.
///
/// Implementations read the file system only and never retry.
pub trait MeshSource {
    fn mode(&self) -> AccessMode;

    fn acquire(&self, descriptor: &ArtifactDescriptor) -> EvalResult<ArtifactView>;
}
