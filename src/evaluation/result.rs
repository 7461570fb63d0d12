// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Per-artifact evaluation records

use crate::comparison::ComparisonTable;
use crate::error::EvalError;
use crate::geometry::MeshProperties;
use crate::io::MeshFormat;
use crate::metrics::MetricSet;
use crate::source::FileProperties;
use crate::store::ArtifactRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Identity of the evaluated artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactInfo {
    pub id: String,
    pub display_name: String,
    pub collection: String,
    pub path: PathBuf,
    pub format: MeshFormat,
    pub size_bytes: u64,
    /// SHA-256 of the bytes that were scored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

/// Which access path actually produced the scores
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AccessPath {
    Full,
    Basic,
    /// Full mode failed and file metadata was scored instead
    BasicFallback { reason: String },
    /// Nothing could be loaded; every score is 0.0
    Unavailable { reason: String },
}

impl fmt::Display for AccessPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("full"),
            Self::Basic => f.write_str("basic"),
            Self::BasicFallback { .. } => f.write_str("basic_fallback"),
            Self::Unavailable { .. } => f.write_str("unavailable"),
        }
    }
}

/// Everything measured for one artifact. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub artifact: ArtifactInfo,
    pub evaluated_at: DateTime<Utc>,
    pub access: AccessPath,
    pub metrics: MetricSet,
    pub comparison: ComparisonTable,
    pub file_properties: FileProperties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mesh_properties: Option<MeshProperties>,
}

impl EvaluationResult {
    pub fn geometric_accuracy(&self) -> f64 {
        self.metrics.geometric_accuracy.score
    }

    pub fn performance_score(&self) -> f64 {
        self.metrics.performance.performance_score
    }

    pub fn interaction_quality(&self) -> f64 {
        self.metrics.interaction_quality.score
    }

    pub fn ch_suitability(&self) -> f64 {
        self.metrics.ch_suitability.score
    }
}

/// An artifact that could not be scored at all
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationFailure {
    pub id: String,
    pub display_name: String,
    pub collection: String,
    pub path: PathBuf,
    pub error: String,
}

impl EvaluationFailure {
    pub fn new(record: &ArtifactRecord, error: &EvalError) -> Self {
        Self {
            id: record.id.clone(),
            display_name: record.display_name.clone(),
            collection: record.collection.clone(),
            path: record.path.clone(),
            error: error.to_string(),
        }
    }
}

impl fmt::Display for EvaluationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.display_name, self.id, self.error)
    }
}

/// Result-or-error for a single artifact
pub type Outcome = Result<EvaluationResult, EvaluationFailure>;
