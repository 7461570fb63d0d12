// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Heritage Eval
//!
//! Quality evaluation engine for digitized cultural-heritage meshes.
//! Scores each artifact on geometric accuracy, runtime performance,
//! interaction quality and cultural-heritage suitability, aggregates
//! collections, and compares against baseline representation techniques.
//!
//! The geometric accuracy reported in full mode is a synthetic fidelity
//! proxy, not a comparison against ground truth.

pub mod cli;
pub mod comparison;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod geometry;
pub mod io;
pub mod metrics;
pub mod source;
pub mod store;
pub mod telemetry;

pub use comparison::{comparison_table, ComparisonTable, RepresentationTechnique};
pub use config::EngineConfig;
pub use error::{EvalError, EvalResult};
pub use evaluation::{
    evaluate_all, evaluate_collection, evaluate_one, BatchAggregator, BatchReport,
    CollectionSummary, EvaluationFailure, EvaluationResult, Evaluator, MetricSummary, Outcome,
};
pub use geometry::{Mesh, MeshProperties};
pub use io::MeshFormat;
pub use source::{AccessMode, ArtifactDescriptor, MeshSource};
pub use store::{ArtifactRecord, ArtifactStore, DirectoryStore, ManifestStore};

use std::path::Path;

/// Evaluate a single mesh file with the given configuration
pub fn evaluate_file(path: impl AsRef<Path>, config: &EngineConfig) -> Outcome {
    Evaluator::new(config).evaluate_path(path)
}
