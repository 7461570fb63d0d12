// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Evaluation harness: single artifacts, batches and the three invocation modes
//!
//! Batch paths are repeated single evaluations collected by a
//! [`BatchAggregator`]; no scoring logic lives outside [`Evaluator`].

mod batch;
mod evaluator;
mod reporter;
mod result;
mod summary;

pub use batch::{evaluate_records, BatchAggregator, BatchProgress, BatchReport};
pub use evaluator::Evaluator;
pub use reporter::ResultSink;
pub use result::{AccessPath, ArtifactInfo, EvaluationFailure, EvaluationResult, Outcome};
pub use summary::{CollectionSummary, MetricSummary};

use crate::error::EvalError;
use crate::store::{ArtifactRecord, ArtifactStore};
use anyhow::{Context, Result};
use tracing::info;

/// Evaluate every artifact the store knows about
pub fn evaluate_all(
    store: &dyn ArtifactStore,
    evaluator: &mut Evaluator,
    on_done: impl FnMut(BatchProgress<'_>),
) -> Result<BatchReport> {
    let records = store.list_all().context("Failed to enumerate artifacts")?;
    info!("Evaluating {} artifacts", records.len());
    Ok(evaluate_records(evaluator, &records, on_done))
}

/// Evaluate a single artifact by id.
///
/// An unknown id is a store error; a known id whose file is missing yields
/// `Ok(Err(failure))`.
pub fn evaluate_one(
    store: &dyn ArtifactStore,
    evaluator: &mut Evaluator,
    id: &str,
) -> Result<Outcome> {
    let record = store
        .lookup(id)
        .context("Failed to look up artifact")?
        .ok_or_else(|| EvalError::Store(format!("Model not found: {}", id)))?;
    Ok(evaluator.evaluate(&record))
}

/// Evaluate every artifact in a named collection
pub fn evaluate_collection(
    store: &dyn ArtifactStore,
    evaluator: &mut Evaluator,
    name: &str,
    on_done: impl FnMut(BatchProgress<'_>),
) -> Result<BatchReport> {
    let records = collection_records(store, name)?;
    info!("Evaluating {} artifacts in collection {}", records.len(), name);
    Ok(evaluate_records(evaluator, &records, on_done))
}

/// Records of a collection; an unknown or empty collection is a store error
pub fn collection_records(store: &dyn ArtifactStore, name: &str) -> Result<Vec<ArtifactRecord>> {
    let records = store
        .list_collection(name)
        .with_context(|| format!("Failed to enumerate collection {}", name))?;
    if records.is_empty() {
        return Err(EvalError::Store(format!("Collection not found: {}", name)).into());
    }
    Ok(records)
}
