// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Batch aggregation over repeated single-artifact evaluation

use super::evaluator::Evaluator;
use super::result::{EvaluationFailure, EvaluationResult, Outcome};
use super::summary::CollectionSummary;
use crate::store::ArtifactRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Complete batch report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub evaluated_at: DateTime<Utc>,
    pub total_models: usize,
    pub evaluated_models: usize,
    pub failed_models: usize,
    pub results: Vec<EvaluationResult>,
    pub failures: Vec<EvaluationFailure>,
    /// Absent when no artifact was evaluated successfully
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<CollectionSummary>,
}

impl BatchReport {
    /// Percentage of artifacts that produced a result
    pub fn success_rate(&self) -> f64 {
        if self.total_models == 0 {
            0.0
        } else {
            (self.evaluated_models as f64 / self.total_models as f64) * 100.0
        }
    }
}

/// Collects per-artifact outcomes, one artifact at a time
#[derive(Debug, Default)]
pub struct BatchAggregator {
    results: Vec<EvaluationResult>,
    failures: Vec<EvaluationFailure>,
}

impl BatchAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Ok(result) => self.results.push(result),
            Err(failure) => {
                warn!("Excluding {} from summary: {}", failure.id, failure.error);
                self.failures.push(failure);
            }
        }
    }

    /// Evaluate one artifact and record the outcome; true on success
    pub fn evaluate(&mut self, evaluator: &mut Evaluator, record: &ArtifactRecord) -> bool {
        let outcome = evaluator.evaluate(record);
        let ok = outcome.is_ok();
        self.record(outcome);
        ok
    }

    pub fn attempted(&self) -> usize {
        self.results.len() + self.failures.len()
    }

    pub fn finish(self) -> BatchReport {
        let summary = CollectionSummary::from_results(&self.results);
        BatchReport {
            evaluated_at: Utc::now(),
            total_models: self.attempted(),
            evaluated_models: self.results.len(),
            failed_models: self.failures.len(),
            summary,
            results: self.results,
            failures: self.failures,
        }
    }
}

/// Reported after each artifact of a batch
#[derive(Debug, Clone, Copy)]
pub struct BatchProgress<'a> {
    pub record: &'a ArtifactRecord,
    pub succeeded: bool,
    pub completed: usize,
    pub total: usize,
}

/// Evaluate `records` in order, calling `on_done` after each one
pub fn evaluate_records(
    evaluator: &mut Evaluator,
    records: &[ArtifactRecord],
    mut on_done: impl FnMut(BatchProgress<'_>),
) -> BatchReport {
    let mut aggregator = BatchAggregator::new();
    for (i, record) in records.iter().enumerate() {
        let succeeded = aggregator.evaluate(evaluator, record);
        on_done(BatchProgress {
            record,
            succeeded,
            completed: i + 1,
            total: records.len(),
        });
    }
    aggregator.finish()
}
