// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Collection-level statistics

use super::result::EvaluationResult;
use serde::{Deserialize, Serialize};

/// Mean, population standard deviation and range of one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl MetricSummary {
    /// `None` for an empty slice
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        Some(Self {
            mean,
            std: variance.sqrt(),
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            count: values.len(),
        })
    }
}

/// Per-metric statistics over successfully evaluated artifacts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollectionSummary {
    pub geometric_accuracy: MetricSummary,
    pub performance_score: MetricSummary,
    pub interaction_quality: MetricSummary,
    pub ch_suitability: MetricSummary,
}

impl CollectionSummary {
    /// `None` when there is nothing to summarise
    pub fn from_results(results: &[EvaluationResult]) -> Option<Self> {
        let column = |metric: fn(&EvaluationResult) -> f64| {
            MetricSummary::from_values(&results.iter().map(metric).collect::<Vec<_>>())
        };

        Some(Self {
            geometric_accuracy: column(EvaluationResult::geometric_accuracy)?,
            performance_score: column(EvaluationResult::performance_score)?,
            interaction_quality: column(EvaluationResult::interaction_quality)?,
            ch_suitability: column(EvaluationResult::ch_suitability)?,
        })
    }

    /// Metrics in display order
    pub fn metrics(&self) -> [(&'static str, &MetricSummary); 4] {
        [
            ("geometric_accuracy", &self.geometric_accuracy),
            ("performance_score", &self.performance_score),
            ("interaction_quality", &self.interaction_quality),
            ("ch_suitability", &self.ch_suitability),
        ]
    }
}
