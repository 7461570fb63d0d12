// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Single-artifact evaluation

use super::result::{AccessPath, ArtifactInfo, EvaluationFailure, EvaluationResult, Outcome};
use crate::comparison::comparison_table;
use crate::config::EngineConfig;
use crate::error::{EvalError, EvalResult};
use crate::io::file_sha256;
use crate::metrics::{LoadMeasurement, MemoryProbe, MetricSet, ProcessMemoryProbe};
use crate::source::{
    AccessMode, ArtifactDescriptor, ArtifactView, BasicMeshSource, FileProperties,
    FullMeshSource, MeshSource,
};
use crate::store::ArtifactRecord;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use tracing::{debug, info, warn};

/// Scores one artifact at a time.
///
/// Holds no per-artifact state: geometry is loaded, scored and dropped
/// inside each call.
pub struct Evaluator {
    mode: AccessMode,
    fallback_to_basic: bool,
    noise_seed: Option<u64>,
    full: FullMeshSource,
    basic: BasicMeshSource,
    probe: Box<dyn MemoryProbe>,
}

impl Evaluator {
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_probe(config, Box::new(ProcessMemoryProbe::new()))
    }

    pub fn with_probe(config: &EngineConfig, probe: Box<dyn MemoryProbe>) -> Self {
        Self {
            mode: config.mode,
            fallback_to_basic: config.fallback_to_basic,
            noise_seed: config.noise_seed,
            full: FullMeshSource,
            basic: BasicMeshSource::new(config.load_delay()),
            probe,
        }
    }

    pub fn mode(&self) -> AccessMode {
        self.mode
    }

    /// Evaluate a file directly, without an artifact store
    pub fn evaluate_path(&mut self, path: impl AsRef<Path>) -> Outcome {
        self.evaluate(&ArtifactRecord::from_path(path.as_ref()))
    }

    /// Score one artifact.
    ///
    /// Only a missing file is an error; load failures degrade to basic mode
    /// or to all-zero scores.
    pub fn evaluate(&mut self, record: &ArtifactRecord) -> Outcome {
        info!(id = %record.id, path = %record.path.display(), mode = %self.mode, "evaluating artifact");

        let descriptor = record
            .descriptor()
            .map_err(|e| EvaluationFailure::new(record, &e))?;

        let sha256 = match file_sha256(descriptor.path()) {
            Ok(digest) => Some(digest),
            Err(e) => {
                debug!("checksum unavailable for {}: {:#}", descriptor.path().display(), e);
                None
            }
        };

        let (view, access, measurement) = self
            .acquire(&descriptor)
            .map_err(|e| EvaluationFailure::new(record, &e))?;

        let mut rng = match self.noise_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let metrics = MetricSet::compute(&view, measurement, &mut rng);

        if measurement.memory_delta_mb < 0.0 {
            debug!(
                id = %record.id,
                memory_delta_mb = measurement.memory_delta_mb,
                "memory released during load"
            );
        }

        let file_properties = match &view {
            ArtifactView::FileOnly(file) => file.clone(),
            _ => FileProperties::from_descriptor(&descriptor),
        };

        let result = EvaluationResult {
            artifact: ArtifactInfo {
                id: record.id.clone(),
                display_name: record.display_name.clone(),
                collection: record.collection.clone(),
                path: record.path.clone(),
                format: descriptor.declared_format().clone(),
                size_bytes: descriptor.size_bytes(),
                sha256,
            },
            evaluated_at: Utc::now(),
            access,
            metrics,
            comparison: comparison_table(),
            file_properties,
            mesh_properties: view.mesh_properties().cloned(),
        };

        info!(
            id = %record.id,
            access = %result.access,
            accuracy = result.geometric_accuracy(),
            performance = result.performance_score(),
            interaction = result.interaction_quality(),
            ch = result.ch_suitability(),
            "artifact evaluated"
        );

        Ok(result)
    }

    /// Run the configured source, falling back to basic mode when allowed.
    ///
    /// `FileNotFound` is the only error returned; every other failure turns
    /// into an [`ArtifactView::Unavailable`].
    fn acquire(
        &mut self,
        descriptor: &ArtifactDescriptor,
    ) -> EvalResult<(ArtifactView, AccessPath, LoadMeasurement)> {
        let primary: &dyn MeshSource = match self.mode {
            AccessMode::Full => &self.full,
            AccessMode::Basic => &self.basic,
        };
        let (acquired, measurement) =
            LoadMeasurement::measure(self.probe.as_mut(), || primary.acquire(descriptor));

        let error = match acquired {
            Ok(view) => {
                let access = match self.mode {
                    AccessMode::Full => AccessPath::Full,
                    AccessMode::Basic => AccessPath::Basic,
                };
                return Ok((view, access, measurement));
            }
            Err(EvalError::FileNotFound { path }) => return Err(EvalError::FileNotFound { path }),
            Err(error) => error,
        };

        let reason = error.to_string();

        if self.mode == AccessMode::Full && error.allows_basic_fallback() && self.fallback_to_basic
        {
            warn!("Falling back to basic mode for {}: {}", descriptor.path().display(), reason);

            let basic = &self.basic;
            let (fallback, measurement) =
                LoadMeasurement::measure(self.probe.as_mut(), || basic.acquire(descriptor));

            return match fallback {
                Ok(view) => Ok((view, AccessPath::BasicFallback { reason }, measurement)),
                Err(EvalError::FileNotFound { path }) => Err(EvalError::FileNotFound { path }),
                Err(e) => Ok(unavailable(e.to_string(), measurement)),
            };
        }

        warn!("Scoring {} as unavailable: {}", descriptor.path().display(), reason);
        Ok(unavailable(reason, measurement))
    }
}

fn unavailable(
    reason: String,
    measurement: LoadMeasurement,
) -> (ArtifactView, AccessPath, LoadMeasurement) {
    (
        ArtifactView::Unavailable {
            reason: reason.clone(),
        },
        AccessPath::Unavailable { reason },
        measurement,
    )
}
