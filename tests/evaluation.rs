// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Integration tests for single, batch and grouped evaluation

use anyhow::Result;
use approx::assert_relative_eq;
use heritage_eval::evaluation::{
    evaluate_all, evaluate_collection, evaluate_one, AccessPath, BatchReport, EvaluationResult,
    Evaluator, ResultSink,
};
use heritage_eval::metrics::{AccuracyKind, MemoryProbe};
use heritage_eval::{AccessMode, DirectoryStore, EngineConfig, ManifestStore};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const TETRA_OBJ: &str = "v 0 0 0\nv 1 0 0\nv 0 1 0\nv 0 0 1\nf 1 3 2\nf 1 2 4\nf 2 3 4\nf 1 4 3\n";

const TRIANGLE_STL: &str = "solid t
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid t
";

struct SteadyProbe;

impl MemoryProbe for SteadyProbe {
    fn resident_mb(&mut self) -> f64 {
        256.0
    }
}

fn config(mode: AccessMode) -> EngineConfig {
    EngineConfig {
        mode,
        noise_seed: Some(2024),
        simulate_load_delay: false,
        ..EngineConfig::default()
    }
}

fn evaluator(mode: AccessMode) -> Evaluator {
    Evaluator::with_probe(&config(mode), Box::new(SteadyProbe))
}

/// ceramics/{amphora.obj, krater.stl}, sculpture/torso.ply (malformed)
fn collection_tree(root: &Path) -> Result<()> {
    fs::create_dir_all(root.join("ceramics"))?;
    fs::create_dir_all(root.join("sculpture"))?;
    fs::write(root.join("ceramics/amphora.obj"), TETRA_OBJ)?;
    fs::write(root.join("ceramics/krater.stl"), TRIANGLE_STL)?;
    fs::write(root.join("sculpture/torso.ply"), "scanner export failed")?;
    Ok(())
}

fn assert_unit_scores(result: &EvaluationResult) {
    for score in [
        result.geometric_accuracy(),
        result.interaction_quality(),
        result.ch_suitability(),
    ] {
        assert!((0.0..=1.0).contains(&score), "{} out of range", score);
    }
    assert!(result.performance_score() >= 0.0);
}

#[test]
fn test_evaluate_all_directory() -> Result<()> {
    let dir = TempDir::new()?;
    collection_tree(dir.path())?;
    let store = DirectoryStore::new(dir.path());

    let report = evaluate_all(&store, &mut evaluator(AccessMode::Full), |_| {})?;

    assert_eq!(report.total_models, 3);
    assert_eq!(report.evaluated_models, 3);
    assert_eq!(report.failed_models, 0);
    report.results.iter().for_each(assert_unit_scores);

    let torso = report
        .results
        .iter()
        .find(|r| r.artifact.display_name == "torso")
        .expect("torso result");
    assert!(matches!(torso.access, AccessPath::BasicFallback { .. }));

    let amphora = &report.results[0];
    assert_eq!(amphora.artifact.id, "ceramics/amphora.obj");
    assert_eq!(amphora.access, AccessPath::Full);
    assert!(amphora
        .mesh_properties
        .as_ref()
        .is_some_and(|m| m.is_watertight));

    let summary = report.summary.expect("summary");
    assert_eq!(summary.geometric_accuracy.count, 3);
    assert!(summary.ch_suitability.min <= summary.ch_suitability.mean);
    assert!(summary.ch_suitability.mean <= summary.ch_suitability.max);
    Ok(())
}

#[test]
fn test_evaluate_collection_and_one() -> Result<()> {
    let dir = TempDir::new()?;
    collection_tree(dir.path())?;
    let store = DirectoryStore::new(dir.path());
    let mut evaluator = evaluator(AccessMode::Full);

    let mut progress = Vec::new();
    let ceramics = evaluate_collection(&store, &mut evaluator, "ceramics", |p| {
        progress.push((p.completed, p.total))
    })?;
    assert_eq!(ceramics.total_models, 2);
    assert_eq!(progress, vec![(1, 2), (2, 2)]);
    assert!(ceramics
        .results
        .iter()
        .all(|r| r.artifact.collection == "ceramics"));

    assert!(evaluate_collection(&store, &mut evaluator, "textiles", |_| {}).is_err());

    let krater = evaluate_one(&store, &mut evaluator, "ceramics/krater.stl")?
        .expect("krater evaluated");
    assert_eq!(krater.metrics.performance.triangle_count, 1);
    assert!(!krater.mesh_properties.expect("mesh").is_watertight);

    assert!(evaluate_one(&store, &mut evaluator, "ceramics/missing.obj").is_err());
    Ok(())
}

#[test]
fn test_manifest_with_missing_file() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("stele.obj"), TETRA_OBJ)?;
    let manifest = dir.path().join("manifest.json");
    fs::write(
        &manifest,
        r#"[
            {"id": "1", "path": "stele.obj", "name": "Stele", "collection": "epigraphy"},
            {"id": "2", "path": "lost.obj", "name": "Lost Relief", "collection": "epigraphy"}
        ]"#,
    )?;
    let store = ManifestStore::load(&manifest)?;

    let report = evaluate_all(&store, &mut evaluator(AccessMode::Full), |_| {})?;
    assert_eq!(report.total_models, 2);
    assert_eq!(report.evaluated_models, 1);
    assert_eq!(report.failed_models, 1);
    assert_eq!(report.results[0].artifact.display_name, "Stele");
    assert_eq!(report.failures[0].id, "2");

    let summary = report.summary.expect("summary over the survivor");
    assert_eq!(summary.interaction_quality.count, 1);
    assert_eq!(
        summary.interaction_quality.mean,
        report.results[0].interaction_quality()
    );

    // Known id, missing file: an explicit failure rather than zero scores
    let outcome = evaluate_one(&store, &mut evaluator(AccessMode::Full), "2")?;
    assert!(outcome.is_err());
    Ok(())
}

#[test]
fn test_empty_store() -> Result<()> {
    let dir = TempDir::new()?;
    let report = evaluate_all(
        &DirectoryStore::new(dir.path()),
        &mut evaluator(AccessMode::Full),
        |_| {},
    )?;

    assert_eq!(report.total_models, 0);
    assert!(report.summary.is_none());

    let json = serde_json::to_value(&report)?;
    assert!(json.get("summary").is_none());
    Ok(())
}

#[test]
fn test_ten_mb_obj_in_basic_mode() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("capital.obj");
    fs::File::create(&path)?.set_len(10_485_760)?;

    let result = evaluator(AccessMode::Basic)
        .evaluate_path(&path)
        .expect("evaluated");

    assert_eq!(result.access, AccessPath::Basic);
    assert_eq!(
        result.metrics.geometric_accuracy.kind,
        AccuracyKind::FormatHeuristic
    );
    assert_relative_eq!(result.geometric_accuracy(), 0.95);
    assert_relative_eq!(result.metrics.ch_suitability.documentation_support, 0.9);
    assert_eq!(result.metrics.performance.triangle_count, 10_000);
    assert_eq!(result.file_properties.size_bytes, 10_485_760);
    Ok(())
}

#[test]
fn test_json_round_trip_is_exact() -> Result<()> {
    let dir = TempDir::new()?;
    collection_tree(dir.path())?;
    let store = DirectoryStore::new(dir.path());
    let report = evaluate_all(&store, &mut evaluator(AccessMode::Full), |_| {})?;

    let sink = ResultSink::new(dir.path().join("results"));
    let path = sink.all_path(report.evaluated_at);
    ResultSink::write_json(&report, &path)?;

    let back: BatchReport = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(back, report);

    for (original, restored) in report.results.iter().zip(&back.results) {
        assert_eq!(
            original.geometric_accuracy().to_bits(),
            restored.geometric_accuracy().to_bits()
        );
        assert_eq!(
            original.performance_score().to_bits(),
            restored.performance_score().to_bits()
        );
    }
    Ok(())
}

#[test]
fn test_zero_face_mesh() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("points.ply");
    fs::write(
        &path,
        "ply\nformat ascii 1.0\nelement vertex 3\nproperty float x\nproperty float y\n\
         property float z\nelement face 0\nproperty list uchar int vertex_indices\n\
         end_header\n0 0 0\n1 0 0\n0 1 0\n",
    )?;

    let result = evaluator(AccessMode::Full)
        .evaluate_path(&path)
        .expect("evaluated");
    let perf = &result.metrics.performance;

    assert_eq!(result.access, AccessPath::Full);
    assert_eq!(perf.triangle_count, 0);
    assert_eq!(perf.fps_estimate, 60.0);
    assert!(perf.performance_score.is_finite());
    assert_eq!(result.geometric_accuracy(), 1.0);
    assert_relative_eq!(result.interaction_quality(), 0.35);
    Ok(())
}
