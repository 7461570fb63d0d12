// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Artifact records listed in a JSON or TOML manifest

use super::{ArtifactRecord, ArtifactStore, DEFAULT_COLLECTION};
use crate::io::MeshFormat;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Manifest entry as written by hand
#[derive(Debug, Deserialize)]
struct ManifestEntry {
    id: String,
    path: PathBuf,
    #[serde(default, alias = "declared_format")]
    format: Option<String>,
    #[serde(default, alias = "display_name")]
    name: Option<String>,
    #[serde(default, alias = "folder")]
    collection: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TomlManifest {
    #[serde(default)]
    artifacts: Vec<ManifestEntry>,
}

/// Store backed by a manifest file.
///
/// JSON manifests are a top-level array of entries; TOML manifests use
/// `[[artifacts]]` tables. Relative paths resolve against the manifest's
/// directory.
#[derive(Debug, Clone)]
pub struct ManifestStore {
    records: Vec<ArtifactRecord>,
}

impl ManifestStore {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let entries = if is_toml {
            toml::from_str::<TomlManifest>(&content)
                .with_context(|| format!("Failed to parse TOML manifest: {}", path.display()))?
                .artifacts
        } else {
            serde_json::from_str::<Vec<ManifestEntry>>(&content)
                .with_context(|| format!("Failed to parse JSON manifest: {}", path.display()))?
        };

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_entries(entries, base)
    }

    fn from_entries(entries: Vec<ManifestEntry>, base: &Path) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut records = Vec::with_capacity(entries.len());

        for entry in entries {
            if !seen.insert(entry.id.clone()) {
                bail!("Duplicate artifact id in manifest: {}", entry.id);
            }

            let path = if entry.path.is_absolute() {
                entry.path
            } else {
                base.join(entry.path)
            };
            let display_name = entry.name.unwrap_or_else(|| {
                path.file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_else(|| entry.id.clone())
            });

            records.push(ArtifactRecord {
                id: entry.id,
                declared_format: entry.format.as_deref().map(MeshFormat::from_extension),
                display_name,
                collection: entry
                    .collection
                    .unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
                path,
            });
        }

        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ArtifactStore for ManifestStore {
    fn list_all(&self) -> Result<Vec<ArtifactRecord>> {
        Ok(self.records.clone())
    }
}
