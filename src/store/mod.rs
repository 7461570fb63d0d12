// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Artifact lookup - where the engine learns which files to evaluate

mod directory;
mod manifest;

pub use directory::DirectoryStore;
pub use manifest::ManifestStore;

use crate::error::EvalResult;
use crate::io::MeshFormat;
use crate::source::ArtifactDescriptor;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Collection name used when a record does not belong to a named group
pub const DEFAULT_COLLECTION: &str = "default";

/// One artifact as known to a store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRecord {
    pub id: String,
    pub path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_format: Option<MeshFormat>,
    pub display_name: String,
    pub collection: String,
}

impl ArtifactRecord {
    /// Ad-hoc record for a file evaluated without a store
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display_name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            id: path.display().to_string(),
            declared_format: None,
            display_name,
            collection: DEFAULT_COLLECTION.to_string(),
            path,
        }
    }

    /// Resolve the record's file into a descriptor; fails if the file is gone
    pub fn descriptor(&self) -> EvalResult<ArtifactDescriptor> {
        ArtifactDescriptor::open(&self.path, self.declared_format.clone())
    }
}

/// Named group of artifacts and how many it holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionInfo {
    pub name: String,
    pub artifact_count: usize,
}

/// Read-only source of artifact records.
///
/// Failing to enumerate is the only condition that stops a batch.
pub trait ArtifactStore {
    /// Every record, in a stable order
    fn list_all(&self) -> Result<Vec<ArtifactRecord>>;

    fn lookup(&self, id: &str) -> Result<Option<ArtifactRecord>> {
        Ok(self.list_all()?.into_iter().find(|record| record.id == id))
    }

    fn list_collection(&self, name: &str) -> Result<Vec<ArtifactRecord>> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|record| record.collection == name)
            .collect())
    }

    /// Collections sorted by name with their artifact counts
    fn collections(&self) -> Result<Vec<CollectionInfo>> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for record in self.list_all()? {
            *counts.entry(record.collection).or_default() += 1;
        }
        Ok(counts
            .into_iter()
            .map(|(name, artifact_count)| CollectionInfo {
                name,
                artifact_count,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedStore(Vec<ArtifactRecord>);

    impl ArtifactStore for FixedStore {
        fn list_all(&self) -> Result<Vec<ArtifactRecord>> {
            Ok(self.0.clone())
        }
    }

    fn record(id: &str, collection: &str) -> ArtifactRecord {
        ArtifactRecord {
            id: id.to_string(),
            path: PathBuf::from(format!("{}.obj", id)),
            declared_format: None,
            display_name: id.to_string(),
            collection: collection.to_string(),
        }
    }

    #[test]
    fn test_record_from_path() {
        let record = ArtifactRecord::from_path("scans/Venus.PLY");
        assert_eq!(record.id, "scans/Venus.PLY");
        assert_eq!(record.display_name, "Venus");
        assert_eq!(record.collection, DEFAULT_COLLECTION);
        assert_eq!(record.declared_format, None);
    }

    #[test]
    fn test_default_lookups() -> Result<()> {
        let store = FixedStore(vec![
            record("amphora", "ceramics"),
            record("lintel", "architecture"),
            record("krater", "ceramics"),
        ]);

        assert_eq!(store.lookup("lintel")?.map(|r| r.collection), Some("architecture".into()));
        assert!(store.lookup("missing")?.is_none());
        assert_eq!(store.list_collection("ceramics")?.len(), 2);
        assert!(store.list_collection("textiles")?.is_empty());

        let collections = store.collections()?;
        assert_eq!(
            collections,
            vec![
                CollectionInfo {
                    name: "architecture".into(),
                    artifact_count: 1
                },
                CollectionInfo {
                    name: "ceramics".into(),
                    artifact_count: 2
                },
            ]
        );
        Ok(())
    }
}
