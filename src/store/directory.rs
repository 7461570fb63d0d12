// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Artifact records discovered by walking a folder

use super::{ArtifactRecord, ArtifactStore, DEFAULT_COLLECTION};
use crate::io::MeshFormat;
use anyhow::{bail, Result};
use std::path::{Component, Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Every mesh file below `root` is an artifact.
///
/// The first directory below the root names the collection; files directly
/// in the root belong to the default collection.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_for(&self, path: &Path) -> Option<ArtifactRecord> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let parts: Vec<String> = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        let collection = if parts.len() > 1 {
            parts[0].clone()
        } else {
            DEFAULT_COLLECTION.to_string()
        };

        Some(ArtifactRecord {
            id: parts.join("/"),
            path: path.to_path_buf(),
            declared_format: None,
            display_name: path.file_stem()?.to_string_lossy().into_owned(),
            collection,
        })
    }
}

impl ArtifactStore for DirectoryStore {
    fn list_all(&self) -> Result<Vec<ArtifactRecord>> {
        if !self.root.is_dir() {
            bail!("Artifact directory not found: {}", self.root.display());
        }

        let mut records: Vec<ArtifactRecord> = WalkDir::new(&self.root)
            .follow_links(true)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", self.root.display(), e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(MeshFormat::is_mesh_extension)
            })
            .filter_map(|entry| self.record_for(entry.path()))
            .collect();

        records.sort_by(|a, b| {
            (a.collection.as_str(), a.display_name.as_str(), a.id.as_str()).cmp(&(
                b.collection.as_str(),
                b.display_name.as_str(),
                b.id.as_str(),
            ))
        });

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_walk_assigns_collections() -> Result<()> {
        let dir = TempDir::new()?;
        fs::create_dir_all(dir.path().join("sculpture/busts"))?;
        fs::create_dir_all(dir.path().join("ceramics"))?;
        fs::write(dir.path().join("sculpture/busts/hermes.STL"), b"solid")?;
        fs::write(dir.path().join("sculpture/torso.ply"), b"ply")?;
        fs::write(dir.path().join("ceramics/amphora.obj"), b"v 0 0 0")?;
        fs::write(dir.path().join("loose.glb"), b"glTF")?;
        fs::write(dir.path().join("ceramics/notes.txt"), b"not a mesh")?;

        let store = DirectoryStore::new(dir.path());
        let records = store.list_all()?;
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "ceramics/amphora.obj",
                "loose.glb",
                "sculpture/busts/hermes.STL",
                "sculpture/torso.ply",
            ]
        );
        assert_eq!(records[1].collection, DEFAULT_COLLECTION);
        assert_eq!(records[2].collection, "sculpture");
        assert_eq!(records[2].display_name, "hermes");

        let collections = store.collections()?;
        assert_eq!(collections.len(), 3);
        assert_eq!(store.list_collection("sculpture")?.len(), 2);
        Ok(())
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let store = DirectoryStore::new("/definitely/not/here");
        assert!(store.list_all().is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_broken_link_is_skipped() -> Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("stele.obj"), b"v 0 0 0")?;
        std::os::unix::fs::symlink(dir.path().join("gone.obj"), dir.path().join("ghost.obj"))?;

        let records = DirectoryStore::new(dir.path()).list_all()?;
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["stele.obj"]);
        Ok(())
    }
}
