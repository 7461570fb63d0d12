// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! JSON result documents

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes evaluation results under an output directory
#[derive(Debug, Clone)]
pub struct ResultSink {
    output_dir: PathBuf,
}

impl ResultSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write pretty JSON, creating parent directories
    pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(value).context("Failed to serialize results")?;
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn all_path(&self, at: DateTime<Utc>) -> PathBuf {
        self.output_dir
            .join(format!("evaluation_all_{}.json", stamp(at)))
    }

    pub fn model_path(&self, id: &str, at: DateTime<Utc>) -> PathBuf {
        self.output_dir
            .join(format!("evaluation_model_{}_{}.json", file_safe(id), stamp(at)))
    }

    pub fn collection_path(&self, name: &str, at: DateTime<Utc>) -> PathBuf {
        self.output_dir.join(format!(
            "evaluation_collection_{}_{}.json",
            file_safe(name),
            stamp(at)
        ))
    }
}

fn stamp(at: DateTime<Utc>) -> String {
    at.format("%Y%m%d_%H%M%S").to_string()
}

/// Replace anything but `[A-Za-z0-9._-]` with `_`
fn file_safe(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
