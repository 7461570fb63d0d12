// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Engine configuration system

use crate::source::{AccessMode, LoadDelay};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "heritage-eval.toml";

/// Evaluation engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Access mode to evaluate with
    pub mode: AccessMode,
    /// Retry from file metadata when full-mode loading fails
    pub fallback_to_basic: bool,
    /// Seed for the synthetic fidelity proxy; entropy when absent
    pub noise_seed: Option<u64>,
    /// Sleep in basic mode to stand in for parser time
    pub simulate_load_delay: bool,
    pub load_delay_secs_per_mb: f64,
    pub max_load_delay_secs: f64,
    /// Output directory for result documents
    pub output_dir: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let delay = LoadDelay::default();
        Self {
            mode: AccessMode::Full,
            fallback_to_basic: true,
            noise_seed: None,
            simulate_load_delay: delay.enabled,
            load_delay_secs_per_mb: delay.secs_per_mb,
            max_load_delay_secs: delay.max_secs,
            output_dir: PathBuf::from("evaluation/results"),
        }
    }
}

impl EngineConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: EngineConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `heritage-eval.toml` if present, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = if Path::new(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply `HERITAGE_EVAL_*` overrides; unparsable values are ignored
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(mode) = var("HERITAGE_EVAL_MODE") {
            match mode.parse() {
                Ok(mode) => self.mode = mode,
                Err(e) => warn!("Ignoring HERITAGE_EVAL_MODE: {}", e),
            }
        }

        if let Some(seed) = var("HERITAGE_EVAL_SEED") {
            match seed.trim().parse() {
                Ok(seed) => self.noise_seed = Some(seed),
                Err(_) => warn!("Ignoring HERITAGE_EVAL_SEED: '{}' is not a u64", seed),
            }
        }

        if let Some(fallback) = var("HERITAGE_EVAL_FALLBACK") {
            match fallback.trim().parse() {
                Ok(fallback) => self.fallback_to_basic = fallback,
                Err(_) => warn!("Ignoring HERITAGE_EVAL_FALLBACK: '{}' is not a bool", fallback),
            }
        }

        if let Some(output_dir) = var("HERITAGE_EVAL_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(output_dir);
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    pub fn load_delay(&self) -> LoadDelay {
        LoadDelay {
            enabled: self.simulate_load_delay,
            secs_per_mb: self.load_delay_secs_per_mb,
            max_secs: self.max_load_delay_secs,
        }
    }
}
