// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Investkit", "investkit"));

pub const CONFIG_ENV: &str = "INVESTKIT_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// 12,34,567
    Indian,
    /// 1,234,567
    International,
}

impl FromStr for Grouping {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "indian" | "en-in" => Ok(Grouping::Indian),
            "international" | "en-us" => Ok(Grouping::International),
            other => bail!("Unknown grouping '{}', expected indian or international", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub currency_symbol: String,
    pub grouping: Grouping,
    pub decimals: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            currency_symbol: "₹".to_string(),
            grouping: Grouping::Indian,
            decimals: 2,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    if let Ok(p) = std::env::var(CONFIG_ENV) {
        if !p.trim().is_empty() {
            return Ok(PathBuf::from(p));
        }
    }
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join("settings.json"))
}

/// Reads settings from `path`; a missing file yields defaults.
pub fn load_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        log::debug!("No settings at {}, using defaults", path.display());
        return Ok(Settings::default());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read settings at {}", path.display()))?;
    let settings: Settings = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid settings file {}", path.display()))?;
    Ok(settings)
}

pub fn save_to(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("Failed to create config dir")?;
    }
    fs::write(path, serde_json::to_string_pretty(settings)?)
        .with_context(|| format!("Write settings at {}", path.display()))?;
    log::info!("Settings written to {}", path.display());
    Ok(())
}

pub fn load() -> Result<Settings> {
    load_from(&config_path()?)
}
