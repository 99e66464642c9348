//! Daily checklist totals persisted as a flat JSON object keyed by date.

use chrono::NaiveDate;
use hearth_core::error::HearthError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Totals recorded for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStats {
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub completed: usize,
}

/// `{"YYYY-MM-DD": {"total": n, "completed": m}, ...}` on disk.
#[derive(Debug)]
pub struct StatsStore {
    path: PathBuf,
    days: BTreeMap<String, DayStats>,
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

impl StatsStore {
    /// Load stats from `path`. A missing or unreadable file yields an empty store.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let days = match Self::read(&path) {
            Ok(days) => days,
            Err(e) => {
                error!("failed to load stats from {}: {e}", path.display());
                BTreeMap::new()
            }
        };
        Self { path, days }
    }

    fn read(path: &Path) -> Result<BTreeMap<String, DayStats>, HearthError> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write the whole store back to disk.
    pub fn save(&self) -> Result<(), HearthError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    HearthError::Storage(format!("failed to create stats dir: {e}"))
                })?;
            }
        }
        let json = serde_json::to_string_pretty(&self.days)?;
        std::fs::write(&self.path, json).map_err(|e| {
            HearthError::Storage(format!("failed to write {}: {e}", self.path.display()))
        })?;
        info!("stats saved to {}", self.path.display());
        Ok(())
    }

    /// Record a day's totals, replacing any earlier record for that day.
    pub fn record(&mut self, date: NaiveDate, total: usize, completed: usize) {
        self.days
            .insert(date_key(date), DayStats { total, completed });
    }

    pub fn get(&self, date: NaiveDate) -> Option<DayStats> {
        self.days.get(&date_key(date)).copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
