//! Application state: the single mutable root owned by the store.
//!
//! Everything here is plain data plus the leveling formula. All
//! mutation goes through `ProgressStore` commands; nothing else
//! writes these fields.

use crate::catalog::Catalog;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default number of distinct practice days before a phase advances.
pub const DEFAULT_PHASE_TARGET_DAYS: u32 = 20;

/// Default daily practice budget in minutes.
pub const DEFAULT_DAILY_MINUTES: u32 = 15;

/// Per-lesson practice load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Reduced load: only the first practice step of a lesson.
    Gentle,
    /// Full load: every practice step.
    Standard,
}

impl Default for Intensity {
    fn default() -> Self {
        Self::Gentle
    }
}

/// User-tunable settings consumed by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Daily practice budget in minutes. Drives how many lessons the
    /// selector offers. The presentation layer clamps the range.
    #[serde(default = "default_daily_minutes")]
    pub daily_minutes: u32,

    #[serde(default)]
    pub intensity: Intensity,
}

fn default_daily_minutes() -> u32 {
    DEFAULT_DAILY_MINUTES
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            daily_minutes: DEFAULT_DAILY_MINUTES,
            intensity: Intensity::default(),
        }
    }
}

/// Durable record of one completed lesson attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub ts: DateTime<Utc>,
    pub date: NaiveDate,
    pub module_id: String,
    pub lesson_id: String,
    pub lesson_title: String,
    /// Snapshot of the session's answer map.
    pub answers: BTreeMap<String, String>,
}

/// The single mutable state root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Date of first use. Set once, never changed.
    pub created_at: NaiveDate,

    /// Most recent completed practice day.
    #[serde(default)]
    pub last_done_date: Option<NaiveDate>,

    /// Consecutive practice days beyond the first.
    #[serde(default)]
    pub streak: u32,

    /// Cumulative points, monotonically non-decreasing.
    #[serde(default)]
    pub xp: u32,

    /// Always `level_from_xp(xp)`. Stored for display, recomputed on
    /// every xp change.
    #[serde(default = "default_level")]
    pub level: u32,

    /// Per-module XP, one entry per catalog module.
    #[serde(default)]
    pub module_xp: BTreeMap<String, u32>,

    /// Completed lessons. Absence means not done; keys are a subset
    /// of catalog lesson ids.
    #[serde(default)]
    pub lesson_done: BTreeMap<String, bool>,

    /// Append-only completion history.
    #[serde(default)]
    pub journal: Vec<JournalEntry>,

    /// Index into [`crate::catalog::PHASES`].
    #[serde(default)]
    pub current_phase_index: usize,

    /// Distinct practice days credited to the current phase.
    #[serde(default)]
    pub phase_done_days: u32,

    /// Guard against crediting a phase day twice on one date.
    #[serde(default)]
    pub phase_last_counted_date: Option<NaiveDate>,

    #[serde(default = "default_phase_target_days")]
    pub phase_target_days: u32,

    #[serde(default)]
    pub settings: Settings,
}

fn default_level() -> u32 {
    1
}

fn default_phase_target_days() -> u32 {
    DEFAULT_PHASE_TARGET_DAYS
}

impl AppState {
    /// Fresh defaults for first use (or after a full reset).
    pub fn new(catalog: &Catalog, today: NaiveDate) -> Self {
        let module_xp = catalog
            .modules()
            .iter()
            .map(|m| (m.id.to_string(), 0))
            .collect();
        Self {
            created_at: today,
            last_done_date: None,
            streak: 0,
            xp: 0,
            level: level_from_xp(0),
            module_xp,
            lesson_done: BTreeMap::new(),
            journal: Vec::new(),
            current_phase_index: 0,
            phase_done_days: 0,
            phase_last_counted_date: None,
            phase_target_days: DEFAULT_PHASE_TARGET_DAYS,
            settings: Settings::default(),
        }
    }

    pub fn is_lesson_done(&self, lesson_id: &str) -> bool {
        self.lesson_done.get(lesson_id).copied().unwrap_or(false)
    }
}

/// Level curve: `1 + floor(sqrt(xp) / 5)`. Monotonic in xp.
pub fn level_from_xp(xp: u32) -> u32 {
    1 + ((xp as f64).sqrt() / 5.0).floor() as u32
}
