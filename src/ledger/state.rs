//! Persisted progress state for the Azul ledger.
//!
//! The whole learner state is one JSON document, replaced wholesale on every
//! save. Wire field names keep the original document layout (`totalXP`,
//! `lastStudyDate`, ...) so existing progress files stay readable. Every
//! field carries a default so documents written by older versions are
//! backfilled on load rather than rejected.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// The sole persisted entity: the learner's full progress document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressState {
    /// Cumulative XP. Non-decreasing except on explicit reset.
    #[serde(rename = "totalXP")]
    pub total_xp: u32,
    /// Current level. Always recomputed from `total_xp`, never independently
    /// mutated.
    pub level: u32,
    /// Consecutive calendar days with at least one completed exercise.
    pub current_streak: u32,
    /// Calendar day of the last streak-affecting activity.
    pub last_study_date: Option<NaiveDate>,
    /// Earned achievement ids, in the order they were earned.
    pub achievements: Vec<String>,
    /// Per-skill progress, keyed by skill id.
    pub skills: BTreeMap<String, SkillProgress>,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            total_xp: 0,
            level: 1,
            current_streak: 0,
            last_study_date: None,
            achievements: Vec::new(),
            skills: BTreeMap::new(),
        }
    }
}

impl ProgressState {
    /// The default zero-value state, pre-seeded with one entry per catalog
    /// skill.
    pub fn seeded(catalog: &Catalog) -> Self {
        let mut state = Self::default();
        state.ensure_skills(catalog);
        state
    }

    /// Insert empty progress entries for catalog skills that are missing.
    ///
    /// Keeps documents loaded from older versions (or raw defaults) in step
    /// with the catalog without touching existing entries.
    pub fn ensure_skills(&mut self, catalog: &Catalog) {
        for skill in catalog.skills() {
            self.skills.entry(skill.id.clone()).or_default();
        }
    }

    /// Whether an achievement has been earned.
    pub fn has_achievement(&self, id: &str) -> bool {
        self.achievements.iter().any(|a| a == id)
    }

    /// Completed exercises summed across all skills.
    pub fn total_completed(&self) -> u32 {
        self.skills.values().map(|s| s.completed_exercises).sum()
    }
}

/// Progress within a single skill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillProgress {
    /// Count of exercises completed at least once. Each exercise counts once
    /// regardless of retries.
    pub completed_exercises: u32,
    /// Per-exercise progress, keyed by exercise id.
    pub exercises: BTreeMap<String, ExerciseProgress>,
}

/// Progress on a single exercise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ExerciseProgress {
    /// Set on the first correct submission; cleared only by a full reset.
    pub completed: bool,
    /// Incremented on every submission, correct or not.
    pub attempts: u32,
    /// Best score over all correct submissions: 100 for perfect, 80
    /// otherwise. Incorrect submissions never touch it.
    pub best_score: u32,
}
