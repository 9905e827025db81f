//! XP reward and level threshold tables.
//!
//! Both tables are configuration data, not control flow: they carry defaults
//! matching the shipped curriculum and can be overridden from the config
//! file. New reward values are data changes, not code changes.

use serde::{Deserialize, Serialize};

use crate::catalog::ExerciseKind;

/// Base XP rewards per exercise kind plus bonus amounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RewardTable {
    /// Base reward for picture-matching exercises.
    pub picture_matching: u32,
    /// Base reward for translation exercises.
    pub translation: u32,
    /// Base reward for sentence-building exercises.
    pub sentence_building: u32,
    /// Base reward for multiple-choice exercises.
    pub multiple_choice: u32,
    /// Fallback reward for kinds without a dedicated entry.
    pub default_reward: u32,
    /// Bonus for a perfect score.
    pub perfect_bonus: u32,
    /// Bonus for a correct first try.
    pub first_try_bonus: u32,
    /// Bonus for studying on consecutive calendar days.
    pub daily_streak_bonus: u32,
}

impl Default for RewardTable {
    fn default() -> Self {
        Self {
            picture_matching: 10,
            translation: 15,
            sentence_building: 20,
            multiple_choice: 10,
            default_reward: 10,
            perfect_bonus: 5,
            first_try_bonus: 3,
            daily_streak_bonus: 10,
        }
    }
}

impl RewardTable {
    /// Base reward for an exercise kind.
    ///
    /// Translate-text has no dedicated entry and takes the documented
    /// fallback, as does any kind added to the catalog before the table.
    pub fn base_reward(&self, kind: ExerciseKind) -> u32 {
        match kind {
            ExerciseKind::PictureMatching => self.picture_matching,
            ExerciseKind::Translation => self.translation,
            ExerciseKind::SentenceBuilding => self.sentence_building,
            ExerciseKind::MultipleChoice => self.multiple_choice,
            ExerciseKind::TranslateText => self.default_reward,
        }
    }

    /// XP earned for a graded submission.
    ///
    /// Incorrect submissions earn nothing. The perfect and first-try bonuses
    /// are additive and independent.
    pub fn exercise_xp(
        &self,
        kind: ExerciseKind,
        is_correct: bool,
        is_first_try: bool,
        is_perfect: bool,
    ) -> u32 {
        if !is_correct {
            return 0;
        }

        let mut xp = self.base_reward(kind);
        if is_perfect {
            xp += self.perfect_bonus;
        }
        if is_first_try {
            xp += self.first_try_bonus;
        }
        xp
    }
}

/// Cumulative XP thresholds per level.
///
/// `thresholds[i]` is the minimum total XP for level `i + 1`. The table must
/// be non-empty, start at zero, and be strictly ascending.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LevelTable {
    thresholds: Vec<u32>,
}

impl Default for LevelTable {
    fn default() -> Self {
        Self {
            thresholds: vec![0, 100, 250, 450, 700],
        }
    }
}

impl LevelTable {
    /// Create a table from explicit thresholds.
    pub fn new(thresholds: Vec<u32>) -> Self {
        Self { thresholds }
    }

    /// Check that the thresholds are usable: non-empty, first entry zero,
    /// strictly ascending.
    pub fn is_valid(&self) -> bool {
        self.thresholds.first() == Some(&0)
            && self.thresholds.windows(2).all(|pair| pair[0] < pair[1])
    }

    /// The highest level whose threshold is at or below `total_xp`.
    pub fn level_for_xp(&self, total_xp: u32) -> u32 {
        let passed = self
            .thresholds
            .iter()
            .take_while(|&&threshold| threshold <= total_xp)
            .count();
        (passed.max(1)) as u32
    }

    /// Minimum cumulative XP for a level. Levels past the table clamp to the
    /// final threshold.
    pub fn threshold(&self, level: u32) -> u32 {
        if level == 0 || self.thresholds.is_empty() {
            return 0;
        }
        let index = (level as usize - 1).min(self.thresholds.len() - 1);
        self.thresholds[index]
    }

    /// The highest defined level.
    pub fn max_level(&self) -> u32 {
        self.thresholds.len() as u32
    }
}
