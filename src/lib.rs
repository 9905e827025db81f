//! Azul - Progress ledger for the Azul Tarifit learning app
//!
//! Azul tracks a learner's XP, level, daily streak, per-exercise completion,
//! and achievements as one persisted document, and owns the deterministic
//! rules for updating it when exercises are completed. UI surfaces call
//! [`Ledger::complete_exercise`] and re-read the returned state to render
//! progress bars, locks, and notifications.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod ledger;
pub mod storage;

pub use catalog::{builtin, Catalog, Exercise, ExerciseKind, Skill, UnlockRequirement};
pub use config::Config;
pub use error::{FailOpen, LedgerError, Result};
pub use ledger::{
    is_skill_unlocked, level_progress, overall_progress, skill_progress, update_daily_streak,
    AchievementDef, Completion, ExerciseProgress, Grade, Ledger, LevelProgress, LevelTable,
    OverallProgress, ProgressState, RewardTable, SkillProgress, SkillProgressView,
};
pub use storage::{FileProgressStore, MemoryProgressStore, ProgressStore};

// CLI commands
pub use cli::{
    AchievementsCommand, CompleteCommand, ResetCommand, SkillsCommand, StatsCommand,
};
