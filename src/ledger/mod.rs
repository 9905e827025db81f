//! The progress ledger: state, transition rules, and derived views.

pub mod achievements;
pub mod ledger;
pub mod rewards;
pub mod state;
pub mod streak;
pub mod views;

pub use achievements::{AchievementDef, AchievementRule, RuleContext};
pub use ledger::{Completion, Grade, Ledger};
pub use rewards::{LevelTable, RewardTable};
pub use state::{ExerciseProgress, ProgressState, SkillProgress};
pub use streak::update_daily_streak;
pub use views::{
    is_skill_unlocked, level_progress, overall_progress, skill_progress, LevelProgress,
    OverallProgress, SkillProgressView,
};
