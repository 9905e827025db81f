//! Derived read-only views over the progress state.
//!
//! Nothing here mutates: views are computed on demand from the current
//! state plus the static catalog, keyed by skill id throughout.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::ledger::rewards::LevelTable;
use crate::ledger::state::ProgressState;

/// Completion summary for one skill.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SkillProgressView {
    /// Exercises completed at least once.
    pub completed: u32,
    /// Catalog total for the skill.
    pub total: u32,
    /// Rounded completion percentage.
    pub percentage: u32,
}

/// Completion summary across the whole catalog.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct OverallProgress {
    /// Exercises completed at least once, across all skills.
    pub completed: u32,
    /// Sum of catalog totals.
    pub total: u32,
    /// Rounded completion percentage.
    pub percentage: u32,
}

/// Position within the current level.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct LevelProgress {
    /// Current level.
    pub current_level: u32,
    /// Current total XP.
    pub current_xp: u32,
    /// Threshold for the next level (the current one at max level).
    pub next_level_xp: u32,
    /// XP earned past the current level's threshold.
    pub progress_in_level: u32,
    /// XP span of the current level; zero at max level.
    pub xp_needed_for_level: u32,
    /// Rounded progress percentage within the level; 100 at max level.
    pub percentage: u32,
}

/// Rounded percentage of `completed` over `total`, zero when `total` is zero.
fn percentage(completed: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}

/// Completion summary for one skill.
///
/// Unknown skill ids yield an all-zero view, matching the defensive defaults
/// of the rest of the ledger.
pub fn skill_progress(state: &ProgressState, catalog: &Catalog, skill_id: &str) -> SkillProgressView {
    let Some(skill) = catalog.skill(skill_id) else {
        return SkillProgressView {
            completed: 0,
            total: 0,
            percentage: 0,
        };
    };

    let completed = state
        .skills
        .get(skill_id)
        .map(|s| s.completed_exercises)
        .unwrap_or(0);

    SkillProgressView {
        completed,
        total: skill.total_exercises,
        percentage: percentage(completed, skill.total_exercises),
    }
}

/// Completion summary across all catalog skills.
pub fn overall_progress(state: &ProgressState, catalog: &Catalog) -> OverallProgress {
    let total = catalog.total_exercises();
    let completed = catalog
        .skills()
        .iter()
        .filter_map(|skill| state.skills.get(&skill.id))
        .map(|s| s.completed_exercises)
        .sum();

    OverallProgress {
        completed,
        total,
        percentage: percentage(completed, total),
    }
}

/// Position within the current level.
///
/// At max level the span is zero and the percentage pins to 100.
pub fn level_progress(state: &ProgressState, levels: &LevelTable) -> LevelProgress {
    let current_level = state.level;
    let current_threshold = levels.threshold(current_level);
    let progress_in_level = state.total_xp.saturating_sub(current_threshold);

    if current_level >= levels.max_level() {
        return LevelProgress {
            current_level,
            current_xp: state.total_xp,
            next_level_xp: current_threshold,
            progress_in_level,
            xp_needed_for_level: 0,
            percentage: 100,
        };
    }

    let next_level_xp = levels.threshold(current_level + 1);
    let xp_needed_for_level = next_level_xp - current_threshold;

    LevelProgress {
        current_level,
        current_xp: state.total_xp,
        next_level_xp,
        progress_in_level,
        xp_needed_for_level,
        percentage: percentage(progress_in_level, xp_needed_for_level),
    }
}

/// Whether a skill is unlocked for the learner.
///
/// A skill with no prerequisite is always unlocked; otherwise the
/// prerequisite skill must have reached the required completion count.
/// Unknown skill ids report locked.
pub fn is_skill_unlocked(state: &ProgressState, catalog: &Catalog, skill_id: &str) -> bool {
    let Some(skill) = catalog.skill(skill_id) else {
        return false;
    };
    let Some(requirement) = &skill.unlock_requirement else {
        return true;
    };

    state
        .skills
        .get(&requirement.skill_id)
        .map(|progress| progress.completed_exercises >= requirement.completed_exercises)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;

    #[test]
    fn test_skill_progress_fresh() {
        let catalog = builtin();
        let state = ProgressState::seeded(&catalog);

        let view = skill_progress(&state, &catalog, "greetings");
        assert_eq!(view.completed, 0);
        assert_eq!(view.total, 8);
        assert_eq!(view.percentage, 0);
    }

    #[test]
    fn test_skill_progress_rounding() {
        let catalog = builtin();
        let mut state = ProgressState::seeded(&catalog);
        state.skills.get_mut("greetings").unwrap().completed_exercises = 3;

        // 3/8 = 37.5% rounds to 38
        let view = skill_progress(&state, &catalog, "greetings");
        assert_eq!(view.percentage, 38);
    }

    #[test]
    fn test_skill_progress_unknown_skill_is_zero() {
        let catalog = builtin();
        let state = ProgressState::seeded(&catalog);

        let view = skill_progress(&state, &catalog, "nonexistent");
        assert_eq!(
            view,
            SkillProgressView {
                completed: 0,
                total: 0,
                percentage: 0
            }
        );
    }

    #[test]
    fn test_overall_progress_fresh() {
        let catalog = builtin();
        let state = ProgressState::seeded(&catalog);

        let overall = overall_progress(&state, &catalog);
        assert_eq!(overall.completed, 0);
        assert_eq!(overall.total, 49);
        assert_eq!(overall.percentage, 0);
    }

    #[test]
    fn test_overall_progress_aggregates_by_id() {
        let catalog = builtin();
        let mut state = ProgressState::seeded(&catalog);
        state.skills.get_mut("greetings").unwrap().completed_exercises = 8;
        state.skills.get_mut("food").unwrap().completed_exercises = 5;

        let overall = overall_progress(&state, &catalog);
        assert_eq!(overall.completed, 13);
        assert_eq!(overall.total, 49);
        // 13/49 = 26.5% rounds to 27
        assert_eq!(overall.percentage, 27);
    }

    #[test]
    fn test_overall_progress_ignores_stale_state_keys() {
        // A skill removed from the catalog no longer counts toward totals.
        let catalog = builtin();
        let mut state = ProgressState::seeded(&catalog);
        state
            .skills
            .insert("retired_skill".to_string(), Default::default());
        state
            .skills
            .get_mut("retired_skill")
            .unwrap()
            .completed_exercises = 99;

        let overall = overall_progress(&state, &catalog);
        assert_eq!(overall.completed, 0);
        assert_eq!(overall.total, 49);
    }

    #[test]
    fn test_level_progress_mid_level() {
        let levels = LevelTable::default();
        let state = ProgressState {
            total_xp: 150,
            level: 2,
            ..Default::default()
        };

        let view = level_progress(&state, &levels);
        assert_eq!(view.current_level, 2);
        assert_eq!(view.current_xp, 150);
        assert_eq!(view.next_level_xp, 250);
        assert_eq!(view.progress_in_level, 50);
        assert_eq!(view.xp_needed_for_level, 150);
        // 50/150 = 33.3% rounds to 33
        assert_eq!(view.percentage, 33);
    }

    #[test]
    fn test_level_progress_at_threshold() {
        let levels = LevelTable::default();
        let state = ProgressState {
            total_xp: 100,
            level: 2,
            ..Default::default()
        };

        let view = level_progress(&state, &levels);
        assert_eq!(view.progress_in_level, 0);
        assert_eq!(view.percentage, 0);
    }

    #[test]
    fn test_level_progress_at_max_level() {
        let levels = LevelTable::default();
        let state = ProgressState {
            total_xp: 850,
            level: 5,
            ..Default::default()
        };

        let view = level_progress(&state, &levels);
        assert_eq!(view.current_level, 5);
        assert_eq!(view.xp_needed_for_level, 0);
        assert_eq!(view.progress_in_level, 150);
        assert_eq!(view.percentage, 100);
    }

    #[test]
    fn test_unlock_no_requirement() {
        let catalog = builtin();
        let state = ProgressState::seeded(&catalog);

        assert!(is_skill_unlocked(&state, &catalog, "greetings"));
    }

    #[test]
    fn test_unlock_requires_prerequisite_count() {
        let catalog = builtin();
        let mut state = ProgressState::seeded(&catalog);

        assert!(!is_skill_unlocked(&state, &catalog, "numbers"));

        state.skills.get_mut("greetings").unwrap().completed_exercises = 5;
        assert!(!is_skill_unlocked(&state, &catalog, "numbers"));

        state.skills.get_mut("greetings").unwrap().completed_exercises = 6;
        assert!(is_skill_unlocked(&state, &catalog, "numbers"));
    }

    #[test]
    fn test_unlock_unknown_skill_is_locked() {
        let catalog = builtin();
        let state = ProgressState::seeded(&catalog);

        assert!(!is_skill_unlocked(&state, &catalog, "nonexistent"));
    }

    #[test]
    fn test_unlock_missing_prerequisite_progress_is_locked() {
        let catalog = builtin();
        // Unseeded state: no entry for the prerequisite skill at all.
        let state = ProgressState::default();

        assert!(!is_skill_unlocked(&state, &catalog, "numbers"));
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(percentage(1, 8), 13); // 12.5 rounds to 13
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(49, 49), 100);
    }
}
