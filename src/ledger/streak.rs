//! Daily streak bookkeeping.
//!
//! Pure transition over [`ProgressState`]: callers persist separately.
//! Dates are calendar days in the learner's local timezone; the caller
//! supplies "today" so the transition stays deterministic under test.

use chrono::NaiveDate;

use crate::ledger::rewards::{LevelTable, RewardTable};
use crate::ledger::state::ProgressState;

/// Apply a study event on `today` to the streak.
///
/// - Same day as the last study date: no change.
/// - Exactly one day after: the streak extends and the daily streak bonus
///   is awarded.
/// - No prior date, or a gap of two or more days: the streak restarts at 1
///   (today always counts as day one of the new streak) with no bonus.
///
/// The level is recomputed afterward so the bonus can never leave it stale.
pub fn update_daily_streak(
    state: &mut ProgressState,
    today: NaiveDate,
    rewards: &RewardTable,
    levels: &LevelTable,
) {
    match state.last_study_date {
        Some(last) if last == today => return,
        Some(last) if last.succ_opt() == Some(today) => {
            state.current_streak += 1;
            state.total_xp += rewards.daily_streak_bonus;
        }
        _ => {
            state.current_streak = 1;
        }
    }

    state.last_study_date = Some(today);
    state.level = levels.level_for_xp(state.total_xp);
}
