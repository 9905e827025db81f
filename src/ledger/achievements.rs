//! Achievement rules and display catalog.
//!
//! Rules are an ordered list of predicates over the full state snapshot,
//! not deltas: every rule re-evaluates from absolute state, so re-running
//! the whole set after any completion is safe and idempotent. The ledger
//! stores bare achievement ids; display metadata lives here and is resolved
//! by the presentation layer.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::ledger::state::ProgressState;

/// Earned by crossing the level-2 XP threshold.
pub const FIRST_LEVEL_UP: &str = "first_level_up";
/// Earned by studying seven days in a row.
pub const WEEK_STREAK: &str = "week_streak";
/// Earned by completing 25 exercises overall.
pub const QUARTER_COMPLETE: &str = "quarter_complete";
/// Earned by reaching the highest level.
pub const MAX_LEVEL: &str = "max_level";

/// Total XP that unlocks [`FIRST_LEVEL_UP`].
pub const FIRST_LEVEL_UP_XP: u32 = 100;
/// Streak length that unlocks [`WEEK_STREAK`].
pub const WEEK_STREAK_DAYS: u32 = 7;
/// Overall completion count that unlocks [`QUARTER_COMPLETE`].
pub const QUARTER_COMPLETE_COUNT: u32 = 25;

/// The id for completing every exercise in a skill.
pub fn skill_completion_id(skill_id: &str) -> String {
    format!("complete_{}", skill_id)
}

/// Inputs a rule may consult beyond the state itself.
pub struct RuleContext<'a> {
    /// The static skill catalog.
    pub catalog: &'a Catalog,
    /// The skill whose exercise was just completed.
    pub completed_skill_id: &'a str,
    /// The highest level defined by the threshold table.
    pub max_level: u32,
}

/// A single achievement rule: a named predicate that yields the earned id
/// when the state qualifies.
pub struct AchievementRule {
    /// Rule name for logging.
    pub name: &'static str,
    check: fn(&ProgressState, &RuleContext) -> Option<String>,
}

fn check_first_level_up(state: &ProgressState, _ctx: &RuleContext) -> Option<String> {
    (state.total_xp >= FIRST_LEVEL_UP_XP).then(|| FIRST_LEVEL_UP.to_string())
}

fn check_week_streak(state: &ProgressState, _ctx: &RuleContext) -> Option<String> {
    (state.current_streak >= WEEK_STREAK_DAYS).then(|| WEEK_STREAK.to_string())
}

fn check_skill_complete(state: &ProgressState, ctx: &RuleContext) -> Option<String> {
    let skill = ctx.catalog.skill(ctx.completed_skill_id)?;
    let progress = state.skills.get(&skill.id)?;
    (progress.completed_exercises == skill.total_exercises).then(|| skill_completion_id(&skill.id))
}

fn check_quarter_complete(state: &ProgressState, _ctx: &RuleContext) -> Option<String> {
    (state.total_completed() >= QUARTER_COMPLETE_COUNT).then(|| QUARTER_COMPLETE.to_string())
}

fn check_max_level(state: &ProgressState, ctx: &RuleContext) -> Option<String> {
    (state.level >= ctx.max_level).then(|| MAX_LEVEL.to_string())
}

/// The fixed rule set, in evaluation order.
pub fn rules() -> &'static [AchievementRule] {
    static RULES: [AchievementRule; 5] = [
        AchievementRule {
            name: "first_level_up",
            check: check_first_level_up,
        },
        AchievementRule {
            name: "week_streak",
            check: check_week_streak,
        },
        AchievementRule {
            name: "skill_complete",
            check: check_skill_complete,
        },
        AchievementRule {
            name: "quarter_complete",
            check: check_quarter_complete,
        },
        AchievementRule {
            name: "max_level",
            check: check_max_level,
        },
    ];
    &RULES
}

/// Evaluate every rule against the state and return the ids that now
/// qualify and are not already held.
pub fn evaluate(state: &ProgressState, ctx: &RuleContext) -> Vec<String> {
    rules()
        .iter()
        .filter_map(|rule| (rule.check)(state, ctx))
        .filter(|id| !state.has_achievement(id))
        .collect()
}

/// Display metadata for an achievement.
///
/// The `xp` field is the value shown to the learner next to the badge; the
/// ledger never adds it to the XP total.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AchievementDef {
    /// Achievement id as stored in the state.
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Display description.
    pub description: &'static str,
    /// XP value shown to the learner.
    pub xp: u32,
}

/// All achievement definitions for the built-in curriculum.
pub fn definitions() -> &'static [AchievementDef] {
    static DEFS: [AchievementDef; 9] = [
        AchievementDef {
            id: FIRST_LEVEL_UP,
            title: "Level Up!",
            description: "Reached level 2",
            xp: 50,
        },
        AchievementDef {
            id: WEEK_STREAK,
            title: "Week Warrior",
            description: "Studied for 7 days in a row",
            xp: 100,
        },
        AchievementDef {
            id: "complete_greetings",
            title: "Greeting Master",
            description: "Completed all Greetings & Basics exercises",
            xp: 100,
        },
        AchievementDef {
            id: "complete_numbers",
            title: "Number Ninja",
            description: "Completed all Numbers & Colors exercises",
            xp: 100,
        },
        AchievementDef {
            id: "complete_family",
            title: "Family Friend",
            description: "Completed all Family & People exercises",
            xp: 100,
        },
        AchievementDef {
            id: "complete_food",
            title: "Food Fanatic",
            description: "Completed all Food & Drinks exercises",
            xp: 100,
        },
        AchievementDef {
            id: "complete_activities",
            title: "Activity Ace",
            description: "Completed all Daily Activities exercises",
            xp: 100,
        },
        AchievementDef {
            id: QUARTER_COMPLETE,
            title: "Quarter Master",
            description: "Completed 25 exercises",
            xp: 150,
        },
        AchievementDef {
            id: MAX_LEVEL,
            title: "Tarifit Expert",
            description: "Reached maximum level",
            xp: 200,
        },
    ];
    &DEFS
}

/// Look up display metadata by achievement id.
pub fn definition(id: &str) -> Option<&'static AchievementDef> {
    definitions().iter().find(|def| def.id == id)
}
