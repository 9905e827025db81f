//! Stats command: level, XP, streak, and overall completion at a glance.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::ledger::{achievements, Ledger, LevelProgress, OverallProgress};
use crate::storage::ProgressStore;

/// Options for the stats command.
#[derive(Debug, Clone, Default)]
pub struct StatsOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
}

/// Output format for the stats command.
#[derive(Debug, Clone, Serialize)]
pub struct StatsOutput {
    /// Whether stats were computed.
    pub success: bool,
    /// Total XP.
    pub total_xp: u32,
    /// Current level.
    pub level: u32,
    /// Current streak in days.
    pub current_streak: u32,
    /// Last study date, if any.
    pub last_study_date: Option<String>,
    /// Position within the current level.
    pub level_progress: LevelProgress,
    /// Completion across the whole catalog.
    pub overall: OverallProgress,
    /// Achievements earned so far.
    pub achievements_earned: usize,
    /// Achievements defined for the curriculum.
    pub achievements_total: usize,
}

/// The stats command implementation.
pub struct StatsCommand<S: ProgressStore> {
    ledger: Ledger<S>,
}

impl<S: ProgressStore> StatsCommand<S> {
    /// Create a new stats command.
    pub fn new(store: S, catalog: Catalog, config: Config) -> Self {
        Self {
            ledger: Ledger::with_tables(store, catalog, config.rewards, config.levels),
        }
    }

    /// Run the stats command.
    pub fn run(&self, _options: &StatsOptions) -> StatsOutput {
        let state = self.ledger.load();

        StatsOutput {
            success: true,
            total_xp: state.total_xp,
            level: state.level,
            current_streak: state.current_streak,
            last_study_date: state.last_study_date.map(|d| d.to_string()),
            level_progress: self.ledger.level_progress(&state),
            overall: self.ledger.overall_progress(&state),
            achievements_earned: state.achievements.len(),
            achievements_total: achievements::definitions().len(),
        }
    }

    /// Format output based on options.
    pub fn format_output(&self, output: &StatsOutput, options: &StatsOptions) -> String {
        if options.quiet {
            return String::new();
        }

        if options.json {
            serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
        } else {
            self.format_human_readable(output)
        }
    }

    /// Format output as human-readable text.
    fn format_human_readable(&self, output: &StatsOutput) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "Level {} ({} XP total)",
            output.level, output.total_xp
        ));

        let lp = &output.level_progress;
        if lp.xp_needed_for_level == 0 {
            lines.push("Maximum level reached.".to_string());
        } else {
            lines.push(format!(
                "Next level: {}/{} XP ({}%)",
                lp.progress_in_level, lp.xp_needed_for_level, lp.percentage
            ));
        }

        match &output.last_study_date {
            Some(date) => lines.push(format!(
                "Streak: {} day(s), last studied {}",
                output.current_streak, date
            )),
            None => lines.push("No study activity yet.".to_string()),
        }

        lines.push(format!(
            "Exercises: {}/{} completed ({}%)",
            output.overall.completed, output.overall.total, output.overall.percentage
        ));
        lines.push(format!(
            "Achievements: {}/{}",
            output.achievements_earned, output.achievements_total
        ));

        lines.join("\n") + "\n"
    }
}
