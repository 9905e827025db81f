//! Achievements command: list badges with earned state.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::ledger::{achievements, Ledger};
use crate::storage::ProgressStore;

/// Options for the achievements command.
#[derive(Debug, Clone, Default)]
pub struct AchievementsOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
    /// Show only earned achievements.
    pub earned_only: bool,
}

/// One row in the achievements listing.
#[derive(Debug, Clone, Serialize)]
pub struct AchievementRow {
    /// Achievement id.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Display description.
    pub description: String,
    /// XP value shown next to the badge.
    pub xp: u32,
    /// Whether the learner has earned it.
    pub earned: bool,
}

/// Output format for the achievements command.
#[derive(Debug, Clone, Serialize)]
pub struct AchievementsOutput {
    /// Whether the listing was produced.
    pub success: bool,
    /// Rows in catalog order; earned ids without a definition come last.
    pub achievements: Vec<AchievementRow>,
    /// Earned count.
    pub earned: usize,
    /// Total defined count.
    pub total: usize,
}

/// The achievements command implementation.
pub struct AchievementsCommand<S: ProgressStore> {
    ledger: Ledger<S>,
}

impl<S: ProgressStore> AchievementsCommand<S> {
    /// Create a new achievements command.
    pub fn new(store: S, catalog: Catalog, config: Config) -> Self {
        Self {
            ledger: Ledger::with_tables(store, catalog, config.rewards, config.levels),
        }
    }

    /// Run the achievements command.
    pub fn run(&self, options: &AchievementsOptions) -> AchievementsOutput {
        let state = self.ledger.load();

        let mut rows: Vec<AchievementRow> = achievements::definitions()
            .iter()
            .map(|def| AchievementRow {
                id: def.id.to_string(),
                title: def.title.to_string(),
                description: def.description.to_string(),
                xp: def.xp,
                earned: state.has_achievement(def.id),
            })
            .collect();

        // Earned ids from a custom catalog may have no shipped definition;
        // surface them rather than hiding them.
        for id in &state.achievements {
            if achievements::definition(id).is_none() {
                rows.push(AchievementRow {
                    id: id.clone(),
                    title: id.clone(),
                    description: String::new(),
                    xp: 0,
                    earned: true,
                });
            }
        }

        if options.earned_only {
            rows.retain(|row| row.earned);
        }

        let earned = state.achievements.len();
        AchievementsOutput {
            success: true,
            achievements: rows,
            earned,
            total: achievements::definitions().len(),
        }
    }

    /// Format output based on options.
    pub fn format_output(&self, output: &AchievementsOutput, options: &AchievementsOptions) -> String {
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
    fn format_human_readable(&self, output: &AchievementsOutput) -> String {
        let mut lines = Vec::new();

        for row in &output.achievements {
            let marker = if row.earned { "[x]" } else { "[ ]" };
            lines.push(format!(
                "{} {} (+{} XP) - {}",
                marker, row.title, row.xp, row.description
            ));
        }

        lines.push(String::new());
        lines.push(format!("Earned {}/{}", output.earned, output.total));

        lines.join("\n") + "\n"
    }
}
