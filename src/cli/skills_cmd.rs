//! Skills command: list catalog skills with progress and lock state.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::ledger::{Ledger, SkillProgressView};
use crate::storage::ProgressStore;

/// Options for the skills command.
#[derive(Debug, Clone, Default)]
pub struct SkillsOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
}

/// One row in the skills listing.
#[derive(Debug, Clone, Serialize)]
pub struct SkillRow {
    /// Skill id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Whether the skill is unlocked for the learner.
    pub unlocked: bool,
    /// Completion summary.
    pub progress: SkillProgressView,
}

/// Output format for the skills command.
#[derive(Debug, Clone, Serialize)]
pub struct SkillsOutput {
    /// Whether the listing was produced.
    pub success: bool,
    /// One row per catalog skill, in display order.
    pub skills: Vec<SkillRow>,
}

/// The skills command implementation.
pub struct SkillsCommand<S: ProgressStore> {
    ledger: Ledger<S>,
}

impl<S: ProgressStore> SkillsCommand<S> {
    /// Create a new skills command.
    pub fn new(store: S, catalog: Catalog, config: Config) -> Self {
        Self {
            ledger: Ledger::with_tables(store, catalog, config.rewards, config.levels),
        }
    }

    /// Run the skills command.
    pub fn run(&self, _options: &SkillsOptions) -> SkillsOutput {
        let state = self.ledger.load();

        let skills = self
            .ledger
            .catalog()
            .skills()
            .iter()
            .map(|skill| SkillRow {
                id: skill.id.clone(),
                name: skill.name.clone(),
                unlocked: self.ledger.is_skill_unlocked(&state, &skill.id),
                progress: self.ledger.skill_progress(&state, &skill.id),
            })
            .collect();

        SkillsOutput {
            success: true,
            skills,
        }
    }

    /// Format output based on options.
    pub fn format_output(&self, output: &SkillsOutput, options: &SkillsOptions) -> String {
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
    fn format_human_readable(&self, output: &SkillsOutput) -> String {
        let mut lines = Vec::new();

        for row in &output.skills {
            let lock = if row.unlocked { " " } else { "*" };
            lines.push(format!(
                "{}{:<12} {:>2}/{:<2} ({:>3}%)  {}",
                lock,
                row.id,
                row.progress.completed,
                row.progress.total,
                row.progress.percentage,
                row.name
            ));
        }

        lines.push(String::new());
        lines.push("* = locked (complete the prerequisite skill first)".to_string());

        lines.join("\n") + "\n"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;
    use crate::ledger::Grade;
    use crate::storage::MemoryProgressStore;
    use std::sync::Arc;

    fn setup() -> (SkillsCommand<Arc<MemoryProgressStore>>, Arc<MemoryProgressStore>) {
        let store = Arc::new(MemoryProgressStore::new());
        let cmd = SkillsCommand::new(Arc::clone(&store), builtin(), Config::default());
        (cmd, store)
    }

    #[test]
    fn test_skills_fresh_state() {
        let (cmd, _store) = setup();

        let output = cmd.run(&SkillsOptions::default());

        assert!(output.success);
        assert_eq!(output.skills.len(), 5);

        // Only the first skill starts unlocked
        assert!(output.skills[0].unlocked);
        assert!(output.skills[1..].iter().all(|row| !row.unlocked));
    }

    #[test]
    fn test_skills_unlock_after_progress() {
        let (cmd, store) = setup();

        let ledger = Ledger::new(Arc::clone(&store), builtin());
        for i in 0..6 {
            let exercise_id = format!("greetings_{}", i + 1);
            ledger.complete_exercise("greetings", &exercise_id, Grade::correct());
        }

        let output = cmd.run(&SkillsOptions::default());

        let numbers = output.skills.iter().find(|r| r.id == "numbers").unwrap();
        assert!(numbers.unlocked);
        let family = output.skills.iter().find(|r| r.id == "family").unwrap();
        assert!(!family.unlocked);
    }

    #[test]
    fn test_skills_rows_carry_progress() {
        let (cmd, store) = setup();

        let ledger = Ledger::new(Arc::clone(&store), builtin());
        ledger.complete_exercise("greetings", "greetings_1", Grade::correct());

        let output = cmd.run(&SkillsOptions::default());

        let greetings = output.skills.iter().find(|r| r.id == "greetings").unwrap();
        assert_eq!(greetings.progress.completed, 1);
        assert_eq!(greetings.progress.total, 8);
        assert_eq!(greetings.progress.percentage, 13);
    }

    #[test]
    fn test_format_human_readable_marks_locked() {
        let (cmd, _store) = setup();

        let output = cmd.run(&SkillsOptions::default());
        let formatted = cmd.format_output(&output, &SkillsOptions::default());

        assert!(formatted.contains("greetings"));
        assert!(formatted.contains("*numbers"));
        assert!(formatted.contains("locked"));
    }

    #[test]
    fn test_format_json() {
        let (cmd, _store) = setup();

        let output = cmd.run(&SkillsOptions::default());
        let options = SkillsOptions {
            json: true,
            ..Default::default()
        };
        let formatted = cmd.format_output(&output, &options);

        assert!(formatted.contains("\"id\": \"greetings\""));
        assert!(formatted.contains("\"unlocked\": true"));
    }

    #[test]
    fn test_format_quiet() {
        let (cmd, _store) = setup();

        let output = cmd.run(&SkillsOptions::default());
        let options = SkillsOptions {
            quiet: true,
            ..Default::default()
        };

        assert!(cmd.format_output(&output, &options).is_empty());
    }
}
