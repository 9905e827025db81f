//! Complete command: record a graded exercise submission.
//!
//! Two entry points: explicit grading flags for scripted use, or an
//! `--answer` submission graded against the catalog the way the exercise
//! modal grades it (first try when no attempt is on record, perfect score
//! on a correct first try).

use serde::Serialize;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::LedgerError;
use crate::ledger::{achievements, Completion, Grade, Ledger};
use crate::storage::ProgressStore;

/// Options for the complete command.
#[derive(Debug, Clone, Default)]
pub struct CompleteOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
}

/// Output format for the complete command.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteOutput {
    /// Whether the submission was recorded.
    pub success: bool,
    /// The skill the exercise belongs to.
    pub skill_id: String,
    /// The graded exercise.
    pub exercise_id: String,
    /// Whether the submission was correct.
    pub correct: bool,
    /// XP gained by this submission, including any streak bonus.
    pub xp_earned: u32,
    /// Total XP after the submission.
    pub total_xp: u32,
    /// Level after the submission.
    pub level: u32,
    /// Streak after the submission.
    pub streak: u32,
    /// Whether this was the exercise's first-ever correct completion.
    pub newly_completed: bool,
    /// Achievements earned by this submission.
    pub new_achievements: Vec<String>,
    /// Whether the new state reached storage.
    pub persisted: bool,
    /// Error message if the submission was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CompleteOutput {
    /// Create a successful output from a completion.
    fn from_completion(
        skill_id: &str,
        exercise_id: &str,
        correct: bool,
        completion: &Completion,
    ) -> Self {
        Self {
            success: true,
            skill_id: skill_id.to_string(),
            exercise_id: exercise_id.to_string(),
            correct,
            xp_earned: completion.xp_earned,
            total_xp: completion.state.total_xp,
            level: completion.state.level,
            streak: completion.state.current_streak,
            newly_completed: completion.newly_completed,
            new_achievements: completion.new_achievements.clone(),
            persisted: completion.persisted,
            error: None,
        }
    }

    /// Create a failed output.
    fn failure(skill_id: &str, exercise_id: &str, error: impl Into<String>) -> Self {
        Self {
            success: false,
            skill_id: skill_id.to_string(),
            exercise_id: exercise_id.to_string(),
            correct: false,
            xp_earned: 0,
            total_xp: 0,
            level: 0,
            streak: 0,
            newly_completed: false,
            new_achievements: Vec::new(),
            persisted: false,
            error: Some(error.into()),
        }
    }
}

/// The complete command implementation.
pub struct CompleteCommand<S: ProgressStore> {
    ledger: Ledger<S>,
}

impl<S: ProgressStore> CompleteCommand<S> {
    /// Create a new complete command.
    pub fn new(store: S, catalog: Catalog, config: Config) -> Self {
        Self {
            ledger: Ledger::with_tables(store, catalog, config.rewards, config.levels),
        }
    }

    /// Record a submission with explicit grading flags.
    ///
    /// The ledger itself treats unknown ids as a silent no-op; the command
    /// pre-validates them so the caller gets an actionable error instead.
    pub fn run(
        &self,
        skill_id: &str,
        exercise_id: &str,
        grade: Grade,
        _options: &CompleteOptions,
    ) -> CompleteOutput {
        if self.ledger.catalog().skill(skill_id).is_none() {
            return CompleteOutput::failure(
                skill_id,
                exercise_id,
                LedgerError::unknown_skill(skill_id).to_string(),
            );
        }
        if self.ledger.catalog().exercise(skill_id, exercise_id).is_none() {
            return CompleteOutput::failure(
                skill_id,
                exercise_id,
                LedgerError::unknown_exercise(exercise_id).to_string(),
            );
        }

        let completion = self.ledger.complete_exercise(skill_id, exercise_id, grade);
        CompleteOutput::from_completion(skill_id, exercise_id, grade.correct, &completion)
    }

    /// Grade a submitted answer against the catalog and record it.
    pub fn run_with_answer(
        &self,
        skill_id: &str,
        exercise_id: &str,
        answer: &str,
        options: &CompleteOptions,
    ) -> CompleteOutput {
        let Some(exercise) = self.ledger.catalog().exercise(skill_id, exercise_id) else {
            return self.run(skill_id, exercise_id, Grade::incorrect(), options);
        };

        let correct = exercise.check_answer(answer);
        let attempts_so_far = self
            .ledger
            .load()
            .skills
            .get(skill_id)
            .and_then(|s| s.exercises.get(exercise_id))
            .map(|e| e.attempts)
            .unwrap_or(0);
        let first_try = attempts_so_far == 0;

        let mut grade = if correct { Grade::correct() } else { Grade::incorrect() };
        if first_try {
            grade = grade.on_first_try();
            if correct {
                grade = grade.with_perfect_score();
            }
        }

        self.run(skill_id, exercise_id, grade, options)
    }

    /// Format output based on options.
    pub fn format_output(&self, output: &CompleteOutput, options: &CompleteOptions) -> String {
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
    fn format_human_readable(&self, output: &CompleteOutput) -> String {
        if !output.success {
            return format!(
                "Completion failed: {}\n",
                output.error.as_deref().unwrap_or("unknown error")
            );
        }

        let mut lines = Vec::new();

        if output.correct {
            lines.push(format!(
                "Correct! +{} XP (total {}, level {})",
                output.xp_earned, output.total_xp, output.level
            ));
        } else {
            lines.push(format!(
                "Not quite. Attempt recorded for {}.",
                output.exercise_id
            ));
        }

        lines.push(format!("Streak: {} day(s)", output.streak));

        for id in &output.new_achievements {
            let title = achievements::definition(id)
                .map(|def| def.title.to_string())
                .unwrap_or_else(|| id.clone());
            lines.push(format!("Achievement unlocked: {}", title));
        }

        if !output.persisted {
            lines.push("Warning: progress could not be saved this time.".to_string());
        }

        lines.join("\n") + "\n"
    }
}
