//! Azul - Progress ledger for the Azul Tarifit learning app
//!
//! CLI entry point with global panic handler.

use std::io::Write;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use azul::catalog::builtin;
use azul::config::{azul_home, Config};
use azul::error::exit_codes;
use azul::ledger::Grade;
use azul::storage::FileProgressStore;

// =============================================================================
// CLI Definition
// =============================================================================

/// Azul - Progress ledger for the Azul Tarifit learning app
#[derive(Parser)]
#[command(name = "azul")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a graded exercise submission
    Complete {
        /// Skill the exercise belongs to
        skill_id: String,
        /// Exercise to grade
        exercise_id: String,
        /// Submit an answer to be graded against the catalog
        #[arg(long, conflicts_with_all = ["correct", "first_try", "perfect"])]
        answer: Option<String>,
        /// Record the submission as correct
        #[arg(long)]
        correct: bool,
        /// Record the submission as a first try
        #[arg(long)]
        first_try: bool,
        /// Record the submission as a perfect score
        #[arg(long)]
        perfect: bool,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
    },

    /// Show level, XP, streak, and overall completion
    Stats {
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
    },

    /// List skills with progress and lock state
    Skills {
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
    },

    /// List achievements with earned state
    Achievements {
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
        /// Show only earned achievements
        #[arg(long)]
        earned: bool,
    },

    /// Reset all progress to the default state
    Reset {
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
    },
}

// =============================================================================
// Main Entry Point
// =============================================================================

fn main() -> ExitCode {
    setup_panic_handler();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("azul error: {}", e);
            ExitCode::from(exit_codes::ERROR as u8)
        }
    }
}

/// Set up the global panic handler.
///
/// On panic, logs to ~/.azul/crash.log and exits with the crash code so a
/// bug in the ledger never looks like a silent success.
fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("azul panic: {}", info);

        if let Some(home) = azul_home() {
            let crash_log = home.join("crash.log");
            if let Ok(mut file) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&crash_log)
            {
                let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
                let _ = writeln!(file, "[{}] {}", timestamp, info);
            }
        }

        std::process::exit(exit_codes::CRASH);
    }));
}

/// Convert a success boolean to an exit code.
fn success_to_exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::from(exit_codes::OK as u8)
    } else {
        ExitCode::from(exit_codes::ERROR as u8)
    }
}

/// Run the CLI and return the exit code.
fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Complete {
            skill_id,
            exercise_id,
            answer,
            correct,
            first_try,
            perfect,
            json,
            quiet,
        } => run_complete(
            &skill_id,
            &exercise_id,
            answer.as_deref(),
            correct,
            first_try,
            perfect,
            json,
            quiet,
        ),
        Commands::Stats { json, quiet } => run_stats(json, quiet),
        Commands::Skills { json, quiet } => run_skills(json, quiet),
        Commands::Achievements {
            json,
            quiet,
            earned,
        } => run_achievements(json, quiet, earned),
        Commands::Reset { json, quiet } => run_reset(json, quiet),
    }
}

// =============================================================================
// Command Implementations
// =============================================================================

#[allow(clippy::too_many_arguments)]
fn run_complete(
    skill_id: &str,
    exercise_id: &str,
    answer: Option<&str>,
    correct: bool,
    first_try: bool,
    perfect: bool,
    json: bool,
    quiet: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    use azul::cli::complete::{CompleteCommand, CompleteOptions};

    let config = Config::load();
    let store = FileProgressStore::new()?;

    let cmd = CompleteCommand::new(store, builtin(), config);
    let options = CompleteOptions { json, quiet };

    let output = match answer {
        Some(answer) => cmd.run_with_answer(skill_id, exercise_id, answer, &options),
        None => {
            let mut grade = if correct {
                Grade::correct()
            } else {
                Grade::incorrect()
            };
            if first_try {
                grade = grade.on_first_try();
            }
            if perfect {
                grade = grade.with_perfect_score();
            }
            cmd.run(skill_id, exercise_id, grade, &options)
        }
    };

    let formatted = cmd.format_output(&output, &options);
    if !formatted.is_empty() {
        println!("{}", formatted);
    }

    Ok(success_to_exit_code(output.success))
}

fn run_stats(json: bool, quiet: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    use azul::cli::stats::{StatsCommand, StatsOptions};

    let config = Config::load();
    let store = FileProgressStore::new()?;

    let cmd = StatsCommand::new(store, builtin(), config);
    let options = StatsOptions { json, quiet };

    let output = cmd.run(&options);
    let formatted = cmd.format_output(&output, &options);

    if !formatted.is_empty() {
        println!("{}", formatted);
    }

    Ok(success_to_exit_code(output.success))
}

fn run_skills(json: bool, quiet: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    use azul::cli::skills_cmd::{SkillsCommand, SkillsOptions};

    let config = Config::load();
    let store = FileProgressStore::new()?;

    let cmd = SkillsCommand::new(store, builtin(), config);
    let options = SkillsOptions { json, quiet };

    let output = cmd.run(&options);
    let formatted = cmd.format_output(&output, &options);

    if !formatted.is_empty() {
        println!("{}", formatted);
    }

    Ok(success_to_exit_code(output.success))
}

fn run_achievements(
    json: bool,
    quiet: bool,
    earned_only: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    use azul::cli::achievements_cmd::{AchievementsCommand, AchievementsOptions};

    let config = Config::load();
    let store = FileProgressStore::new()?;

    let cmd = AchievementsCommand::new(store, builtin(), config);
    let options = AchievementsOptions {
        json,
        quiet,
        earned_only,
    };

    let output = cmd.run(&options);
    let formatted = cmd.format_output(&output, &options);

    if !formatted.is_empty() {
        println!("{}", formatted);
    }

    Ok(success_to_exit_code(output.success))
}

fn run_reset(json: bool, quiet: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    use azul::cli::reset::{ResetCommand, ResetOptions};

    let config = Config::load();
    let store = FileProgressStore::new()?;

    let cmd = ResetCommand::new(store, builtin(), config);
    let options = ResetOptions { json, quiet };

    let output = cmd.run(&options);
    let formatted = cmd.format_output(&output, &options);

    if !formatted.is_empty() {
        println!("{}", formatted);
    }

    Ok(success_to_exit_code(output.success))
}

// =============================================================================
// Tests
// =============================================================================
