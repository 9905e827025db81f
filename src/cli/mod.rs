//! CLI commands for the Azul ledger.
//!
//! Commands follow one pattern: an `Options` struct (`--json`, `--quiet`),
//! a serializable `Output` with a `success` flag, and a `format_output`
//! method that renders JSON or human-readable text.

pub mod achievements_cmd;
pub mod complete;
pub mod reset;
pub mod skills_cmd;
pub mod stats;

pub use achievements_cmd::AchievementsCommand;
pub use complete::CompleteCommand;
pub use reset::ResetCommand;
pub use skills_cmd::SkillsCommand;
pub use stats::StatsCommand;
