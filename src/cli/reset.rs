//! Reset command: replace all progress with the default zero-value state.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::ledger::Ledger;
use crate::storage::ProgressStore;

/// Options for the reset command.
#[derive(Debug, Clone, Default)]
pub struct ResetOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
}

/// Output format for the reset command.
#[derive(Debug, Clone, Serialize)]
pub struct ResetOutput {
    /// Whether the reset ran.
    pub success: bool,
    /// Whether the default state reached storage.
    pub persisted: bool,
    /// Total XP after the reset (always zero).
    pub total_xp: u32,
    /// Level after the reset (always one).
    pub level: u32,
}

/// The reset command implementation.
pub struct ResetCommand<S: ProgressStore> {
    ledger: Ledger<S>,
}

impl<S: ProgressStore> ResetCommand<S> {
    /// Create a new reset command.
    pub fn new(store: S, catalog: Catalog, config: Config) -> Self {
        Self {
            ledger: Ledger::with_tables(store, catalog, config.rewards, config.levels),
        }
    }

    /// Run the reset command.
    pub fn run(&self, _options: &ResetOptions) -> ResetOutput {
        let state = self.ledger.reset();
        // reset() already attempted the save; probe the store to report
        // whether the defaults actually landed.
        let persisted = self.ledger.load() == state;

        ResetOutput {
            success: true,
            persisted,
            total_xp: state.total_xp,
            level: state.level,
        }
    }

    /// Format output based on options.
    pub fn format_output(&self, output: &ResetOutput, options: &ResetOptions) -> String {
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
    fn format_human_readable(&self, output: &ResetOutput) -> String {
        if output.persisted {
            "All progress reset.\n".to_string()
        } else {
            "Progress reset in memory, but the new state could not be saved.\n".to_string()
        }
    }
}
