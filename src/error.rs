//! Unified error types for the Azul ledger with fail-open philosophy.
//!
//! All errors follow the fail-open principle: infrastructure errors should
//! never take the learner's session down. When errors occur, we log warnings
//! and return safe defaults rather than propagating failures that would
//! interrupt study.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for ledger operations.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// I/O errors from progress file operations.
    #[error("storage error at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON parsing/serialization errors for the progress document.
    #[error("serialization error: {message}")]
    Serde { message: String },

    /// Configuration loading errors.
    #[error("config error: {message}")]
    Config { message: String },

    /// Skill id not present in the catalog.
    #[error("unknown skill: {skill_id}")]
    UnknownSkill { skill_id: String },

    /// Exercise id not present in its skill.
    #[error("unknown exercise: {exercise_id}")]
    UnknownExercise { exercise_id: String },
}

/// A specialized Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

impl LedgerError {
    /// Create a storage error from an I/O error.
    pub fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }

    /// Create a serialization error.
    pub fn serde(message: impl Into<String>) -> Self {
        Self::Serde {
            message: message.into(),
        }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an unknown skill error.
    pub fn unknown_skill(skill_id: impl Into<String>) -> Self {
        Self::UnknownSkill {
            skill_id: skill_id.into(),
        }
    }

    /// Create an unknown exercise error.
    pub fn unknown_exercise(exercise_id: impl Into<String>) -> Self {
        Self::UnknownExercise {
            exercise_id: exercise_id.into(),
        }
    }
}

impl From<io::Error> for LedgerError {
    fn from(err: io::Error) -> Self {
        Self::Storage {
            path: PathBuf::new(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde {
            message: err.to_string(),
        }
    }
}

/// Trait for fail-open error handling.
///
/// This trait provides methods for handling errors according to the ledger's
/// fail-open philosophy: log the error and return a safe default, so the UI
/// keeps functioning for the rest of the session.
pub trait FailOpen<T> {
    /// Handle an error by logging a warning and returning the default value.
    fn fail_open_default(self, context: &str) -> T
    where
        T: Default;

    /// Handle an error by logging a warning and returning the provided fallback.
    fn fail_open_with(self, context: &str, fallback: T) -> T;
}

impl<T> FailOpen<T> for Result<T> {
    fn fail_open_default(self, context: &str) -> T
    where
        T: Default,
    {
        match self {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("{}: {} (fail-open: using default)", context, err);
                T::default()
            }
        }
    }

    fn fail_open_with(self, context: &str, fallback: T) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("{}: {} (fail-open: using fallback)", context, err);
                fallback
            }
        }
    }
}

/// Exit codes for the Azul CLI.
pub mod exit_codes {
    /// Exit code for a successful command.
    pub const OK: i32 = 0;

    /// Exit code for a failed command.
    pub const ERROR: i32 = 1;

    /// Exit code for a crash (panic handler).
    pub const CRASH: i32 = 3;
}
