//! Static skill catalog: skills, exercises, unlock requirements.

pub mod builtin;
pub mod types;

pub use builtin::builtin;
pub use types::{Catalog, Exercise, ExerciseKind, Skill, UnlockRequirement};
