//! Skill catalog types for the Azul ledger.
//!
//! The catalog is static, read-only input to the ledger: skills, their
//! exercises, and unlock requirements. Progress is tracked separately in
//! [`crate::ledger::ProgressState`], keyed by the ids defined here.

use serde::{Deserialize, Serialize};

/// The kind of a graded exercise.
///
/// The kind drives the base XP reward lookup. Kinds without a dedicated
/// reward entry fall back to the table's default reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExerciseKind {
    /// Match a word to a picture.
    PictureMatching,
    /// Free-text translation of a prompt.
    Translation,
    /// Free-text translation with an inline hint.
    TranslateText,
    /// Choose the answer from fixed options.
    MultipleChoice,
    /// Reorder scrambled words into a sentence.
    SentenceBuilding,
}

/// A single graded learning activity belonging to a skill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    /// Stable exercise identifier, unique within the catalog.
    pub id: String,
    /// Exercise kind (drives reward lookup and presentation).
    pub kind: ExerciseKind,
    /// Short display title.
    pub title: String,
    /// The prompt shown to the learner (question, word, or scrambled words).
    pub prompt: String,
    /// Answer options for choice-based kinds; empty for free-text kinds.
    pub options: Vec<String>,
    /// The canonical correct answer. For sentence building this is the
    /// correctly ordered words joined by single spaces.
    pub answer: String,
    /// English meaning of the answer, when the prompt doesn't carry it.
    pub meaning: Option<String>,
    /// Usage context shown alongside sentence-building exercises.
    pub context: Option<String>,
}

impl Exercise {
    /// Create a new exercise.
    pub fn new(
        id: impl Into<String>,
        kind: ExerciseKind,
        title: impl Into<String>,
        prompt: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            prompt: prompt.into(),
            options: Vec::new(),
            answer: answer.into(),
            meaning: None,
            context: None,
        }
    }

    /// Attach answer options.
    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Attach an English meaning.
    pub fn with_meaning(mut self, meaning: impl Into<String>) -> Self {
        self.meaning = Some(meaning.into());
        self
    }

    /// Attach a usage context.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Check a submitted answer against the canonical one.
    ///
    /// Whitespace around the submission is ignored; interior whitespace is
    /// collapsed so sentence-building submissions grade on word order alone.
    pub fn check_answer(&self, submitted: &str) -> bool {
        normalize(submitted) == normalize(&self.answer)
    }
}

/// Collapse runs of whitespace and trim the ends.
fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Unlock requirement gating a skill behind progress in another.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnlockRequirement {
    /// The prerequisite skill.
    pub skill_id: String,
    /// Minimum completed exercises in the prerequisite skill.
    pub completed_exercises: u32,
}

impl UnlockRequirement {
    /// Create a new unlock requirement.
    pub fn new(skill_id: impl Into<String>, completed_exercises: u32) -> Self {
        Self {
            skill_id: skill_id.into(),
            completed_exercises,
        }
    }
}

/// A named, ordered collection of exercises with a completion target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    /// Stable skill identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Number of exercises counted toward skill completion.
    pub total_exercises: u32,
    /// Unlock requirement, or `None` for always-unlocked skills.
    pub unlock_requirement: Option<UnlockRequirement>,
    /// Ordered exercise list.
    pub exercises: Vec<Exercise>,
}

impl Skill {
    /// Create a new skill from its exercises.
    ///
    /// `total_exercises` is derived from the exercise list.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        exercises: Vec<Exercise>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            total_exercises: exercises.len() as u32,
            unlock_requirement: None,
            exercises,
        }
    }

    /// Gate this skill behind progress in another.
    pub fn with_unlock_requirement(mut self, requirement: UnlockRequirement) -> Self {
        self.unlock_requirement = Some(requirement);
        self
    }

    /// Look up an exercise by id.
    pub fn exercise(&self, exercise_id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|ex| ex.id == exercise_id)
    }
}

/// The full skill catalog: ordered skills with stable ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Catalog {
    skills: Vec<Skill>,
}

impl Catalog {
    /// Create a catalog from an ordered skill list.
    pub fn new(skills: Vec<Skill>) -> Self {
        Self { skills }
    }

    /// All skills, in display order.
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// Look up a skill by id.
    pub fn skill(&self, skill_id: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == skill_id)
    }

    /// Look up an exercise within a specific skill.
    pub fn exercise(&self, skill_id: &str, exercise_id: &str) -> Option<&Exercise> {
        self.skill(skill_id)?.exercise(exercise_id)
    }

    /// Total exercise count across all skills.
    pub fn total_exercises(&self) -> u32 {
        self.skills.iter().map(|s| s.total_exercises).sum()
    }
}
