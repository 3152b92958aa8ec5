//! Skill taxonomy and score vector types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Neutral score assigned to every skill before analysis, and substituted
/// for missing or unparseable values everywhere in the pipeline.
pub const NEUTRAL_SCORE: f64 = 1.0;

/// Lower bound of the score scale.
pub const MIN_SCORE: f64 = 0.0;

/// Upper bound of the score scale.
pub const MAX_SCORE: f64 = 2.0;

/// The fixed 15-item skill taxonomy every evaluation is scored over.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Reading,
    Writing,
    Calculation,
    TimeManagement,
    Grooming,
    MotorSkills,
    Mobility,
    Stamina,
    Concentration,
    ProblemSolving,
    Teamwork,
    Communication,
    Flexibility,
    TaskExecution,
    ServicePerformance,
}

impl Skill {
    /// Every skill in the taxonomy, in canonical order.
    pub const ALL: [Skill; 15] = [
        Skill::Reading,
        Skill::Writing,
        Skill::Calculation,
        Skill::TimeManagement,
        Skill::Grooming,
        Skill::MotorSkills,
        Skill::Mobility,
        Skill::Stamina,
        Skill::Concentration,
        Skill::ProblemSolving,
        Skill::Teamwork,
        Skill::Communication,
        Skill::Flexibility,
        Skill::TaskExecution,
        Skill::ServicePerformance,
    ];

    /// The four primary skills the matcher compares by default.
    pub const PRIMARY: [Skill; 4] = [
        Skill::Reading,
        Skill::Writing,
        Skill::Calculation,
        Skill::Communication,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Skill::Reading => "reading",
            Skill::Writing => "writing",
            Skill::Calculation => "calculation",
            Skill::TimeManagement => "time_management",
            Skill::Grooming => "grooming",
            Skill::MotorSkills => "motor_skills",
            Skill::Mobility => "mobility",
            Skill::Stamina => "stamina",
            Skill::Concentration => "concentration",
            Skill::ProblemSolving => "problem_solving",
            Skill::Teamwork => "teamwork",
            Skill::Communication => "communication",
            Skill::Flexibility => "flexibility",
            Skill::TaskExecution => "task_execution",
            Skill::ServicePerformance => "service_performance",
        }
    }

    /// Lenient lookup by canonical name. Unknown names yield `None` so
    /// catalog entries with unrecognized skills degrade instead of failing.
    pub fn from_name(name: &str) -> Option<Skill> {
        let name = name.trim().to_lowercase();
        Skill::ALL.iter().copied().find(|s| s.as_str() == name)
    }

    /// Human-readable label for report output.
    pub fn label(&self) -> &'static str {
        match self {
            Skill::Reading => "Reading",
            Skill::Writing => "Writing",
            Skill::Calculation => "Calculation",
            Skill::TimeManagement => "Time Management",
            Skill::Grooming => "Grooming",
            Skill::MotorSkills => "Motor Skills",
            Skill::Mobility => "Mobility",
            Skill::Stamina => "Stamina",
            Skill::Concentration => "Concentration",
            Skill::ProblemSolving => "Problem Solving",
            Skill::Teamwork => "Teamwork",
            Skill::Communication => "Communication",
            Skill::Flexibility => "Flexibility",
            Skill::TaskExecution => "Task Execution",
            Skill::ServicePerformance => "Service Performance",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Question categories the self-assessment form collects answers for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Reading,
    Writing,
    Calculation,
    Communication,
}

impl QuestionCategory {
    pub const ALL: [QuestionCategory; 4] = [
        QuestionCategory::Reading,
        QuestionCategory::Writing,
        QuestionCategory::Calculation,
        QuestionCategory::Communication,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionCategory::Reading => "reading",
            QuestionCategory::Writing => "writing",
            QuestionCategory::Calculation => "calculation",
            QuestionCategory::Communication => "communication",
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Numeric profile of a respondent over the skill taxonomy.
///
/// Values live on a [0.0, 2.0] scale with 1.0 neutral. Skills that were
/// never scored read back as neutral rather than zero so that incomplete
/// input is not penalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillVector {
    scores: BTreeMap<Skill, f64>,
}

impl SkillVector {
    /// Empty vector; every skill reads back as neutral.
    pub fn new() -> Self {
        Self {
            scores: BTreeMap::new(),
        }
    }

    /// Vector with every taxonomy skill explicitly set to neutral.
    pub fn neutral() -> Self {
        let mut vector = Self::new();
        for skill in Skill::ALL {
            vector.scores.insert(skill, NEUTRAL_SCORE);
        }
        vector
    }

    /// Stored value, or neutral for skills that were never scored.
    pub fn get(&self, skill: Skill) -> f64 {
        self.scores.get(&skill).copied().unwrap_or(NEUTRAL_SCORE)
    }

    /// Store a value, clamped to the score scale.
    pub fn set(&mut self, skill: Skill, value: f64) {
        self.scores.insert(skill, value.clamp(MIN_SCORE, MAX_SCORE));
    }

    /// Whether the skill has an explicitly stored value.
    pub fn contains(&self, skill: Skill) -> bool {
        self.scores.contains_key(&skill)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterate stored entries in canonical skill order.
    pub fn iter(&self) -> impl Iterator<Item = (Skill, f64)> + '_ {
        self.scores.iter().map(|(skill, value)| (*skill, *value))
    }

    /// Skills whose score meets the given threshold, in canonical order.
    pub fn skills_at_or_above(&self, threshold: f64) -> Vec<Skill> {
        self.scores
            .iter()
            .filter(|(_, value)| **value >= threshold)
            .map(|(skill, _)| *skill)
            .collect()
    }
}

impl Default for SkillVector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_skill_reads_neutral() {
        let vector = SkillVector::new();
        assert_eq!(vector.get(Skill::Writing), NEUTRAL_SCORE);
    }

    #[test]
    fn test_set_clamps_to_scale() {
        let mut vector = SkillVector::new();
        vector.set(Skill::Reading, 3.7);
        vector.set(Skill::Calculation, -1.0);
        assert_eq!(vector.get(Skill::Reading), MAX_SCORE);
        assert_eq!(vector.get(Skill::Calculation), MIN_SCORE);
    }

    #[test]
    fn test_neutral_covers_full_taxonomy() {
        let vector = SkillVector::neutral();
        assert_eq!(vector.len(), Skill::ALL.len());
        for skill in Skill::ALL {
            assert_eq!(vector.get(skill), NEUTRAL_SCORE);
        }
    }

    #[test]
    fn test_skill_name_round_trip() {
        for skill in Skill::ALL {
            assert_eq!(Skill::from_name(skill.as_str()), Some(skill));
        }
        assert_eq!(Skill::from_name("juggling"), None);
        assert_eq!(Skill::from_name("  Reading "), Some(Skill::Reading));
    }

    #[test]
    fn test_skill_serializes_as_snake_case() {
        let json = serde_json::to_string(&Skill::ProblemSolving).unwrap();
        assert_eq!(json, "\"problem_solving\"");
    }

    #[test]
    fn test_vector_serializes_as_flat_map() {
        let mut vector = SkillVector::new();
        vector.set(Skill::Reading, 1.8);
        let json = serde_json::to_string(&vector).unwrap();
        assert_eq!(json, "{\"reading\":1.8}");
    }

    #[test]
    fn test_strengths_extraction() {
        let mut vector = SkillVector::neutral();
        vector.set(Skill::Communication, 1.9);
        vector.set(Skill::Teamwork, 1.5);
        let strengths = vector.skills_at_or_above(1.5);
        assert_eq!(strengths, vec![Skill::Teamwork, Skill::Communication]);
    }
}
