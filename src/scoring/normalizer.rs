//! Score normalization seam
//!
//! Currently an identity transform: analyzer output is already on the
//! final scale. The pass exists so per-skill weighting or population
//! calibration can be added without touching the producers or the
//! matcher. It must keep every taxonomy key present and numeric, so it
//! completes partial vectors with the neutral value.

use crate::scoring::taxonomy::{Skill, SkillVector, NEUTRAL_SCORE};

#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreNormalizer;

impl ScoreNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Identity on stored values; missing taxonomy keys are filled with
    /// the neutral score.
    pub fn normalize(&self, mut vector: SkillVector) -> SkillVector {
        for skill in Skill::ALL {
            if !vector.contains(skill) {
                vector.set(skill, NEUTRAL_SCORE);
            }
        }
        vector
    }
}
