//! Evaluation report structure

use crate::scoring::matcher::MatchResult;
use crate::scoring::taxonomy::{Skill, SkillVector};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything one evaluation produced, passed by value to whatever
/// renders it. Recomputed on every submission, never persisted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub respondent: String,

    /// Analyzer strategy that produced the profile.
    pub strategy: String,

    pub profile: SkillVector,

    /// Skills scored high enough to call out as strengths.
    pub strengths: Vec<Skill>,

    /// Catalog ranked by descending match rate.
    pub matches: Vec<MatchResult>,

    pub generated_at: DateTime<Utc>,

    pub processing_time_ms: u64,
}

impl EvaluationReport {
    /// The strongest suggestion, when the catalog was not empty.
    pub fn best_match(&self) -> Option<&MatchResult> {
        self.matches.first()
    }
}
