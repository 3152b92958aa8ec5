//! Job matching engine
//!
//! Compares a skill vector against every catalog record and produces a
//! ranked list of bounded match percentages. Pure arithmetic, no I/O:
//! for well-typed input this never fails, and catalog leniency upstream
//! guarantees well-typed input.

use crate::input::answers::{PhysicalCapability, UserConstraints};
use crate::input::catalog::{JobCatalog, JobRecord, PhysicalDemand};
use crate::scoring::taxonomy::{Skill, SkillVector};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Which slice of the taxonomy the matcher compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillSubset {
    /// The four primary skills the form asks direct questions about.
    Primary,
    /// The full 15-item taxonomy.
    Full,
}

impl SkillSubset {
    pub fn skills(&self) -> &'static [Skill] {
        match self {
            SkillSubset::Primary => &Skill::PRIMARY,
            SkillSubset::Full => &Skill::ALL,
        }
    }
}

/// Matching constants. All tunable; the defaults are the one consistent
/// set this build ships with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Requirement assumed for skills a job record does not list.
    pub default_requirement: f64,

    /// Weight on (required - user) when the user falls short.
    pub deficit_weight: f64,

    /// Weight on (user - required) when the user meets or exceeds.
    pub surplus_weight: f64,

    /// Starting percentage before deltas are applied.
    pub base_percent: f64,

    /// Percentage points per unit of accumulated delta.
    pub scaling_factor: f64,

    /// No job is ever reported below this rate.
    pub floor_percent: f64,

    /// No job is ever reported at or above 100.
    pub cap_percent: f64,

    /// Multiplier when a heavy-demand job meets limited capability.
    pub physical_penalty: f64,

    /// Multiplier when a job's environment is on the avoid list.
    pub environment_penalty: f64,

    pub skill_subset: SkillSubset,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            default_requirement: 0.8,
            deficit_weight: 3.0,
            surplus_weight: 0.5,
            base_percent: 85.0,
            scaling_factor: 10.0,
            floor_percent: 45.0,
            cap_percent: 99.0,
            physical_penalty: 0.75,
            environment_penalty: 0.6,
            skill_subset: SkillSubset::Primary,
        }
    }
}

/// One job paired with its computed fit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub job: JobRecord,

    /// Bounded percentage, rounded to one decimal.
    pub match_rate: f64,

    /// Skills in the compared subset the user meets or exceeds.
    pub matched_skills: usize,

    /// Size of the compared subset.
    pub total_skills: usize,
}

pub struct JobMatcher {
    config: MatchingConfig,
}

impl JobMatcher {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    /// Rank every catalog job by descending match rate. Ties keep
    /// catalog order (stable sort). An empty catalog yields an empty
    /// list.
    pub fn rank(
        &self,
        profile: &SkillVector,
        constraints: &UserConstraints,
        catalog: &JobCatalog,
    ) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = catalog
            .jobs
            .iter()
            .map(|job| self.score_job(profile, constraints, job))
            .collect();

        results.sort_by(|a, b| {
            b.match_rate
                .partial_cmp(&a.match_rate)
                .unwrap_or(Ordering::Equal)
        });
        results
    }

    fn score_job(
        &self,
        profile: &SkillVector,
        constraints: &UserConstraints,
        job: &JobRecord,
    ) -> MatchResult {
        let skills = self.config.skill_subset.skills();

        let mut total_diff = 0.0;
        let mut matched_skills = 0;
        for &skill in skills {
            let required = job
                .required_scores
                .get(&skill)
                .copied()
                .unwrap_or(self.config.default_requirement);
            let user = profile.get(skill);

            if user < required {
                total_diff += (required - user) * self.config.deficit_weight;
            } else {
                total_diff -= (user - required) * self.config.surplus_weight;
                matched_skills += 1;
            }
        }

        let base_rate = self.config.base_percent - total_diff * self.config.scaling_factor;
        let mut rate = base_rate.max(self.config.floor_percent);

        if self.physical_mismatch(constraints, job) {
            rate *= self.config.physical_penalty;
        }
        if self.environment_mismatch(constraints, job) {
            rate *= self.config.environment_penalty;
        }

        // Penalties may push below the floor; the reported band stays
        // [floor, cap] regardless.
        rate = rate.clamp(self.config.floor_percent, self.config.cap_percent);

        MatchResult {
            job: job.clone(),
            match_rate: round_one_decimal(rate),
            matched_skills,
            total_skills: skills.len(),
        }
    }

    fn physical_mismatch(&self, constraints: &UserConstraints, job: &JobRecord) -> bool {
        job.physical_demand == Some(PhysicalDemand::Heavy)
            && constraints.physical_capability == Some(PhysicalCapability::Limited)
    }

    fn environment_mismatch(&self, constraints: &UserConstraints, job: &JobRecord) -> bool {
        let tag = match &job.environment {
            Some(tag) => tag.trim(),
            None => return false,
        };
        constraints
            .avoided_environments
            .iter()
            .any(|avoided| avoided.trim().eq_ignore_ascii_case(tag))
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
