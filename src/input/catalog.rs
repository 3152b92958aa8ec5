//! Job catalog loading
//!
//! The catalog is read whole from a JSON file of shape `{"jobs": [...]}`
//! and is never mutated afterwards. Loading is lenient per entry: one
//! malformed job record is skipped with a warning instead of aborting the
//! batch, and missing descriptive fields are substituted with
//! placeholders.

use crate::error::{Result, WorkfitError};
use crate::scoring::taxonomy::{Skill, MAX_SCORE, MIN_SCORE};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Placeholder for jobs without a usable name.
const UNNAMED_JOB: &str = "(unnamed)";

/// Placeholder for jobs without a usable category.
const UNCATEGORIZED: &str = "(uncategorized)";

/// Physical demand level a job may be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhysicalDemand {
    Light,
    Moderate,
    Heavy,
}

impl PhysicalDemand {
    /// Lenient parse; unrecognized tags yield `None`.
    fn from_tag(tag: &str) -> Option<PhysicalDemand> {
        match tag.trim().to_lowercase().as_str() {
            "light" | "low" => Some(PhysicalDemand::Light),
            "moderate" | "medium" => Some(PhysicalDemand::Moderate),
            "heavy" | "high" => Some(PhysicalDemand::Heavy),
            _ => None,
        }
    }
}

/// One occupation profile from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub name: String,
    pub category: String,

    /// Required score per skill. Skills a job does not list fall back to
    /// the matcher's configured default requirement.
    #[serde(default)]
    pub required_scores: BTreeMap<Skill, f64>,

    #[serde(default)]
    pub physical_demand: Option<PhysicalDemand>,

    /// Environment tag that disqualifies respondents who listed it among
    /// their environments to avoid.
    #[serde(default)]
    pub environment: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub salary: String,

    #[serde(default)]
    pub support: String,
}

/// Read-only collection of job records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobCatalog {
    pub jobs: Vec<JobRecord>,
}

impl JobCatalog {
    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(WorkfitError::Catalog(format!(
                "Catalog file does not exist: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Parse a catalog from JSON text, skipping malformed entries.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(content)
            .map_err(|e| WorkfitError::Catalog(format!("Failed to parse catalog: {}", e)))?;

        // A missing "jobs" key is an empty catalog, not an error.
        let entries = match root.get("jobs").and_then(Value::as_array) {
            Some(entries) => entries,
            None => return Ok(JobCatalog::default()),
        };

        let jobs = entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| parse_job(entry, index))
            .collect();

        Ok(JobCatalog { jobs })
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// Convert one catalog entry, tolerating missing and malformed fields.
/// Returns `None` only when the entry is not an object at all.
fn parse_job(entry: &Value, index: usize) -> Option<JobRecord> {
    let object = match entry.as_object() {
        Some(object) => object,
        None => {
            warn!("Skipping catalog entry {}: not an object", index);
            return None;
        }
    };

    let name = object
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(UNNAMED_JOB)
        .to_string();

    let category = object
        .get("category")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(UNCATEGORIZED)
        .to_string();

    let mut required_scores = BTreeMap::new();
    if let Some(scores) = object.get("required_scores").and_then(Value::as_object) {
        for (key, value) in scores {
            let skill = match Skill::from_name(key) {
                Some(skill) => skill,
                None => {
                    warn!("Job '{}': ignoring unknown skill '{}'", name, key);
                    continue;
                }
            };
            match value.as_f64() {
                Some(score) => {
                    required_scores.insert(skill, score.clamp(MIN_SCORE, MAX_SCORE));
                }
                None => {
                    warn!(
                        "Job '{}': dropping non-numeric requirement for '{}'",
                        name, key
                    );
                }
            }
        }
    }

    let physical_demand = object
        .get("physical_demand")
        .and_then(Value::as_str)
        .and_then(PhysicalDemand::from_tag);

    let environment = object
        .get("environment")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from);

    let text_field = |key: &str| {
        object
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string()
    };

    Some(JobRecord {
        name,
        category,
        required_scores,
        physical_demand,
        environment,
        description: text_field("description"),
        salary: text_field("salary"),
        support: text_field("support"),
    })
}
