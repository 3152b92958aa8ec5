//! Answer set loading and validation

use crate::error::{Result, WorkfitError};
use crate::scoring::taxonomy::QuestionCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Self-declared physical capability of the respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhysicalCapability {
    Full,
    Limited,
}

/// Hard-constraint annotations the matcher applies independently of the
/// skill scores. Passed alongside the skill vector as an explicit
/// per-request context, never as shared state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserConstraints {
    pub physical_capability: Option<PhysicalCapability>,
    pub avoided_environments: Vec<String>,
}

/// One submitted self-assessment: free-text responses keyed by question
/// category plus optional constraint annotations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerSet {
    #[serde(default)]
    pub respondent: String,

    #[serde(default)]
    pub responses: BTreeMap<QuestionCategory, String>,

    #[serde(default)]
    pub physical_capability: Option<PhysicalCapability>,

    #[serde(default)]
    pub avoided_environments: Vec<String>,
}

impl AnswerSet {
    /// Load an answer set from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(WorkfitError::InvalidInput(format!(
                "Answers file does not exist: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        let answers: AnswerSet = serde_json::from_str(&content)
            .map_err(|e| WorkfitError::InvalidInput(format!("Failed to parse answers: {}", e)))?;
        Ok(answers)
    }

    /// Response text for a category; unanswered categories read as empty.
    pub fn response(&self, category: QuestionCategory) -> &str {
        self.responses
            .get(&category)
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// Constraint annotations for the matcher.
    pub fn constraints(&self) -> UserConstraints {
        UserConstraints {
            physical_capability: self.physical_capability,
            avoided_environments: self.avoided_environments.clone(),
        }
    }

    /// Boundary validation: an evaluation without a respondent name is a
    /// user-visible error, mirroring the form's required-name check.
    pub fn validate(&self) -> Result<()> {
        if self.respondent.trim().is_empty() {
            return Err(WorkfitError::InvalidInput(
                "Respondent name is required".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "respondent": "Taro",
            "responses": {
                "reading": "Work connects people to society.",
                "calculation": "1200 x 6 x 20 = 144000"
            },
            "physical_capability": "limited",
            "avoided_environments": ["noisy", "outdoor"]
        }"#
    }

    #[test]
    fn test_parse_answer_set() {
        let answers: AnswerSet = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(answers.respondent, "Taro");
        assert!(answers
            .response(QuestionCategory::Reading)
            .contains("society"));
        assert_eq!(
            answers.physical_capability,
            Some(PhysicalCapability::Limited)
        );
        assert_eq!(answers.avoided_environments.len(), 2);
    }

    #[test]
    fn test_missing_category_reads_empty() {
        let answers: AnswerSet = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(answers.response(QuestionCategory::Writing), "");
    }

    #[test]
    fn test_validation_rejects_blank_respondent() {
        let answers: AnswerSet = serde_json::from_str(r#"{"responses": {}}"#).unwrap();
        assert!(answers.validate().is_err());
    }

    #[test]
    fn test_constraints_projection() {
        let answers: AnswerSet = serde_json::from_str(sample_json()).unwrap();
        let constraints = answers.constraints();
        assert_eq!(
            constraints.physical_capability,
            Some(PhysicalCapability::Limited)
        );
        assert_eq!(constraints.avoided_environments, vec!["noisy", "outdoor"]);
    }
}
