//! Prompt construction for the remote classifier

use crate::input::answers::AnswerSet;
use crate::scoring::taxonomy::{QuestionCategory, Skill};

pub const SYSTEM_PROMPT: &str = "You are an occupational skill assessor. \
You reply with JSON only, never prose.";

/// Build the classification prompt: the taxonomy to rate, the answers to
/// rate it from, and the exact output shape expected back.
pub fn build_classification_prompt(answers: &AnswerSet) -> String {
    let mut prompt = String::from(
        "Rate the respondent below on every skill listed, using a number \
         between 0.0 and 2.0 where 1.0 is average. Respond with a single \
         JSON object mapping each skill name to its number. Do not invent \
         skills and do not add commentary.\n\nSkills:\n",
    );

    for skill in Skill::ALL {
        prompt.push_str("- ");
        prompt.push_str(skill.as_str());
        prompt.push('\n');
    }

    prompt.push_str("\nAnswers:\n");
    for category in QuestionCategory::ALL {
        prompt.push_str(category.as_str());
        prompt.push_str(": ");
        let response = answers.response(category);
        if response.trim().is_empty() {
            prompt.push_str("(no answer)");
        } else {
            prompt.push_str(response);
        }
        prompt.push('\n');
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_prompt_lists_taxonomy_and_answers() {
        let mut responses = BTreeMap::new();
        responses.insert(
            QuestionCategory::Reading,
            "Work means being part of society.".to_string(),
        );
        let answers = AnswerSet {
            respondent: "Taro".to_string(),
            responses,
            physical_capability: None,
            avoided_environments: Vec::new(),
        };

        let prompt = build_classification_prompt(&answers);
        for skill in Skill::ALL {
            assert!(prompt.contains(skill.as_str()));
        }
        assert!(prompt.contains("Work means being part of society."));
        assert!(prompt.contains("writing: (no answer)"));
    }
}
