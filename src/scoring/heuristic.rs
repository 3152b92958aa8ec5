//! Local heuristic skill analyzer
//!
//! Scores answers from surface features only: response length, digit and
//! currency/equation markers, and presence of communication keywords.
//! A factually wrong answer that contains digits scores the same as a
//! correct one; semantic understanding is the remote classifier's job.

use crate::error::{Result, WorkfitError};
use crate::input::answers::AnswerSet;
use crate::scoring::analyzer::ResponseAnalyzer;
use crate::scoring::taxonomy::{QuestionCategory, Skill, SkillVector};
use aho_corasick::AhoCorasick;
use async_trait::async_trait;
use regex::Regex;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Keywords whose presence in the communication answer signals a
/// report/consult working style. Matched case-insensitively; each keyword
/// counts once no matter how often it appears.
const COMMUNICATION_KEYWORDS: [&str; 7] = [
    "consult", "report", "contact", "ask", "discuss", "help", "together",
];

/// Length tiers (in grapheme clusters) for the free-text answers.
const READING_DETAILED_LEN: usize = 30;
const READING_BRIEF_LEN: usize = 10;
const WRITING_DETAILED_LEN: usize = 50;
const WRITING_BRIEF_LEN: usize = 20;

/// Minimum length every answer must reach for the thoroughness bonus.
const THOROUGH_MIN_LEN: usize = 10;

pub struct HeuristicAnalyzer {
    keyword_matcher: AhoCorasick,
    marker_pattern: Regex,
}

impl HeuristicAnalyzer {
    pub fn new() -> Result<Self> {
        let keyword_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(COMMUNICATION_KEYWORDS)
            .map_err(|e| {
                WorkfitError::AnalysisFailed(format!("Failed to build keyword matcher: {}", e))
            })?;

        // Currency symbols and the equation sign the calculation answer
        // is expected to carry when the respondent shows their work.
        let marker_pattern = Regex::new(r"[=¥$€£]").map_err(|e| {
            WorkfitError::AnalysisFailed(format!("Failed to build marker pattern: {}", e))
        })?;

        Ok(Self {
            keyword_matcher,
            marker_pattern,
        })
    }

    /// The full rule set. Pure: same answers, same vector.
    pub fn score(&self, answers: &AnswerSet) -> SkillVector {
        let mut result = SkillVector::neutral();

        // Reading: longer answers imply the passage was actually engaged
        // with; a detailed answer also signals sustained concentration.
        let reading = answers.response(QuestionCategory::Reading);
        let reading_len = grapheme_len(reading);
        if reading_len > READING_DETAILED_LEN {
            result.set(Skill::Reading, 1.8);
            result.set(Skill::Concentration, 1.5);
        } else if reading_len > READING_BRIEF_LEN {
            result.set(Skill::Reading, 1.3);
        }

        // Writing: length tiers again; a developed answer also raises
        // independent task execution.
        let writing = answers.response(QuestionCategory::Writing);
        let writing_len = grapheme_len(writing);
        if writing_len > WRITING_DETAILED_LEN {
            result.set(Skill::Writing, 1.9);
            result.set(Skill::TaskExecution, 1.7);
        } else if writing_len > WRITING_BRIEF_LEN {
            result.set(Skill::Writing, 1.4);
        }

        // Calculation: digits show an attempt, a currency or equation
        // marker shows the work was written out.
        let calculation = answers.response(QuestionCategory::Calculation);
        if calculation.chars().any(|c| c.is_ascii_digit()) {
            result.set(Skill::Calculation, 1.8);
            result.set(Skill::ProblemSolving, 1.5);
            if self.marker_pattern.is_match(calculation) {
                result.set(Skill::Calculation, 2.0);
            }
        }

        // Communication: distinct keyword hits, tiered.
        let communication = answers.response(QuestionCategory::Communication);
        match self.distinct_keyword_hits(communication) {
            0 => {}
            1 => {
                result.set(Skill::Communication, 1.4);
                result.set(Skill::Teamwork, 1.3);
            }
            _ => {
                result.set(Skill::Communication, 1.9);
                result.set(Skill::Teamwork, 1.8);
                result.set(Skill::ServicePerformance, 1.6);
            }
        }

        // Thorough effort across every answer lifts the soft skills the
        // form has no direct question for.
        let thorough = QuestionCategory::ALL
            .iter()
            .all(|category| grapheme_len(answers.response(*category)) > THOROUGH_MIN_LEN);
        if thorough {
            result.set(Skill::Grooming, 1.5);
            result.set(Skill::Flexibility, 1.4);
        }

        result
    }

    /// Number of distinct keywords present in the text.
    fn distinct_keyword_hits(&self, text: &str) -> usize {
        let mut seen: HashSet<usize> = HashSet::new();
        for hit in self.keyword_matcher.find_iter(text) {
            seen.insert(hit.pattern().as_usize());
        }
        seen.len()
    }
}

#[async_trait]
impl ResponseAnalyzer for HeuristicAnalyzer {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    async fn analyze(&self, answers: &AnswerSet) -> SkillVector {
        self.score(answers)
    }
}

/// Answer length in grapheme clusters, so multi-byte scripts count the
/// way a reader would count characters.
fn grapheme_len(text: &str) -> usize {
    text.graphemes(true).count()
}
