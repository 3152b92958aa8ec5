//! Evaluation engine coordinating analyzer, normalizer, and matcher

use crate::config::Config;
use crate::error::Result;
use crate::input::answers::AnswerSet;
use crate::input::catalog::JobCatalog;
use crate::output::report::EvaluationReport;
use crate::scoring::analyzer::{build_analyzer, ResponseAnalyzer};
use crate::scoring::matcher::{JobMatcher, MatchingConfig};
use crate::scoring::normalizer::ScoreNormalizer;
use chrono::Utc;
use log::info;
use std::time::Instant;

/// Scores at or above this value are reported as strengths.
const STRENGTH_THRESHOLD: f64 = 1.5;

/// One evaluation pass: answers in, ranked report out. Stateless between
/// invocations; each submission is processed top to bottom.
pub struct EvaluationEngine {
    analyzer: Box<dyn ResponseAnalyzer>,
    normalizer: ScoreNormalizer,
    matcher: JobMatcher,
}

impl EvaluationEngine {
    /// Build the engine the configuration describes.
    pub fn from_config(config: &Config) -> Result<Self> {
        let analyzer = build_analyzer(config)?;
        Ok(Self::with_analyzer(analyzer, config.matching.clone()))
    }

    /// Build with an explicit analyzer, e.g. for tests.
    pub fn with_analyzer(analyzer: Box<dyn ResponseAnalyzer>, matching: MatchingConfig) -> Self {
        Self {
            analyzer,
            normalizer: ScoreNormalizer::new(),
            matcher: JobMatcher::new(matching),
        }
    }

    pub async fn evaluate(&self, answers: &AnswerSet, catalog: &JobCatalog) -> EvaluationReport {
        let start_time = Instant::now();

        info!(
            "Evaluating answers from '{}' with the {} analyzer",
            answers.respondent,
            self.analyzer.name()
        );

        let raw = self.analyzer.analyze(answers).await;
        let profile = self.normalizer.normalize(raw);

        let constraints = answers.constraints();
        let matches = self.matcher.rank(&profile, &constraints, catalog);
        let strengths = profile.skills_at_or_above(STRENGTH_THRESHOLD);

        info!(
            "Ranked {} jobs in {}ms",
            matches.len(),
            start_time.elapsed().as_millis()
        );

        EvaluationReport {
            respondent: answers.respondent.clone(),
            strategy: self.analyzer.name().to_string(),
            profile,
            strengths,
            matches,
            generated_at: Utc::now(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::heuristic::HeuristicAnalyzer;
    use crate::scoring::taxonomy::{QuestionCategory, Skill};
    use std::collections::BTreeMap;

    fn sample_answers() -> AnswerSet {
        let mut responses = BTreeMap::new();
        responses.insert(
            QuestionCategory::Reading,
            "Work connects me to society and lets me use my abilities.".to_string(),
        );
        responses.insert(
            QuestionCategory::Communication,
            "I would report the problem and consult my supervisor.".to_string(),
        );
        AnswerSet {
            respondent: "Hanako".to_string(),
            responses,
            physical_capability: None,
            avoided_environments: Vec::new(),
        }
    }

    fn sample_catalog() -> JobCatalog {
        JobCatalog::from_json_str(
            r#"{"jobs": [
                {"name": "Office assistant", "category": "Clerical",
                 "required_scores": {"reading": 1.2, "writing": 1.0}},
                {"name": "Greeter", "category": "Service",
                 "required_scores": {"communication": 1.5}}
            ]}"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_end_to_end_evaluation() {
        let engine = EvaluationEngine::with_analyzer(
            Box::new(HeuristicAnalyzer::new().unwrap()),
            MatchingConfig::default(),
        );
        let report = engine.evaluate(&sample_answers(), &sample_catalog()).await;

        assert_eq!(report.respondent, "Hanako");
        assert_eq!(report.strategy, "heuristic");
        assert_eq!(report.matches.len(), 2);
        assert_eq!(report.profile.len(), Skill::ALL.len());
        // The detailed reading answer and two communication keywords
        // surface as strengths.
        assert!(report.strengths.contains(&Skill::Reading));
        assert!(report.strengths.contains(&Skill::Communication));
    }

    #[tokio::test]
    async fn test_empty_catalog_produces_empty_matches() {
        let engine = EvaluationEngine::with_analyzer(
            Box::new(HeuristicAnalyzer::new().unwrap()),
            MatchingConfig::default(),
        );
        let report = engine
            .evaluate(&sample_answers(), &JobCatalog::default())
            .await;
        assert!(report.matches.is_empty());
    }
}
