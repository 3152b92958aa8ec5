//! Analyzer strategy interface
//!
//! The two skill-vector producers (local heuristic, remote classifier)
//! are interchangeable behind this trait. Selection happens once, from
//! configuration; callers never branch on the strategy.

use crate::config::{Config, Strategy};
use crate::error::Result;
use crate::input::answers::AnswerSet;
use crate::llm::classifier::RemoteClassifier;
use crate::scoring::heuristic::HeuristicAnalyzer;
use crate::scoring::taxonomy::SkillVector;
use async_trait::async_trait;

/// Turns a submitted answer set into a skill vector.
///
/// Implementations never fail: any internal error degrades to a usable
/// vector (worst case all-neutral) so the evaluation always completes.
#[async_trait]
pub trait ResponseAnalyzer: Send + Sync {
    /// Strategy name for report metadata.
    fn name(&self) -> &'static str;

    async fn analyze(&self, answers: &AnswerSet) -> SkillVector;
}

/// Build the analyzer the configuration selects.
pub fn build_analyzer(config: &Config) -> Result<Box<dyn ResponseAnalyzer>> {
    match config.analyzer.strategy {
        Strategy::Heuristic => Ok(Box::new(HeuristicAnalyzer::new()?)),
        Strategy::Remote => Ok(Box::new(RemoteClassifier::new(&config.analyzer)?)),
    }
}
