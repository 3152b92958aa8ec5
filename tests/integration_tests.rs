//! Integration tests for workfit

use std::path::Path;
use workfit::config::{OutputConfig, OutputFormat};
use workfit::input::answers::AnswerSet;
use workfit::input::catalog::JobCatalog;
use workfit::output::formatter::ReportGenerator;
use workfit::output::report::EvaluationReport;
use workfit::scoring::engine::EvaluationEngine;
use workfit::scoring::heuristic::HeuristicAnalyzer;
use workfit::scoring::matcher::MatchingConfig;
use workfit::scoring::taxonomy::Skill;

fn load_fixtures() -> (AnswerSet, JobCatalog) {
    let answers = AnswerSet::load(Path::new("tests/fixtures/sample_answers.json")).unwrap();
    let catalog = JobCatalog::load(Path::new("tests/fixtures/sample_catalog.json")).unwrap();
    (answers, catalog)
}

fn engine() -> EvaluationEngine {
    EvaluationEngine::with_analyzer(
        Box::new(HeuristicAnalyzer::new().unwrap()),
        MatchingConfig::default(),
    )
}

async fn evaluate_fixtures() -> EvaluationReport {
    let (answers, catalog) = load_fixtures();
    engine().evaluate(&answers, &catalog).await
}

#[test]
fn test_fixture_catalog_loads_leniently() {
    let catalog = JobCatalog::load(Path::new("tests/fixtures/sample_catalog.json")).unwrap();
    // Six usable jobs; the malformed entry is skipped, not fatal.
    assert_eq!(catalog.len(), 6);
    assert!(catalog.jobs.iter().any(|j| j.name == "Gardener"));
}

#[tokio::test]
async fn test_end_to_end_evaluation() {
    let report = evaluate_fixtures().await;
    let config = MatchingConfig::default();

    assert_eq!(report.respondent, "Aiko Tanaka");
    assert_eq!(report.matches.len(), 6);
    assert_eq!(report.profile.len(), Skill::ALL.len());

    // Every rate within the configured band, sorted non-increasing.
    for result in &report.matches {
        assert!(result.match_rate >= config.floor_percent);
        assert!(result.match_rate <= config.cap_percent);
    }
    for pair in report.matches.windows(2) {
        assert!(pair[0].match_rate >= pair[1].match_rate);
    }

    // The thorough fixture answers produce visible strengths.
    assert!(report.strengths.contains(&Skill::Reading));
    assert!(report.strengths.contains(&Skill::Calculation));
    assert!(report.strengths.contains(&Skill::Communication));

    // The best match is the head of the ranked list.
    let best = report.best_match().unwrap();
    assert_eq!(best.match_rate, report.matches[0].match_rate);
}

#[tokio::test]
async fn test_evaluation_is_deterministic() {
    let first = evaluate_fixtures().await;
    let second = evaluate_fixtures().await;

    assert_eq!(first.profile, second.profile);
    let rates = |report: &EvaluationReport| {
        report
            .matches
            .iter()
            .map(|m| (m.job.name.clone(), m.match_rate))
            .collect::<Vec<_>>()
    };
    assert_eq!(rates(&first), rates(&second));
}

#[tokio::test]
async fn test_constraint_penalties_apply_to_fixture_jobs() {
    let (mut answers, catalog) = load_fixtures();
    let constrained = engine().evaluate(&answers, &catalog).await;

    // Same answers without constraint annotations.
    answers.physical_capability = None;
    answers.avoided_environments.clear();
    let unconstrained = engine().evaluate(&answers, &catalog).await;

    let rate = |report: &EvaluationReport, name: &str| {
        report
            .matches
            .iter()
            .find(|m| m.job.name == name)
            .unwrap()
            .match_rate
    };

    // Heavy-demand job penalized for limited capability; noisy job
    // penalized for the avoided environment; an untagged job unaffected.
    assert!(rate(&constrained, "Warehouse picker") < rate(&unconstrained, "Warehouse picker"));
    assert!(rate(&constrained, "Machine operator") < rate(&unconstrained, "Machine operator"));
    assert_eq!(
        rate(&constrained, "Office assistant"),
        rate(&unconstrained, "Office assistant")
    );
}

#[tokio::test]
async fn test_report_renders_in_all_formats() {
    let report = evaluate_fixtures().await;
    let generator = ReportGenerator::new(&OutputConfig {
        color_output: false,
        ..OutputConfig::default()
    });

    let console = generator.generate(&report, OutputFormat::Console).unwrap();
    assert!(console.contains("Aiko Tanaka"));

    let json = generator.generate(&report, OutputFormat::Json).unwrap();
    let parsed: EvaluationReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.matches.len(), report.matches.len());

    let markdown = generator.generate(&report, OutputFormat::Markdown).unwrap();
    assert!(markdown.contains("# Evaluation: Aiko Tanaka"));
}

#[tokio::test]
async fn test_report_saves_to_file() {
    let report = evaluate_fixtures().await;
    let generator = ReportGenerator::new(&OutputConfig::default());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.md");
    generator
        .save(&report, OutputFormat::Markdown, &path)
        .unwrap();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.contains("Aiko Tanaka"));
}

#[test]
fn test_nonexistent_answers_file() {
    let result = AnswerSet::load(Path::new("tests/fixtures/nonexistent.json"));
    assert!(result.is_err());
}

#[test]
fn test_nonexistent_catalog_file() {
    let result = JobCatalog::load(Path::new("tests/fixtures/nonexistent.json"));
    assert!(result.is_err());
}

#[test]
fn test_answers_fixture_carries_constraints() {
    let (answers, _) = load_fixtures();
    let constraints = answers.constraints();
    assert!(constraints.physical_capability.is_some());
    assert_eq!(constraints.avoided_environments, vec!["noisy"]);
}
