//! Remote skill classifier
//!
//! Sends the answers and the skill taxonomy to an OpenAI-compatible chat
//! completions endpoint and expects back a JSON object mapping each skill
//! name to a number in [0.0, 2.0]. Exactly one request per evaluation,
//! with the timeout bounded by configuration; any failure degrades to the
//! all-neutral vector so the evaluation never blocks on the network.

use crate::config::AnalyzerConfig;
use crate::error::{Result, WorkfitError};
use crate::input::answers::AnswerSet;
use crate::llm::prompts::{build_classification_prompt, SYSTEM_PROMPT};
use crate::scoring::analyzer::ResponseAnalyzer;
use crate::scoring::taxonomy::{Skill, SkillVector, NEUTRAL_SCORE};
use anyhow::Context;
use async_trait::async_trait;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

pub struct RemoteClassifier {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f64,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl RemoteClassifier {
    pub fn new(config: &AnalyzerConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                WorkfitError::Classification(format!("Failed to build HTTP client: {}", e))
            })?;

        // A missing key is not a constructor error: the evaluation still
        // runs, it just falls back to neutral scores at call time.
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            warn!(
                "Environment variable {} is not set; classification will fall back",
                config.api_key_env
            );
        }

        let endpoint = format!(
            "{}/chat/completions",
            config.endpoint.trim_end_matches('/')
        );

        Ok(Self {
            client,
            endpoint,
            model: config.model.clone(),
            api_key,
        })
    }

    /// One request, no retries.
    async fn request_scores(&self, answers: &AnswerSet) -> anyhow::Result<SkillVector> {
        let api_key = self.api_key.as_deref().context("missing API key")?;

        let prompt = build_classification_prompt(answers);
        let request = ChatRequest {
            model: &self.model,
            temperature: 0.0,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .context("classifier request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("classifier returned {}: {}", status, body);
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .context("failed to parse classifier response")?;
        let content = parsed
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .context("classifier returned empty content")?;

        debug!("Classifier content: {}", content);

        let value: Value = serde_json::from_str(strip_json_fences(content))
            .context("classifier content is not valid JSON")?;
        coerce_scores(&value)
    }
}

#[async_trait]
impl ResponseAnalyzer for RemoteClassifier {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn analyze(&self, answers: &AnswerSet) -> SkillVector {
        match self.request_scores(answers).await {
            Ok(vector) => vector,
            Err(e) => {
                warn!("Classification failed, using neutral scores: {:#}", e);
                SkillVector::neutral()
            }
        }
    }
}

/// Coerce a classifier reply into a full-taxonomy vector: every expected
/// key becomes a float, with neutral substituted for missing or
/// non-numeric values and everything clamped to the score scale.
fn coerce_scores(value: &Value) -> anyhow::Result<SkillVector> {
    let object = value
        .as_object()
        .context("classifier returned non-object JSON")?;

    let mut vector = SkillVector::new();
    for skill in Skill::ALL {
        let score = object
            .get(skill.as_str())
            .and_then(Value::as_f64)
            .unwrap_or(NEUTRAL_SCORE);
        vector.set(skill, score);
    }
    Ok(vector)
}

/// Strip ```json ... ``` or ``` ... ``` fences models like to wrap JSON in.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(str::trim)
            .unwrap_or_else(|| stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(str::trim)
            .unwrap_or_else(|| stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::taxonomy::MAX_SCORE;

    #[test]
    fn test_coerce_complete_response() {
        let value: Value = serde_json::from_str(
            r#"{"reading": 1.8, "writing": 1.2, "calculation": 0.6, "communication": 1.9,
                "time_management": 1.0, "grooming": 1.0, "motor_skills": 1.0,
                "mobility": 1.0, "stamina": 1.0, "concentration": 1.4,
                "problem_solving": 1.1, "teamwork": 1.7, "flexibility": 1.0,
                "task_execution": 1.2, "service_performance": 1.3}"#,
        )
        .unwrap();
        let vector = coerce_scores(&value).unwrap();
        assert_eq!(vector.get(Skill::Reading), 1.8);
        assert_eq!(vector.get(Skill::Calculation), 0.6);
        assert_eq!(vector.len(), Skill::ALL.len());
    }

    #[test]
    fn test_coerce_substitutes_neutral_for_missing_and_non_numeric() {
        let value: Value =
            serde_json::from_str(r#"{"reading": "high", "writing": 1.6}"#).unwrap();
        let vector = coerce_scores(&value).unwrap();
        assert_eq!(vector.get(Skill::Reading), NEUTRAL_SCORE);
        assert_eq!(vector.get(Skill::Writing), 1.6);
        assert_eq!(vector.get(Skill::Teamwork), NEUTRAL_SCORE);
    }

    #[test]
    fn test_coerce_clamps_out_of_range_values() {
        let value: Value = serde_json::from_str(r#"{"reading": 7.5}"#).unwrap();
        let vector = coerce_scores(&value).unwrap();
        assert_eq!(vector.get(Skill::Reading), MAX_SCORE);
    }

    #[test]
    fn test_coerce_rejects_non_object() {
        let value: Value = serde_json::from_str(r#"[1.0, 2.0]"#).unwrap();
        assert!(coerce_scores(&value).is_err());
    }

    #[test]
    fn test_strip_json_fences() {
        assert_eq!(
            strip_json_fences("```json\n{\"reading\": 1.0}\n```"),
            "{\"reading\": 1.0}"
        );
        assert_eq!(
            strip_json_fences("```\n{\"reading\": 1.0}\n```"),
            "{\"reading\": 1.0}"
        );
        assert_eq!(strip_json_fences("{\"reading\": 1.0}"), "{\"reading\": 1.0}");
    }

    #[tokio::test]
    async fn test_missing_key_falls_back_to_neutral_without_network() {
        let config = AnalyzerConfig {
            api_key_env: "WORKFIT_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..AnalyzerConfig::default()
        };
        let classifier = RemoteClassifier::new(&config).unwrap();
        let answers = AnswerSet {
            respondent: "Taro".to_string(),
            responses: Default::default(),
            physical_capability: None,
            avoided_environments: Vec::new(),
        };
        let vector = classifier.analyze(&answers).await;
        assert_eq!(vector, SkillVector::neutral());
    }
}
