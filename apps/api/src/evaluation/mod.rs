//! Evaluation client: scores one interview answer through the LLM.
//!
//! Never fails. Without a provider it returns the fixed mock result; when the
//! provider call fails, times out, or replies with something that is not the
//! expected JSON it returns the fixed degraded result instead.

pub mod prompts;

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::interview::stage::Stage;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{strip_json_fences, CompletionProvider, LlmError};

pub const MOCK_FEEDBACK: &str = "Mock feedback: Jawaban baik, tapi tambah detail STAR.";
pub const MOCK_SCORE: i32 = 4;
pub const DEGRADED_SCORE: i32 = 3;
/// Characters of the unusable reply echoed back in degraded feedback.
const REPLY_FRAGMENT_CHARS: usize = 100;

/// Which STAR elements the evaluator found in an answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarElements {
    #[serde(default)]
    pub situation: bool,
    #[serde(default)]
    pub task: bool,
    #[serde(default)]
    pub action: bool,
    #[serde(default)]
    pub result: bool,
}

/// Scored feedback for a single answer. Also the shape the LLM must reply with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    #[serde(default)]
    pub score: i32,
    #[serde(default)]
    pub feedback: String,
    #[serde(default)]
    pub star_elements_detected: StarElements,
}

impl Evaluation {
    /// Result used when no provider is configured.
    pub fn mock() -> Self {
        Self {
            score: MOCK_SCORE,
            feedback: MOCK_FEEDBACK.to_string(),
            star_elements_detected: StarElements {
                situation: true,
                task: true,
                action: false,
                result: true,
            },
        }
    }

    /// Result used when the live path produced nothing usable.
    pub fn degraded(reply: &str) -> Self {
        let fragment: String = reply.chars().take(REPLY_FRAGMENT_CHARS).collect();
        Self {
            score: DEGRADED_SCORE,
            feedback: format!("Error parsing AI response: {fragment}. Coba lagi."),
            star_elements_detected: StarElements::default(),
        }
    }
}

/// Inputs for one evaluation.
pub struct EvaluationRequest<'a> {
    pub stage: Stage,
    pub job_role: &'a str,
    pub question: &'a str,
    pub answer: &'a str,
}

#[derive(Debug, Error)]
enum EvaluationFailure {
    #[error("reply is not a valid evaluation: {source}")]
    Deserialize {
        source: serde_json::Error,
        reply: String,
    },

    #[error("provider call failed: {0}")]
    Provider(#[from] LlmError),
}

impl EvaluationFailure {
    fn degraded_result(&self) -> Evaluation {
        match self {
            EvaluationFailure::Deserialize { reply, .. } => Evaluation::degraded(reply),
            EvaluationFailure::Provider(_) => Evaluation::degraded(""),
        }
    }
}

/// Scores answers. Built once at startup from configuration and shared via `AppState`.
#[derive(Clone)]
pub struct Evaluator {
    provider: Option<Arc<dyn CompletionProvider>>,
    timeout: Duration,
}

impl Evaluator {
    pub fn new(provider: Option<Arc<dyn CompletionProvider>>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    pub fn is_mock(&self) -> bool {
        self.provider.is_none()
    }

    pub async fn evaluate(&self, request: EvaluationRequest<'_>) -> Evaluation {
        let Some(provider) = &self.provider else {
            debug!("No LLM provider configured; returning mock evaluation");
            return Evaluation::mock();
        };

        match self.evaluate_live(provider.as_ref(), &request).await {
            Ok(evaluation) => evaluation,
            Err(failure) => {
                warn!(
                    "Evaluation for {} / {} degraded: {failure}",
                    request.stage, request.job_role
                );
                failure.degraded_result()
            }
        }
    }

    async fn evaluate_live(
        &self,
        provider: &dyn CompletionProvider,
        request: &EvaluationRequest<'_>,
    ) -> Result<Evaluation, EvaluationFailure> {
        let prompt = prompts::build_prompt(
            request.stage,
            request.job_role,
            request.question,
            request.answer,
        );

        let reply = tokio::time::timeout(
            self.timeout,
            provider.complete(&prompt, JSON_ONLY_SYSTEM),
        )
        .await
        .map_err(|_| LlmError::Timeout(self.timeout))??;

        let reply = reply.trim();
        serde_json::from_str(strip_json_fences(reply)).map_err(|source| {
            EvaluationFailure::Deserialize {
                source,
                reply: reply.to_string(),
            }
        })
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{live_evaluator, Script, StubProvider};
    use super::*;

    fn request<'a>(stage: Stage) -> EvaluationRequest<'a> {
        EvaluationRequest {
            stage,
            job_role: "Software Engineer",
            question: "Deskripsikan konflik tim yang Anda selesaikan (gunakan STAR).",
            answer: "Saat proyek X, saya memediasi dua rekan dan rilis tepat waktu.",
        }
    }

    #[tokio::test]
    async fn test_mock_mode_without_provider() {
        let evaluator = Evaluator::new(None, Duration::from_secs(5));
        assert!(evaluator.is_mock());
        let result = evaluator.evaluate(request(Stage::Hr)).await;
        assert_eq!(result, Evaluation::mock());
        assert_eq!(result.score, 4);
    }

    #[tokio::test]
    async fn test_well_formed_reply_is_used_verbatim() {
        let provider = StubProvider::replying(
            r#"{"score": 5, "feedback": "Lengkap.", "star_elements_detected": {"situation": true, "task": false, "action": true, "result": true}}"#,
        );
        let result = live_evaluator(provider.clone())
            .evaluate(request(Stage::Behavioral))
            .await;

        assert_eq!(result.score, 5);
        assert_eq!(result.feedback, "Lengkap.");
        assert_eq!(
            result.star_elements_detected,
            StarElements {
                situation: true,
                task: false,
                action: true,
                result: true,
            }
        );

        let prompts = provider.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("pewawancara behavioral"));
        assert!(prompts[0].contains("memediasi dua rekan"));
    }

    #[tokio::test]
    async fn test_fenced_reply_is_accepted() {
        let provider = StubProvider::replying(
            "```json\n{\"score\": 2, \"feedback\": \"Kurang detail.\", \"star_elements_detected\": {\"situation\": false, \"task\": false, \"action\": true, \"result\": false}}\n```",
        );
        let result = live_evaluator(provider).evaluate(request(Stage::Hr)).await;
        assert_eq!(result.score, 2);
        assert!(result.star_elements_detected.action);
    }

    #[tokio::test]
    async fn test_missing_fields_take_defaults() {
        let provider = StubProvider::replying(r#"{"score": 4}"#);
        let result = live_evaluator(provider).evaluate(request(Stage::Hr)).await;
        assert_eq!(result.score, 4);
        assert_eq!(result.feedback, "");
        assert_eq!(result.star_elements_detected, StarElements::default());
    }

    #[tokio::test]
    async fn test_invalid_json_degrades_with_fragment() {
        let reply = "Maaf, saya tidak bisa menilai jawaban ini.";
        let provider = StubProvider::replying(reply);
        let result = live_evaluator(provider)
            .evaluate(request(Stage::Technical))
            .await;

        assert_eq!(result.score, 3);
        assert_eq!(result.star_elements_detected, StarElements::default());
        assert_eq!(
            result.feedback,
            format!("Error parsing AI response: {reply}. Coba lagi.")
        );
    }

    #[tokio::test]
    async fn test_degraded_fragment_is_truncated_to_100_chars() {
        let reply = "x".repeat(250);
        let provider = StubProvider::replying(&reply);
        let result = live_evaluator(provider).evaluate(request(Stage::Hr)).await;
        assert_eq!(
            result.feedback,
            format!("Error parsing AI response: {}. Coba lagi.", "x".repeat(100))
        );
    }

    #[tokio::test]
    async fn test_non_object_reply_degrades() {
        let provider = StubProvider::replying("[1, 2, 3]");
        let result = live_evaluator(provider).evaluate(request(Stage::Hr)).await;
        assert_eq!(result.score, DEGRADED_SCORE);
    }

    #[tokio::test]
    async fn test_provider_failure_degrades() {
        let provider = StubProvider::new(Script::Fail);
        let result = live_evaluator(provider).evaluate(request(Stage::Hr)).await;
        assert_eq!(result, Evaluation::degraded(""));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_degrades() {
        let provider: Arc<dyn CompletionProvider> = StubProvider::new(Script::Hang);
        let evaluator = Evaluator::new(Some(provider), Duration::from_secs(30));
        let result = evaluator.evaluate(request(Stage::Hr)).await;
        assert_eq!(result.score, DEGRADED_SCORE);
        assert_eq!(result.star_elements_detected, StarElements::default());
    }

    #[test]
    fn test_mock_serializes_to_contract_json() {
        let value = serde_json::to_value(Evaluation::mock()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "score": 4,
                "feedback": "Mock feedback: Jawaban baik, tapi tambah detail STAR.",
                "star_elements_detected": {
                    "situation": true,
                    "task": true,
                    "action": false,
                    "result": true
                }
            })
        );
    }
}
