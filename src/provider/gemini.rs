//! Gemini implementation of the content provider: one
//! `generateContent` round trip per operation, with a response schema
//! forcing structured JSON output.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::time::timeout;

use crate::config::ProviderConfig;
use crate::provider::error::{AnalysisError, GenerationError, ProviderError};
use crate::provider::ContentProvider;
use crate::quiz::{Question, QuizResult};

pub struct GeminiProvider {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
    question_count: u32,
    request_timeout: Duration,
}

impl GeminiProvider {
    pub fn new(config: &ProviderConfig, api_key: String, question_count: u32) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()
            .expect("Failed to build provider client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            question_count,
            request_timeout: Duration::from_secs(config.timeout_seconds as u64),
        }
    }

    /// Single blocking round trip. Returns the raw response body; the
    /// caller picks the parser for its operation.
    async fn generate_content(
        &self,
        prompt: String,
        schema: Value,
    ) -> Result<String, ProviderError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema,
            },
        };

        let request = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send();

        let response = match timeout(self.request_timeout, request).await {
            Ok(response) => response?,
            Err(_) => {
                return Err(ProviderError::Timeout {
                    duration: self.request_timeout.as_secs(),
                })
            }
        };

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl ContentProvider for GeminiProvider {
    async fn generate_questions(&self) -> Result<Vec<Question>, GenerationError> {
        let started = Instant::now();
        let body = self
            .generate_content(question_prompt(self.question_count), question_schema())
            .await?;
        let questions = parse_questions_response(&body)?;
        tracing::info!(
            count = questions.len(),
            latency_ms = started.elapsed().as_millis() as u64,
            "generated quiz questions"
        );
        Ok(questions)
    }

    async fn analyze_performance(
        &self,
        score: u32,
        total: u32,
    ) -> Result<QuizResult, AnalysisError> {
        let started = Instant::now();
        let body = self
            .generate_content(analysis_prompt(score, total), analysis_schema())
            .await?;
        let result = parse_analysis_response(&body, score, total)?;
        tracing::info!(
            score,
            total,
            latency_ms = started.elapsed().as_millis() as u64,
            "analyzed quiz performance"
        );
        Ok(result)
    }
}

fn question_prompt(count: u32) -> String {
    format!(
        "You are an expert in social psychology, charisma and conversation \
         dynamics. Create a quiz of {count} challenging questions.\n\n\
         The theme is: \"Turning dull conversations into effortless dates \
         using applied psychology\".\n\n\
         Each question must present a practical scenario of a social \
         interaction or date, and ask for the best response based on social \
         intelligence and attraction. Avoid cheap cliches. Focus on:\n\
         1. Reading body language.\n\
         2. Creative icebreakers.\n\
         3. Active listening and emotional validation.\n\
         4. Building positive tension.\n\n\
         Give each question exactly 4 options. Return ONLY a JSON array."
    )
}

fn question_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "INTEGER" },
                "scenario": { "type": "STRING", "description": "The social situation or question" },
                "options": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "4 answer options"
                },
                "correctOptionIndex": { "type": "INTEGER", "description": "Index (0-3) of the best answer" },
                "explanation": { "type": "STRING", "description": "Why this answer works psychologically" }
            },
            "required": ["id", "scenario", "options", "correctOptionIndex", "explanation"]
        }
    })
}

fn analysis_prompt(score: u32, total: u32) -> String {
    let percentage = if total == 0 {
        0.0
    } else {
        (score as f64 / total as f64) * 100.0
    };
    format!(
        "The user completed a quiz on \"Seduction and Smart Conversation\". \
         They scored {score} out of {total} ({percentage:.0}%).\n\n\
         Generate short feedback and a personality archetype. Use the tone \
         of a sophisticated mentor.\n\n\
         Return JSON."
    )
}

fn analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "score": { "type": "INTEGER" },
            "totalQuestions": { "type": "INTEGER" },
            "feedback": { "type": "STRING", "description": "2 paragraphs of analysis" },
            "archetype": { "type": "STRING", "description": "A punchy title, e.g. 'Charisma Master' or 'Attentive Apprentice'" }
        },
        "required": ["score", "totalQuestions", "feedback", "archetype"]
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// The analysis payload as the model echoes it. The echoed score and
/// total are deliberately absent: the caller's values are authoritative.
#[derive(Debug, Deserialize)]
struct AnalysisPayload {
    feedback: String,
    archetype: String,
}

/// Pull the model's text out of the `generateContent` envelope.
fn extract_text(body: &str) -> Result<String, ProviderError> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;
    let text: String = response
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .map(|p| p.text)
        .collect();
    if text.trim().is_empty() {
        return Err(ProviderError::EmptyResponse);
    }
    Ok(text)
}

/// Parse a question-generation response body into usable questions.
///
/// An empty batch counts as an empty response: the quiz cannot proceed
/// with zero questions. Items the state machine could not score (no
/// real choice, or a correct index past the options) are rejected as
/// invalid rather than silently kept.
pub fn parse_questions_response(body: &str) -> Result<Vec<Question>, ProviderError> {
    let text = extract_text(body)?;
    let questions: Vec<Question> = serde_json::from_str(&text)?;
    if questions.is_empty() {
        return Err(ProviderError::EmptyResponse);
    }
    if let Some(bad) = questions.iter().find(|q| !q.is_well_formed()) {
        return Err(ProviderError::Invalid(format!(
            "question {} has {} options with correct index {}",
            bad.id,
            bad.options.len(),
            bad.correct_option_index
        )));
    }
    Ok(questions)
}

/// Parse an analysis response body into a [`QuizResult`].
///
/// `score`/`total` come from the caller; the provider's echoed values
/// are never trusted for those two fields.
pub fn parse_analysis_response(
    body: &str,
    score: u32,
    total: u32,
) -> Result<QuizResult, ProviderError> {
    let text = extract_text(body)?;
    let payload: AnalysisPayload = serde_json::from_str(&text)?;
    Ok(QuizResult {
        score,
        total_questions: total,
        feedback: payload.feedback,
        archetype: payload.archetype,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_text_concatenates_parts() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"[1,"},{"text":"2]"}]}}]}"#;
        assert_eq!(extract_text(body).unwrap(), "[1,2]");
    }

    #[test]
    fn extract_text_rejects_missing_candidates() {
        let err = extract_text(r#"{"candidates":[]}"#).unwrap_err();
        assert!(matches!(err, ProviderError::EmptyResponse));
    }
}
