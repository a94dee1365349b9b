//! Shared test fixtures: canned questions and a scripted provider.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use charisma_quiz::provider::{
    AnalysisError, ContentProvider, GenerationError, ProviderError,
};
use charisma_quiz::quiz::{Question, QuizResult};

/// Five questions where the correct answer is always option 0.
pub fn sample_questions() -> Vec<Question> {
    (1..=5)
        .map(|id| Question {
            id,
            scenario: format!("Scenario {id}: the conversation stalls."),
            options: vec![
                "Hold eye contact and ask an open question".to_string(),
                "Check your phone".to_string(),
                "Change the subject to yourself".to_string(),
                "Go quiet and wait".to_string(),
            ],
            correct_option_index: 0,
            explanation: "Open questions restart the exchange without pressure.".to_string(),
        })
        .collect()
}

/// Scripted provider: each operation either succeeds with fixed content
/// or fails, and counts its invocations.
pub struct MockProvider {
    pub questions: Option<Vec<Question>>,
    pub analysis: Option<(String, String)>,
    pub generate_calls: AtomicUsize,
    pub analyze_calls: AtomicUsize,
}

impl MockProvider {
    pub fn working() -> Self {
        Self {
            questions: Some(sample_questions()),
            analysis: Some((
                "You read the room well.".to_string(),
                "Charisma Master".to_string(),
            )),
            generate_calls: AtomicUsize::new(0),
            analyze_calls: AtomicUsize::new(0),
        }
    }

    pub fn generation_down() -> Self {
        Self {
            questions: None,
            ..Self::working()
        }
    }

    pub fn analysis_down() -> Self {
        Self {
            analysis: None,
            ..Self::working()
        }
    }
}

#[async_trait]
impl ContentProvider for MockProvider {
    async fn generate_questions(&self) -> Result<Vec<Question>, GenerationError> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        match &self.questions {
            Some(questions) => Ok(questions.clone()),
            None => Err(GenerationError::from(ProviderError::EmptyResponse)),
        }
    }

    async fn analyze_performance(
        &self,
        score: u32,
        total: u32,
    ) -> Result<QuizResult, AnalysisError> {
        self.analyze_calls.fetch_add(1, Ordering::SeqCst);
        match &self.analysis {
            Some((feedback, archetype)) => Ok(QuizResult {
                score,
                total_questions: total,
                feedback: feedback.clone(),
                archetype: archetype.clone(),
            }),
            None => Err(AnalysisError::from(ProviderError::EmptyResponse)),
        }
    }
}
