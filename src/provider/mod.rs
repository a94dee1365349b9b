//! Content provider boundary: question generation and performance
//! analysis, each a single structured-output round trip to a generative
//! model. No retries, no cancellation, all-or-nothing.

mod error;
mod gemini;

pub use error::{AnalysisError, GenerationError, ProviderError};
pub use gemini::{parse_analysis_response, parse_questions_response, GeminiProvider};

use async_trait::async_trait;

use crate::quiz::{Question, QuizResult};

/// The external generative service the quiz leans on.
///
/// Both operations are stateless from the caller's perspective; the
/// caller guarantees at most one is in flight at a time.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Request a fresh batch of scenario-based multiple-choice items.
    async fn generate_questions(&self) -> Result<Vec<Question>, GenerationError>;

    /// Request narrative feedback and an archetype for a finished quiz.
    ///
    /// Implementations must return `score`/`total_questions` equal to
    /// the arguments, never the provider's echoed values.
    async fn analyze_performance(
        &self,
        score: u32,
        total: u32,
    ) -> Result<QuizResult, AnalysisError>;
}
