use crate::quiz::types::{Question, QuizResult};
use crate::ui::mvi::Intent;

/// User actions and provider completions driving the session.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizIntent {
    /// User kicked off the quiz from the welcome screen.
    Start,
    /// Question generation finished.
    QuestionsLoaded(Vec<Question>),
    /// Question generation failed; the session is over.
    GenerationFailed,
    /// User picked an option for the current question.
    SelectOption(usize),
    /// User moved past the explanation.
    Advance,
    /// Performance analysis finished.
    AnalysisReady(QuizResult),
    /// Performance analysis failed; a fallback result is substituted.
    AnalysisFailed,
    /// Back to the welcome screen, dropping all session state.
    Restart,
}

impl Intent for QuizIntent {}
